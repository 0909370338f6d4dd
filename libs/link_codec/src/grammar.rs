//! Shared token stream grammar machinery.
//!
//! The grammars consume the decoded symbol sequence through an index
//! cursor over an immutable slice; nothing drains the sequence in place.
//! The separator is the only negative symbol in any version's alphabet.

use crate::error::{Error, Result};

/// The reserved separator symbol.
///
/// Has no database meaning but is part of the Huffman alphabet like any
/// other symbol.
pub const SEPARATOR: i32 = -1;

/// Appends a database ID to a token stream.
///
/// # Errors
///
/// Fails with [`Error::IdOverflow`] for IDs outside the signed symbol
/// space rather than wrapping them.
pub fn push_id(tokens: &mut Vec<i32>, id: u32) -> Result<()> {
    let symbol = i32::try_from(id).map_err(|_| Error::IdOverflow { id })?;
    tokens.push(symbol);
    Ok(())
}

/// An index cursor over a decoded symbol sequence.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [i32],
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the start of the sequence.
    #[must_use]
    pub fn new(tokens: &'a [i32]) -> Self {
        Self { tokens, index: 0 }
    }

    fn next(&mut self) -> Option<i32> {
        let symbol = self.tokens.get(self.index).copied();
        if symbol.is_some() {
            self.index += 1;
        }
        symbol
    }

    /// Reads one ID; separators and stream end are grammar violations.
    ///
    /// # Errors
    ///
    /// Fails if the stream ends or the next symbol is not an ID.
    pub fn expect_id(&mut self, section: &'static str) -> Result<u32> {
        let symbol = self
            .next()
            .ok_or(Error::UnexpectedEndOfStream { section })?;
        u32::try_from(symbol).map_err(|_| Error::UnexpectedSeparator { section })
    }

    /// Reads one separator; anything else is a grammar violation.
    ///
    /// # Errors
    ///
    /// Fails if the stream ends or the next symbol is an ID.
    pub fn expect_separator(&mut self, section: &'static str) -> Result<()> {
        let symbol = self
            .next()
            .ok_or(Error::UnexpectedEndOfStream { section })?;
        if symbol == SEPARATOR {
            Ok(())
        } else {
            Err(Error::SeparatorExpected { section })
        }
    }

    /// Reads the next ID of a separator-terminated block, or [`None`]
    /// once the terminating separator is consumed.
    ///
    /// # Errors
    ///
    /// Fails if the stream ends before the block's separator.
    pub fn next_block_id(&mut self, section: &'static str) -> Result<Option<u32>> {
        let symbol = self
            .next()
            .ok_or(Error::UnexpectedEndOfStream { section })?;
        if symbol == SEPARATOR {
            return Ok(None);
        }

        u32::try_from(symbol)
            .map(Some)
            .map_err(|_| Error::UnexpectedSeparator { section })
    }

    /// Reads the trailing module block: every remaining ID until the
    /// stream ends.
    ///
    /// The block carries no terminator of its own, so any separators at
    /// the very end are byte-padding artifacts of the Huffman layer and
    /// are ignored. A separator followed by another ID is a grammar
    /// violation.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TrailingTokens`] if IDs follow a separator.
    pub fn read_module_ids(&mut self) -> Result<Vec<u32>> {
        let mut ids = Vec::new();
        while let Some(symbol) = self.next() {
            if symbol == SEPARATOR {
                if self.tokens[self.index..].iter().any(|&s| s != SEPARATOR) {
                    return Err(Error::TrailingTokens);
                }

                self.index = self.tokens.len();
                break;
            }

            let id = u32::try_from(symbol).map_err(|_| Error::UnexpectedSeparator {
                section: "modules",
            })?;
            ids.push(id);
        }

        Ok(ids)
    }
}
