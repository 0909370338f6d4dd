//! Frequency-table-driven Huffman coding over signed integer symbols.
//!
//! The alphabet is the full symbol space of the link grammar: database
//! IDs plus the `-1` separator, which is a first-class symbol like any
//! other. Tree construction is reproducible across implementations:
//!
//! - the two lowest-weight subtrees merge first, ties broken by the
//!   smallest symbol contained in the subtree;
//! - of the two merged subtrees, the heavier (or tied) one descends the
//!   `0` branch.
//!
//! Encoding pads the final byte with zero bits. The decoder walks the
//! tree bit-by-bit until the input is exhausted; a dangling all-zero
//! prefix shorter than a byte is taken as that padding and discarded,
//! while any other incomplete walk is a hard error. The shipped tables
//! weight the separator above everything else combined, so padding can
//! only ever decode into trailing separators, which the grammar layer
//! ignores.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::bitio::{BitReader, BitWriter};

/// Errors from the Huffman layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HuffmanError {
    /// The frequency table has fewer than two symbols.
    #[error("frequency table needs at least two symbols")]
    TooFewSymbols,
    /// The frequency table lists a symbol twice.
    #[error("frequency table lists symbol {symbol} twice")]
    DuplicateSymbol { symbol: i32 },
    /// The frequency table gives a symbol no weight.
    #[error("frequency table gives symbol {symbol} a zero weight")]
    ZeroWeight { symbol: i32 },
    /// A code grew beyond 64 bits.
    #[error("code for symbol {symbol} exceeds 64 bits")]
    CodeTooLong { symbol: i32 },
    /// A symbol outside the table was encoded.
    ///
    /// The grammar only emits symbols known at table-generation time, so
    /// this is a programmer error rather than a runtime data error.
    #[error("symbol {symbol} is not part of the frequency table")]
    SymbolNotInTable { symbol: i32 },
    /// The bit stream ended inside a prefix that resolves to no leaf.
    #[error("bit stream ends inside an unresolvable code")]
    UnresolvedCode,
}

/// A fixed mapping from symbol to occurrence weight.
///
/// Must cover every symbol that can legally appear in a token stream,
/// including the separator, or encoding a legal loadout will fail.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Sorted by symbol; weights are non-zero.
    entries: Vec<(i32, u32)>,
}

impl FrequencyTable {
    /// Builds a table from `(symbol, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Rejects duplicate symbols and zero weights.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (i32, u32)>,
    ) -> Result<Self, HuffmanError> {
        let mut entries: Vec<(i32, u32)> = entries.into_iter().collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);

        let mut seen = HashSet::with_capacity(entries.len());
        for &(symbol, weight) in &entries {
            if weight == 0 {
                return Err(HuffmanError::ZeroWeight { symbol });
            }
            if !seen.insert(symbol) {
                return Err(HuffmanError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { entries })
    }

    /// The number of symbols in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A prefix-free code over a node arena.
#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf(i32),
    Branch { zero: usize, one: usize },
}

/// A single symbol's code, MSB-first in the low `len` bits.
#[derive(Debug, Clone, Copy)]
struct Code {
    bits: u64,
    len: u8,
}

/// Priority key for tree construction; the derived order is
/// (weight, smallest contained symbol, insertion index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    weight: u64,
    min_symbol: i32,
    index: usize,
}

/// An immutable Huffman coder built from a [`FrequencyTable`].
///
/// Construction happens once; `encode` and `decode` are pure functions
/// over their input plus the immutable tree and can be shared freely.
#[derive(Debug)]
pub struct Huffman {
    nodes: Vec<Node>,
    root: usize,
    codes: HashMap<i32, Code>,
}

impl Huffman {
    /// Builds the canonical tree for a table.
    ///
    /// # Errors
    ///
    /// Fails for tables with fewer than two symbols or degenerate tables
    /// whose codes exceed 64 bits.
    pub fn new(table: &FrequencyTable) -> Result<Self, HuffmanError> {
        if table.entries.len() < 2 {
            return Err(HuffmanError::TooFewSymbols);
        }

        let mut nodes = Vec::with_capacity(table.entries.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(table.entries.len());
        for &(symbol, weight) in &table.entries {
            heap.push(Reverse(HeapEntry {
                weight: u64::from(weight),
                min_symbol: symbol,
                index: nodes.len(),
            }));
            nodes.push(Node::Leaf(symbol));
        }

        while heap.len() > 1 {
            let Some((Reverse(light), Reverse(heavy))) = heap.pop().zip(heap.pop()) else {
                break;
            };

            let merged = HeapEntry {
                weight: light.weight + heavy.weight,
                min_symbol: light.min_symbol.min(heavy.min_symbol),
                index: nodes.len(),
            };
            // the heavier (or tied) subtree descends the zero branch
            nodes.push(Node::Branch {
                zero: heavy.index,
                one: light.index,
            });
            heap.push(Reverse(merged));
        }

        let root = heap
            .pop()
            .map(|Reverse(entry)| entry.index)
            .ok_or(HuffmanError::TooFewSymbols)?;

        let mut codes = HashMap::with_capacity(table.entries.len());
        assign_codes(&nodes, root, Code { bits: 0, len: 0 }, &mut codes)?;

        Ok(Self { nodes, root, codes })
    }

    /// Encodes a symbol sequence into a zero-padded byte buffer.
    ///
    /// # Errors
    ///
    /// Fails with [`HuffmanError::SymbolNotInTable`] for symbols outside
    /// the table.
    pub fn encode(&self, symbols: &[i32]) -> Result<Vec<u8>, HuffmanError> {
        let mut writer = BitWriter::new();
        for &symbol in symbols {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(HuffmanError::SymbolNotInTable { symbol })?;
            writer.push_bits(code.bits, code.len);
        }

        Ok(writer.finish())
    }

    /// Decodes a byte buffer back into its symbol sequence.
    ///
    /// Decoding continues until the bits are exhausted; see the module
    /// docs for how final-byte padding is handled.
    ///
    /// # Errors
    ///
    /// Fails with [`HuffmanError::UnresolvedCode`] if the stream ends
    /// inside a prefix that cannot be part of the padding.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<i32>, HuffmanError> {
        let mut symbols = Vec::new();
        let mut reader = BitReader::new(bytes);
        let mut index = self.root;
        let mut walk_len = 0u8;
        let mut walk_has_ones = false;

        loop {
            let Some(bit) = reader.next_bit() else {
                return if walk_len == 0 || (!walk_has_ones && walk_len < 8) {
                    Ok(symbols)
                } else {
                    Err(HuffmanError::UnresolvedCode)
                };
            };

            let Node::Branch { zero, one } = self.nodes[index] else {
                // the root of a >=2 symbol tree is always a branch
                return Err(HuffmanError::UnresolvedCode);
            };

            walk_len += 1;
            walk_has_ones |= bit;
            index = if bit { one } else { zero };

            if let Node::Leaf(symbol) = self.nodes[index] {
                symbols.push(symbol);
                index = self.root;
                walk_len = 0;
                walk_has_ones = false;
            }
        }
    }
}

fn assign_codes(
    nodes: &[Node],
    index: usize,
    code: Code,
    codes: &mut HashMap<i32, Code>,
) -> Result<(), HuffmanError> {
    match nodes[index] {
        Node::Leaf(symbol) => {
            if code.len == 0 {
                // cannot happen: single-leaf tables are rejected up front
                return Err(HuffmanError::TooFewSymbols);
            }
            codes.insert(symbol, code);
            Ok(())
        },
        Node::Branch { zero, one } => {
            if code.len == 64 {
                return Err(HuffmanError::CodeTooLong {
                    symbol: deepest_symbol(nodes, zero),
                });
            }

            let next = Code {
                bits: code.bits << 1,
                len: code.len + 1,
            };
            assign_codes(nodes, zero, next, codes)?;
            assign_codes(
                nodes,
                one,
                Code {
                    bits: next.bits | 1,
                    len: next.len,
                },
                codes,
            )
        },
    }
}

/// Any symbol under the node, for error reporting.
fn deepest_symbol(nodes: &[Node], mut index: usize) -> i32 {
    loop {
        match nodes[index] {
            Node::Leaf(symbol) => return symbol,
            Node::Branch { zero, .. } => index = zero,
        }
    }
}
