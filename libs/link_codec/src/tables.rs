//! Baked per-version frequency tables.
//!
//! The tables are produced offline from link corpus statistics over the
//! full reference database. Each format version ships its own table as a
//! JSON resource and never changes it afterwards; cross-version table
//! compatibility is explicitly a non-goal.

use crate::error::Result;
use crate::huffman::FrequencyTable;

/// The table shipped with format version 1.
///
/// # Errors
///
/// Fails only if the baked resource is invalid.
pub fn version_1() -> Result<FrequencyTable> {
    parse(include_str!("../resources/freq_v1.json"))
}

/// The table shipped with format version 2.
///
/// # Errors
///
/// Fails only if the baked resource is invalid.
pub fn version_2() -> Result<FrequencyTable> {
    parse(include_str!("../resources/freq_v2.json"))
}

fn parse(json: &str) -> Result<FrequencyTable> {
    let entries: Vec<(i32, u32)> = serde_json::from_str(json)?;
    Ok(FrequencyTable::from_entries(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::SEPARATOR;
    use crate::huffman::Huffman;

    #[test]
    fn baked_tables_build_coders() {
        for table in [version_1(), version_2()] {
            let table = table.expect("baked tables must parse");
            let coder = Huffman::new(&table).expect("baked tables must build");

            // the separator must be part of every version's alphabet
            coder
                .encode(&[SEPARATOR])
                .expect("separator must be codeable");
        }
    }
}
