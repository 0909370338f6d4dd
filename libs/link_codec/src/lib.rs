//! # GearLink binary link format
//!
//! Converts an in-memory loadout into a compact, versioned, shareable
//! binary token and back, and wraps that token into a `gearlink://` (or
//! trampoline HTTP) URI.
//!
//! Every format version shares the outer layout:
//!
//! | Offset | Size | Field                                          |
//! |--------|------|------------------------------------------------|
//! | 0      | 1    | format magic                                   |
//! | 1      | 1    | per-version bit flags                          |
//! | 2-3    | 2    | chassis id, big-endian unsigned                |
//! | 4..    | 11   | armor bytes, canonical order, torsos doubled   |
//! | [opt]  | 1    | actuator flags (swappable-pod chassis, v2)     |
//! | ..EOF  | var  | Huffman-coded token stream                     |
//!
//! The canonical location order is RA, RT, RL, HD, CT, LT, LL, LA. The
//! token stream grammar, the `-1` separator, and the per-version
//! frequency tables are part of the wire contract; see the [`v1`] and
//! [`v2`] module docs for the exact grammars and [`huffman`] for the
//! tree construction rules.
//!
//! Decoding dispatches on the magic byte across all registered versions,
//! so old links stay decodable as new formats are added; encoding always
//! produces the newest format. All reference data is resolved through an
//! explicitly injected [`mech_data::Database`] — encode and decode are
//! pure functions of their inputs and the immutable baked tables.

pub mod armor;
pub mod bitio;
mod codec;
pub mod error;
pub mod grammar;
pub mod header;
pub mod huffman;
pub mod tables;
#[cfg(test)]
pub(crate) mod testing;
pub mod uri;
pub mod v1;
pub mod v2;

pub use codec::{FormatCoder, LinkCodec};
pub use error::{Error, Result};
