//! Error handling types.
//!
//! Every failure the codecs can hit maps to one variant here; nothing is
//! retried or swallowed inside this crate. Callers that only care about
//! the coarse taxonomy can match on the variant groups noted below.

use mech_data::DataError;
use mech_data::chassis::LocationKind;
use mech_data::upgrade::UpgradeKind;
use mech_loadout::EquipError;

use crate::huffman::HuffmanError;

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors when encoding or decoding loadout links.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    // --- format dispatch ---
    /// No registered format claims the buffer's magic byte.
    #[error("no known link format recognizes the data")]
    FormatNotRecognized,
    /// A buffer was handed to a coder whose magic it does not carry.
    ///
    /// Distinguishes "wrong version, try another decoder" from corrupt
    /// data.
    #[error("expected format magic {expected:#04x}, found {found:#04x}")]
    WrongMagic { expected: u8, found: u8 },

    // --- malformed header ---
    /// The buffer ended inside a fixed-layout section.
    #[error("link data ends inside the {section} section")]
    UnexpectedEnd { section: &'static str },
    /// The decoded chassis ID does not resolve.
    #[error("link header names an unknown chassis")]
    UnknownChassis(#[source] DataError),
    /// The chassis cannot be represented by this format version.
    #[error("chassis {chassis_id} cannot be coded by this link format")]
    UnsupportedChassis { chassis_id: u32 },
    /// Reserved actuator-state bits were set.
    #[error("reserved actuator bits set in {byte:#04x}")]
    ReservedActuatorBits { byte: u8 },

    // --- encode-time overflow ---
    /// The chassis ID does not fit the 16-bit wire field.
    #[error("chassis id {id} does not fit the 16-bit wire field")]
    ChassisIdOverflow { id: u32 },
    /// A database ID does not fit the signed symbol space.
    #[error("id {id} does not fit the symbol space")]
    IdOverflow { id: u32 },
    /// An upgrade selection has no representation in this format version.
    #[error("upgrade {upgrade_id} cannot be coded by this link format")]
    UnsupportedUpgrade { upgrade_id: u32 },
    /// A swappable-chassis location has no pod to serialize.
    #[error("no pod mounted in {} to serialize", location.code())]
    MissingPod { location: LocationKind },

    // --- malformed token stream ---
    /// A separator appeared where an ID was expected.
    #[error("separator in the middle of the {section} section")]
    UnexpectedSeparator { section: &'static str },
    /// An ID appeared where a separator was expected.
    #[error("missing separator after the {section} section")]
    SeparatorExpected { section: &'static str },
    /// The token stream ended before the grammar was satisfied.
    #[error("token stream ends inside the {section} section")]
    UnexpectedEndOfStream { section: &'static str },
    /// An upgrade ID resolved to the wrong upgrade slot for its position.
    #[error("upgrade {upgrade_id} is not a {} upgrade", expected.name())]
    UpgradeSlotMismatch {
        expected: UpgradeKind,
        upgrade_id: u32,
    },
    /// Symbols followed the padding separators after the module block.
    #[error("stray symbols after the module block")]
    TrailingTokens,
    /// The Huffman layer failed.
    #[error(transparent)]
    Huffman(#[from] HuffmanError),

    // --- equip rejected ---
    /// A decoded token was rejected while being applied to the loadout.
    #[error("decoded link failed to apply: {0}")]
    Equip(#[from] EquipError),

    // --- uri wrapping ---
    /// The Base64 payload of a link URI is invalid.
    #[error("invalid base64 in link payload")]
    Base64(#[from] base64::DecodeError),

    // --- resources ---
    /// A baked frequency-table resource failed to parse.
    #[error("baked frequency table is invalid: {0}")]
    Resource(#[from] serde_json::Error),
}
