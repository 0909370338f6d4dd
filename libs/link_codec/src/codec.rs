//! The versioned coder family and the format dispatcher.

use mech_data::Database;
use mech_loadout::Loadout;

use crate::error::{Error, Result};
use crate::uri;
use crate::v1::FormatV1;
use crate::v2::FormatV2;

/// One format version's complete encode/decode pair.
///
/// Implementations claim buffers solely by their magic byte; the
/// dispatcher never peeks deeper.
pub trait FormatCoder: Send + Sync {
    /// The format's magic byte.
    fn magic(&self) -> u8;

    /// Whether this coder claims the buffer.
    fn can_decode(&self, buf: &[u8]) -> bool {
        buf.first() == Some(&self.magic())
    }

    /// Encodes a loadout into this format.
    ///
    /// # Errors
    ///
    /// Fails for loadouts the format cannot represent and for IDs that
    /// overflow their wire fields.
    fn encode(&self, loadout: &Loadout<'_>) -> Result<Vec<u8>>;

    /// Decodes a buffer of this format into a loadout.
    ///
    /// All-or-nothing: any failure while parsing or applying tokens
    /// aborts the decode; a partial loadout is never returned.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the taxonomy.
    fn decode<'d>(&self, db: &'d Database, buf: &[u8]) -> Result<Loadout<'d>>;
}

/// The registry of known format coders.
///
/// Decoding tries the coders newest to oldest, so old shared links stay
/// decodable indefinitely; encoding always produces the newest format.
pub struct LinkCodec {
    coders: Vec<Box<dyn FormatCoder>>,
}

impl LinkCodec {
    /// Creates the registry with all known formats.
    ///
    /// # Errors
    ///
    /// Fails only if a baked frequency table is invalid.
    pub fn new() -> Result<Self> {
        Ok(Self {
            coders: vec![Box::new(FormatV2::new()?), Box::new(FormatV1::new()?)],
        })
    }

    /// Encodes a loadout into the newest binary format.
    ///
    /// # Errors
    ///
    /// See [`FormatCoder::encode`].
    pub fn encode(&self, loadout: &Loadout<'_>) -> Result<Vec<u8>> {
        let newest = self.coders.first().ok_or(Error::FormatNotRecognized)?;
        newest.encode(loadout)
    }

    /// Decodes a binary buffer with the first coder that claims it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::FormatNotRecognized`] if no coder claims the
    /// buffer, or with the claiming coder's decode error.
    pub fn decode<'d>(&self, db: &'d Database, buf: &[u8]) -> Result<Loadout<'d>> {
        self.coders
            .iter()
            .find(|coder| coder.can_decode(buf))
            .ok_or(Error::FormatNotRecognized)?
            .decode(db, buf)
    }

    /// Encodes a loadout into a shareable `gearlink://` URI.
    ///
    /// # Errors
    ///
    /// See [`FormatCoder::encode`].
    pub fn encode_uri(&self, loadout: &Loadout<'_>) -> Result<String> {
        Ok(uri::to_scheme_uri(&self.encode(loadout)?))
    }

    /// Decodes a link URI, tolerating either known prefix.
    ///
    /// # Errors
    ///
    /// Fails on invalid Base64 or any decode error of the payload.
    pub fn decode_uri<'d>(&self, db: &'d Database, link: &str) -> Result<Loadout<'d>> {
        let payload = uri::payload_from_uri(link)?;
        self.decode(db, &payload)
    }
}
