//! Text wrapping of binary link payloads.
//!
//! The payload is Base64-encoded and prefixed with the `gearlink://`
//! scheme so links can be pasted, mailed, or opened through a URI
//! handler. For environments that cannot register a custom scheme, the
//! plain-HTTP trampoline prefix wraps the identical payload.
//!
//! Decoding tolerates either prefix (or none), strips trailing slash
//! characters that user agents like to append, and restores Base64
//! padding that URI handling tends to lose.

use base64::prelude::*;

use crate::error::Result;

/// The custom URI scheme prefix.
pub const SCHEME: &str = "gearlink://";

/// The plain-HTTP trampoline prefix.
pub const TRAMPOLINE: &str = "http://t.gearlink.example/?l=";

/// Wraps a payload into a `gearlink://` URI.
#[must_use]
pub fn to_scheme_uri(payload: &[u8]) -> String {
    format!("{SCHEME}{}", BASE64_STANDARD.encode(payload))
}

/// Wraps a payload into a trampoline HTTP URI.
#[must_use]
pub fn to_trampoline_uri(payload: &[u8]) -> String {
    format!("{TRAMPOLINE}{}", BASE64_STANDARD.encode(payload))
}

/// Recovers the binary payload from a link URI.
///
/// # Errors
///
/// Fails if the remaining text is not valid Base64.
pub fn payload_from_uri(link: &str) -> Result<Vec<u8>> {
    let raw = link
        .strip_prefix(TRAMPOLINE)
        .or_else(|| link.strip_prefix(SCHEME))
        .unwrap_or(link);
    let raw = raw.trim_end_matches('/');

    let payload = match raw.len() % 4 {
        2 => BASE64_STANDARD.decode(format!("{raw}==")),
        3 => BASE64_STANDARD.decode(format!("{raw}=")),
        _ => BASE64_STANDARD.decode(raw),
    }?;

    Ok(payload)
}
