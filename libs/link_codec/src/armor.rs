//! Armor section packing.
//!
//! One byte per armor value, iterated over locations in the canonical
//! [`LocationKind::ORDER`]; two-sided locations emit two consecutive
//! bytes, front then back. Which locations are two-sided comes from the
//! chassis metadata, not from the wire.

use mech_data::chassis::LocationKind;
use mech_loadout::{Loadout, Side};

use crate::error::{Error, Result};

/// The armor section length in bytes: one per location plus one more
/// per two-sided location.
#[must_use]
pub fn section_len() -> usize {
    LocationKind::ORDER
        .iter()
        .map(|k| if k.two_sided() { 2 } else { 1 })
        .sum()
}

/// Appends the armor section of a loadout to a buffer.
pub fn write(loadout: &Loadout<'_>, out: &mut Vec<u8>) {
    for slot in loadout.locations() {
        out.push(slot.armor(Side::Front));
        if slot.kind().two_sided() {
            out.push(slot.armor(Side::Back));
        }
    }
}

/// Reads the armor section into a loadout shell, returning the remaining
/// bytes.
///
/// # Errors
///
/// Out-of-range values are rejected through the shell's armor validation
/// rather than clamped; a short buffer fails with
/// [`Error::UnexpectedEnd`].
pub fn read<'a>(buf: &'a [u8], shell: &mut Loadout<'_>) -> Result<&'a [u8]> {
    let mut rest = buf;
    for &kind in LocationKind::ORDER {
        let value = take_byte(&mut rest)?;
        shell.set_armor(kind, Side::Front, value)?;

        if kind.two_sided() {
            let value = take_byte(&mut rest)?;
            shell.set_armor(kind, Side::Back, value)?;
        }
    }

    Ok(rest)
}

fn take_byte(rest: &mut &[u8]) -> Result<u8> {
    let (&value, remainder) = rest
        .split_first()
        .ok_or(Error::UnexpectedEnd { section: "armor" })?;
    *rest = remainder;
    Ok(value)
}
