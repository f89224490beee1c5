//! # Record Decoding
//!
//! Turns one index slot into one dictionary entry.
//!
//! ## Record Layout
//! ```text
//! [2 bytes] Frequency           (i16 LE)
//! [2 bytes] Reserved
//! [5 bytes] Reserved
//! [2 bytes] Pinyin length       (u16 LE, bytes)
//! [N bytes] Pinyin              (UTF-16LE)
//! [2 bytes] Unused              (u16 LE)
//! [2 bytes] Word length         (u16 LE, bytes)
//! [M bytes] Word                (UTF-16LE)
//! ```
//!
//! Every failure here is local to the slot: the decoder returns `None` and
//! the caller moves on to the next slot.

use log::trace;

use crate::sogou::types::models::{Entry, MAX_PINYIN_UNITS, MIN_RECORD_SIZE};
use crate::sogou::utils;

/// Decodes the record referenced by index slot `slot`.
///
/// # Parameters
/// * `data` - The whole container buffer
/// * `index_base` - Absolute offset of the offset table
/// * `data_base` - Absolute offset the table entries are relative to
/// * `slot` - Zero-based slot number
pub fn decode_index_slot(data: &[u8], index_base: usize, data_base: usize, slot: usize) -> Option<Entry> {
    let slot_offset = slot.checked_mul(4)?.checked_add(index_base)?;
    let relative = utils::read_u32_at(data, slot_offset)? as usize;
    let entry_offset = relative.checked_add(data_base)?;

    if entry_offset.checked_add(MIN_RECORD_SIZE)? > data.len() {
        trace!("Slot {}: record offset {} out of bounds", slot, entry_offset);
        return None;
    }

    let mut cursor = entry_offset;

    let frequency = utils::read_i16_at(data, cursor)?;
    cursor += 2;

    // Opaque reserved spans
    cursor += 2 + 5;

    let pinyin_len_bytes = utils::read_u16_at(data, cursor)? as usize;
    cursor += 2;
    let py_units = pinyin_len_bytes / 2;

    let pinyin = if py_units > 0 && py_units < MAX_PINYIN_UNITS {
        utils::slice_at(data, cursor, py_units * 2)
            .and_then(accept_pinyin)
            .unwrap_or_default()
    } else {
        String::new()
    };
    // Keep alignment whether or not the pinyin was usable.
    cursor = cursor.checked_add(py_units * 2)?;

    let _unused = utils::read_u16_at(data, cursor)?;
    cursor += 2;

    let word_size = utils::read_u16_at(data, cursor)? as usize;
    cursor += 2;

    let Some(word_bytes) = utils::slice_at(data, cursor, word_size) else {
        trace!("Slot {}: word span {}+{} out of bounds", slot, cursor, word_size);
        return None;
    };
    let Some(word) = utils::decode_utf16le(word_bytes) else {
        trace!("Slot {}: word is not valid UTF-16LE", slot);
        return None;
    };
    if word.is_empty() {
        trace!("Slot {}: empty word", slot);
        return None;
    }

    Some(Entry { word, frequency, pinyin })
}

/// Decodes and screens an embedded pronunciation.
///
/// The pinyin slot often holds binary garbage. Text with no printable ASCII
/// character at all is rejected.
fn accept_pinyin(bytes: &[u8]) -> Option<String> {
    let raw = utils::decode_utf16le(bytes)?;
    if !raw.chars().any(|c| (' '..='~').contains(&c)) {
        return None;
    }
    Some(raw.trim_matches('\0').trim().to_owned())
}
