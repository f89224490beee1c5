//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;

/// Borrow `len` bytes at `offset`, or `None` if the span leaves the buffer.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Read a little-endian u32. Every size and offset field in the container uses this width.
pub fn read_u32_at(data: &[u8], offset: usize) -> Option<u32> {
    slice_at(data, offset, 4).map(LittleEndian::read_u32)
}

pub fn read_u16_at(data: &[u8], offset: usize) -> Option<u16> {
    slice_at(data, offset, 2).map(LittleEndian::read_u16)
}

pub fn read_i16_at(data: &[u8], offset: usize) -> Option<i16> {
    slice_at(data, offset, 2).map(LittleEndian::read_i16)
}

/// Strictly decode UTF-16LE text.
///
/// Returns `None` for odd byte counts and unpaired surrogates instead of
/// substituting replacement characters.
pub fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
