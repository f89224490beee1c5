//! In-memory builder for Sogou `.bin` containers.

#![allow(dead_code)]

pub const HEADER_LEN: usize = 80;

pub fn utf16(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Encodes one record with raw pinyin bytes and raw word bytes.
pub fn raw_record(frequency: i16, pinyin: &[u8], word: &[u8]) -> Vec<u8> {
    raw_record_with_len(frequency, pinyin.len() as u16, pinyin, word)
}

/// Like [`raw_record`], but writes `pinyin_len` as the pinyin length field
/// regardless of how many pinyin bytes follow.
pub fn raw_record_with_len(frequency: i16, pinyin_len: u16, pinyin: &[u8], word: &[u8]) -> Vec<u8> {
    let mut rec = Vec::new();
    rec.extend_from_slice(&frequency.to_le_bytes());
    rec.extend_from_slice(&[0xAA; 2]);
    rec.extend_from_slice(&[0xBB; 5]);
    rec.extend_from_slice(&pinyin_len.to_le_bytes());
    rec.extend_from_slice(pinyin);
    rec.extend_from_slice(&0x1234u16.to_le_bytes());
    rec.extend_from_slice(&(word.len() as u16).to_le_bytes());
    rec.extend_from_slice(word);
    rec
}

pub fn record(frequency: i16, pinyin: &str, word: &str) -> Vec<u8> {
    raw_record(frequency, &utf16(pinyin), &utf16(word))
}

/// Builds a container from records laid out back to back.
///
/// `extra_slots` are appended to the index verbatim, after the slots that
/// point at `records`. A zero tail keeps short final records above the
/// minimum record size guard.
pub fn container(records: &[Vec<u8>], extra_slots: &[u32]) -> Vec<u8> {
    let word_count = records.len() + extra_slots.len();
    let index_start = HEADER_LEN;
    let index_size = 4 * word_count;
    let data_start = index_start + index_size;

    let mut offsets = Vec::new();
    let mut data = Vec::new();
    for rec in records {
        offsets.push(data.len() as u32);
        data.extend_from_slice(rec);
    }
    offsets.extend_from_slice(extra_slots);
    let effective = data.len();
    data.extend_from_slice(&[0u8; 32]);

    let total_len = data_start + data.len();
    let mut buf = vec![0u8; HEADER_LEN];
    buf[0..4].copy_from_slice(b"SGPU");
    put_u32(&mut buf, 4, 2);
    put_u32(&mut buf, 8, 20251127);
    put_u32(&mut buf, 12, 0);
    put_u32(&mut buf, 16, total_len as u32);
    put_u32(&mut buf, 56, index_start as u32);
    put_u32(&mut buf, 60, index_size as u32);
    put_u32(&mut buf, 64, word_count as u32);
    put_u32(&mut buf, 68, data_start as u32);
    put_u32(&mut buf, 72, data.len() as u32);
    put_u32(&mut buf, 76, effective as u32);
    for off in offsets {
        buf.extend_from_slice(&off.to_le_bytes());
    }
    buf.extend_from_slice(&data);
    buf
}

pub fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
