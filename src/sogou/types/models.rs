//! Core data structures for the Sogou `.bin` container.
//!
//! This module defines the fundamental types used throughout the library:
//! - The fixed header and its region descriptors
//! - The decoded dictionary entry

/// File signature found at offset 0.
pub const MAGIC: [u8; 4] = *b"SGPU";

/// Smallest buffer that can hold the fixed header fields.
pub const MIN_FILE_SIZE: usize = 20;

/// Offset of the region descriptor block (base header + 36 bytes).
pub const REGION_DESCRIPTOR_OFFSET: usize = 20 + 36;

/// Coarse lower bound on the size of one record.
pub const MIN_RECORD_SIZE: usize = 20;

/// Pronunciations this long (in UTF-16 units) or longer are treated as corruption.
pub const MAX_PINYIN_UNITS: usize = 100;

/// Parsed fixed header of a Sogou user dictionary.
///
/// The leading fields are always present once the signature has been
/// validated. The region descriptors may be missing on truncated files, in
/// which case they are `None` and every record lookup degrades to a skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SogouHeader {
    pub version: u32,
    pub date: u32,
    pub reserved: u32,
    /// File size as declared by the writer. Not checked against the buffer.
    pub declared_file_size: u32,
    pub index: IndexRegion,
    pub data: DataRegion,
}

impl SogouHeader {
    /// Number of index slots to visit. A missing count means no slots.
    pub fn word_count(&self) -> u32 {
        self.index.word_count.unwrap_or(0)
    }

    /// Whether the declared file size matches the actual buffer length.
    pub fn is_file_size_consistent(&self, actual_len: usize) -> bool {
        self.declared_file_size as usize == actual_len
    }
}

/// Descriptor of the offset table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexRegion {
    pub start: Option<u32>,
    pub size: Option<u32>,
    pub word_count: Option<u32>,
}

/// Descriptor of the record blob. Index offsets are relative to `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataRegion {
    pub start: Option<u32>,
    pub total_size: Option<u32>,
    pub effective_size: Option<u32>,
}

/// A single decoded dictionary entry.
///
/// `word` is never empty. `pinyin` is empty when the record carried no
/// usable pronunciation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub frequency: i16,
    pub pinyin: String,
}

impl Entry {
    /// Whether the record carried a usable pronunciation.
    pub fn has_pinyin(&self) -> bool {
        !self.pinyin.is_empty()
    }
}
