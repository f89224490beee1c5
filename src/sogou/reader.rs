use std::fs;
use std::path::Path;
use log::info;

use super::format::{header, record};
use super::iter::EntryIterator;
use super::types::error::Result;
use super::types::models::{Entry, SogouHeader};

/// The main reader for Sogou Pinyin user-dictionary backups.
///
/// The whole file is loaded into memory up front; the file handle is closed
/// before any record is decoded. Decoding never mutates the buffer, so
/// iterating twice yields identical entries.
#[derive(Debug)]
pub struct SogouReader {
    data: Vec<u8>,
    pub header: SogouHeader,
}

impl SogouReader {
    /// Read a Sogou `.bin` dictionary from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be read
    /// - File is shorter than the fixed header
    /// - Signature is not `SGPU`
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening Sogou dictionary: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Wrap an in-memory container.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = header::parse(&data)?;
        Ok(Self { data, header })
    }

    /// Returns the number of index slots declared by the header.
    ///
    /// This is an upper bound on the number of entries, not a promise.
    pub fn word_count(&self) -> u32 {
        self.header.word_count()
    }

    /// Raw container bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Decodes a single index slot.
    ///
    /// Returns `None` when the slot is malformed or the region descriptors
    /// are missing from the header.
    pub fn decode_slot(&self, slot: usize) -> Option<Entry> {
        let index_base = self.header.index.start? as usize;
        let data_base = self.header.data.start? as usize;
        record::decode_index_slot(&self.data, index_base, data_base, slot)
    }

    /// Returns an iterator over every successfully decoded entry, in slot order.
    pub fn iter_entries(&self) -> EntryIterator<'_> {
        EntryIterator::new(self)
    }

    /// Decodes all entries.
    pub fn entries(&self) -> Vec<Entry> {
        let mut iter = self.iter_entries();
        let entries: Vec<Entry> = iter.by_ref().collect();
        info!(
            "Decoded {} entries from {} slots ({} skipped)",
            entries.len(),
            self.word_count(),
            iter.skipped()
        );
        entries
    }
}
