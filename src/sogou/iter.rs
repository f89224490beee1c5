//! Sequential access to dictionary entries.
//!
//! # Example
//! ```no_run
//! # use sogou_dict_reader::SogouReader;
//! # let reader = SogouReader::new("dict.bin").unwrap();
//! for entry in reader.iter_entries() {
//!     println!("{}\t{}", entry.word, entry.frequency);
//! }
//! ```

use super::reader::SogouReader;
use super::types::models::Entry;

/// Iterator over the decoded entries of a [`SogouReader`].
///
/// Walks every declared index slot once. Malformed slots are skipped and
/// counted, never reported as errors. Slots whose offset would lie past the
/// end of the buffer are not decoded at all; they are counted as skipped in
/// one step once the reachable slots are exhausted.
///
/// Created by [`SogouReader::iter_entries()`](crate::SogouReader::iter_entries).
pub struct EntryIterator<'a> {
    reader: &'a SogouReader,
    slot: usize,
    /// Slots declared by the header.
    word_count: usize,
    /// Slots whose offset lies inside the buffer.
    reachable: usize,
    skipped: usize,
}

impl<'a> EntryIterator<'a> {
    pub(super) fn new(reader: &'a SogouReader) -> Self {
        let word_count = reader.word_count() as usize;
        let reachable = match (reader.header.index.start, reader.header.data.start) {
            (Some(index_base), Some(_)) => {
                let table_room = reader.as_bytes().len().saturating_sub(index_base as usize) / 4;
                word_count.min(table_room)
            }
            _ => 0,
        };
        Self {
            reader,
            slot: 0,
            word_count,
            reachable,
            skipped: 0,
        }
    }

    /// Number of slots skipped so far, including unreachable ones once the
    /// iterator is exhausted.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for EntryIterator<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < self.reachable {
            let slot = self.slot;
            self.slot += 1;
            match self.reader.decode_slot(slot) {
                Some(entry) => return Some(entry),
                None => self.skipped += 1,
            }
        }
        // Remaining slots cannot be read from the buffer.
        if self.slot < self.word_count {
            self.skipped += self.word_count - self.slot;
            self.slot = self.word_count;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.reachable.saturating_sub(self.slot)))
    }
}
