//! # sogou-dict-reader
//!
//! A reader for Sogou Pinyin user-dictionary backups (`.bin`, signature `SGPU`).
//! Extracts `(word, frequency, pinyin)` entries and exports them as text.
//!
//! Malformed records are skipped; only a truncated header or a wrong
//! signature fails the whole file.
pub mod sogou;

// Re-export the main types for convenience
pub use sogou::{
    SogouReader,
    SogouError,
    Result,
    export::{self, FrequencyStats, RimeSummary, Transliterator},
    iter::EntryIterator,
    types::models::{
        DataRegion,
        Entry,
        IndexRegion,
        SogouHeader,
    },
};
