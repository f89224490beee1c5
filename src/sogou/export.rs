//! Text exports of decoded entries.
//!
//! All writers emit UTF-8, one entry per line, tab-separated.

use std::cmp::Reverse;
use std::io::{self, Write};
use log::debug;

use super::types::models::Entry;

/// Default weight written for every Rime phrase.
pub const DEFAULT_RIME_WEIGHT: u32 = 100;

/// Maps a word to a plain-text pronunciation.
///
/// The decoder never calls this. It is only consulted by [`write_rime`] when
/// the caller supplies one.
pub trait Transliterator {
    fn transliterate(&self, word: &str) -> Option<String>;
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn transliterate(&self, word: &str) -> Option<String> {
        self(word)
    }
}

/// Sorts entries by descending frequency. Ties keep their decode order.
pub fn sort_by_frequency(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| Reverse(entry.frequency));
}

/// Writes `word\tfrequency[\tpinyin]` lines and returns how many were written.
///
/// With `include_pinyin` the third column is always present, empty when the
/// entry has no pronunciation.
pub fn write_tsv<W: Write>(out: &mut W, entries: &[Entry], include_pinyin: bool) -> io::Result<usize> {
    for entry in entries {
        if include_pinyin {
            writeln!(out, "{}\t{}\t{}", entry.word, entry.frequency, entry.pinyin)?;
        } else {
            writeln!(out, "{}\t{}", entry.word, entry.frequency)?;
        }
    }
    out.flush()?;
    Ok(entries.len())
}

/// Outcome of a Rime export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RimeSummary {
    pub written: usize,
    /// Entries dropped for lack of any pronunciation.
    pub skipped: usize,
}

/// Writes a Rime `custom_phrase.txt` table.
///
/// The pronunciation of each word comes from `transliterator` when it yields
/// one, otherwise from the pinyin embedded in the dictionary with whitespace
/// removed.
pub fn write_rime<W: Write>(
    out: &mut W,
    entries: &[Entry],
    transliterator: Option<&dyn Transliterator>,
    weight: u32,
) -> io::Result<RimeSummary> {
    writeln!(out, "# Rime custom phrases")?;
    writeln!(out, "# Imported from a Sogou Pinyin user dictionary")?;
    writeln!(out, "# Format: word\tpinyin\tweight")?;
    writeln!(out)?;

    let mut summary = RimeSummary::default();
    for entry in entries {
        let code = transliterator
            .and_then(|t| t.transliterate(&entry.word))
            .unwrap_or_else(|| entry.pinyin.split_whitespace().collect());
        if code.is_empty() {
            debug!("No pronunciation for '{}', skipping", entry.word);
            summary.skipped += 1;
            continue;
        }
        writeln!(out, "{}\t{}\t{}", entry.word, code, weight)?;
        summary.written += 1;
    }
    out.flush()?;
    Ok(summary)
}

/// Frequency statistics over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyStats {
    pub count: usize,
    pub max: i16,
    pub min: i16,
    /// Mean rounded toward negative infinity.
    pub mean: i64,
}

impl FrequencyStats {
    /// Returns `None` for an empty slice.
    pub fn from_entries(entries: &[Entry]) -> Option<Self> {
        let max = entries.iter().map(|e| e.frequency).max()?;
        let min = entries.iter().map(|e| e.frequency).min()?;
        let sum: i64 = entries.iter().map(|e| i64::from(e.frequency)).sum();
        Some(Self {
            count: entries.len(),
            max,
            min,
            mean: sum.div_euclid(entries.len() as i64),
        })
    }
}
