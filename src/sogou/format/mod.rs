//! File format parsing layer for Sogou user dictionaries.
//!
//! - [`header`]: Validates the signature and reads the fixed header
//! - [`record`]: Decodes one record per index slot
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Fixed Header   │ ← header::parse()
//! ├─────────────────┤
//! │  Index Region   │ ← u32 offsets, one per word
//! ├─────────────────┤
//! │  Data Region    │ ← record::decode_index_slot()
//! │  (variable-     │
//! │   length)       │
//! └─────────────────┘
//! ```

pub mod header;
pub mod record;
