//! Sogou container header parsing.
//!
//! # Header Structure
//! ```text
//! [0..4]   Signature "SGPU"
//! [4..8]   Version           (u32 LE)
//! [8..12]  Date              (u32 LE)
//! [12..16] Reserved          (u32 LE)
//! [16..20] Declared size     (u32 LE)
//! ...
//! [56..60] Index start       (u32 LE)
//! [60..64] Index size        (u32 LE)
//! [64..68] Word count        (u32 LE)
//! [68..72] Data start        (u32 LE)
//! [72..76] Data total size   (u32 LE)
//! [76..80] Data effective size (u32 LE)
//! ```

use log::{debug, info, trace, warn};

use crate::sogou::types::{
    error::{Result, SogouError},
    models::{DataRegion, IndexRegion, SogouHeader, MAGIC, MIN_FILE_SIZE, REGION_DESCRIPTOR_OFFSET},
};
use crate::sogou::utils;

/// Parses the fixed header from the start of an in-memory container.
///
/// Only the size check and the signature are fatal. Region descriptors that
/// fall past the end of `data` come back as `None`.
pub fn parse(data: &[u8]) -> Result<SogouHeader> {
    info!("Parsing Sogou dictionary header");

    // Step 1: Minimum size
    if data.len() < MIN_FILE_SIZE {
        return Err(SogouError::TooSmall { len: data.len() });
    }

    // Step 2: Signature
    let found = [data[0], data[1], data[2], data[3]];
    trace!("Signature bytes: {:02x?}", found);
    if found != MAGIC {
        return Err(SogouError::BadSignature { found });
    }

    // Step 3: Fixed fields, guaranteed present by the size check
    let fixed = |offset| utils::read_u32_at(data, offset).unwrap_or_default();
    let version = fixed(4);
    let date = fixed(8);
    let reserved = fixed(12);
    let declared_file_size = fixed(16);

    // Step 4: Region descriptors, each independently optional
    let field = |n: usize| utils::read_u32_at(data, REGION_DESCRIPTOR_OFFSET + 4 * n);
    let index = IndexRegion {
        start: field(0),
        size: field(1),
        word_count: field(2),
    };
    let data_region = DataRegion {
        start: field(3),
        total_size: field(4),
        effective_size: field(5),
    };

    let header = SogouHeader {
        version,
        date,
        reserved,
        declared_file_size,
        index,
        data: data_region,
    };

    if !header.is_file_size_consistent(data.len()) {
        warn!(
            "Declared file size {} does not match actual size {}",
            declared_file_size,
            data.len()
        );
    }
    debug!(
        "Index region: start={:?}, size={:?}, words={:?}",
        index.start, index.size, index.word_count
    );
    debug!(
        "Data region: start={:?}, total={:?}, effective={:?}",
        data_region.start, data_region.total_size, data_region.effective_size
    );
    info!(
        "Header parsed successfully: version={}, date={}, declared size={} bytes, words={}",
        version,
        date,
        declared_file_size,
        header.word_count()
    );

    Ok(header)
}
