//! Core Sogou dictionary reader module

pub mod export;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::SogouReader;
pub use types::error::{Result, SogouError};
