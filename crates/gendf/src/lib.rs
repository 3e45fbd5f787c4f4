//! Module for converting GENDF multigroup tables into array archives
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod archive;
mod convert;
mod core;
mod error;
mod reader;
mod reorganize;

// Inline anything important for a nice public API
#[doc(inline)]
pub use crate::core::*;

#[doc(inline)]
pub use archive::{init_archive, Archive, Dataset, Layout, MemoryArchive, Node, Record, ROOT_GROUPS};

#[doc(inline)]
pub use convert::{convert, convert_file, Converter};

#[doc(inline)]
pub use reader::Reader;

#[doc(inline)]
pub use reorganize::{dense, reorganize, sparse};

#[doc(inline)]
pub use error::{Error, Result};
