//! Fixed-column ENDF card tokenizer and logical record reader
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod card;
mod error;
mod number;
mod reader;

// Inline anything important for a nice public API
#[doc(inline)]
pub use card::{format_field, Card, LINE_WIDTH, VALUES_PER_LINE, WIDTHS};

#[doc(inline)]
pub use number::{format_float, normalize};

#[doc(inline)]
pub use reader::CardReader;

#[doc(inline)]
pub use error::{Error, Result};
