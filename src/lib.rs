//! `xstools` is a small toolkit of libraries for turning multigroup nuclear
//! data into array archives
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use xstools_endf as endf;

#[cfg(feature = "gendf")]
#[cfg_attr(docsrs, doc(cfg(feature = "gendf")))]
#[doc(inline)]
pub use xstools_gendf as gendf;
