//! Hierarchical array archive
//!
//! Reorganised tables are written through the [Archive] trait so that the
//! conversion does not depend on any particular storage library. The layout
//! mirrors the GENDF structure:
//!
//! ```text
//! MF3/MT<mt>/P<order>/dil<dilution>           [(group, sigma)]
//! MF5/
//! MF6/MT<mt>/P<order>/dil<dilution>/meta      [(group, ijj, njj)]
//! MF6/MT<mt>/P<order>/dil<dilution>/sigma     [value]
//! ```
//!
//! [MemoryArchive] is provided for tests and anything that only needs the
//! data in memory or as JSON.

mod memory;
mod store;

pub use memory::{Dataset, MemoryArchive, Node};

// crate modules
use crate::core::{Band, GroupValue};
use crate::error::Result;

// external crates
use serde::Serialize;

/// Top level groups created for every conversion
pub const ROOT_GROUPS: [&str; 3] = ["MF3", "MF5", "MF6"];

/// Interface to a hierarchical store of groups and fixed size datasets
///
/// Paths are `/` separated from the archive root, e.g. `MF3/MT1/P0/dil0`.
/// Implementations should fail when creating a node that already exists or
/// whose parent group is missing.
pub trait Archive {
    /// Create a named group
    fn create_group(&mut self, path: &str) -> Result<()>;

    /// Create a dataset of `len` records with the given layout
    fn create_dataset(&mut self, path: &str, layout: Layout, len: usize) -> Result<()>;

    /// Write a record at `index`, negative values counting from the end
    fn write(&mut self, path: &str, index: isize, record: Record) -> Result<()>;
}

/// Record type of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `{group: int, sigma: float}`
    Sigma,
    /// `{group: int, ijj: int, njj: int}`
    Band,
    /// Single float
    Value,
}

/// A single dataset entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Entry of a dense cross section array
    Sigma(GroupValue),
    /// Entry of a band metadata array
    Band(Band),
    /// Entry of a flat value array
    Value(f64),
}

impl Record {
    /// Layout of the dataset this record belongs in
    pub fn layout(&self) -> Layout {
        match self {
            Record::Sigma(_) => Layout::Sigma,
            Record::Band(_) => Layout::Band,
            Record::Value(_) => Layout::Value,
        }
    }

    /// Zero valued record for a layout
    pub fn empty(layout: Layout) -> Self {
        match layout {
            Layout::Sigma => Record::Sigma(GroupValue::default()),
            Layout::Band => Record::Band(Band::default()),
            Layout::Value => Record::Value(0.0),
        }
    }
}

/// Create the top level file groups
pub fn init_archive<A: Archive + ?Sized>(archive: &mut A) -> Result<()> {
    for group in ROOT_GROUPS {
        archive.create_group(group)?;
    }
    Ok(())
}
