// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

use super::{Archive, Layout, Record};

// external crates
use serde::Serialize;

/// In-memory [Archive] keyed by path
///
/// Datasets are zero filled on creation, as with most array stores, and
/// written by index afterwards.
///
/// ```rust
/// # use xstools_gendf::{Archive, Layout, MemoryArchive, Record};
/// let mut archive = MemoryArchive::new();
/// archive.create_group("MF6").unwrap();
/// archive.create_dataset("MF6/sigma", Layout::Value, 3).unwrap();
///
/// // negative indices count back from the end
/// archive.write("MF6/sigma", -1, Record::Value(2.0)).unwrap();
///
/// let dataset = archive.dataset("MF6/sigma").unwrap();
/// assert_eq!(dataset.records[2], Record::Value(2.0));
/// assert_eq!(dataset.records[0], Record::Value(0.0));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MemoryArchive {
    nodes: BTreeMap<String, Node>,
}

/// Archive entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Node {
    /// Container for other nodes
    Group,
    /// Fixed size array of records
    Dataset(Dataset),
}

/// Fixed size array of a single record layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Record type of every entry
    pub layout: Layout,
    /// Entries in index order
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MemoryArchive {
    /// Create a new empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up any node
    pub fn node(&self, path: &str) -> Option<&Node> {
        self.nodes.get(path)
    }

    /// Look up a dataset, `None` for groups or missing paths
    pub fn dataset(&self, path: &str) -> Option<&Dataset> {
        match self.nodes.get(path) {
            Some(Node::Dataset(dataset)) => Some(dataset),
            _ => None,
        }
    }

    /// Check for a group at `path`
    pub fn is_group(&self, path: &str) -> bool {
        matches!(self.nodes.get(path), Some(Node::Group))
    }

    /// Names of the nodes directly under a group
    pub fn children(&self, path: &str) -> Vec<&str> {
        self.nodes
            .keys()
            .filter_map(|key| {
                let (parent, name) = key.rsplit_once('/').unwrap_or(("", key.as_str()));
                (parent == path).then_some(name)
            })
            .collect()
    }

    /// Total number of groups and datasets
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the archive empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialise every node to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }

    /// Write every node to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.nodes)?;
        Ok(())
    }

    /// Check a new node can be inserted at `path`
    fn check_vacant(&self, path: &str) -> Result<()> {
        if path.is_empty() || self.nodes.contains_key(path) {
            return Err(Error::NodeExists(path.to_string()));
        }

        match path.rsplit_once('/') {
            Some((parent, _)) if !self.is_group(parent) => {
                Err(Error::NodeNotFound(parent.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl Archive for MemoryArchive {
    fn create_group(&mut self, path: &str) -> Result<()> {
        self.check_vacant(path)?;
        self.nodes.insert(path.to_string(), Node::Group);
        Ok(())
    }

    fn create_dataset(&mut self, path: &str, layout: Layout, len: usize) -> Result<()> {
        self.check_vacant(path)?;
        let dataset = Dataset {
            layout,
            records: vec![Record::empty(layout); len],
        };
        self.nodes.insert(path.to_string(), Node::Dataset(dataset));
        Ok(())
    }

    fn write(&mut self, path: &str, index: isize, record: Record) -> Result<()> {
        let Some(Node::Dataset(dataset)) = self.nodes.get_mut(path) else {
            return Err(Error::NodeNotFound(path.to_string()));
        };

        if record.layout() != dataset.layout {
            return Err(Error::LayoutMismatch {
                path: path.to_string(),
                expected: dataset.layout,
                found: record.layout(),
            });
        }

        let len = dataset.records.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&p| p < len)
        };

        match position {
            Some(p) => {
                dataset.records[p] = record;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                path: path.to_string(),
                index,
                len,
            }),
        }
    }
}
