// external crates
use serde::Serialize;

/// Cross section for a single group
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct GroupValue {
    /// Group number, ascending with energy
    pub group: i32,
    /// Group value
    pub sigma: f64,
}

/// Secondary group band covered by one primary group
///
/// The sparse MF6 records only store the contiguous band of secondary groups
/// with non-zero entries. `ijj` is the first secondary group of the band and
/// `njj` the number of groups in it, both in ascending energy numbering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    /// Primary group number, ascending with energy
    pub group: i32,
    /// First secondary group of the band
    pub ijj: i32,
    /// Number of secondary groups in the band
    pub njj: i32,
}

/// Reorganised section, ready for an archive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Table {
    /// One value per group (MF3)
    Dense(DenseTable),
    /// Banded secondary group matrices (MF6)
    Sparse(SparseTable),
}

impl Table {
    /// File type the table was built from
    pub fn file_type(&self) -> u32 {
        match self {
            Table::Dense(_) => 3,
            Table::Sparse(_) => 6,
        }
    }

    /// Reaction type (MT) of the table
    pub fn reaction(&self) -> u32 {
        match self {
            Table::Dense(t) => t.reaction,
            Table::Sparse(t) => t.reaction,
        }
    }
}

/// Per-(Legendre order, dilution) arrays of group values
///
/// ```rust
/// # use xstools_gendf::{reorganize, GroupRecord, Section, Table};
/// let section = Section {
///     file_type: 3,
///     reaction: 1,
///     n_legendre: 1,
///     n_dilutions: 1,
///     n_groups: 2,
///     records: vec![
///         GroupRecord { group: 2, values: vec![20.0], ..Default::default() },
///         GroupRecord { group: 1, values: vec![10.0], ..Default::default() },
///     ],
///     ..Default::default()
/// };
///
/// let Some(Table::Dense(table)) = reorganize(&section).unwrap() else {
///     panic!("expected a dense table");
/// };
///
/// // source group 2 becomes group 1
/// let values = table.get(0, 0).unwrap();
/// assert_eq!(values[0].group, 1);
/// assert_eq!(values[0].sigma, 20.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DenseTable {
    /// Reaction type (MT)
    pub reaction: u32,
    /// Number of Legendre orders
    pub n_legendre: usize,
    /// Number of dilutions
    pub n_dilutions: usize,
    /// Group values for each key, order-major
    pub(crate) columns: Vec<Vec<GroupValue>>,
}

impl DenseTable {
    /// Group values for a Legendre order and dilution
    pub fn get(&self, order: usize, dilution: usize) -> Option<&[GroupValue]> {
        let k = key(order, dilution, self.n_legendre, self.n_dilutions)?;
        self.columns.get(k).map(Vec::as_slice)
    }

    /// Number of group entries in every array
    pub fn len(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or_default()
    }

    /// Are the arrays empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Banded matrices for every Legendre order and dilution
///
/// The bands are identical for every key, the values are flattened in
/// ascending primary group order and then by secondary group within a band.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SparseTable {
    /// Reaction type (MT)
    pub reaction: u32,
    /// Number of Legendre orders
    pub n_legendre: usize,
    /// Number of dilutions
    pub n_dilutions: usize,
    /// Band metadata in ascending primary group order
    pub bands: Vec<Band>,
    /// Flat values for each key, order-major
    pub(crate) values: Vec<Vec<f64>>,
}

impl SparseTable {
    /// Flat values for a Legendre order and dilution
    pub fn values(&self, order: usize, dilution: usize) -> Option<&[f64]> {
        let k = key(order, dilution, self.n_legendre, self.n_dilutions)?;
        self.values.get(k).map(Vec::as_slice)
    }

    /// Total number of secondary positions over all bands
    pub fn n_values(&self) -> usize {
        self.bands.iter().map(|b| b.njj.max(0) as usize).sum()
    }
}

/// Position of a (Legendre order, dilution) key in the column list
pub(crate) fn key(order: usize, dilution: usize, n_legendre: usize, n_dilutions: usize) -> Option<usize> {
    (order < n_legendre && dilution < n_dilutions).then_some(order * n_dilutions + dilution)
}
