// crate modules
use crate::error::{Error, Result};

// external crates
use serde::Serialize;

/// One assembled MF/MT section of group-wise data
///
/// A section is held in memory only long enough to be reorganised into a
/// [Table](crate::Table) and written to an archive.
///
/// Records are kept in the order they appear in the file, which is by
/// decreasing energy. Group numbers are left exactly as read and only
/// reversed on reorganisation.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Material number
    pub material: Option<i64>,
    /// File type (MF), selects the reorganisation layout
    pub file_type: u32,
    /// Reaction type (MT)
    pub reaction: u32,
    /// Nuclide identifier from the section control card
    pub zaid: u32,
    /// Temperature from the first list record (K)
    pub temperature: f64,
    /// Number of Legendre orders (NL)
    pub n_legendre: usize,
    /// Number of background dilutions (NZ)
    pub n_dilutions: usize,
    /// Number of neutron groups (NGN)
    pub n_groups: usize,
    /// Group records, flux words already removed
    pub records: Vec<GroupRecord>,
}

impl Section {
    /// Number of values per secondary group position (NL * NZ)
    pub fn width(&self) -> usize {
        self.n_legendre * self.n_dilutions
    }

    /// Re-index a source group so that group 1 is the lowest energy
    ///
    /// ```rust
    /// # use xstools_gendf::Section;
    /// let section = Section {
    ///     n_groups: 3,
    ///     ..Default::default()
    /// };
    /// assert_eq!(section.output_group(3).unwrap(), 1);
    /// assert_eq!(section.output_group(1).unwrap(), 3);
    /// ```
    pub fn output_group(&self, group: u32) -> Result<i32> {
        i64::try_from(self.n_groups)
            .ok()
            .and_then(|n_groups| i32::try_from(n_groups - i64::from(group) + 1).ok())
            .ok_or_else(|| {
                Error::InvalidSectionGeometry(format!(
                    "group {group} of {} cannot be renumbered",
                    self.n_groups
                ))
            })
    }
}

/// Data for one primary group of a section
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct GroupRecord {
    /// Source group index (IG), 1-based
    pub group: u32,
    /// Lowest secondary group of the stored band (IG2LO), MF6 only
    pub min_secondary_group: Option<u32>,
    /// Payload values following the flux words
    pub values: Vec<f64>,
}
