// external crates
use serde::Serialize;

/// GENDF file header information
///
/// Global metadata from the leading MF1/MT451 block of the file. Built once
/// by the [Reader](crate::Reader) and read-only from then on.
///
/// For example, take the following header for a two-dilution, two-group
/// library:
///
/// ```text
/// u235 example library
///  9.223500+4 2.330248+2          0          2         -1          19228 1451    1
///  2.936000+2 0.000000+0          2          0          7          09228 1451    2
///  0.000000+0 1.000000+5 1.000000+1 1.000000-5 1.000000+0 2.000000+79228 1451    3
///  0.000000+0                                                       9228 1451    4
///                                                                   9228 0  0    0
/// ```
///
/// This would parse to the [Header] as:
///
/// ```json
/// Header {
///     title: "u235 example library",
///     material: Some(9228),
///     zaid: 92235,
///     awr: 233.0248,
///     n_dilutions: 2,
///     n_title_words: 1,
///     temperature: 293.6,
///     n_neutron_groups: 2,
///     n_gamma_groups: 0,
///     n_words: 7,
///     dilutions: [100000.0, 10.0],
///     energy_bounds: [1e-5, 1.0, 2e7],
///     gamma_bounds: [0.0],
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Free text of the first line
    pub title: String,
    /// Material number from the control card
    pub material: Option<i64>,
    /// Nuclide identifier, 1000*Z + A
    pub zaid: u32,
    /// Atomic weight ratio to the neutron mass
    pub awr: f64,
    /// Number of background dilutions (sigma zero values)
    pub n_dilutions: usize,
    /// Number of title words leading the header list record
    pub n_title_words: usize,
    /// Temperature (K)
    pub temperature: f64,
    /// Number of neutron groups (NGN)
    pub n_neutron_groups: usize,
    /// Number of gamma groups (NGG)
    pub n_gamma_groups: usize,
    /// Length of the header list record (NW)
    pub n_words: usize,
    /// Background dilution values
    pub dilutions: Vec<f64>,
    /// Neutron group boundaries, NGN+1 values
    pub energy_bounds: Vec<f64>,
    /// Gamma group boundaries, up to NGG+1 values
    pub gamma_bounds: Vec<f64>,
}

impl Header {
    /// The final gamma group boundary
    ///
    /// ```rust
    /// # use xstools_gendf::Header;
    /// let header = Header {
    ///     gamma_bounds: vec![1.0e3, 1.0e5, 2.0e7],
    ///     ..Default::default()
    /// };
    /// assert_eq!(header.e_gamma(), Some(2.0e7));
    /// ```
    pub fn e_gamma(&self) -> Option<f64> {
        self.gamma_bounds.last().copied()
    }
}
