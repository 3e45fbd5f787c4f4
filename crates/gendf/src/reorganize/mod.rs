//! Reorganisation of assembled sections into archive tables
//!
//! Two layouts are supported:
//!
//! | File type | Layout        | Output per (order, dilution)            |
//! | --------- | ------------- | --------------------------------------- |
//! | MF3       | [dense()]     | `(group, sigma)` for every group        |
//! | MF6       | [sparse()]    | `(group, ijj, njj)` bands + flat values |
//!
//! Both reverse the source group numbering so that group 1 is the lowest
//! energy group, `output = NGN - source + 1`.

mod dense;
mod sparse;

pub use dense::dense;
pub use sparse::sparse;

// standard library
use std::cmp::Reverse;

// crate modules
use crate::core::{Section, Table};
use crate::error::{Error, Result};

/// Reorganise a section according to its file type
///
/// Returns `None` for file types without a table layout.
pub fn reorganize(section: &Section) -> Result<Option<Table>> {
    match section.file_type {
        3 => Ok(Some(Table::Dense(dense(section)?))),
        6 => Ok(Some(Table::Sparse(sparse(section)?))),
        _ => Ok(None),
    }
}

/// Record indices sorted by ascending output group
///
/// Output groups run opposite to source groups, so this is a stable sort by
/// descending source group. Sources list groups in one direction or the
/// other depending on the processing code, the output is independent of it.
fn ascending_order(section: &Section) -> Vec<usize> {
    let mut order: Vec<usize> = (0..section.records.len()).collect();
    order.sort_by_key(|&g| Reverse(section.records[g].group));
    order
}

/// Check there is at least one value per secondary position
fn checked_width(section: &Section) -> Result<usize> {
    match section.width() {
        0 => Err(Error::InvalidSectionGeometry(format!(
            "MF{} MT{} declares {} Legendre orders and {} dilutions",
            section.file_type, section.reaction, section.n_legendre, section.n_dilutions
        ))),
        width => Ok(width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroupRecord;

    #[test]
    fn order_is_independent_of_arrival() {
        let mut section = Section {
            n_groups: 4,
            records: [1, 2, 3, 4]
                .map(|group| GroupRecord {
                    group,
                    ..Default::default()
                })
                .to_vec(),
            ..Default::default()
        };
        assert_eq!(ascending_order(&section), [3, 2, 1, 0]);

        section.records.reverse();
        assert_eq!(ascending_order(&section), [0, 1, 2, 3]);
    }

    #[test]
    fn unsupported_file_types_are_skipped() {
        let section = Section {
            file_type: 5,
            reaction: 18,
            n_legendre: 1,
            n_dilutions: 1,
            ..Default::default()
        };
        assert!(reorganize(&section).unwrap().is_none());
    }

    #[test]
    fn zero_width_is_rejected() {
        let section = Section {
            file_type: 3,
            reaction: 1,
            n_legendre: 0,
            n_dilutions: 1,
            ..Default::default()
        };
        assert!(matches!(
            reorganize(&section),
            Err(Error::InvalidSectionGeometry(_))
        ));
    }
}
