// crate modules
use crate::core::{Band, Section, SparseTable};
use crate::error::{Error, Result};

use super::{ascending_order, checked_width};

// external crates
use log::{debug, trace};

/// Reorganise an MF6 section into banded matrices
///
/// Each record only stores the band of secondary groups it couples to, so
/// the number of secondary groups is inferred from the payload length,
/// `njj = len / (NL * NZ)`.
///
/// The metadata pass records `(group, ijj, njj)` for every primary group,
/// where
///
/// ```text
/// group = NGN - IG + 1
/// ijj   = NGN - IG2LO - njj + 2
/// ```
///
/// The value pass then walks the primary groups in ascending energy order
/// and, for every secondary slot of the band, appends one value to the flat
/// array of each (order, dilution) key. Within a slot the payload is ordered
/// dilution-major like MF3.
pub fn sparse(section: &Section) -> Result<SparseTable> {
    let width = checked_width(section)?;
    let (n_legendre, n_dilutions) = (section.n_legendre, section.n_dilutions);
    let order = ascending_order(section);

    // metadata pass
    let mut bands = Vec::with_capacity(order.len());
    for &g in &order {
        let record = &section.records[g];
        let length = record.values.len();
        if length % width != 0 {
            return Err(Error::InvalidSectionGeometry(format!(
                "MF6 MT{} group {} holds {length} values, not a multiple of {width}",
                section.reaction, record.group
            )));
        }

        let min_secondary_group = record.min_secondary_group.ok_or_else(|| {
            Error::InvalidSectionGeometry(format!(
                "MF6 MT{} group {} has no lowest secondary group",
                section.reaction, record.group
            ))
        })?;

        // ijj = NGN - IG2LO - njj + 2, counted down from the first secondary group
        let out_of_range = || {
            Error::InvalidSectionGeometry(format!(
                "MF6 MT{} group {} band of {} secondary groups is out of range",
                section.reaction,
                record.group,
                length / width
            ))
        };
        let njj = i32::try_from(length / width).map_err(|_| out_of_range())?;
        let ijj = section
            .output_group(min_secondary_group)?
            .checked_sub(njj - 1)
            .ok_or_else(out_of_range)?;

        bands.push(Band {
            group: section.output_group(record.group)?,
            ijj,
            njj,
        });
    }

    // value pass, arrays sized up front and filled from a shared cursor
    let total: usize = order.iter().map(|&g| section.records[g].values.len() / width).sum();
    let mut values = vec![vec![0.0; total]; width];
    let mut cursor = 0;

    for &g in &order {
        let record = &section.records[g];
        for slot in record.values.chunks_exact(width) {
            for j in 0..n_dilutions {
                for i in 0..n_legendre {
                    values[i * n_dilutions + j][cursor] = slot[j * n_legendre + i];
                }
            }
            cursor += 1;
        }
    }

    trace!("MF6 MT{} bands = {bands:?}", section.reaction);
    debug!(
        "MF6 MT{}: {} groups, {total} values x {width} arrays",
        section.reaction,
        bands.len()
    );

    Ok(SparseTable {
        reaction: section.reaction,
        n_legendre,
        n_dilutions,
        bands,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroupRecord;

    fn record(group: u32, min_secondary_group: u32, values: &[f64]) -> GroupRecord {
        GroupRecord {
            group,
            min_secondary_group: Some(min_secondary_group),
            values: values.to_vec(),
            ..Default::default()
        }
    }

    fn section(n_legendre: usize, n_dilutions: usize, records: Vec<GroupRecord>) -> Section {
        Section {
            file_type: 6,
            reaction: 2,
            n_legendre,
            n_dilutions,
            n_groups: 3,
            records,
            ..Default::default()
        }
    }

    #[test]
    fn bands_and_values() {
        // arrival by ascending source group, as written by GROUPR
        let table = sparse(&section(
            1,
            1,
            vec![
                record(1, 1, &[11.0]),
                record(2, 1, &[21.0, 22.0]),
                record(3, 2, &[32.0, 33.0]),
            ],
        ))
        .unwrap();

        assert_eq!(
            table.bands,
            [
                Band { group: 1, ijj: 1, njj: 2 },
                Band { group: 2, ijj: 2, njj: 2 },
                Band { group: 3, ijj: 3, njj: 1 },
            ]
        );
        assert_eq!(table.values(0, 0).unwrap(), [32.0, 33.0, 21.0, 22.0, 11.0]);
        assert_eq!(table.n_values(), 5);
    }

    #[test]
    fn two_slots_per_key() {
        // two orders, one dilution, two secondary groups
        let table = sparse(&section(2, 1, vec![record(2, 1, &[1.0, 2.0, 3.0, 4.0])])).unwrap();

        assert_eq!(table.bands[0].njj, 2);
        assert_eq!(table.values(0, 0).unwrap(), [1.0, 3.0]);
        assert_eq!(table.values(1, 0).unwrap(), [2.0, 4.0]);
    }

    #[test]
    fn bands_fit_within_groups() {
        let table = sparse(&section(
            1,
            1,
            vec![
                record(1, 1, &[1.0, 1.0, 1.0]),
                record(2, 2, &[1.0, 1.0]),
                record(3, 3, &[1.0]),
            ],
        ))
        .unwrap();

        for band in &table.bands {
            assert!(band.ijj >= 1);
            assert!(band.ijj + band.njj - 1 <= 3);
        }
    }

    #[test]
    fn empty_band_adds_no_values() {
        let without = sparse(&section(1, 1, vec![record(1, 1, &[1.0, 2.0])])).unwrap();
        let with = sparse(&section(
            1,
            1,
            vec![record(1, 1, &[1.0, 2.0]), record(2, 1, &[])],
        ))
        .unwrap();

        assert_eq!(with.bands.len(), 2);
        assert_eq!(with.bands[0].njj, 0);
        assert_eq!(
            with.values(0, 0).unwrap().len(),
            without.values(0, 0).unwrap().len()
        );
    }

    #[test]
    fn uneven_payload_is_rejected() {
        let result = sparse(&section(2, 1, vec![record(1, 1, &[1.0, 2.0, 3.0])]));
        assert!(matches!(result, Err(Error::InvalidSectionGeometry(_))));
    }

    #[test]
    fn band_start_out_of_range_is_rejected() {
        let bad = section(1, 1, vec![record(1, u32::MAX, &[1.0, 2.0])]);
        assert!(matches!(sparse(&bad), Err(Error::InvalidSectionGeometry(_))));
    }

    #[test]
    fn missing_band_start_is_rejected() {
        let mut bad = section(1, 1, vec![record(1, 1, &[1.0])]);
        bad.records[0].min_secondary_group = None;
        assert!(matches!(sparse(&bad), Err(Error::InvalidSectionGeometry(_))));
    }
}
