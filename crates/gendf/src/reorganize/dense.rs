// crate modules
use crate::core::{DenseTable, GroupValue, Section};
use crate::error::{Error, Result};

use super::{ascending_order, checked_width};

// external crates
use log::debug;

/// Reorganise an MF3 section into one group array per key
///
/// The payload of each record is ordered dilution-major, so value `j*L + i`
/// belongs to Legendre order `i` and dilution `j`. Arrays are allocated at
/// their final length and every record written at the position of its
/// output group rank, leaving them in ascending energy order.
pub fn dense(section: &Section) -> Result<DenseTable> {
    let width = checked_width(section)?;
    let (n_legendre, n_dilutions) = (section.n_legendre, section.n_dilutions);
    let n_records = section.records.len();

    let mut columns = vec![vec![GroupValue::default(); n_records]; width];

    for (position, g) in ascending_order(section).into_iter().enumerate() {
        let record = &section.records[g];
        if record.values.len() < width {
            return Err(Error::InvalidSectionGeometry(format!(
                "MF3 MT{} group {} holds {} values, expected {width}",
                section.reaction,
                record.group,
                record.values.len()
            )));
        }

        let group = section.output_group(record.group)?;
        for j in 0..n_dilutions {
            for i in 0..n_legendre {
                columns[i * n_dilutions + j][position] = GroupValue {
                    group,
                    sigma: record.values[j * n_legendre + i],
                };
            }
        }
    }

    debug!("MF3 MT{}: {n_records} groups x {width} arrays", section.reaction);

    Ok(DenseTable {
        reaction: section.reaction,
        n_legendre,
        n_dilutions,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroupRecord;

    fn record(group: u32, values: &[f64]) -> GroupRecord {
        GroupRecord {
            group,
            values: values.to_vec(),
            ..Default::default()
        }
    }

    fn single_value_section(records: Vec<GroupRecord>) -> Section {
        Section {
            file_type: 3,
            reaction: 102,
            n_legendre: 1,
            n_dilutions: 1,
            n_groups: 3,
            records,
            ..Default::default()
        }
    }

    #[test]
    fn groups_ascend_with_energy() {
        let (v1, v2, v3) = (1.5, 2.5, 3.5);
        let section =
            single_value_section(vec![record(3, &[v3]), record(2, &[v2]), record(1, &[v1])]);

        // source group g becomes NGN - g + 1
        let table = dense(&section).unwrap();
        assert_eq!(
            table.get(0, 0).unwrap(),
            [
                GroupValue { group: 1, sigma: v3 },
                GroupValue { group: 2, sigma: v2 },
                GroupValue { group: 3, sigma: v1 },
            ]
        );
    }

    #[test]
    fn arrival_order_does_not_matter() {
        let forward = single_value_section(vec![
            record(1, &[1.0]),
            record(2, &[2.0]),
            record(3, &[3.0]),
        ]);
        let backward = single_value_section(vec![
            record(3, &[3.0]),
            record(2, &[2.0]),
            record(1, &[1.0]),
        ]);
        assert_eq!(dense(&forward).unwrap(), dense(&backward).unwrap());
    }

    #[test]
    fn missing_groups_are_packed() {
        // threshold reactions only list the groups above threshold
        let section = single_value_section(vec![record(1, &[1.0]), record(2, &[2.0])]);
        let table = dense(&section).unwrap();

        let groups: Vec<i32> = table.get(0, 0).unwrap().iter().map(|v| v.group).collect();
        assert_eq!(groups, [2, 3]);
    }

    #[test]
    fn payload_is_dilution_major() {
        // two orders, three dilutions, payload[j*2 + i]
        let section = Section {
            file_type: 3,
            reaction: 2,
            n_legendre: 2,
            n_dilutions: 3,
            n_groups: 2,
            records: vec![
                record(2, &[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]),
                record(1, &[100.0, 101.0, 110.0, 111.0, 120.0, 121.0]),
            ],
            ..Default::default()
        };

        let table = dense(&section).unwrap();
        assert_eq!(table.len(), 2);

        for i in 0..2 {
            for j in 0..3 {
                let values = table.get(i, j).unwrap();
                let expected = (10 * j + i) as f64;
                assert_eq!(values[0], GroupValue { group: 1, sigma: expected });
                assert_eq!(values[1], GroupValue { group: 2, sigma: 100.0 + expected });
            }
        }

        assert!(table.get(2, 0).is_none());
        assert!(table.get(0, 3).is_none());
    }

    #[test]
    fn short_payload_is_rejected() {
        let section = Section {
            file_type: 3,
            reaction: 1,
            n_legendre: 1,
            n_dilutions: 2,
            n_groups: 1,
            records: vec![record(1, &[1.0])],
            ..Default::default()
        };
        assert!(matches!(
            dense(&section),
            Err(Error::InvalidSectionGeometry(_))
        ));
    }

    #[test]
    fn group_count_out_of_range_is_rejected() {
        let mut section = single_value_section(vec![record(1, &[1.0])]);
        section.n_groups = usize::MAX;
        assert!(matches!(
            dense(&section),
            Err(Error::InvalidSectionGeometry(_))
        ));

        // NGN - IG + 1 below i32::MIN
        let mut section = single_value_section(vec![record(u32::MAX, &[1.0])]);
        section.n_groups = 0;
        assert!(matches!(
            dense(&section),
            Err(Error::InvalidSectionGeometry(_))
        ));
    }
}
