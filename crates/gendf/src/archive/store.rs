// crate modules
use crate::core::{DenseTable, SparseTable, Table};
use crate::error::Result;

use super::{Archive, Layout, Record};

// external crates
use log::debug;

impl Table {
    /// Write the table into an archive
    ///
    /// The `MF<file_type>` group must already exist, see
    /// [init_archive()](crate::init_archive).
    pub fn store<A: Archive + ?Sized>(&self, archive: &mut A) -> Result<()> {
        match self {
            Table::Dense(table) => store_dense(table, archive),
            Table::Sparse(table) => store_sparse(table, archive),
        }
    }
}

fn store_dense<A: Archive + ?Sized>(table: &DenseTable, archive: &mut A) -> Result<()> {
    let mt = format!("MF3/MT{}", table.reaction);
    debug!("Writing {mt}");
    archive.create_group(&mt)?;

    for i in 0..table.n_legendre {
        let order = format!("{mt}/P{i}");
        archive.create_group(&order)?;

        for j in 0..table.n_dilutions {
            let path = format!("{order}/dil{j}");
            let values = table.get(i, j).unwrap_or_default();
            archive.create_dataset(&path, Layout::Sigma, values.len())?;

            for (index, value) in values.iter().enumerate() {
                archive.write(&path, index as isize, Record::Sigma(*value))?;
            }
        }
    }

    Ok(())
}

fn store_sparse<A: Archive + ?Sized>(table: &SparseTable, archive: &mut A) -> Result<()> {
    let mt = format!("MF6/MT{}", table.reaction);
    debug!("Writing {mt}");
    archive.create_group(&mt)?;

    for i in 0..table.n_legendre {
        let order = format!("{mt}/P{i}");
        archive.create_group(&order)?;

        for j in 0..table.n_dilutions {
            let dilution = format!("{order}/dil{j}");
            archive.create_group(&dilution)?;

            let meta = format!("{dilution}/meta");
            archive.create_dataset(&meta, Layout::Band, table.bands.len())?;
            for (index, band) in table.bands.iter().enumerate() {
                archive.write(&meta, index as isize, Record::Band(*band))?;
            }

            let sigma = format!("{dilution}/sigma");
            let values = table.values(i, j).unwrap_or_default();
            archive.create_dataset(&sigma, Layout::Value, values.len())?;
            for (index, value) in values.iter().enumerate() {
                archive.write(&sigma, index as isize, Record::Value(*value))?;
            }
        }
    }

    Ok(())
}
