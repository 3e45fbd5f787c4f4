// Modules under core, split into files for convenience
mod header;
mod section;
mod table;

// Re-exports of the key public data structures
pub use header::Header;
pub use section::{GroupRecord, Section};
pub use table::{Band, DenseTable, GroupValue, SparseTable, Table};
