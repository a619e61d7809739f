//! The star catalog: unit-sphere directions with ID and magnitude. Parsing
//! catalog text files is an external collaborator's responsibility; this
//! module owns the in-memory representation and the magnitude ingest
//! filter the rest of the core assumes has already run.

pub mod star;

pub use star::{filter_catalog, Star};
