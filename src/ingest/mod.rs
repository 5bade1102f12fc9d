//! Contact export ingestion
//!
//! Reads per-owner CSV exports, normalizes rows into contact records and counts
//! companies. Missing fields never fail; they become empty strings.

pub mod companies;
pub mod loader;
pub mod record;

pub use companies::{top_companies, CompanyCount};
pub use loader::{load_directory, read_export, IngestError, IngestResult};
pub use record::{full_name, normalize_record, ContactRecord, OwnerExport, RawContact};
