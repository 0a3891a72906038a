//! doctor11-mkn10
//!
//! MKN-10 (ICD-10) diagnosis code catalog. Loaded once, eagerly, from
//! the bundled dataset, a local JSON file or a remote JSON resource, then
//! read-only: the catalog is a plain owned value that callers pass by
//! reference.

pub mod catalog;
pub mod error;
pub mod source;

pub use catalog::{CatalogEntry, DiagnosisCatalog};
pub use error::DataLoadError;
pub use source::{fetch, load, load_file, CatalogSource, BUNDLED_DATASET, DEFAULT_FETCH_TIMEOUT};
