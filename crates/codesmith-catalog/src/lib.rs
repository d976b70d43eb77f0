//! Algorithm spec catalog for Codesmith.
//!
//! A catalog is an ordered JSON array of spec records, loaded once per
//! process (from the embedded resource or an override path) and treated as
//! read-only. Validation turns raw records into typed [`Spec`]s or reports
//! every offending record.

pub mod loader;
pub mod spec;
pub mod validate;

pub use loader::Catalog;
pub use spec::{Spec, SpecExample, SpecInput};
pub use validate::{validate_catalog, validate_record, CatalogError, ValidationError};
