//! Facade over [`backoffice_core`] used by the workspace integration tests

pub use backoffice_core::*;
