//! Business logic shared by the HTTP routes, generic over the repository traits.

pub mod api;
pub mod companies;
pub mod contacts;
pub mod enrichment;
pub mod errors;
pub mod export;
pub mod lead_lists;
pub mod leads;
pub mod saved_searches;

pub use errors::{ServiceError, ServiceResult};

#[cfg(test)]
pub(crate) mod fixtures;
