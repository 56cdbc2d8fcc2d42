//! Domain aggregates exposed by the LeadDB service layer.

pub mod company;
pub mod contact;
pub mod email_patterns;
pub mod lead_list;
pub mod saved_search;
pub mod scoring;
pub mod stats;
pub mod types;
