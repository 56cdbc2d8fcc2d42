//! Database models shared across the LeadDB repository.

pub mod company;
pub mod config;
pub mod contact;
pub mod lead_list;
pub mod saved_search;
