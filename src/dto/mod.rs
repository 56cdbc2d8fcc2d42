//! Response shapes returned by the JSON API.

pub mod api;
pub mod company;
pub mod contact;
pub mod enrichment;
pub mod export;
pub mod lead_list;
