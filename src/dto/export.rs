//! Export payloads; the CSV travels inline as `csv_data`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactExport {
    pub csv_data: String,
    pub filename: String,
    pub total_contacts: usize,
    pub export_timestamp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListExport {
    pub csv_data: String,
    pub filename: String,
    pub list_name: String,
    pub total_contacts: usize,
    pub export_timestamp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanyExport {
    pub csv_data: String,
    pub filename: String,
    pub total_companies: usize,
    pub export_timestamp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateExport {
    pub csv_data: String,
    pub filename: String,
    pub description: String,
}
