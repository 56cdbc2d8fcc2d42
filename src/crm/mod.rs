//! Adapters that shape contacts and companies for CRM imports.

use crate::domain::company::Company;
use crate::domain::contact::Contact;

pub mod zoho;

pub use zoho::ZohoCrm;

/// Column layout and row mapping of one CRM's CSV import format.
pub trait CrmAdapter {
    fn contact_headers(&self) -> &'static [&'static str];
    fn contact_row(&self, contact: &Contact) -> Vec<String>;

    fn company_headers(&self) -> &'static [&'static str];
    fn company_row(&self, company: &Company) -> Vec<String>;

    fn template_headers(&self) -> &'static [&'static str];
    /// Example row shown in the import template.
    fn template_sample(&self) -> Vec<String>;
    fn template_filename(&self) -> &'static str;

    fn export_contacts(&self, contacts: &[Contact]) -> Result<String, csv::Error> {
        write_csv(
            self.contact_headers(),
            contacts.iter().map(|c| self.contact_row(c)),
        )
    }

    fn export_companies(&self, companies: &[Company]) -> Result<String, csv::Error> {
        write_csv(
            self.company_headers(),
            companies.iter().map(|c| self.company_row(c)),
        )
    }

    fn template(&self) -> Result<String, csv::Error> {
        write_csv(self.template_headers(), [self.template_sample()])
    }
}

/// Writes a header row followed by `rows`, CRLF-terminated.
pub fn write_csv<I>(headers: &[&str], rows: I) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_with_commas() {
        let csv = write_csv(
            &["Name", "Note"],
            [vec!["Acme".to_string(), "rockets, mostly".to_string()]],
        )
        .unwrap();
        assert_eq!(csv, "Name,Note\r\nAcme,\"rockets, mostly\"\r\n");
    }

    #[test]
    fn headers_only_when_no_rows() {
        let csv = write_csv(&["A", "B"], Vec::<Vec<String>>::new()).unwrap();
        assert_eq!(csv, "A,B\r\n");
    }
}
