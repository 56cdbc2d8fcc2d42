use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::company::NewCompany;
use crate::domain::types::{CompanyName, TypeConstraintError, normalize_optional, sanitize_text};
use crate::forms::{FormError, check_length, clean_values, double_option, optional_url, patch};
use crate::repository::CompanyFilter;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating a company.
pub struct CompanyForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub domain: Option<String>,
    #[validate(length(max = 255))]
    pub website: Option<String>,
    #[validate(length(max = 100))]
    pub industry: Option<String>,
    #[validate(length(max = 50))]
    pub company_size: Option<String>,
    #[validate(length(max = 100))]
    pub location_country: Option<String>,
    #[validate(length(max = 100))]
    pub location_state: Option<String>,
    #[validate(length(max = 100))]
    pub location_city: Option<String>,
    #[validate(range(min = 1800, max = 2100))]
    pub founded_year: Option<i32>,
    #[validate(length(max = 100))]
    pub funding_status: Option<String>,
    #[validate(range(min = 0.0))]
    pub funding_amount: Option<f64>,
    pub technology_stack: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub linkedin_url: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

impl TryFrom<CompanyForm> for NewCompany {
    type Error = FormError;

    fn try_from(form: CompanyForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: CompanyName::new(form.name)?,
            domain: normalize_optional(form.domain),
            website: optional_url(form.website)?,
            industry: normalize_optional(form.industry),
            company_size: normalize_optional(form.company_size),
            location_country: normalize_optional(form.location_country),
            location_state: normalize_optional(form.location_state),
            location_city: normalize_optional(form.location_city),
            founded_year: form.founded_year,
            funding_status: normalize_optional(form.funding_status),
            funding_amount: form.funding_amount,
            technology_stack: normalize_optional(form.technology_stack),
            description: sanitize_text(form.description),
            linkedin_url: optional_url(form.linkedin_url)?,
            phone: normalize_optional(form.phone),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Partial company update; absent fields are left untouched, `null` clears.
pub struct UpdateCompanyForm {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub domain: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub industry: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub company_size: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_country: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_state: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub founded_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub funding_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub funding_amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub technology_stack: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
}

impl UpdateCompanyForm {
    /// Merges the update into the stored company values.
    pub fn apply(self, current: NewCompany) -> Result<NewCompany, FormError> {
        self.validate()?;

        if let Some(Some(year)) = self.founded_year {
            if !(1800..=2100).contains(&year) {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "founded_year {year} is outside 1800..=2100"
                ))
                .into());
            }
        }
        if let Some(Some(amount)) = self.funding_amount {
            if amount < 0.0 {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "funding_amount {amount} is negative"
                ))
                .into());
            }
        }

        let website = match self.website {
            Some(value) => optional_url(value)?,
            None => current.website,
        };
        let linkedin_url = match self.linkedin_url {
            Some(value) => optional_url(value)?,
            None => current.linkedin_url,
        };
        let name = match self.name {
            Some(name) => CompanyName::new(name)?,
            None => current.name,
        };

        let company = NewCompany {
            name,
            domain: normalize_optional(patch(current.domain, self.domain)),
            website,
            industry: normalize_optional(patch(current.industry, self.industry)),
            company_size: normalize_optional(patch(current.company_size, self.company_size)),
            location_country: normalize_optional(patch(
                current.location_country,
                self.location_country,
            )),
            location_state: normalize_optional(patch(current.location_state, self.location_state)),
            location_city: normalize_optional(patch(current.location_city, self.location_city)),
            founded_year: patch(current.founded_year, self.founded_year),
            funding_status: normalize_optional(patch(current.funding_status, self.funding_status)),
            funding_amount: patch(current.funding_amount, self.funding_amount),
            technology_stack: normalize_optional(patch(
                current.technology_stack,
                self.technology_stack,
            )),
            description: match self.description {
                Some(value) => sanitize_text(value),
                None => current.description,
            },
            phone: normalize_optional(patch(current.phone, self.phone)),
            linkedin_url,
        };
        check_columns(&company)?;

        Ok(company)
    }
}

/// Widths of the company columns a merged update can still overflow.
fn check_columns(company: &NewCompany) -> Result<(), FormError> {
    check_length("domain", company.domain.as_deref(), 255)?;
    check_length("industry", company.industry.as_deref(), 100)?;
    check_length("company_size", company.company_size.as_deref(), 50)?;
    check_length("location_country", company.location_country.as_deref(), 100)?;
    check_length("location_state", company.location_state.as_deref(), 100)?;
    check_length("location_city", company.location_city.as_deref(), 100)?;
    check_length("funding_status", company.funding_status.as_deref(), 100)?;
    check_length("phone", company.phone.as_deref(), 50)
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Query string of `GET /api/companies`.
pub struct CompanyQuery {
    pub search: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub funding_status: Option<String>,
    pub founded_after: Option<i32>,
    pub founded_before: Option<i32>,
    pub technology: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl From<&CompanyQuery> for CompanyFilter {
    fn from(query: &CompanyQuery) -> Self {
        Self {
            search: normalize_optional(query.search.clone()),
            industry: normalize_optional(query.industry.clone()),
            company_size: normalize_optional(query.company_size.clone()),
            country: normalize_optional(query.country.clone()),
            state: normalize_optional(query.state.clone()),
            city: normalize_optional(query.city.clone()),
            funding_status: normalize_optional(query.funding_status.clone()),
            founded_after: query.founded_after,
            founded_before: query.founded_before,
            technology: normalize_optional(query.technology.clone()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
/// Multi-value company filters used by search and export.
pub struct CompanySearchFilters {
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub company_sizes: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub funding_statuses: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub founded_year_range: Option<YearRange>,
}

impl From<CompanySearchFilters> for CompanyFilter {
    fn from(filters: CompanySearchFilters) -> Self {
        let range = filters.founded_year_range.unwrap_or_default();
        Self {
            founded_after: range.min,
            founded_before: range.max,
            industries: clean_values(filters.industries),
            company_sizes: clean_values(filters.company_sizes),
            countries: clean_values(filters.countries),
            funding_statuses: clean_values(filters.funding_statuses),
            technologies: clean_values(filters.technologies),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Body of `POST /api/companies/search`.
pub struct CompanySearchForm {
    #[serde(default)]
    pub filters: CompanySearchFilters,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
/// Body of `POST /api/companies/bulk`.
pub struct BulkCompaniesForm {
    #[serde(default)]
    pub companies: Vec<CompanyForm>,
}

impl TryFrom<BulkCompaniesForm> for Vec<NewCompany> {
    type Error = FormError;

    fn try_from(form: BulkCompaniesForm) -> Result<Self, Self::Error> {
        if form.companies.is_empty() {
            return Err(FormError::Missing("companies"));
        }
        form.companies.into_iter().map(NewCompany::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> CompanyForm {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[test]
    fn create_form_trims_and_sanitizes() {
        let mut form = form("  Acme ");
        form.website = Some("acme.io".into());
        form.description = Some("<script>x</script>Rockets".into());
        form.industry = Some("   ".into());

        let company = NewCompany::try_from(form).unwrap();
        assert_eq!(company.name.as_str(), "Acme");
        assert_eq!(company.website.unwrap().as_str(), "https://acme.io");
        assert_eq!(company.description.as_deref(), Some("Rockets"));
        assert_eq!(company.industry, None);
    }

    #[test]
    fn create_form_rejects_out_of_range_year() {
        let mut form = form("Acme");
        form.founded_year = Some(1700);
        assert!(matches!(
            NewCompany::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn create_form_rejects_blank_name() {
        assert!(NewCompany::try_from(form("   ")).is_err());
    }

    #[test]
    fn update_rejects_industry_wider_than_column() {
        let current = NewCompany::named(CompanyName::new("Acme").unwrap());
        let update: UpdateCompanyForm =
            serde_json::from_value(serde_json::json!({ "industry": "i".repeat(101) })).unwrap();

        assert!(matches!(
            update.apply(current),
            Err(FormError::TooLong { field: "industry", max: 100 })
        ));
    }

    #[test]
    fn update_keeps_absent_and_clears_null() {
        let mut current = NewCompany::named(CompanyName::new("Acme").unwrap());
        current.industry = Some("Software".into());
        current.phone = Some("555".into());

        let update: UpdateCompanyForm =
            serde_json::from_str(r#"{"phone": null, "company_size": "10-50"}"#).unwrap();
        let merged = update.apply(current).unwrap();

        assert_eq!(merged.industry.as_deref(), Some("Software"));
        assert_eq!(merged.phone, None);
        assert_eq!(merged.company_size.as_deref(), Some("10-50"));
    }

    #[test]
    fn search_filters_map_year_range() {
        let filters: CompanySearchFilters = serde_json::from_str(
            r#"{"industries": ["Fintech", ""], "founded_year_range": {"min": 2010}}"#,
        )
        .unwrap();
        let filter = CompanyFilter::from(filters);
        assert_eq!(filter.industries, vec!["Fintech".to_string()]);
        assert_eq!(filter.founded_after, Some(2010));
        assert_eq!(filter.founded_before, None);
    }

    #[test]
    fn bulk_requires_companies() {
        let form = BulkCompaniesForm { companies: vec![] };
        assert!(matches!(
            Vec::<NewCompany>::try_from(form),
            Err(FormError::Missing("companies"))
        ));
    }
}
