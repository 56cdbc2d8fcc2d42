use leaddb::domain::company::{Company, NewCompany};
use leaddb::domain::contact::NewContact;
use leaddb::domain::lead_list::{NewLeadList, UpdateLeadList};
use leaddb::domain::saved_search::NewSavedSearch;
use leaddb::domain::types::{
    CompanyId, CompanyName, ContactEmail, LeadListName, PersonName, SavedSearchName, WebUrl,
};
use leaddb::repository::errors::{RepositoryError, RepositoryResult};
use leaddb::repository::{
    CompanyFilter, CompanyListQuery, CompanyReader, CompanyWriter, ContactFilter,
    ContactListQuery, ContactOrder, ContactReader, ContactWriter, LeadListReader, LeadListWriter,
    Pagination, SavedSearchReader, SavedSearchWriter, StatsReader, Transactional,
};
use leaddb::seed::{SeedSummary, seed_sample_data};
use serde_json::json;

#[macro_use]
mod common;

fn company(name: &str, industry: &str) -> NewCompany {
    NewCompany {
        industry: Some(industry.to_string()),
        website: Some(WebUrl::new(format!("https://{}.io", name.to_lowercase())).unwrap()),
        ..NewCompany::named(CompanyName::new(name).unwrap())
    }
}

fn contact(first: &str, last: &str, company: &Company) -> NewContact {
    NewContact {
        company_id: Some(company.id),
        ..NewContact::named(PersonName::new(first).unwrap(), PersonName::new(last).unwrap())
    }
}

#[test]
fn company_crud_and_filters() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let created = repo
        .create_companies(&[company("Acme", "Technology"), company("Globex", "Marketing")])
        .unwrap();
    assert_eq!(created.len(), 2);
    let acme = created[0].clone();

    let filter = CompanyFilter {
        industries: vec!["Marketing".into()],
        ..Default::default()
    };
    let (total, items) = repo
        .list_companies(CompanyListQuery::new(filter).paginate(1, 20))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Globex");

    let search = CompanyFilter {
        search: Some("acm".into()),
        ..Default::default()
    };
    let (total, _) = repo.list_companies(CompanyListQuery::new(search)).unwrap();
    assert_eq!(total, 1);

    let mut changes = NewCompany::from(acme.clone());
    changes.founded_year = Some(2019);
    let updated = repo.update_company(acme.id, &changes).unwrap();
    assert_eq!(updated.founded_year, Some(2019));

    repo.delete_company(acme.id).unwrap();
    assert!(repo.get_company_by_id(acme.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_company(acme.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn contacts_load_company_and_filter() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let acme = repo
        .create_companies(&[company("Acme", "Technology")])
        .unwrap()
        .remove(0);

    let mut ceo = contact("Ann", "Lee", &acme);
    ceo.job_title = Some("CEO".into());
    ceo.email = Some(ContactEmail::new("ann.lee@acme.io").unwrap());
    let ceo = ceo.scored();
    let engineer = NewContact {
        job_title: Some("Engineer".into()),
        ..contact("Bob", "Ray", &acme)
    };

    let created = repo.create_contacts(&[engineer, ceo]).unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(
        created[0].company.as_ref().map(|c| c.contact_count),
        Some(2)
    );

    let by_score = ContactListQuery::new(ContactFilter::default()).order_by(ContactOrder::LeadScore);
    let (_, leads) = repo.list_contacts(by_score).unwrap();
    assert_eq!(leads[0].first_name.as_str(), "Ann");

    let no_email = ContactFilter {
        has_email: Some(false),
        ..Default::default()
    };
    let (total, items) = repo.list_contacts(ContactListQuery::new(no_email)).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].first_name.as_str(), "Bob");

    let by_company = ContactFilter {
        company_industries: vec!["Technology".into()],
        job_titles: vec!["ceo".into(), "founder".into()],
        ..Default::default()
    };
    let (total, _) = repo.list_contacts(ContactListQuery::new(by_company)).unwrap();
    assert_eq!(total, 1);

    assert_eq!(
        repo.list_company_emails(acme.id).unwrap(),
        vec!["ann.lee@acme.io".to_string()]
    );

    let stats = repo.contact_stats().unwrap();
    assert_eq!(stats.total_contacts, 2);
    assert_eq!(stats.contacts_with_email, 1);
    assert_eq!(stats.top_industries[0].label, "Technology");
    assert_eq!(stats.top_industries[0].count, 2);

    // Deleting the company removes its contacts.
    repo.delete_company(acme.id).unwrap();
    assert!(repo.get_contact_by_id(created[0].id).unwrap().is_none());
}

#[test]
fn lead_list_membership() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let acme = repo
        .create_companies(&[company("Acme", "Technology")])
        .unwrap()
        .remove(0);
    let contacts = repo
        .create_contacts(&[contact("Ann", "Lee", &acme), contact("Bob", "Ray", &acme)])
        .unwrap();
    let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();

    let list = repo
        .create_lead_list(&NewLeadList::new(
            LeadListName::new("Prospects").unwrap(),
            None,
            None,
        ))
        .unwrap();
    assert_eq!(list.created_by, "system");

    assert_eq!(repo.add_contacts_to_lead_list(list.id, &ids).unwrap(), 2);
    // Already present members are skipped.
    assert_eq!(repo.add_contacts_to_lead_list(list.id, &ids[..1]).unwrap(), 0);

    let stored = repo.get_lead_list_by_id(list.id).unwrap().unwrap();
    assert_eq!(stored.contact_count, 2);

    let (total, members) = repo
        .list_lead_list_contacts(
            list.id,
            Some(Pagination {
                page: 1,
                per_page: 1,
            }),
        )
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(members.len(), 1);

    let stats = repo.lead_list_stats().unwrap();
    assert_eq!(stats.total_lists, 1);
    assert_eq!(stats.top_lists[0].count, 2);

    assert_eq!(
        repo.remove_contacts_from_lead_list(list.id, &ids[..1]).unwrap(),
        1
    );
    assert_eq!(
        repo.remove_contacts_from_lead_list(list.id, &ids[..1]).unwrap(),
        0
    );

    let renamed = repo
        .update_lead_list(
            list.id,
            &UpdateLeadList {
                name: LeadListName::new("Hot prospects").unwrap(),
                description: Some("Q3".into()),
            },
        )
        .unwrap();
    assert_eq!(renamed.name.as_str(), "Hot prospects");
    assert_eq!(renamed.contact_count, 1);

    let db_stats = repo.database_stats().unwrap();
    assert_eq!(db_stats.campaigns, 1);
    assert_eq!(db_stats.contacts, 2);

    repo.delete_lead_list(list.id).unwrap();
    let (total, _) = repo.list_lead_lists(None).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn saved_search_round_trip() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let filters = json!({"seniority_levels": ["C-Level"]});
    let created = repo
        .create_saved_search(&NewSavedSearch {
            name: SavedSearchName::new("Executives").unwrap(),
            filters: filters.as_object().cloned().unwrap(),
            created_by: "system".into(),
        })
        .unwrap();

    let searches = repo.list_saved_searches().unwrap();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].filters["seniority_levels"], json!(["C-Level"]));

    repo.delete_saved_search(created.id).unwrap();
    assert!(matches!(
        repo.delete_saved_search(created.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn unknown_company_reference_is_rejected() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let orphan = NewContact {
        company_id: Some(CompanyId::new(999_999).unwrap()),
        ..NewContact::named(PersonName::new("A").unwrap(), PersonName::new("B").unwrap())
    };
    assert!(matches!(
        repo.create_contacts(&[orphan]),
        Err(RepositoryError::InvalidReference(_))
    ));
}

#[test]
fn failed_transaction_leaves_nothing_behind() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let result: RepositoryResult<()> = repo.transaction(|tx| {
        let created = tx.create_companies(&[company("Initech", "Software")])?;
        tx.create_contacts(&[contact("Peter", "Gibbons", &created[0])])?;
        Err(RepositoryError::Unexpected("abort".to_string()))
    });

    assert!(result.is_err());
    let stats = repo.database_stats().unwrap();
    assert_eq!(stats.companies, 0);
    assert_eq!(stats.contacts, 0);
}

#[test]
fn sample_data_is_loaded_once() {
    let test_db = test_db!();
    let repo = test_db.repo();

    let summary = seed_sample_data(&repo).unwrap();
    assert_eq!(
        summary,
        Some(SeedSummary {
            companies: 5,
            contacts: 10,
            lead_lists: 3
        })
    );
    assert_eq!(seed_sample_data(&repo).unwrap(), None);

    let (_, lists) = repo.list_lead_lists(None).unwrap();
    let high_value = lists
        .iter()
        .find(|l| l.name.as_str() == "High-Value Prospects")
        .unwrap();
    assert_eq!(high_value.contact_count, 5);
}
