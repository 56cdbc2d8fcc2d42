//! Business email address heuristics.
//!
//! Candidate addresses are built from a person's name and a company domain
//! using the conventions most companies follow. Nothing here touches the
//! network: candidates are format-checked only.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use validator::ValidateEmail;

use crate::domain::scoring::{contains_keyword, words};

/// Local-part layouts, in the order candidates are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EmailPattern {
    FirstDotLast,
    FirstLast,
    First,
    FirstDotLastInitial,
    FirstInitialDotLast,
    FirstInitialLast,
    FirstLastInitial,
    LastDotFirst,
    LastFirst,
    Last,
    FirstInitialLastInitial,
}

impl EmailPattern {
    pub const ALL: [EmailPattern; 11] = [
        EmailPattern::FirstDotLast,
        EmailPattern::FirstLast,
        EmailPattern::First,
        EmailPattern::FirstDotLastInitial,
        EmailPattern::FirstInitialDotLast,
        EmailPattern::FirstInitialLast,
        EmailPattern::FirstLastInitial,
        EmailPattern::LastDotFirst,
        EmailPattern::LastFirst,
        EmailPattern::Last,
        EmailPattern::FirstInitialLastInitial,
    ];

    /// Builds the local part from cleaned, non-empty name parts.
    fn local_part(self, first: &str, last: &str) -> String {
        let fi = &first[..1];
        let li = &last[..1];
        match self {
            EmailPattern::FirstDotLast => format!("{first}.{last}"),
            EmailPattern::FirstLast => format!("{first}{last}"),
            EmailPattern::First => first.to_string(),
            EmailPattern::FirstDotLastInitial => format!("{first}.{li}"),
            EmailPattern::FirstInitialDotLast => format!("{fi}.{last}"),
            EmailPattern::FirstInitialLast => format!("{fi}{last}"),
            EmailPattern::FirstLastInitial => format!("{first}{li}"),
            EmailPattern::LastDotFirst => format!("{last}.{first}"),
            EmailPattern::LastFirst => format!("{last}{first}"),
            EmailPattern::Last => last.to_string(),
            EmailPattern::FirstInitialLastInitial => format!("{fi}{li}"),
        }
    }
}

impl Display for EmailPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let template = match self {
            EmailPattern::FirstDotLast => "{first}.{last}",
            EmailPattern::FirstLast => "{first}{last}",
            EmailPattern::First => "{first}",
            EmailPattern::FirstDotLastInitial => "{first}.{last_initial}",
            EmailPattern::FirstInitialDotLast => "{first_initial}.{last}",
            EmailPattern::FirstInitialLast => "{first_initial}{last}",
            EmailPattern::FirstLastInitial => "{first}{last_initial}",
            EmailPattern::LastDotFirst => "{last}.{first}",
            EmailPattern::LastFirst => "{last}{first}",
            EmailPattern::Last => "{last}",
            EmailPattern::FirstInitialLastInitial => "{first_initial}{last_initial}",
        };
        write!(f, "{template}@{{domain}}")
    }
}

/// Keeps ASCII letters only, lower-cased.
pub fn clean_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Strips the scheme, a leading `www.` and any path.
pub fn clean_domain(domain: &str) -> String {
    let lowered = domain.trim().to_lowercase();
    let domain = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(lowered.as_str());
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    domain.split('/').next().unwrap_or_default().to_string()
}

/// Mail domain for a website url, dropping `www`/`mail`/`email` subdomains.
pub fn extract_domain_from_website(website: &str) -> String {
    let domain = clean_domain(website);
    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() >= 3 && matches!(parts[0], "www" | "mail" | "email") {
        parts[1..].join(".")
    } else {
        domain
    }
}

/// Syntactic check requiring a dotted domain with an alphabetic TLD.
pub fn is_valid_email_format(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    email.validate_email() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Rough 0..=30 plausibility score of an address' local part.
pub fn pattern_score(email: &str) -> i32 {
    let local = email.split('@').next().unwrap_or_default();
    let mut score = 0;

    if local.contains('.') {
        score += 15;
    }
    if local.len() >= 4 {
        score += 10;
    }
    let longest_digit_run = local
        .split(|c: char| !c.is_ascii_digit())
        .map(str::len)
        .max()
        .unwrap_or(0);
    if longest_digit_run >= 3 {
        score -= 20;
    }
    if matches!(local, "info" | "contact" | "admin" | "support") {
        score += 5;
    }

    score.clamp(0, 30)
}

/// Candidate addresses for a person at `domain`.
///
/// The `known` pattern, when given, is placed first. Duplicates and malformed
/// results are dropped; the list is empty when a name or domain cleans to
/// nothing.
pub fn generate_email_candidates(
    first_name: &str,
    last_name: &str,
    domain: &str,
    known: Option<EmailPattern>,
) -> Vec<String> {
    let first = clean_name(first_name);
    let last = clean_name(last_name);
    let domain = clean_domain(domain);

    if first.is_empty() || last.is_empty() || domain.is_empty() {
        return vec![];
    }

    let mut emails: Vec<String> = Vec::new();
    for pattern in known.into_iter().chain(EmailPattern::ALL) {
        let email = format!("{}@{domain}", pattern.local_part(&first, &last));
        if is_valid_email_format(&email) && !emails.contains(&email) {
            emails.push(email);
        }
    }
    emails
}

fn classify_local_part(local: &str) -> Option<EmailPattern> {
    match local.split_once('.') {
        Some((a, b)) if !b.contains('.') => {
            if a.len() > 1 && b.len() > 1 {
                Some(EmailPattern::FirstDotLast)
            } else if a.len() == 1 {
                Some(EmailPattern::FirstInitialDotLast)
            } else if b.len() == 1 {
                Some(EmailPattern::FirstDotLastInitial)
            } else {
                None
            }
        }
        Some(_) => None,
        None if local.len() > 3 => Some(EmailPattern::FirstLast),
        None => None,
    }
}

/// Most common pattern among a company's known addresses.
///
/// Ties go to the pattern seen first.
pub fn detect_company_pattern<'a, I>(emails: I) -> Option<EmailPattern>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(EmailPattern, usize)> = Vec::new();

    for email in emails {
        let Some((local, _)) = email.split_once('@') else {
            continue;
        };
        let Some(pattern) = classify_local_part(local) else {
            continue;
        };
        match counts.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, n)) => *n += 1,
            None => counts.push((pattern, 1)),
        }
    }

    let mut best: Option<(EmailPattern, usize)> = None;
    for (pattern, n) in counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((pattern, n));
        }
    }
    best.map(|(pattern, _)| pattern)
}

fn title_matches(title: &str, keywords: &[&str]) -> bool {
    let words = words(title);
    keywords.iter().any(|k| contains_keyword(&words, k))
}

/// Department inferred from a job title.
pub fn department_from_title(job_title: &str) -> &'static str {
    if title_matches(job_title, &["ceo", "president", "founder", "co-founder"]) {
        "Executive"
    } else if title_matches(job_title, &["cto", "engineering", "technical", "developer"]) {
        "Engineering"
    } else if title_matches(job_title, &["sales", "business development"]) {
        "Sales"
    } else if title_matches(job_title, &["marketing", "growth", "brand"]) {
        "Marketing"
    } else if title_matches(job_title, &["finance", "accounting", "cfo"]) {
        "Finance"
    } else {
        "Other"
    }
}

/// Seniority level inferred from a job title.
pub fn seniority_from_title(job_title: &str) -> &'static str {
    if title_matches(job_title, &["ceo", "cto", "cfo", "coo", "cmo", "chief"]) {
        "C-Level"
    } else if title_matches(job_title, &["vp", "vice president"]) {
        "VP"
    } else if title_matches(job_title, &["director", "head"]) {
        "Director"
    } else if title_matches(job_title, &["manager", "lead"]) {
        "Manager"
    } else {
        "Individual Contributor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_pattern_order() {
        let emails = generate_email_candidates("Alex", "Chen", "https://www.techflow.io/about", None);
        assert_eq!(emails.len(), 11);
        assert_eq!(emails[0], "alex.chen@techflow.io");
        assert_eq!(emails[1], "alexchen@techflow.io");
        assert_eq!(emails[2], "alex@techflow.io");
        assert_eq!(emails[4], "a.chen@techflow.io");
        assert_eq!(emails[10], "ac@techflow.io");
    }

    #[test]
    fn known_pattern_comes_first_without_duplicates() {
        let emails = generate_email_candidates(
            "Maria",
            "Rodriguez",
            "datavault.com",
            Some(EmailPattern::FirstInitialLast),
        );
        assert_eq!(emails[0], "mrodriguez@datavault.com");
        assert_eq!(emails.len(), 11);
        assert_eq!(
            emails.iter().filter(|e| *e == "mrodriguez@datavault.com").count(),
            1
        );
    }

    #[test]
    fn names_are_cleaned() {
        assert_eq!(clean_name(" O'Brien-Smith "), "obriensmith");
        assert!(generate_email_candidates("123", "Chen", "techflow.io", None).is_empty());
        assert!(generate_email_candidates("Alex", "Chen", "", None).is_empty());
    }

    #[test]
    fn website_domains() {
        assert_eq!(clean_domain("HTTP://www.Example.com/path"), "example.com");
        assert_eq!(extract_domain_from_website("https://mail.example.co.uk"), "example.co.uk");
        assert_eq!(extract_domain_from_website("https://example.com"), "example.com");
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email_format("john.doe@example.com"));
        assert!(!is_valid_email_format("john@localhost"));
        assert!(!is_valid_email_format("john@example.c0m"));
        assert!(!is_valid_email_format("not an email"));
    }

    #[test]
    fn pattern_scores() {
        assert_eq!(pattern_score("alex.chen@techflow.io"), 25);
        assert_eq!(pattern_score("info@techflow.io"), 15);
        assert_eq!(pattern_score("ab@techflow.io"), 0);
        assert_eq!(pattern_score("user12345@techflow.io"), 0);
    }

    #[test]
    fn company_pattern_detection() {
        let emails = [
            "a.smith@acme.com",
            "john.doe@acme.com",
            "b.jones@acme.com",
            "bad-address",
        ];
        assert_eq!(
            detect_company_pattern(emails),
            Some(EmailPattern::FirstInitialDotLast)
        );
        assert_eq!(
            detect_company_pattern(["johndoe@acme.com", "jane.roe@acme.com"]),
            Some(EmailPattern::FirstLast)
        );
        assert_eq!(detect_company_pattern(["jo@acme.com"]), None);
    }

    #[test]
    fn title_inference() {
        assert_eq!(department_from_title("Founder & CEO"), "Executive");
        assert_eq!(department_from_title("Senior Developer"), "Engineering");
        assert_eq!(department_from_title("Business Development Rep"), "Sales");
        assert_eq!(department_from_title("Office Administrator"), "Other");
        assert_eq!(seniority_from_title("Chief Revenue Officer"), "C-Level");
        assert_eq!(seniority_from_title("Vice President of Sales"), "VP");
        assert_eq!(seniority_from_title("Head of Product"), "Director");
        assert_eq!(seniority_from_title("Team Lead"), "Manager");
        assert_eq!(seniority_from_title("Analyst"), "Individual Contributor");
    }

    #[test]
    fn pattern_display() {
        assert_eq!(EmailPattern::FirstDotLast.to_string(), "{first}.{last}@{domain}");
    }
}
