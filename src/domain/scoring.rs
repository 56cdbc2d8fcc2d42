//! Lead qualification scoring.
//!
//! The score rewards decision-making titles, revenue-facing departments,
//! seniority and the completeness of the contact channels. Keywords are
//! matched against lower-cased words, so `director` never counts as `cto`.

use crate::domain::contact::NewContact;
use crate::domain::types::LeadScore;

const EMAIL_POINTS: i32 = 10;
const PHONE_POINTS: i32 = 5;
const LINKEDIN_POINTS: i32 = 5;

/// Title tiers, checked top to bottom; the first match wins.
const TITLE_TIERS: &[(&[&str], i32)] = &[
    (&["ceo", "founder", "co-founder", "president"], 30),
    (&["cto", "cfo", "cmo"], 25),
    (&["director", "vp", "vice president"], 20),
    (&["manager", "head"], 15),
    (&["lead", "senior"], 10),
];

const DEPARTMENT_TIERS: &[(&[&str], i32)] = &[
    (&["executive", "c-suite"], 20),
    (&["marketing", "sales"], 15),
    (&["engineering", "product"], 10),
];

const SENIORITY_TIERS: &[(&[&str], i32)] = &[
    (&["executive", "c-level"], 25),
    (&["senior", "director"], 15),
    (&["manager"], 10),
];

/// Inputs that influence the score of a contact.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreProfile<'a> {
    pub job_title: Option<&'a str>,
    pub department: Option<&'a str>,
    pub seniority_level: Option<&'a str>,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
}

impl<'a> From<&'a NewContact> for ScoreProfile<'a> {
    fn from(contact: &'a NewContact) -> Self {
        Self {
            job_title: contact.job_title.as_deref(),
            department: contact.department.as_deref(),
            seniority_level: contact.seniority_level.as_deref(),
            has_email: contact.email.is_some(),
            has_phone: contact.phone.as_deref().is_some_and(|p| !p.trim().is_empty()),
            has_linkedin: contact.linkedin_url.is_some(),
        }
    }
}

/// Lower-cased words of `text`, keeping `-` so `c-level` stays one word.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `keyword` (one or more words) occurs in `words` as a whole-word run.
pub(crate) fn contains_keyword(words: &[String], keyword: &str) -> bool {
    let needle: Vec<&str> = keyword.split(' ').collect();
    words
        .windows(needle.len())
        .any(|window| window.iter().zip(&needle).all(|(w, n)| w == n))
}

fn is_vice_president(words: &[String]) -> bool {
    contains_keyword(words, "vice president")
}

fn tier_points(text: Option<&str>, tiers: &[(&[&str], i32)]) -> i32 {
    let Some(text) = text else {
        return 0;
    };
    let words = words(text);
    tiers
        .iter()
        .find(|(keywords, _)| {
            keywords.iter().any(|k| {
                // "vice president" belongs to the VP tier, not the president tier.
                if *k == "president" && is_vice_president(&words) {
                    return false;
                }
                contains_keyword(&words, k)
            })
        })
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Computes the lead score for the given profile.
pub fn lead_score(profile: &ScoreProfile<'_>) -> LeadScore {
    let mut score = tier_points(profile.job_title, TITLE_TIERS)
        + tier_points(profile.department, DEPARTMENT_TIERS)
        + tier_points(profile.seniority_level, SENIORITY_TIERS);

    if profile.has_email {
        score += EMAIL_POINTS;
    }
    if profile.has_phone {
        score += PHONE_POINTS;
    }
    if profile.has_linkedin {
        score += LINKEDIN_POINTS;
    }

    LeadScore::clamped(score)
}
