use serde::Serialize;

/// Row counts for the main tables.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct DatabaseStats {
    pub companies: usize,
    pub contacts: usize,
    /// Lead lists, reported as campaigns.
    pub campaigns: usize,
}

/// Label with the number of records sharing it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total_contacts: usize,
    pub contacts_with_email: usize,
    pub contacts_with_phone: usize,
    pub top_industries: Vec<LabelCount>,
    pub top_job_titles: Vec<LabelCount>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadListStats {
    pub total_lists: usize,
    pub total_list_contacts: usize,
    pub top_lists: Vec<LabelCount>,
}

/// Keeps the `limit` largest groups, largest first, ties by label.
pub fn top_counts(mut groups: Vec<LabelCount>, limit: usize) -> Vec<LabelCount> {
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    groups.truncate(limit);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc(label: &str, count: usize) -> LabelCount {
        LabelCount {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn top_counts_orders_and_truncates() {
        let groups = vec![lc("b", 2), lc("a", 2), lc("c", 5), lc("d", 1)];
        let top = top_counts(groups, 3);
        assert_eq!(top, vec![lc("c", 5), lc("a", 2), lc("b", 2)]);
    }
}
