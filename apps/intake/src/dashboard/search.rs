use crate::models::ApplicationRecord;

/// Newest-first view of `records`, narrowed to those matching `query`.
///
/// The query is trimmed and compared case-insensitively against name, email,
/// role and why. A blank query keeps every record.
pub fn search_newest_first(records: Vec<ApplicationRecord>, query: &str) -> Vec<ApplicationRecord> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<ApplicationRecord> = if needle.is_empty() {
        records
    } else {
        records.into_iter().filter(|r| r.matches(&needle)).collect()
    };
    matched.reverse();
    matched
}
