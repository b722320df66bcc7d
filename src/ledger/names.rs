use std::collections::BTreeSet;
use std::collections::HashMap;

use super::transaction::Transaction;

/// Fallback used when building the distinct party option list.
pub const UNKNOWN_PARTY: &str = "Unknown";
/// Fallback used when resolving a specific row for the report table.
pub const GENERAL_PARTY: &str = "General Transaction";

/// Canonical form of a party name: surrounding whitespace stripped, uppercased.
/// The normalized string doubles as the filter comparison key, so two raw
/// names differing only in case or padding collapse to one identity.
pub fn normalize_party(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Resolves the display name for a transaction. First non-empty wins:
/// `display_party_name`, then `party_name`, then the client name of the
/// referenced job, then the caller-supplied fallback literal.
pub fn resolve_party(
    txn: &Transaction,
    job_clients: &HashMap<i64, String>,
    fallback: &str,
) -> String {
    let from_job = txn.job.and_then(|job_id| job_clients.get(&job_id));
    let raw = non_empty(txn.display_party_name.as_deref())
        .or_else(|| non_empty(txn.party_name.as_deref()))
        .or_else(|| from_job.map(String::as_str))
        .unwrap_or(fallback);
    normalize_party(raw)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// Builds the sorted, deduplicated party option list for the filter dropdown:
/// every resolved transaction name over the *unfiltered* set, plus every
/// client name present in the job map.
pub fn party_options(
    transactions: &[Transaction],
    job_clients: &HashMap<i64, String>,
) -> Vec<String> {
    let mut names: BTreeSet<String> = transactions
        .iter()
        .map(|txn| resolve_party(txn, job_clients, UNKNOWN_PARTY))
        .collect();
    names.extend(job_clients.values().map(|name| normalize_party(name)));
    names.retain(|name| !name.is_empty());
    names.into_iter().collect()
}
