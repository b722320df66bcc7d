//! Access to dataset snapshots: the transactions, jobs, and clients the back
//! office serves over its REST API, captured as a single JSON document.

pub mod json_backend;

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{Client, Job, Transaction};

pub use json_backend::JsonStore;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// One fetched dataset. The reporting pipeline treats it as an immutable
/// input; every report is recomputed from the snapshot plus filter inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    #[serde(default, deserialize_with = "collection")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "collection")]
    pub jobs: Vec<Job>,
    #[serde(default, deserialize_with = "collection")]
    pub clients: Vec<Client>,
}

impl DatasetSnapshot {
    /// Finds a client by numeric id or by case-insensitive name.
    pub fn find_client(&self, key: &str) -> Option<&Client> {
        if let Ok(id) = key.trim().parse::<i64>() {
            if let Some(client) = self.clients.iter().find(|client| client.id == id) {
                return Some(client);
            }
        }
        let needle = key.trim().to_uppercase();
        self.clients
            .iter()
            .find(|client| client.name.trim().to_uppercase() == needle)
    }
}

/// Lists may arrive bare (`[...]`) or paginated (`{"results": [...]}`)
/// depending on how the backend endpoint is configured; accept both.
fn collection<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybePaged<T> {
        Plain(Vec<T>),
        Paged { results: Vec<T> },
    }

    Ok(match MaybePaged::deserialize(deserializer)? {
        MaybePaged::Plain(items) => items,
        MaybePaged::Paged { results } => results,
    })
}

/// Read access to stored snapshots, kept as a trait so tests and future
/// backends can swap the source out.
pub trait SnapshotSource {
    fn load_snapshot(&self, path: &Path) -> Result<DatasetSnapshot>;
}
