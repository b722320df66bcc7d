use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::names::UNKNOWN_PARTY;

/// Nested client payload as it appears inside a job record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// A shipment job. Depending on the API shape the owning client arrives under
/// `client_details` (expanded serializer) or `client` (plain nested object);
/// [`Job::client_name`] checks both in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub client_details: Option<ClientRef>,
    #[serde(default)]
    pub client: Option<ClientRef>,
}

impl Job {
    pub fn client_name(&self) -> Option<&str> {
        self.client_details
            .as_ref()
            .or(self.client.as_ref())
            .map(|client| client.name.as_str())
    }
}

/// A client as served by the clients endpoint; address and VAT number feed the
/// statement header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
}

/// Builds the job-id to client-name lookup used by party name resolution.
/// Jobs without a usable client name map to the "Unknown" sentinel so a job
/// reference always yields *some* display name.
pub fn client_name_map(jobs: &[Job]) -> HashMap<i64, String> {
    jobs.iter()
        .map(|job| {
            let name = job
                .client_name()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_PARTY);
            (job.id, name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json(body: &str) -> Job {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn client_name_prefers_client_details() {
        let job = job_json(
            r#"{"id":7,"client_details":{"id":1,"name":"Acme"},"client":{"id":2,"name":"Other"}}"#,
        );
        assert_eq!(job.client_name(), Some("Acme"));
    }

    #[test]
    fn client_name_falls_back_to_client_key() {
        let job = job_json(r#"{"id":7,"client":{"name":"Gulf Shipping"}}"#);
        assert_eq!(job.client_name(), Some("Gulf Shipping"));
    }

    #[test]
    fn map_substitutes_unknown_for_nameless_jobs() {
        let jobs = vec![job_json(r#"{"id":3}"#), job_json(r#"{"id":4,"client":{"name":"Beta"}}"#)];
        let map = client_name_map(&jobs);
        assert_eq!(map[&3], UNKNOWN_PARTY);
        assert_eq!(map[&4], "Beta");
    }
}
