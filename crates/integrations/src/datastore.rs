//! Datastore status trait and static implementation.

use async_trait::async_trait;
use common::Setting;
use serde::Serialize;

/// Reported connection state of a datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatastoreState {
    Connected,
    NotConfigured,
}

/// Snapshot of a datastore's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatastoreStatus {
    pub service: &'static str,
    pub status: DatastoreState,
    pub endpoint: Setting,
}

/// Reports on the health of a datastore.
#[async_trait]
pub trait DatastoreStatusProvider: Send + Sync {
    async fn status(&self) -> DatastoreStatus;
}

/// Derives DocumentDB status from its configured endpoint without connecting.
#[derive(Debug, Clone, Default)]
pub struct StaticDatastoreStatus {
    endpoint: Setting,
}

impl StaticDatastoreStatus {
    pub fn new(endpoint: Setting) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl DatastoreStatusProvider for StaticDatastoreStatus {
    async fn status(&self) -> DatastoreStatus {
        let status = if self.endpoint.is_configured() {
            DatastoreState::Connected
        } else {
            DatastoreState::NotConfigured
        };

        DatastoreStatus {
            service: "DocumentDB",
            status,
            endpoint: self.endpoint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_endpoint_reports_not_configured() {
        let status = StaticDatastoreStatus::default().status().await;

        assert_eq!(status.status, DatastoreState::NotConfigured);
        assert_eq!(status.endpoint.as_str(), "not-configured");
    }

    #[tokio::test]
    async fn configured_endpoint_reports_connected() {
        let status = StaticDatastoreStatus::new(Setting::from("mongodb://x"))
            .status()
            .await;

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["service"], "DocumentDB");
        assert_eq!(json["status"], "connected");
        assert_eq!(json["endpoint"], "mongodb://x");
    }

    #[test]
    fn state_serializes_kebab_case() {
        let json = serde_json::to_string(&DatastoreState::NotConfigured).unwrap();
        assert_eq!(json, "\"not-configured\"");
    }
}
