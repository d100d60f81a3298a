//! Unauthenticated liveness probe.

use serde::{Deserialize, Serialize};

use crate::client::Scheduler0Client;
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::{Envelope, JsonFormat};

/// Raft statistics of the answering node. The server reports every value
/// as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaftStats {
    pub applied_index: String,
    pub commit_index: String,
    pub fsm_pending: String,
    pub last_contact: String,
    pub last_log_index: String,
    pub last_log_term: String,
    pub last_snapshot_index: String,
    pub last_snapshot_term: String,
    pub latest_configuration: String,
    #[serde(rename = "latest_configuration_index")]
    pub latest_config_index: String,
    pub num_peers: String,
    pub protocol_version: String,
    pub protocol_version_max: String,
    pub protocol_version_min: String,
    pub snapshot_version_max: String,
    pub snapshot_version_min: String,
    pub state: String,
    pub term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthcheckData {
    pub leader_address: String,
    pub leader_id: String,
    pub raft_stats: RaftStats,
}

impl Scheduler0Client {
    /// Probes the server.
    ///
    /// Sent without authentication or account headers, even when the client
    /// has credentials.
    pub async fn healthcheck(&self) -> Result<Envelope<HealthcheckData>> {
        let request = self.build_unauthenticated(RestMethod::Get, "/healthcheck")?;
        self.execute::<JsonFormat<Envelope<HealthcheckData>>>(request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raft_stats_use_snake_case_keys() {
        let data: HealthcheckData = serde_json::from_str(
            r#"{
                "leaderAddress": "10.0.0.1:7070",
                "leaderId": "node-1",
                "raftStats": {"state": "Leader", "num_peers": "2", "latest_configuration_index": "5"}
            }"#,
        )
        .unwrap();
        assert_eq!(data.leader_id, "node-1");
        assert_eq!(data.raft_stats.state, "Leader");
        assert_eq!(data.raft_stats.num_peers, "2");
        assert_eq!(data.raft_stats.latest_config_index, "5");
    }
}
