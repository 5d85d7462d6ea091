use serde::{Deserialize, Serialize};

/// Driver profile document from the profile store.
///
/// `transactions_count` feeds the top-drivers leaderboard; older documents
/// may not carry the field yet, so it defaults to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub transactions_count: i64,
}
