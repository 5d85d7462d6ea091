use serde::{Deserialize, Serialize};

/// Merchant profile document from the profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}
