use serde::{Deserialize, Serialize};

/// One transaction as returned by the Nearpay terminal API.
///
/// `created_at` stays a raw RFC 3339 string on the wire; the upstream is not
/// consistent enough to deserialize it strictly, so parsing happens lazily in
/// the month-window filter and unparseable records are skipped there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionModel {
    pub id: String,
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfoModel {
    pub current: u32,
    pub total: u32,
}

/// One page of the paginated transactions listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPageModel {
    pub transactions: Vec<TransactionModel>,
    pub pages: PageInfoModel,
}
