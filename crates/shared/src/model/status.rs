use serde::{Deserialize, Serialize};

/// Closed status vocabulary for Nearpay transactions.
///
/// The upstream sends free-form strings ("APPROVED", "Declined by issuing
/// bank", ...). Everything funnels through [`TransactionStatus::from_raw`]
/// so the accepted-amount reducer and any UI badge logic read from the same
/// mapping instead of scattering string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Approved,
    Accepted,
    Declined,
    Pending,
    Failed,
    Unknown,
}

impl TransactionStatus {
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "approved" => Self::Approved,
            "accepted" => Self::Accepted,
            "pending" => Self::Pending,
            // Phrasings like "declined by issuing bank" or "failed - timeout"
            // arrive with trailing detail, hence the substring checks.
            _ if normalized.contains("declined") => Self::Declined,
            _ if normalized.contains("failed") => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// True only for statuses that represent a captured payment.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Approved | Self::Accepted)
    }
}
