use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindTransactionsPage {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 500))]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    100
}
