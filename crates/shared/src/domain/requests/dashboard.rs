use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindTopDrivers {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}
