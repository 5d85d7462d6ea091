mod http;
mod myconfig;

pub use self::http::HttpClientConfig;
pub use self::myconfig::{Config, NearpayConfig, ProfileStoreConfig, StatsConfig};
