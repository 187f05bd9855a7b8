use std::time::Duration;

use anyhow::Context;
use derive_builder::Builder;

pub const DEFAULT_BASE_URL: &str = "http://demo2066522.mockable.io/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_BASE_URL: &str = "RESTAURANT_API_URL";
const ENV_TIMEOUT_SECS: &str = "RESTAURANT_API_TIMEOUT_SECS";

/// Settings for the remote restaurant endpoint.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    #[builder(setter(into), default = "default_user_agent()")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("restaurant-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Read the config from the process environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut builder = ClientConfigBuilder::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            builder.base_url(url);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("invalid {ENV_TIMEOUT_SECS} value {secs:?}"))?;
            builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("fail to build client config")
    }
}
