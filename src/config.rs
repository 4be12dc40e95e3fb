/// Public endpoint returning exactly one generated profile
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/?results=1";

/// User agent sent with the profile request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for the profile loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// URL the single GET request goes to
    pub endpoint: String,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Builds a config for the given endpoint with the default user agent
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
