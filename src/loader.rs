use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::LoaderConfig,
    display::DisplaySurface,
    error::AppError,
    profile::{ProfileRecord, ProfileResponse},
    renderer::ProfileRenderer,
};

/// Fetches a single generated profile and hands it to a renderer
#[derive(Debug, Clone)]
pub struct ProfileLoader {
    client: Client,
    endpoint: String,
}

impl ProfileLoader {
    /// Builds a loader from config. No timeout and no retries are configured.
    pub fn new(config: LoaderConfig) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(config.user_agent).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Issues the request and decodes the response envelope
    pub async fn fetch(&self) -> Result<ProfileResponse, AppError> {
        debug!(url = %self.endpoint, "requesting profile");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        debug!(url = %self.endpoint, %status, "received profile response");

        let payload: ProfileResponse = response.error_for_status()?.json().await?;
        Ok(payload)
    }

    /// Fetches and returns the first profile
    pub async fn fetch_first(&self) -> Result<ProfileRecord, AppError> {
        let payload = self.fetch().await?;
        payload.into_first().inspect_err(|err| {
            if matches!(err, AppError::EmptyResults) {
                warn!(url = %self.endpoint, "profile response had no results");
            }
        })
    }

    /// Fetches a profile and renders the first result
    ///
    /// # Arguments
    /// * `renderer` - Renderer bound to the presentation surface
    pub async fn load<S: DisplaySurface>(
        &self,
        renderer: &mut ProfileRenderer<S>,
    ) -> Result<(), AppError> {
        let record = self.fetch_first().await?;
        renderer.render(&record);
        Ok(())
    }
}
