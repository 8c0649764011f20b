use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::error::ApiError;
use super::models::SearchParams;
use super::util::is_blank;

/// Wait taken before moving on to the results.
#[async_trait]
pub(super) trait Pause: Send + Sync {
    async fn pause(&self) -> Result<(), ApiError>;
}

/// Fixed delay standing in for the latency of a route search.
pub(super) struct SimulatedLatency(pub(super) Duration);

#[async_trait]
impl Pause for SimulatedLatency {
    async fn pause(&self) -> Result<(), ApiError> {
        tokio::time::sleep(self.0).await;
        Ok(())
    }
}

/// The two free-text fields of the search form.
#[derive(Debug, Default, Deserialize)]
pub(super) struct InputForm {
    #[serde(default)]
    pub(super) from: String,
    #[serde(default)]
    pub(super) to: String,
    #[serde(skip)]
    error: Option<String>,
}

impl InputForm {
    pub(super) fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            error: None,
        }
    }

    pub(super) fn can_submit(&self) -> bool {
        !is_blank(&self.from) && !is_blank(&self.to)
    }

    /// Inline message left by the last failed submit.
    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Waits out `pause`, then hands both fields on verbatim.
    ///
    /// A failed pause leaves an inline error and the form stays submittable.
    pub(super) async fn submit(&mut self, pause: &dyn Pause) -> Result<SearchParams, ApiError> {
        if !self.can_submit() {
            return Err(ApiError::EmptyField);
        }

        self.error = None;
        if let Err(e) = pause.pause().await {
            log::error!("Error navigating to results: {e}");
            self.error = Some(ApiError::SearchFailed.to_string());
            return Err(ApiError::SearchFailed);
        }

        Ok(SearchParams {
            from: self.from.clone(),
            to: self.to.clone(),
        })
    }
}
