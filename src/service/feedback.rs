use std::sync::Arc;

use crate::{
    client::{ApiClient, ClientError},
    dto::{FeedbackForm, FeedbackRequest},
    view::{ResultDisplay, render_feedback},
};

/// Sends a submitted feedback form for analysis and writes the result into
/// the display region.
#[derive(Clone)]
pub struct FeedbackSubmitter {
    client: Arc<ApiClient>,
    display: Arc<dyn ResultDisplay>,
}

impl FeedbackSubmitter {
    pub fn new(client: Arc<ApiClient>, display: Arc<dyn ResultDisplay>) -> Self {
        Self { client, display }
    }

    /// On error the display keeps whatever it held before.
    pub async fn submit(&self, form: FeedbackForm) -> Result<(), ClientError> {
        let request = FeedbackRequest { text: form.text };
        let response = self.client.analyze(&request).await?;

        tracing::info!(
            "Feedback analyzed: sentiment '{}', score {}",
            response.sentiment,
            response.score
        );
        self.display.replace_contents(render_feedback(&response));

        Ok(())
    }
}
