use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::dto::{
    ApiStatus, FeedbackRequest, FeedbackResponse, PaymentIntentRequest, PaymentIntentResponse,
};

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const PAYMENT_INTENT_PATH: &str = "/api/payment/create-intent";
pub const STATUS_PATH: &str = "/api/status";

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {url} ({status}): {source}")]
    Decode {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
}

/// Transport shared by the feedback and payment flows.
///
/// No timeout and no retries: a call either resolves or surfaces the
/// underlying error to the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn analyze(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, ClientError> {
        let url = self.get_url(ANALYZE_PATH);
        tracing::debug!("Sending feedback to {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }

    pub async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, ClientError> {
        let url = self.get_url(PAYMENT_INTENT_PATH);
        tracing::debug!("Requesting payment intent for amount {} from {}", request.amount, url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }

    pub async fn status(&self) -> Result<ApiStatus, ClientError> {
        let url = self.get_url(STATUS_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }
}

// Status is not checked; a non-2xx body only fails if it does not decode.
async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T, ClientError> {
    let status = response.status();
    tracing::debug!("Upstream response status: {}", status);

    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode {
            url,
            status,
            source,
        })
}
