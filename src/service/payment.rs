use std::sync::Arc;

use crate::{
    client::{ApiClient, ClientError},
    dto::PaymentIntentRequest,
    view::{Notifier, payment_alert},
};

/// Creates a payment intent and hands the client secret to the notifier.
#[derive(Clone)]
pub struct PaymentInitiator {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    email: String,
}

impl PaymentInitiator {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>, email: String) -> Self {
        Self {
            client,
            notifier,
            email,
        }
    }

    pub async fn start_payment(&self, amount: i64) -> Result<(), ClientError> {
        let request = PaymentIntentRequest {
            amount,
            email: self.email.clone(),
        };
        let response = self.client.create_payment_intent(&request).await?;

        tracing::info!("Payment intent created for amount {}", amount);
        self.notifier.notify(payment_alert(&response.client_secret));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::PAYMENT_INTENT_PATH, config::PLACEHOLDER_EMAIL};
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: String) {
            self.messages.lock().unwrap().push(message);
        }
    }

    fn initiator(base_url: String, notifier: Arc<RecordingNotifier>) -> PaymentInitiator {
        PaymentInitiator::new(
            Arc::new(ApiClient::new(base_url, "TU_API_KEY_AQUI")),
            notifier,
            PLACEHOLDER_EMAIL.to_string(),
        )
    }

    #[tokio::test]
    async fn start_payment_notifies_client_secret() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PAYMENT_INTENT_PATH))
            .and(body_json(serde_json::json!({
                "amount": 1000,
                "email": "cliente@ejemplo.com"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "clientSecret": "secret_abc" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Arc::new(RecordingNotifier::default());
        initiator(server.uri(), notifier.clone())
            .start_payment(1000)
            .await
            .unwrap();

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("secret_abc"));
    }

    #[tokio::test]
    async fn negative_amount_is_sent_unchanged() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PAYMENT_INTENT_PATH))
            .and(body_json(serde_json::json!({
                "amount": -5,
                "email": "cliente@ejemplo.com"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "clientSecret": "secret_neg" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Arc::new(RecordingNotifier::default());
        initiator(server.uri(), notifier.clone())
            .start_payment(-5)
            .await
            .unwrap();

        assert!(notifier.messages.lock().unwrap()[0].contains("secret_neg"));
    }

    #[tokio::test]
    async fn failed_call_sends_no_notification() {
        let notifier = Arc::new(RecordingNotifier::default());

        let result = initiator("http://127.0.0.1:1".to_string(), notifier.clone())
            .start_payment(1000)
            .await;

        assert!(result.is_err());
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn response_without_secret_sends_no_notification() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PAYMENT_INTENT_PATH))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "boom" })),
            )
            .mount(&server)
            .await;

        let notifier = Arc::new(RecordingNotifier::default());
        let result = initiator(server.uri(), notifier.clone())
            .start_payment(1000)
            .await;

        assert!(matches!(result, Err(ClientError::Decode { .. })));
        assert!(notifier.messages.lock().unwrap().is_empty());
    }
}
