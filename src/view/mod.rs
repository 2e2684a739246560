use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tokio::sync::oneshot;

use crate::dto::FeedbackResponse;

/// Region of the page that holds the latest analysis result.
pub trait ResultDisplay: Send + Sync {
    fn replace_contents(&self, markup: String);
}

/// Surfaces a one-off message to whoever started the payment.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: String);
}

/// One page's `#result` element. Submissions sharing it race; the last
/// write wins.
#[derive(Clone, Default)]
pub struct ResultRegion {
    contents: Arc<RwLock<String>>,
}

impl ResultRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultDisplay for ResultRegion {
    fn replace_contents(&self, markup: String) {
        *self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner) = markup;
    }
}

/// Notifier that hands its single message to a waiting receiver.
pub struct AlertSlot {
    sender: Mutex<Option<oneshot::Sender<String>>>,
}

impl AlertSlot {
    pub fn channel() -> (Self, oneshot::Receiver<String>) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                sender: Mutex::new(Some(sender)),
            },
            receiver,
        )
    }
}

impl Notifier for AlertSlot {
    fn notify(&self, message: String) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(sender) => {
                if sender.send(message).is_err() {
                    tracing::warn!("Payment alert dropped, nobody is waiting for it");
                }
            }
            None => tracing::warn!("Payment alert already delivered, ignoring another one"),
        }
    }
}

pub fn render_feedback(response: &FeedbackResponse) -> String {
    format!(
        "\n        <h3>Resultado:</h3>\
         \n        <p>Sentimiento: {}</p>\
         \n        <p>Puntuación: {}</p>\
         \n        <p>Sugerencias: {}</p>\
         \n        <p>Resumen: {}</p>\
         \n    ",
        response.sentiment, response.score, response.suggestions, response.summary
    )
}

pub fn payment_alert(client_secret: &str) -> String {
    format!("Inicia tu pago con Stripe, clientSecret: {client_secret}")
}

pub fn render_page(result: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title>AI Feedback Analyzer</title>
</head>
<body>
    <form id="feedbackForm" method="post" action="/feedback">
        <textarea name="text"></textarea>
        <button type="submit">Analizar</button>
    </form>
    <div id="result">{result}</div>
    <form id="paymentForm" method="post" action="/payment">
        <input type="number" name="amount">
        <button type="submit">Pagar</button>
    </form>
</body>
</html>
"#
    )
}
