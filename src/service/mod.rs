mod feedback;
mod payment;

pub use feedback::FeedbackSubmitter;
pub use payment::PaymentInitiator;
