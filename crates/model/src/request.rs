use crate::Intent;

/// A request for the assistant's response to one user message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResponseRequest {
    /// The classified intent of the message.
    pub intent: Intent,
    /// The message text as submitted.
    pub text: String,
}
