use crate::request::ResponseRequest;
use crate::response::ChatResponse;

/// A type that produces the assistant's responses.
///
/// Once the provider is created, it should behave like a stateless object.
/// Every call to [`respond`](ResponseProvider::respond) yields a fresh
/// response that owns everything it needs to play back.
pub trait ResponseProvider: Send + Sync {
    /// The response type for this provider.
    type Response: ChatResponse;

    /// Creates the response to a request.
    fn respond(&self, req: &ResponseRequest) -> Self::Response;
}
