use std::future::poll_fn;
use std::pin::Pin;
use std::sync::Arc;

use fibby_model::{
    ChatResponse, ResponseEvent, ResponseProvider, ResponseRequest,
};

pub type BoxedResponse = Pin<Box<dyn ChatResponse>>;
type HandlerFn = Arc<dyn Fn(&ResponseRequest) -> BoxedResponse + Send + Sync>;

/// A wrapper around a response provider that provides a type-erased
/// interface for the session.
#[derive(Clone)]
pub struct ResponseClient {
    handler_fn: HandlerFn,
}

impl ResponseClient {
    #[inline]
    pub fn new<P: ResponseProvider + 'static>(provider: P) -> Self {
        // Erase `P` so that the session doesn't need a generic parameter.
        let handler_fn: HandlerFn = Arc::new(move |req: &ResponseRequest| {
            trace!("got a request: {req:?}");
            let response: BoxedResponse = Box::pin(provider.respond(req));
            response
        });
        Self { handler_fn }
    }

    #[inline]
    pub fn respond(&self, req: &ResponseRequest) -> BoxedResponse {
        (self.handler_fn)(req)
    }
}

/// Waits for the next event of a response.
///
/// # Cancel safety
///
/// This method is cancel safe. A pending typing delay resumes where it
/// left off on the next call.
#[inline]
pub async fn next_event(
    response: &mut BoxedResponse,
) -> Option<ResponseEvent> {
    let event = poll_fn(|cx| response.as_mut().poll_next_event(cx)).await;
    trace!("got an event: {event:?}");
    event
}
