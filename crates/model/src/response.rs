use std::pin::Pin;
use std::task::{self, Poll};

use serde::{Deserialize, Serialize};

use crate::MessageTemplate;

/// A response being played back to the transcript.
pub trait ChatResponse: Send + 'static {
    /// Attempts to pull out the next event from the response.
    ///
    /// # Return value
    ///
    /// There are several possible return values, each indicating a
    /// distinct response state:
    ///
    /// - `Poll::Pending` means that this response is still pacing itself
    ///   before the next event. Implementations will ensure that the
    ///   current task will be notified when the next event may be ready.
    /// - `Poll::Ready(Some(event))` means the response has an event to
    ///   deliver, and may produce further events on subsequent
    ///   `poll_next_event` calls.
    /// - `Poll::Ready(None)` means the response has completed.
    ///
    /// Calling this method after completion should always return `None`.
    fn poll_next_event(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
    ) -> Poll<Option<ResponseEvent>>;
}

impl<R: ChatResponse + ?Sized> ChatResponse for Pin<Box<R>> {
    #[inline]
    fn poll_next_event(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
    ) -> Poll<Option<ResponseEvent>> {
        self.get_mut().as_mut().poll_next_event(cx)
    }
}

/// The event from a response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ResponseEvent {
    /// The assistant started typing the next fragment.
    TypingStarted,
    /// The next fragment is ready to be appended.
    Fragment(MessageTemplate),
    /// All fragments have been delivered.
    Completed,
}
