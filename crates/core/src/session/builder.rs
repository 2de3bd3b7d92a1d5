use std::time::Duration;

use fibby_model::{Message, ResponseProvider};

use super::{Callbacks, ChatSession, DEFAULT_SUGGESTIONS};
use crate::player::ResponseClient;

const DEFAULT_SUGGESTION_DELAY: Duration = Duration::from_millis(500);

/// [`ChatSession`] builder.
pub struct ChatSessionBuilder {
    pub(crate) client: ResponseClient,
    pub(crate) suggestions: Vec<String>,
    pub(crate) suggestion_delay: Duration,
    pub(crate) callbacks: Callbacks,
}

impl ChatSessionBuilder {
    /// Creates a new builder with the specified response provider.
    #[inline]
    pub fn with_provider<P: ResponseProvider + 'static>(provider: P) -> Self {
        Self {
            client: ResponseClient::new(provider),
            suggestions: DEFAULT_SUGGESTIONS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            suggestion_delay: DEFAULT_SUGGESTION_DELAY,
            callbacks: Callbacks::default(),
        }
    }

    /// Replaces the welcome suggestion chips.
    #[inline]
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how long suggestion chips stay hidden after a response ends.
    #[inline]
    pub fn with_suggestion_delay(mut self, delay: Duration) -> Self {
        self.suggestion_delay = delay;
        self
    }

    /// Attaches a callback to be invoked when a message is appended.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_message = Some(Box::new(on_message));
        self
    }

    /// Attaches a callback to be invoked when the typing indicator turns
    /// on or off.
    #[inline]
    pub fn on_typing(
        mut self,
        on_typing: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_typing = Some(Box::new(on_typing));
        self
    }

    /// Attaches a callback to be invoked when the session becomes idle.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Attaches a callback to be invoked when suggestion chips are shown.
    #[inline]
    pub fn on_suggestions(
        mut self,
        on_suggestions: impl Fn(&[String]) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_suggestions = Some(Box::new(on_suggestions));
        self
    }

    /// Builds the session.
    #[inline]
    pub fn build(self) -> ChatSession {
        ChatSession::from_builder(self)
    }
}
