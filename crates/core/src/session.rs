mod builder;
mod clock;

use std::time::Duration;

use fibby_model::{
    Intent, Message, MessageId, MessageTemplate, QuickReply, ResponseEvent,
    ResponseRequest,
};
use tokio::time::sleep;

use crate::classifier::classify;
use crate::error::Error;
use crate::player::{BoxedResponse, ResponseClient, next_event};
pub use builder::ChatSessionBuilder;
use clock::Clock;

/// Suggestion chips shown in a fresh chat.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "How is my budget?",
    "Where did my money go?",
    "Can I afford a Goa trip?",
    "Start a SIP",
];

/// The text submitted when a widget's primary action is pressed.
pub const WIDGET_ACTION_TEXT: &str = "Confirm";

/// Whether the assistant is responding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Waiting for the user. New messages are accepted.
    #[default]
    Idle,
    /// Playing back a response. New messages are rejected.
    Playing,
}

#[derive(Default)]
pub(crate) struct Callbacks {
    on_message: Option<Box<dyn Fn(&Message) + Send + Sync>>,
    on_typing: Option<Box<dyn Fn(bool) + Send + Sync>>,
    on_idle: Option<Box<dyn Fn() + Send + Sync>>,
    on_suggestions: Option<Box<dyn Fn(&[String]) + Send + Sync>>,
}

/// A chat with Fibby: the transcript and the state of the assistant.
///
/// The session is the only writer of its transcript. Messages are appended
/// by the user (via [`send_message`](Self::send_message) and its variants)
/// and by the response playback that follows each user message. They are
/// never edited or reordered, and only [`clear`](Self::clear) removes
/// them.
///
/// A response plays to completion inside the `send_message` call that
/// triggered it. There is no way to interrupt it; if the future is dropped
/// halfway, the session stays [`SessionStatus::Playing`] and rejects input
/// until it is cleared. If it is dropped while waiting for the suggestion
/// delay, the session is already [`SessionStatus::Idle`] and accepts input,
/// but the suggestion chips stay hidden until the next response finishes or
/// the session is cleared.
pub struct ChatSession {
    client: ResponseClient,
    messages: Vec<Message>,
    status: SessionStatus,
    typing: bool,
    suggestions: Vec<String>,
    suggestions_visible: bool,
    suggestion_delay: Duration,
    next_id: u64,
    clock: Clock,
    callbacks: Callbacks,
}

impl ChatSession {
    fn from_builder(builder: ChatSessionBuilder) -> Self {
        let ChatSessionBuilder {
            client,
            suggestions,
            suggestion_delay,
            callbacks,
        } = builder;

        Self {
            client,
            messages: vec![],
            status: SessionStatus::Idle,
            typing: false,
            suggestions,
            suggestions_visible: true,
            suggestion_delay,
            next_id: 1,
            clock: Clock::new(),
            callbacks,
        }
    }

    /// Returns the transcript, oldest message first.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the current status.
    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns `true` while a response is playing and input is disabled.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Playing
    }

    /// Returns `true` while the typing indicator is on.
    #[inline]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Returns the suggestion chips, or `None` while they are hidden.
    #[inline]
    pub fn visible_suggestions(&self) -> Option<&[String]> {
        self.suggestions_visible.then_some(self.suggestions.as_slice())
    }

    /// Returns `true` if nothing has been said yet.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sends a user message and plays back the assistant's response.
    ///
    /// Returns the intent the message was classified as once the response
    /// has been fully appended and the suggestion chips are back.
    pub async fn send_message(
        &mut self,
        text: &str,
    ) -> Result<Intent, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.status == SessionStatus::Playing {
            warn!("rejecting {text:?}, a response is still playing");
            return Err(Error::Busy);
        }

        self.status = SessionStatus::Playing;
        self.suggestions_visible = false;
        debug!("started playing");

        let msg = Message::user(self.next_id(), text, self.clock.stamp());
        self.push(msg);

        let intent = classify(text);
        debug!("classified {text:?} as {intent}");
        let response = self.client.respond(&ResponseRequest {
            intent,
            text: text.to_owned(),
        });
        self.play(response).await;

        self.status = SessionStatus::Idle;
        debug!("back to idle");
        if let Some(on_idle) = &self.callbacks.on_idle {
            on_idle();
        }

        // Chips stay hidden for the suggestion delay after playback.
        sleep(self.suggestion_delay).await;
        self.suggestions_visible = true;
        if let Some(on_suggestions) = &self.callbacks.on_suggestions {
            on_suggestions(&self.suggestions);
        }

        Ok(intent)
    }

    /// Sends the text of a quick reply.
    #[inline]
    pub async fn select_quick_reply(
        &mut self,
        reply: &QuickReply,
    ) -> Result<Intent, Error> {
        self.send_message(&reply.submission_text()).await
    }

    /// Presses the primary action of a widget, which sends
    /// [`WIDGET_ACTION_TEXT`].
    #[inline]
    pub async fn press_widget_action(&mut self) -> Result<Intent, Error> {
        self.send_message(WIDGET_ACTION_TEXT).await
    }

    /// Sends the suggestion chip at `index`.
    pub async fn select_suggestion(
        &mut self,
        index: usize,
    ) -> Result<Intent, Error> {
        let Some(suggestion) = self.suggestions.get(index).cloned() else {
            return Err(Error::UnknownSuggestion(index));
        };
        self.send_message(&suggestion).await
    }

    /// Removes all messages and returns to the fresh chat state.
    pub fn clear(&mut self) {
        debug!("clearing {} messages", self.messages.len());
        self.messages.clear();
        self.status = SessionStatus::Idle;
        self.set_typing(false);
        self.suggestions_visible = true;
    }

    /// Serializes the transcript as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.messages)
    }

    async fn play(&mut self, mut response: BoxedResponse) {
        while let Some(event) = next_event(&mut response).await {
            match event {
                ResponseEvent::TypingStarted => self.set_typing(true),
                ResponseEvent::Fragment(template) => {
                    self.set_typing(false);
                    self.push_assistant(template);
                }
                ResponseEvent::Completed => break,
            }
        }
        self.set_typing(false);
    }

    fn push_assistant(&mut self, template: MessageTemplate) {
        // Templates are shared by every playback of a script, so ids and
        // timestamps are only assigned here.
        let msg =
            Message::assistant(self.next_id(), template, self.clock.stamp());
        self.push(msg);
    }

    fn push(&mut self, msg: Message) {
        trace!("appending {} ({:?})", msg.id, msg.role);
        self.messages.push(msg);
        if let (Some(on_message), Some(msg)) =
            (&self.callbacks.on_message, self.messages.last())
        {
            on_message(msg);
        }
    }

    fn set_typing(&mut self, typing: bool) {
        if self.typing == typing {
            return;
        }
        self.typing = typing;
        if let Some(on_typing) = &self.callbacks.on_typing {
            on_typing(typing);
        }
    }

    #[inline]
    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
