use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Widget;

/// Identifies a message within a session.
///
/// Ids are handed out in creation order, so comparing two ids of the same
/// session tells which message came first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "msg:{}", self.0)
    }
}

/// Milliseconds since the UNIX epoch.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Returns the number of milliseconds since the UNIX epoch.
    #[inline]
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Who wrote a message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person chatting with Fibby.
    User,
    /// Fibby.
    Assistant,
}

/// A shortcut the user may tap to send as the next message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickReply {
    /// Identifier of the reply within its message.
    pub id: String,
    /// Text shown on the chip.
    pub label: String,
    /// Emoji shown after the label, may be empty.
    #[serde(default)]
    pub emoji: String,
}

impl QuickReply {
    /// Creates a quick reply.
    #[inline]
    pub fn new<I, L, E>(id: I, label: L, emoji: E) -> Self
    where
        I: Into<String>,
        L: Into<String>,
        E: Into<String>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            emoji: emoji.into(),
        }
    }

    /// Returns the text sent when this reply is selected.
    pub fn submission_text(&self) -> String {
        if self.emoji.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.label, self.emoji)
        }
    }
}

/// A canned assistant message, before it is placed into a transcript.
///
/// Templates carry no id or timestamp; both are assigned when the template
/// is appended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Attached widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
    /// Attached quick replies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl MessageTemplate {
    /// Creates a text-only template.
    #[inline]
    pub fn text<S: Into<String>>(content: S) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Creates a widget-only template.
    #[inline]
    pub fn widget(widget: Widget) -> Self {
        Self {
            widget: Some(widget),
            ..Default::default()
        }
    }

    /// Attaches quick replies.
    #[inline]
    pub fn with_quick_replies(
        mut self,
        quick_replies: impl Into<Vec<QuickReply>>,
    ) -> Self {
        self.quick_replies = quick_replies.into();
        self
    }
}

/// One turn in the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Unique id within the session.
    pub id: MessageId,
    /// Author of the message.
    pub role: Role,
    /// Display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Attached widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
    /// Attached quick replies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
    /// Creation time.
    pub timestamp: Timestamp,
}

impl Message {
    /// Creates a user message.
    pub fn user<S: Into<String>>(
        id: MessageId,
        content: S,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            role: Role::User,
            content: Some(content.into()),
            widget: None,
            quick_replies: vec![],
            timestamp,
        }
    }

    /// Creates an assistant message from a template.
    pub fn assistant(
        id: MessageId,
        template: MessageTemplate,
        timestamp: Timestamp,
    ) -> Self {
        let MessageTemplate {
            content,
            widget,
            quick_replies,
        } = template;
        Self {
            id,
            role: Role::Assistant,
            content,
            widget,
            quick_replies,
            timestamp,
        }
    }
}
