//! Core logic of the Fibby chat engine: intent classification, the chat
//! session and response playback.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod classifier;
mod error;
mod player;
mod session;

pub use classifier::classify;
pub use error::Error;
pub use session::{
    ChatSession, ChatSessionBuilder, DEFAULT_SUGGESTIONS, SessionStatus,
    WIDGET_ACTION_TEXT,
};
