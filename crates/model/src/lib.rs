//! Data model of the Fibby chat engine.
//!
//! This crate holds the transcript types shared by the engine and its
//! front-ends, and the protocol a response source follows to play
//! messages back into a session.
//!
//! Types in this crate don't define any session behavior, that lives in
//! `fibby-core`.

#![deny(missing_docs)]

mod intent;
mod message;
mod provider;
mod request;
mod response;
mod widget;

pub use intent::*;
pub use message::*;
pub use provider::*;
pub use request::*;
pub use response::*;
pub use widget::*;
