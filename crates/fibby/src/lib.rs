//! A terminal front-end for the Fibby chat engine.
//!
//! The crate includes a CLI for chatting with Fibby in the terminal. The
//! library part holds the pieces the CLI is assembled from, so other
//! front-ends can reuse them.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod command;
mod config;
pub mod render;
mod session;

pub use command::{Command, HELP, UnknownCommand};
pub use config::Config;
pub use session::{has_pending_action, latest_quick_reply, session_builder};

/// Re-exports of [`fibby_core`] crate.
pub mod core {
    pub use fibby_core::*;
}

/// Re-exports of [`fibby_model`] crate.
pub mod model {
    pub use fibby_model::*;
}
