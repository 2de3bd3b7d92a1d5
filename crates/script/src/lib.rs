//! Canned Fibby scripts and a provider that plays them back like a
//! typing assistant.

#[macro_use]
extern crate tracing;

mod builtin;
mod pacing;
mod table;

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

use fibby_model::{
    ChatResponse, MessageTemplate, ResponseEvent, ResponseProvider,
    ResponseRequest,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{Sleep, sleep};

pub use pacing::Pacing;
pub use table::ScriptTable;

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A script file could not be read.
    Io,
    /// A script file is not a valid script table.
    Parse,
}

/// Error returned when loading scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// About to start typing the fragment at `fragment_idx`.
    Typing,
    /// Typing has finished, the fragment can be delivered.
    Delivering,
    /// All fragments delivered, `Completed` not yet reported.
    Finishing,
    Done,
}

/// A scripted response being played back.
///
/// Every fragment is preceded by a `TypingStarted` event and a typing
/// delay. Consecutive fragments are separated by the fragment gap. After
/// the last fragment a single `Completed` event is produced.
pub struct ScriptedResponse {
    fragments: Vec<MessageTemplate>,
    pacing: Pacing,
    rng: StdRng,
    fragment_idx: usize,
    stage: Stage,
    sleep: Option<Pin<Box<Sleep>>>,
}

impl ScriptedResponse {
    /// Creates a response that plays `fragments` with the given pacing.
    pub fn new(fragments: Vec<MessageTemplate>, pacing: Pacing) -> Self {
        Self::with_rng(fragments, pacing, StdRng::from_rng(&mut rand::rng()))
    }

    fn with_rng(
        fragments: Vec<MessageTemplate>,
        pacing: Pacing,
        rng: StdRng,
    ) -> Self {
        Self {
            fragments,
            pacing,
            rng,
            fragment_idx: 0,
            stage: Stage::Typing,
            sleep: None,
        }
    }

    /// Number of fragments not delivered yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.fragments.len() - self.fragment_idx
    }
}

impl ChatResponse for ScriptedResponse {
    fn poll_next_event(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<ResponseEvent>> {
        let this = self.get_mut();

        if let Some(sleep) = &mut this.sleep {
            ready!(sleep.as_mut().poll(cx));
            this.sleep = None;
        }

        match this.stage {
            Stage::Typing => {
                if this.fragment_idx >= this.fragments.len() {
                    this.stage = Stage::Done;
                    return Poll::Ready(Some(ResponseEvent::Completed));
                }
                let delay = this.pacing.next_typing_delay(&mut this.rng);
                trace!("typing fragment {} for {delay:?}", this.fragment_idx);
                this.sleep = Some(Box::pin(sleep(delay)));
                this.stage = Stage::Delivering;
                Poll::Ready(Some(ResponseEvent::TypingStarted))
            }
            Stage::Delivering => {
                let fragment = this.fragments[this.fragment_idx].clone();
                this.fragment_idx += 1;
                if this.fragment_idx < this.fragments.len() {
                    this.sleep =
                        Some(Box::pin(sleep(this.pacing.fragment_gap)));
                    this.stage = Stage::Typing;
                } else {
                    this.stage = Stage::Finishing;
                }
                Poll::Ready(Some(ResponseEvent::Fragment(fragment)))
            }
            Stage::Finishing => {
                this.stage = Stage::Done;
                Poll::Ready(Some(ResponseEvent::Completed))
            }
            // In case this method is called after completion.
            Stage::Done => Poll::Ready(None),
        }
    }
}

/// Plays back scripts from a [`ScriptTable`].
///
/// Requests are answered with the script of their intent, falling back to
/// the `default` script.
#[derive(Clone, Debug)]
pub struct ScriptedProvider {
    table: Arc<ScriptTable>,
    pacing: Pacing,
    seed: Option<u64>,
}

impl ScriptedProvider {
    /// Creates a provider with default pacing.
    #[inline]
    pub fn new(table: ScriptTable) -> Self {
        Self {
            table: Arc::new(table),
            pacing: Pacing::default(),
            seed: None,
        }
    }

    /// Creates a provider serving the built-in Fibby scripts.
    #[inline]
    pub fn builtin() -> Self {
        Self::new(ScriptTable::builtin())
    }

    /// Sets the playback pacing.
    #[inline]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Makes the typing jitter reproducible.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the script table.
    #[inline]
    pub fn table(&self) -> &ScriptTable {
        &self.table
    }
}

impl ResponseProvider for ScriptedProvider {
    type Response = ScriptedResponse;

    fn respond(&self, req: &ResponseRequest) -> Self::Response {
        let fragments = self.table.script_for(req.intent).to_vec();
        debug!("playing {} fragments for {}", fragments.len(), req.intent);
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        ScriptedResponse::with_rng(fragments, self.pacing, rng)
    }
}
