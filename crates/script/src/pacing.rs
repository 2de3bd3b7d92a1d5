use std::time::Duration;

use rand::Rng;

/// How fast scripted fragments are played back.
///
/// Before every fragment the assistant "types" for `typing_delay` plus a
/// random extra of up to `typing_jitter`. Consecutive fragments of the same
/// script are further separated by `fragment_gap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pacing {
    /// Base typing time before each fragment.
    pub typing_delay: Duration,
    /// Upper bound of the random extra typing time.
    pub typing_jitter: Duration,
    /// Pause between two fragments of one script.
    pub fragment_gap: Duration,
}

impl Pacing {
    /// Pacing without any delays.
    #[inline]
    pub const fn instant() -> Self {
        Self {
            typing_delay: Duration::ZERO,
            typing_jitter: Duration::ZERO,
            fragment_gap: Duration::ZERO,
        }
    }

    /// Sets the base typing time.
    #[inline]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Sets the upper bound of the random extra typing time.
    #[inline]
    pub fn with_typing_jitter(mut self, jitter: Duration) -> Self {
        self.typing_jitter = jitter;
        self
    }

    /// Sets the pause between fragments.
    #[inline]
    pub fn with_fragment_gap(mut self, gap: Duration) -> Self {
        self.fragment_gap = gap;
        self
    }

    /// Picks the typing time for the next fragment.
    pub fn next_typing_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.typing_jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.typing_delay;
        }
        self.typing_delay
            + Duration::from_millis(rng.random_range(0..=jitter_ms))
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(800),
            typing_jitter: Duration::from_millis(400),
            fragment_gap: Duration::from_millis(300),
        }
    }
}
