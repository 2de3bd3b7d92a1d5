use std::env;
use std::path::PathBuf;
use std::time::Duration;

use fibby_script::Pacing;

const SCRIPTS_VAR: &str = "FIBBY_SCRIPTS";
const TYPING_DELAY_VAR: &str = "FIBBY_TYPING_DELAY_MS";
const TYPING_JITTER_VAR: &str = "FIBBY_TYPING_JITTER_MS";
const FRAGMENT_GAP_VAR: &str = "FIBBY_FRAGMENT_GAP_MS";
const SUGGESTION_DELAY_VAR: &str = "FIBBY_SUGGESTION_DELAY_MS";

/// Settings of a Fibby session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// JSON file whose scripts override the built-in ones.
    pub scripts: Option<PathBuf>,
    /// Playback pacing.
    pub pacing: Pacing,
    /// How long suggestion chips stay hidden after a response.
    pub suggestion_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripts: None,
            pacing: Pacing::default(),
            suggestion_delay: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Reads the configuration from `FIBBY_*` environment variables.
    ///
    /// Unset variables keep their defaults. Variables that are set but
    /// can't be parsed are reported and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let millis = |key: &str, default: Duration| {
            let Some(value) = lookup(key) else {
                return default;
            };
            match value.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    warn!("ignoring {key}={value:?}: {err}");
                    default
                }
            }
        };

        config.pacing = config
            .pacing
            .with_typing_delay(millis(
                TYPING_DELAY_VAR,
                config.pacing.typing_delay,
            ))
            .with_typing_jitter(millis(
                TYPING_JITTER_VAR,
                config.pacing.typing_jitter,
            ))
            .with_fragment_gap(millis(
                FRAGMENT_GAP_VAR,
                config.pacing.fragment_gap,
            ));
        config.suggestion_delay =
            millis(SUGGESTION_DELAY_VAR, config.suggestion_delay);
        config.scripts = lookup(SCRIPTS_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        config
    }
}
