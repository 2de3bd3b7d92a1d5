use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the user is asking Fibby about.
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
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// How the monthly budget is doing.
    Budget,
    /// Where the money went.
    Spend,
    /// Weekend plans against a low balance.
    Weekend,
    /// Setting a spending limit.
    Limit,
    /// Affording the Goa trip.
    Goa,
    /// Systematic investment plans and mutual funds.
    Sip,
    /// Buying stocks.
    Invest,
    /// Confirming a previously proposed action.
    ConfirmAction,
    /// Anything else.
    Default,
}

impl Intent {
    /// All intents, in classification priority order.
    pub const ALL: [Intent; 9] = [
        Intent::Budget,
        Intent::Spend,
        Intent::Weekend,
        Intent::Limit,
        Intent::Goa,
        Intent::Sip,
        Intent::Invest,
        Intent::ConfirmAction,
        Intent::Default,
    ];

    /// Returns the label of this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Budget => "budget",
            Intent::Spend => "spend",
            Intent::Weekend => "weekend",
            Intent::Limit => "limit",
            Intent::Goa => "goa",
            Intent::Sip => "sip",
            Intent::Invest => "invest",
            Intent::ConfirmAction => "confirm_action",
            Intent::Default => "default",
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown intent label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownIntentError(String);

impl Display for UnknownIntentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown intent label: {:?}", self.0)
    }
}

impl Error for UnknownIntentError {}

impl FromStr for Intent {
    type Err = UnknownIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| UnknownIntentError(s.to_owned()))
    }
}
