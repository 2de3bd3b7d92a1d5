//! Maps free text to an [`Intent`].
//!
//! Classification is plain keyword matching. The input is lower-cased and
//! checked against [`RULES`] in order, and the first rule with a matching
//! keyword wins. Overlaps are resolved by rule order, not by how specific
//! a match is: "How is my budget for Goa?" is a [`Intent::Budget`]
//! question even though it mentions Goa.

use fibby_model::Intent;

/// Keyword rules in priority order.
pub const RULES: &[(Intent, &[&str])] = &[
    (Intent::Budget, &["budget", "how is my"]),
    (Intent::Spend, &["spend", "where", "money go"]),
    (Intent::Weekend, &["weekend", "party", "balance low"]),
    (Intent::Limit, &["limit", "set", "cap", "yes"]),
    (Intent::Goa, &["goa", "trip", "afford"]),
    (Intent::Sip, &["sip", "mutual", "investment"]),
    (Intent::Invest, &["stock", "buy", "reliance"]),
    (Intent::ConfirmAction, &["confirm"]),
];

/// Classifies a user message.
///
/// Never fails: text that matches no rule is [`Intent::Default`].
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map_or(Intent::Default, |(intent, _)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(classify("How is my budget?"), Intent::Budget);
        assert_eq!(classify("Where did my money go?"), Intent::Spend);
        assert_eq!(classify("Any weekend plans?"), Intent::Weekend);
        assert_eq!(classify("Set a limit 🛑"), Intent::Limit);
        assert_eq!(classify("Can I afford a Goa trip?"), Intent::Goa);
        assert_eq!(classify("Start a SIP"), Intent::Sip);
        assert_eq!(classify("Should I buy Reliance?"), Intent::Invest);
        assert_eq!(classify("Confirm"), Intent::ConfirmAction);
        assert_eq!(classify("hello there"), Intent::Default);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BUDGET"), Intent::Budget);
        assert_eq!(classify("mUtUaL funds"), Intent::Sip);
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(classify("How is my budget for Goa?"), Intent::Budget);
        assert_eq!(
            classify("How is my budget for the Goa trip?"),
            Intent::Budget
        );
        // "spend" is checked before "limit".
        assert_eq!(classify("Set a spending limit"), Intent::Spend);
        // "yes" belongs to the limit rule, ahead of "confirm".
        assert_eq!(classify("Yes, confirm it"), Intent::Limit);
    }

    #[test]
    fn test_substring_matches() {
        // Keywords match inside longer words.
        assert_eq!(classify("my eyes hurt"), Intent::Limit);
        assert_eq!(classify("gossip"), Intent::Sip);
    }

    #[test]
    fn test_empty_and_odd_input() {
        assert_eq!(classify(""), Intent::Default);
        assert_eq!(classify("   "), Intent::Default);
        assert_eq!(classify("💸💸💸"), Intent::Default);
        assert_eq!(classify(&"a".repeat(10_000)), Intent::Default);
    }

    #[test]
    fn test_every_rule_reachable() {
        for (intent, keywords) in RULES {
            assert_eq!(classify(keywords[0]), *intent, "rule {intent}");
        }
    }
}
