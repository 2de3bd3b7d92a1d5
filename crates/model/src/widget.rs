use serde::{Deserialize, Serialize};

/// A rich card attached to an assistant message.
///
/// On the wire a widget is a `{"type": ..., "data": {...}}` object, where
/// `type` is the snake_case name of the variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Widget {
    /// How much of a budget has been used.
    BudgetMeter(BudgetMeter),
    /// Spending split by category.
    SpendBreakdown(SpendBreakdown),
    /// A proposed action the user can confirm.
    ActionCard(ActionCard),
    /// A link to an external page.
    ExternalLink(ExternalLink),
    /// Top merchants by spend.
    MerchantLeaderboard(MerchantLeaderboard),
}

impl Widget {
    /// Returns the wire name of this widget kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::BudgetMeter(_) => "budget_meter",
            Widget::SpendBreakdown(_) => "spend_breakdown",
            Widget::ActionCard(_) => "action_card",
            Widget::ExternalLink(_) => "external_link",
            Widget::MerchantLeaderboard(_) => "merchant_leaderboard",
        }
    }

    /// Returns `true` if the widget has a primary action.
    #[inline]
    pub fn has_action(&self) -> bool {
        matches!(self, Widget::ActionCard(_))
    }
}

/// Payload of [`Widget::BudgetMeter`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetMeter {
    /// What the budget is for.
    pub label: String,
    /// Amount spent so far.
    pub used: u64,
    /// Budget size.
    pub total: u64,
    /// Currency symbol, e.g. `₹`.
    pub currency: String,
}

impl BudgetMeter {
    /// Percentage of the budget used, rounded down and capped at 100.
    pub fn percent_used(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.used.saturating_mul(100) / self.total).min(100) as u8
    }

    /// Amount left before the budget runs out.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.used)
    }
}

/// Payload of [`Widget::SpendBreakdown`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpendBreakdown {
    /// Heading of the card.
    pub title: String,
    /// Total spend across all categories.
    pub total: u64,
    /// Currency symbol.
    pub currency: String,
    /// Categories, largest first.
    pub categories: Vec<SpendCategory>,
}

/// One row of a [`SpendBreakdown`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpendCategory {
    /// Category name.
    pub name: String,
    /// Amount spent in this category.
    pub amount: u64,
    /// Icon shown next to the name.
    pub emoji: String,
}

/// Payload of [`Widget::ActionCard`].
///
/// Pressing the primary action submits `"Confirm"` as the next user
/// message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCard {
    /// Heading of the card.
    pub title: String,
    /// What will happen on confirmation.
    pub description: String,
    /// Label of the primary button.
    pub action_label: String,
}

/// Payload of [`Widget::ExternalLink`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Link text.
    pub title: String,
    /// Short summary of the target page.
    pub description: String,
    /// Target URL.
    pub url: String,
}

/// Payload of [`Widget::MerchantLeaderboard`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantLeaderboard {
    /// Heading of the card.
    pub title: String,
    /// Currency symbol.
    pub currency: String,
    /// Merchants, ranked.
    pub merchants: Vec<MerchantEntry>,
}

/// One row of a [`MerchantLeaderboard`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantEntry {
    /// Merchant name.
    pub name: String,
    /// Amount spent there.
    pub amount: u64,
    /// Number of transactions.
    pub visits: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let widget = Widget::BudgetMeter(BudgetMeter {
            label: "June budget".to_owned(),
            used: 12_400,
            total: 20_000,
            currency: "₹".to_owned(),
        });
        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "budget_meter",
                "data": {
                    "label": "June budget",
                    "used": 12400,
                    "total": 20000,
                    "currency": "₹"
                }
            })
        );
        assert_eq!(value["type"], widget.kind());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let res = serde_json::from_value::<Widget>(json!({
            "type": "pie_chart",
            "data": {}
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_budget_meter_percent() {
        let mut meter = BudgetMeter {
            label: "Food".to_owned(),
            used: 3_100,
            total: 5_000,
            currency: "₹".to_owned(),
        };
        assert_eq!(meter.percent_used(), 62);
        assert_eq!(meter.remaining(), 1_900);

        meter.used = 7_000;
        assert_eq!(meter.percent_used(), 100);
        assert_eq!(meter.remaining(), 0);

        meter.total = 0;
        assert_eq!(meter.percent_used(), 100);
    }
}
