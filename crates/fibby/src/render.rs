//! Plain-text rendering of transcript messages.

use fibby_model::{Message, QuickReply, Widget};

const METER_WIDTH: usize = 20;

/// Formats an amount with Indian digit grouping, e.g. `₹1,20,000`.
pub fn format_amount(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("{currency}{digits}");
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = vec![];
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{currency}{},{last_three}", groups.join(","))
}

/// Draws a horizontal meter that is `percent` full.
pub fn meter_bar(percent: u8) -> String {
    let filled = (percent.min(100) as usize * METER_WIDTH).div_ceil(100);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled)
    )
}

/// Renders the lines of a widget.
pub fn render_widget(widget: &Widget) -> Vec<String> {
    match widget {
        Widget::BudgetMeter(meter) => vec![
            format!("📊 {}", meter.label),
            format!(
                "{} {}%",
                meter_bar(meter.percent_used()),
                meter.percent_used()
            ),
            format!(
                "{} of {} used, {} left",
                format_amount(meter.used, &meter.currency),
                format_amount(meter.total, &meter.currency),
                format_amount(meter.remaining(), &meter.currency),
            ),
        ],
        Widget::SpendBreakdown(breakdown) => {
            let mut lines = vec![format!(
                "🧾 {} ({})",
                breakdown.title,
                format_amount(breakdown.total, &breakdown.currency)
            )];
            lines.extend(breakdown.categories.iter().map(|category| {
                format!(
                    "  {} {:<14} {:>10}",
                    category.emoji,
                    category.name,
                    format_amount(category.amount, &breakdown.currency)
                )
            }));
            lines
        }
        Widget::ActionCard(card) => vec![
            format!("⚡ {}", card.title),
            format!("  {}", card.description),
            format!("  [ {} ] (type /confirm)", card.action_label),
        ],
        Widget::ExternalLink(link) => vec![
            format!("🔗 {}", link.title),
            format!("  {}", link.description),
            format!("  {}", link.url),
        ],
        Widget::MerchantLeaderboard(board) => {
            let mut lines = vec![format!("🏆 {}", board.title)];
            lines.extend(board.merchants.iter().enumerate().map(
                |(rank, merchant)| {
                    format!(
                        "  {}. {:<12} {:>10}  {} visits",
                        rank + 1,
                        merchant.name,
                        format_amount(merchant.amount, &board.currency),
                        merchant.visits
                    )
                },
            ));
            lines
        }
    }
}

/// Renders quick replies as numbered chips on one line.
pub fn render_quick_replies(replies: &[QuickReply]) -> Option<String> {
    if replies.is_empty() {
        return None;
    }
    let chips = replies
        .iter()
        .enumerate()
        .map(|(idx, reply)| {
            format!("[{}] {}", idx + 1, reply.submission_text())
        })
        .collect::<Vec<_>>();
    Some(chips.join("  "))
}

/// Renders a whole message: text, then widget, then quick replies.
pub fn render_message(msg: &Message) -> Vec<String> {
    let mut lines = vec![];
    if let Some(content) = &msg.content {
        lines.extend(content.lines().map(ToOwned::to_owned));
    }
    if let Some(widget) = &msg.widget {
        lines.extend(render_widget(widget));
    }
    if let Some(chips) = render_quick_replies(&msg.quick_replies) {
        lines.push(chips);
    }
    lines
}

#[cfg(test)]
mod tests {
    use fibby_model::{BudgetMeter, MessageId, MessageTemplate, Timestamp};

    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0, "₹"), "₹0");
        assert_eq!(format_amount(950, "₹"), "₹950");
        assert_eq!(format_amount(1_200, "₹"), "₹1,200");
        assert_eq!(format_amount(45_000, "₹"), "₹45,000");
        assert_eq!(format_amount(120_000, "₹"), "₹1,20,000");
        assert_eq!(format_amount(12_345_678, "₹"), "₹1,23,45,678");
    }

    #[test]
    fn test_meter_bar() {
        assert_eq!(meter_bar(0), "░".repeat(METER_WIDTH));
        assert_eq!(meter_bar(100), "█".repeat(METER_WIDTH));
        assert_eq!(meter_bar(50).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(meter_bar(72).chars().count(), METER_WIDTH);
    }

    #[test]
    fn test_render_budget_message() {
        let template = MessageTemplate::widget(Widget::BudgetMeter(
            BudgetMeter {
                label: "Monthly budget".to_owned(),
                used: 32_450,
                total: 45_000,
                currency: "₹".to_owned(),
            },
        ))
        .with_quick_replies([
            QuickReply::new("a", "Set a limit", "🛑"),
            QuickReply::new("b", "Later", ""),
        ]);
        let msg = Message::assistant(MessageId(1), template, Timestamp(0));
        let lines = render_message(&msg);

        assert_eq!(lines[0], "📊 Monthly budget");
        assert!(lines[1].ends_with(" 72%"));
        assert_eq!(lines[2], "₹32,450 of ₹45,000 used, ₹12,550 left");
        assert_eq!(lines[3], "[1] Set a limit 🛑  [2] Later");
    }

    #[test]
    fn test_no_chips_without_replies() {
        assert_eq!(render_quick_replies(&[]), None);
    }
}
