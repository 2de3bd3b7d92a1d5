use fibby_model::{
    ActionCard, BudgetMeter, ExternalLink, Intent, MerchantEntry,
    MerchantLeaderboard, MessageTemplate, QuickReply, SpendBreakdown,
    SpendCategory, Widget,
};

use crate::ScriptTable;

const RUPEE: &str = "₹";

impl ScriptTable {
    /// The scripts Fibby ships with, one for every [`Intent`].
    pub fn builtin() -> Self {
        ScriptTable::new()
            .with_script(Intent::Budget, budget())
            .with_script(Intent::Spend, spend())
            .with_script(Intent::Weekend, weekend())
            .with_script(Intent::Limit, limit())
            .with_script(Intent::Goa, goa())
            .with_script(Intent::Sip, sip())
            .with_script(Intent::Invest, invest())
            .with_script(Intent::ConfirmAction, confirm_action())
            .with_script(Intent::Default, fallback())
    }
}

fn budget() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Here's how your monthly budget is looking 👇"),
        MessageTemplate::widget(Widget::BudgetMeter(BudgetMeter {
            label: "Monthly budget".to_owned(),
            used: 32_450,
            total: 45_000,
            currency: RUPEE.to_owned(),
        })),
        MessageTemplate::text(
            "You've used 72% of your budget with 9 days to go. Food \
             delivery is running hot this month.",
        )
        .with_quick_replies([
            QuickReply::new("set_limit", "Set a limit", "🛑"),
            QuickReply::new("where", "Where did it go?", "🔍"),
            QuickReply::new("weekend", "Weekend plans", "🎉"),
        ]),
    ]
}

fn spend() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Here's where your money went this month:"),
        MessageTemplate::widget(Widget::SpendBreakdown(SpendBreakdown {
            title: "Spending by category".to_owned(),
            total: 32_450,
            currency: RUPEE.to_owned(),
            categories: vec![
                category("Food delivery", 10_200, "🍔"),
                category("Shopping", 8_750, "🛍️"),
                category("Travel", 6_300, "🚕"),
                category("Bills", 4_800, "💡"),
                category("Other", 2_400, "📦"),
            ],
        })),
        MessageTemplate::widget(Widget::MerchantLeaderboard(
            MerchantLeaderboard {
                title: "Top merchants".to_owned(),
                currency: RUPEE.to_owned(),
                merchants: vec![
                    merchant("Swiggy", 5_600, 14),
                    merchant("Zomato", 4_600, 11),
                    merchant("Amazon", 4_150, 6),
                    merchant("Uber", 3_900, 17),
                ],
            },
        )),
        MessageTemplate::text(
            "Swiggy and Zomato together make up almost a third of your \
             spending.",
        )
        .with_quick_replies([
            QuickReply::new("cap_delivery", "Cap food delivery", "🍔"),
            QuickReply::new("budget", "How is my budget?", "📊"),
        ]),
    ]
}

fn weekend() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text(
            "Planning a weekend out? Heads up, your balance is running low.",
        ),
        MessageTemplate::widget(Widget::BudgetMeter(BudgetMeter {
            label: "Fun money this week".to_owned(),
            used: 2_800,
            total: 4_000,
            currency: RUPEE.to_owned(),
        })),
        MessageTemplate::text(
            "You have ₹1,200 left for fun this week. A house party with \
             friends keeps you under budget, a club night probably won't.",
        )
        .with_quick_replies([
            QuickReply::new("set_limit", "Set a limit", "🛑"),
            QuickReply::new("goa", "Can I still afford Goa?", "🏖️"),
        ]),
    ]
}

fn limit() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Let's put a cap on food delivery."),
        MessageTemplate::widget(Widget::ActionCard(ActionCard {
            title: "Food delivery limit".to_owned(),
            description: "Limit Swiggy and Zomato to ₹4,000 a month. I'll \
                          nudge you when you hit 80%."
                .to_owned(),
            action_label: "Confirm limit".to_owned(),
        })),
    ]
}

fn goa() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Let's see if the Goa trip fits 🏖️"),
        MessageTemplate::widget(Widget::BudgetMeter(BudgetMeter {
            label: "Goa trip fund".to_owned(),
            used: 18_500,
            total: 30_000,
            currency: RUPEE.to_owned(),
        })),
        MessageTemplate::text(
            "You've saved ₹18,500 of ₹30,000. Putting away ₹3,900 a month \
             gets you there by October.",
        )
        .with_quick_replies([
            QuickReply::new("sip", "Start a SIP for it", "📈"),
            QuickReply::new("budget", "How is my budget?", "📊"),
        ]),
    ]
}

fn sip() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text(
            "A SIP is a simple way to grow your savings a little every \
             month.",
        ),
        MessageTemplate::widget(Widget::ExternalLink(ExternalLink {
            title: "How SIPs work".to_owned(),
            description: "A quick primer on systematic investment plans."
                .to_owned(),
            url: "https://www.amfiindia.com/investor-corner/\
                  knowledge-center/SIP.html"
                .to_owned(),
        })),
        MessageTemplate::widget(Widget::ActionCard(ActionCard {
            title: "Start a ₹3,900 monthly SIP".to_owned(),
            description: "Nifty 50 index fund, debited on the 5th of every \
                          month."
                .to_owned(),
            action_label: "Confirm SIP".to_owned(),
        })),
    ]
}

fn invest() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Reliance Industries is trading at ₹2,945."),
        MessageTemplate::widget(Widget::ActionCard(ActionCard {
            title: "Buy 2 shares of RELIANCE".to_owned(),
            description: "Estimated cost ₹5,890 from your trading balance."
                .to_owned(),
            action_label: "Confirm order".to_owned(),
        })),
        MessageTemplate::text(
            "Stocks can swing a lot. Only invest money you won't need soon.",
        ),
    ]
}

fn confirm_action() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text("Done! ✅ I've set that up for you."),
        MessageTemplate::text("Anything else you'd like to look at?")
            .with_quick_replies([
                QuickReply::new("budget", "How is my budget?", "📊"),
                QuickReply::new("where", "Where did my money go?", "💸"),
            ]),
    ]
}

fn fallback() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::text(
            "I'm Fibby, your money buddy 💚 I can track your budget, show \
             where your money goes, and help you plan for goals.",
        )
        .with_quick_replies([
            QuickReply::new("budget", "How is my budget?", "📊"),
            QuickReply::new("where", "Where did my money go?", "💸"),
            QuickReply::new("goa", "Can I afford a Goa trip?", "🏖️"),
        ]),
    ]
}

fn category(name: &str, amount: u64, emoji: &str) -> SpendCategory {
    SpendCategory {
        name: name.to_owned(),
        amount,
        emoji: emoji.to_owned(),
    }
}

fn merchant(name: &str, amount: u64, visits: u32) -> MerchantEntry {
    MerchantEntry {
        name: name.to_owned(),
        amount,
        visits,
    }
}
