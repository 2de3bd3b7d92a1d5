use fibby_core::{ChatSessionBuilder, WIDGET_ACTION_TEXT};
use fibby_model::{Message, QuickReply, Role, Widget};
use fibby_script::{ScriptTable, ScriptedProvider};

use crate::Config;

/// Creates a session builder set up from `config`.
///
/// The built-in scripts are used, overridden by the scripts file named in
/// the configuration if there is one.
pub fn session_builder(
    config: &Config,
) -> Result<ChatSessionBuilder, fibby_script::Error> {
    let mut table = ScriptTable::builtin();
    if let Some(path) = &config.scripts {
        info!("loading scripts from {}", path.display());
        table.merge(ScriptTable::from_path(path)?);
    }

    let provider = ScriptedProvider::new(table).with_pacing(config.pacing);
    Ok(ChatSessionBuilder::with_provider(provider)
        .with_suggestion_delay(config.suggestion_delay))
}

/// Returns the n-th (1-based) quick reply of the latest assistant message.
pub fn latest_quick_reply(
    messages: &[Message],
    n: usize,
) -> Option<&QuickReply> {
    let msg = messages.iter().rfind(|msg| msg.role == Role::Assistant)?;
    msg.quick_replies.get(n.checked_sub(1)?)
}

/// Returns `true` if the latest widget is an action card that hasn't been
/// confirmed yet.
pub fn has_pending_action(messages: &[Message]) -> bool {
    let Some(pos) = messages.iter().rposition(|msg| msg.widget.is_some())
    else {
        return false;
    };
    if !messages[pos].widget.as_ref().is_some_and(Widget::has_action) {
        return false;
    }
    !messages[pos + 1..].iter().any(|msg| {
        msg.role == Role::User
            && msg.content.as_deref() == Some(WIDGET_ACTION_TEXT)
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use fibby_model::Intent;
    use fibby_script::{ErrorKind, Pacing};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_builtin_session() {
        let config = Config {
            scripts: None,
            pacing: Pacing::instant(),
            suggestion_delay: Duration::ZERO,
        };
        let mut session = session_builder(&config).unwrap().build();
        let intent = session.send_message("How is my budget?").await.unwrap();
        assert_eq!(intent, Intent::Budget);
        assert_eq!(session.messages().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_quick_reply() {
        let config = Config {
            pacing: Pacing::instant(),
            suggestion_delay: Duration::ZERO,
            ..Config::default()
        };
        let mut session = session_builder(&config).unwrap().build();
        assert_eq!(latest_quick_reply(session.messages(), 1), None);

        session.send_message("How is my budget?").await.unwrap();
        let reply = latest_quick_reply(session.messages(), 2).unwrap();
        assert_eq!(reply.submission_text(), "Where did it go? 🔍");
        assert_eq!(latest_quick_reply(session.messages(), 0), None);
        assert_eq!(latest_quick_reply(session.messages(), 4), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_action_until_confirmed() {
        let config = Config {
            pacing: Pacing::instant(),
            suggestion_delay: Duration::ZERO,
            ..Config::default()
        };
        let mut session = session_builder(&config).unwrap().build();
        assert!(!has_pending_action(session.messages()));

        session.send_message("Set a limit").await.unwrap();
        assert!(has_pending_action(session.messages()));

        session.press_widget_action().await.unwrap();
        assert!(!has_pending_action(session.messages()));

        // A newer widget without an action hides older cards.
        session.send_message("Set a limit").await.unwrap();
        session.send_message("How is my budget?").await.unwrap();
        assert!(!has_pending_action(session.messages()));
    }

    #[test]
    fn test_missing_scripts_file() {
        let config = Config {
            scripts: Some(PathBuf::from("/nonexistent/fibby.json")),
            ..Config::default()
        };
        let Err(err) = session_builder(&config) else {
            panic!("expected an error");
        };
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
