use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// A line typed at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send the text as a message.
    Send(String),
    /// Pick the n-th (1-based) quick reply of the latest assistant
    /// message.
    Pick(usize),
    /// Send the n-th (1-based) suggestion chip.
    Suggestion(usize),
    /// Press the primary action of the latest action card.
    Confirm,
    /// Start over with an empty chat.
    Clear,
    /// Print the transcript as JSON.
    Export,
    /// Show the available commands.
    Help,
    /// Leave.
    Quit,
}

/// Error returned for lines that look like commands but aren't.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command: {}", self.0)
    }
}

impl StdError for UnknownCommand {}

impl Command {
    /// Parses a prompt line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, UnknownCommand> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(command) = line.strip_prefix('/') else {
            let cmd = match line.parse::<usize>() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Send(line.to_owned()),
            };
            return Ok(Some(cmd));
        };

        let mut parts = command.split_whitespace();
        let cmd = match (parts.next(), parts.next(), parts.next()) {
            (Some("confirm"), None, _) => Command::Confirm,
            (Some("clear"), None, _) => Command::Clear,
            (Some("export"), None, _) => Command::Export,
            (Some("help"), None, _) => Command::Help,
            (Some("quit" | "exit"), None, _) => Command::Quit,
            (Some("s"), Some(n), None) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Suggestion(n),
                _ => return Err(UnknownCommand(line.to_owned())),
            },
            _ => return Err(UnknownCommand(line.to_owned())),
        };
        Ok(Some(cmd))
    }
}

/// Help text listing the commands.
pub const HELP: &str = "\
Type a message to chat with Fibby, or:
  1, 2, ...   pick a quick reply
  /s <n>      send suggestion <n>
  /confirm    press the latest action card
  /clear      start a new chat
  /export     print the chat as JSON
  /quit       leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(
            Command::parse(" How is my budget? "),
            Ok(Some(Command::Send("How is my budget?".to_owned())))
        );
        assert_eq!(Command::parse("2"), Ok(Some(Command::Pick(2))));
        assert_eq!(
            Command::parse("0"),
            Ok(Some(Command::Send("0".to_owned())))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/confirm"), Ok(Some(Command::Confirm)));
        assert_eq!(Command::parse("/clear"), Ok(Some(Command::Clear)));
        assert_eq!(Command::parse("/export"), Ok(Some(Command::Export)));
        assert_eq!(Command::parse("/exit"), Ok(Some(Command::Quit)));
        assert_eq!(
            Command::parse("/s 3"),
            Ok(Some(Command::Suggestion(3)))
        );
    }

    #[test]
    fn test_parse_unknown_commands() {
        assert!(Command::parse("/s").is_err());
        assert!(Command::parse("/s 0").is_err());
        assert!(Command::parse("/s 1 2").is_err());
        assert!(Command::parse("/clear all").is_err());
        assert_eq!(
            Command::parse("/dance").unwrap_err().to_string(),
            "unknown command: /dance"
        );
    }
}
