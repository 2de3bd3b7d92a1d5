//! Chat with Fibby in the terminal.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::pin::{Pin, pin};
use std::time::Duration;

use fibby::core::{ChatSession, ChatSessionBuilder, Error};
use fibby::model::{Intent, Message, Role};
use fibby::render::render_message;
use fibby::{
    Command, Config, HELP, has_pending_action, latest_quick_reply,
    session_builder,
};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::select;
use tokio::sync::mpsc;

enum SessionEvent {
    Message(Message),
    Typing(bool),
    Suggestions(Vec<String>),
}

const BAR_CHAR: &str = "▎";
const WELCOME: &str = "Hi, I'm Fibby 👋 Ask me about your budget, \
spending or savings. Type /help for commands.";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    debug!("starting with {config:?}");
    let builder = match session_builder(&config) {
        Ok(builder) => builder,
        Err(err) => {
            eprintln!("failed to load scripts: {err}");
            return;
        }
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut session = build_session(builder, event_tx);

    println!("{}🤖 {}", BAR_CHAR.bright_cyan(), WELCOME.bright_white());
    if let Some(suggestions) = session.visible_suggestions() {
        print_suggestions(suggestions);
    }

    let mut lines = io::BufReader::new(io::stdin()).lines();
    run_repl(&mut session, &mut lines, &mut event_rx).await;
}

fn build_session(
    builder: ChatSessionBuilder,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
) -> ChatSession {
    builder
        .on_message({
            let event_tx = event_tx.clone();
            move |msg| {
                event_tx.send(SessionEvent::Message(msg.clone())).ok();
            }
        })
        .on_typing({
            let event_tx = event_tx.clone();
            move |typing| {
                event_tx.send(SessionEvent::Typing(typing)).ok();
            }
        })
        .on_suggestions(move |suggestions| {
            event_tx
                .send(SessionEvent::Suggestions(suggestions.to_vec()))
                .ok();
        })
        .build()
}

/// Handles input lines until they run out or the user quits.
async fn run_repl<R>(
    session: &mut ChatSession,
    lines: &mut Lines<R>,
    event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) where
    R: AsyncBufRead + Unpin,
{
    let mut screen = Screen::new();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!("error reading input: {}", err);
                break;
            }
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        // Typed text is already on screen, everything else is echoed.
        screen.echo_user = !matches!(command, Command::Send(_));

        let res = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Clear => {
                session.clear();
                println!("{}", "Started a new chat.".dimmed());
                if let Some(suggestions) = session.visible_suggestions() {
                    print_suggestions(suggestions);
                }
                continue;
            }
            Command::Export => {
                match session.export_json() {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("failed to export chat: {err}"),
                }
                continue;
            }
            Command::Send(text) => {
                let op = pin!(session.send_message(&text));
                screen.drive(op, event_rx).await
            }
            Command::Pick(n) => {
                let Some(reply) =
                    latest_quick_reply(session.messages(), n).cloned()
                else {
                    eprintln!("there is no quick reply {n}");
                    continue;
                };
                let op = pin!(session.select_quick_reply(&reply));
                screen.drive(op, event_rx).await
            }
            Command::Suggestion(n) => {
                let op = pin!(session.select_suggestion(n - 1));
                screen.drive(op, event_rx).await
            }
            Command::Confirm => {
                if !has_pending_action(session.messages()) {
                    eprintln!("there is nothing to confirm");
                    continue;
                }
                let op = pin!(session.press_widget_action());
                screen.drive(op, event_rx).await
            }
        };

        // Pick up events sent right before the operation finished.
        while let Ok(event) = event_rx.try_recv() {
            screen.show(event);
        }
        screen.stop_spinner();

        match res {
            Ok(intent) => debug!("handled as {intent}"),
            Err(Error::UnknownSuggestion(idx)) => {
                eprintln!("there is no suggestion {}", idx + 1);
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}

struct Screen {
    spinner: Option<ProgressBar>,
    spinner_style: ProgressStyle,
    echo_user: bool,
}

impl Screen {
    fn new() -> Self {
        let spinner_style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        Self {
            spinner: None,
            spinner_style,
            echo_user: false,
        }
    }

    /// Runs a session operation, showing its events as they happen.
    async fn drive<F>(
        &mut self,
        mut op: Pin<&mut F>,
        event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
    ) -> Result<Intent, Error>
    where
        F: Future<Output = Result<Intent, Error>>,
    {
        loop {
            select! {
                biased;
                Some(event) = event_rx.recv() => self.show(event),
                res = &mut op => return res,
            }
        }
    }

    fn show(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Typing(true) => self.start_spinner(),
            SessionEvent::Typing(false) => self.stop_spinner(),
            SessionEvent::Message(msg) => {
                // Finish the spinner before printing anything else.
                self.stop_spinner();
                print_message(&msg, self.echo_user);
            }
            SessionEvent::Suggestions(suggestions) => {
                print_suggestions(&suggestions);
            }
        }
    }

    fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(self.spinner_style.clone());
        spinner.set_message("Fibby is typing...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        if let Some(old) = self.spinner.replace(spinner) {
            old.finish_and_clear();
        }
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn print_message(msg: &Message, echo_user: bool) {
    match msg.role {
        Role::User => {
            if let (true, Some(content)) = (echo_user, &msg.content) {
                println!("> {}", content.bright_green());
            }
        }
        Role::Assistant => {
            let bar = BAR_CHAR.bright_cyan();
            for (idx, line) in render_message(msg).into_iter().enumerate() {
                if idx == 0 && msg.content.is_some() {
                    println!("{bar}🤖 {}", line.bright_white());
                } else {
                    println!("{bar}   {line}");
                }
            }
        }
    }
}

fn print_suggestions(suggestions: &[String]) {
    let chips = suggestions
        .iter()
        .enumerate()
        .map(|(idx, s)| format!("[/s {}] {s}", idx + 1))
        .collect::<Vec<_>>();
    println!("{}", chips.join("  ").dimmed());
}
