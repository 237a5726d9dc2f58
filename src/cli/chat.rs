use std::io::Write;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::{
    Cmd, ConditionalEventHandler, DefaultEditor, Event, EventContext, EventHandler, KeyCode,
    KeyEvent, Modifiers, RepeatCount,
};

use crate::client::input::{KeyAction, enter_action};
use crate::client::{Conversation, HttpRelayClient, RelayClient, ViewEvent};
use crate::core::logging;
use crate::openai::Role;
use crate::relay::persona::QUICK_QUESTIONS;

const PROMPT: &str = "TRAINER ▶ ";

/// Shift+Enter or Alt+Enter inserts a line break instead of sending.
struct EnterKeyHandler;

impl ConditionalEventHandler for EnterKeyHandler {
    fn handle(
        &self,
        evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext,
    ) -> Option<Cmd> {
        let KeyEvent(KeyCode::Enter, mods) = evt.get(0)? else {
            return None;
        };
        match enter_action(mods.contains(Modifiers::SHIFT), mods.contains(Modifiers::ALT)) {
            KeyAction::Newline => Some(Cmd::Newline),
            KeyAction::Submit => None,
        }
    }
}

fn print_quick_questions() {
    println!("Alt+Enter (or Shift+Enter) adds a new line, Enter sends.");
    println!("Quick questions (type /q <number> to use one):");
    for (idx, question) in QUICK_QUESTIONS.iter().enumerate() {
        println!("  {}. {}", idx + 1, question);
    }
    println!();
}

/// Print every assistant message after `rendered` and return the new
/// number of rendered messages. User messages are already on screen
/// as typed.
fn render_new(conversation: &Conversation, rendered: usize) -> usize {
    let transcript = conversation.transcript();
    for msg in transcript.iter().skip(rendered) {
        if msg.role == Role::Assistant {
            println!("OAK ▶ {}\n", msg.content.replace('\n', "\n      "));
        }
    }
    transcript.len()
}

pub async fn run(url: &str) -> Result<()> {
    // Errors are turned into in-character replies, keep them off the
    // screen unless RUST_LOG asks for them
    logging::init("off");

    let mut rl = DefaultEditor::new()?;
    for mods in [Modifiers::SHIFT, Modifiers::ALT] {
        rl.bind_sequence(
            KeyEvent(KeyCode::Enter, mods),
            EventHandler::Conditional(Box::new(EnterKeyHandler)),
        );
    }

    let relay = HttpRelayClient::new(url);
    let mut conversation = Conversation::new();

    println!("PROF. OAK · Pokémon Research Lab\n");
    print_quick_questions();
    let mut rendered = render_new(&conversation, 0);

    loop {
        let readline = rl.readline_with_initial(PROMPT, (conversation.input(), ""));
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" {
                    break;
                }
                if trimmed == "/q" {
                    print_quick_questions();
                    continue;
                }
                if let Some(arg) = trimmed.strip_prefix("/q ") {
                    let picked = arg
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .is_some_and(|idx| conversation.pick_quick_question(idx));
                    if !picked {
                        print_quick_questions();
                    }
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                conversation.set_input(&line);
                let Some(history) = conversation.begin_turn() else {
                    continue;
                };

                print!("OAK ▶ ...");
                std::io::stdout().flush()?;
                let result = relay.complete(&history).await;
                conversation.settle(result);
                print!("\r\x1b[2K");

                for event in conversation.drain_events() {
                    match event {
                        ViewEvent::ScrollToLatest => {
                            rendered = render_new(&conversation, rendered);
                        }
                        // The next prompt takes focus
                        ViewEvent::FocusInput => {}
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
