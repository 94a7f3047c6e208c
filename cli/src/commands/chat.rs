//! # Folio Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio chat`, a REPL around the conversation log. Each line the
//! visitor types is recorded, the assistant "types" for the configured delay,
//! then the reply is recorded and printed.
//!
//! In-chat commands:
//! - `/history`: print the log with timestamps
//! - `/clear`: start over from the welcome message
//! - `/quit` or `/exit` (or end of input): leave
//!
//! ## Examples
//!
//! ```bash
//! folio chat
//! folio chat --delay-ms 0 --seed 7
//! ```
//!
use crate::commands::build_responder;
use anyhow::Context;
use clap::Parser;
use folio::conversation::{Conversation, Sender};
use folio::core::config;
use folio::core::error::Result;
use folio::responder::RandomReply;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Delay before each reply, in milliseconds. Overrides `reply_delay_ms`.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reply selection. Overrides the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// What a line of chat input asks for.
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Quit,
    History,
    Clear,
    Say(&'a str),
}

impl<'a> ChatInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => ChatInput::Quit,
            "/history" => ChatInput::History,
            "/clear" => ChatInput::Clear,
            _ => ChatInput::Say(line),
        }
    }
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let responder = build_responder(&cfg)?;
    let mut selector = RandomReply::new(args.seed.or(cfg.assistant.seed));
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(cfg.assistant.reply_delay_ms));
    let name = cfg.assistant.name.as_str();
    debug!("Reply delay: {:?}", delay);

    let mut conversation = Conversation::new(cfg.assistant.welcome.clone());
    conversation.open();
    println!("{}: {}", name, cfg.assistant.welcome);
    println!("(Type /history, /clear or /quit.)");

    let mut stdin = BufReader::new(tokio::io::stdin());
    loop {
        print!("You: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = read_chat_line(&mut stdin).await? else {
            println!();
            break;
        };

        match ChatInput::parse(&line) {
            ChatInput::Quit => break,
            ChatInput::History => print_history(&conversation, name),
            ChatInput::Clear => {
                conversation.clear();
                println!("{}: {}", name, cfg.assistant.welcome);
            }
            ChatInput::Say(text) => {
                let Some(accepted) = conversation.accept(text) else {
                    continue;
                };
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let exchange = conversation.answer(&accepted, &responder, &mut selector);
                println!("{}: {}", name, exchange.reply);
            }
        }
    }

    conversation.close();
    println!("{}: Goodbye!", name);
    Ok(())
}

/// Reads one line of chat input without its line ending. Invalid UTF-8 is
/// replaced rather than rejected. `None` at end of input.
async fn read_chat_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = reader
        .read_until(b'\n', &mut buf)
        .await
        .context("Failed to read chat input")?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn print_history(conversation: &Conversation, assistant_name: &str) {
    for message in conversation.messages() {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Assistant => assistant_name,
        };
        println!("[{}] {}: {}", message.time_label(), who, message.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_chat_args() {
        let args = ChatArgs::try_parse_from(["chat", "--delay-ms", "0", "--seed", "3"]).unwrap();
        assert_eq!(args.delay_ms, Some(0));
        assert_eq!(args.seed, Some(3));

        let args = ChatArgs::try_parse_from(["chat"]).unwrap();
        assert_eq!(args.delay_ms, None);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_chat_input_parsing() {
        assert_eq!(ChatInput::parse("/quit"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("  /exit "), ChatInput::Quit);
        assert_eq!(ChatInput::parse("/history"), ChatInput::History);
        assert_eq!(ChatInput::parse("/clear"), ChatInput::Clear);
        assert_eq!(ChatInput::parse("Hi there"), ChatInput::Say("Hi there"));
        assert_eq!(ChatInput::parse("/unknown"), ChatInput::Say("/unknown"));
    }

    #[tokio::test]
    async fn test_read_chat_line_replaces_invalid_utf8() {
        let mut input: &[u8] = b"caf\xe9 hello\r\n/quit\n";
        let first = read_chat_line(&mut input).await.unwrap().unwrap();
        assert_eq!(first, "caf\u{FFFD} hello");
        let second = read_chat_line(&mut input).await.unwrap().unwrap();
        assert_eq!(second, "/quit");
        assert_eq!(read_chat_line(&mut input).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_chat_line_without_trailing_newline() {
        let mut input: &[u8] = b"hello";
        assert_eq!(
            read_chat_line(&mut input).await.unwrap().as_deref(),
            Some("hello")
        );
        assert_eq!(read_chat_line(&mut input).await.unwrap(), None);
    }
}
