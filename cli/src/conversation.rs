//! # Folio Conversation Log
//!
//! File: cli/src/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chat widget's state as plain data: an append-only log of messages and
//! an open/closed flag. The log always starts with the assistant's welcome
//! message. Each visitor entry is recorded first, then the responder is called
//! on it and its reply is recorded.
//!
//! The two steps are exposed separately (`accept`, `answer`) so a front end
//! can pause between them to simulate typing; `submit` does both at once.
//!
//! Nothing here is persisted. Closing the process discards the log.
//!
use crate::responder::{Exchange, ReplySelector, Responder};
use chrono::{DateTime, Local};
use tracing::debug;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Increasing sequence number, starting at 1 for the welcome message.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Hours and minutes, e.g. `09:41`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Conversation {
    welcome: String,
    messages: Vec<Message>,
    next_id: u64,
    open: bool,
}

impl Conversation {
    /// A closed conversation holding only the welcome message.
    pub fn new(welcome: impl Into<String>) -> Self {
        let mut conversation = Self {
            welcome: welcome.into(),
            messages: Vec::new(),
            next_id: 1,
            open: false,
        };
        conversation.clear();
        conversation
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drops everything but a fresh welcome message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        let welcome = self.welcome.clone();
        self.push(Sender::Assistant, welcome);
    }

    /// Records a visitor entry. Blank input is ignored and returns `None`.
    pub fn accept(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }
        self.push(Sender::User, input.to_string());
        Some(input.to_string())
    }

    /// Records the responder's reply to an accepted entry.
    pub fn answer<S>(&mut self, input: &str, responder: &Responder, selector: &mut S) -> Exchange
    where
        S: ReplySelector + ?Sized,
    {
        let exchange = responder.respond(input, selector);
        debug!("Answering '{}' topic for {:?}", exchange.topic, input);
        self.push(Sender::Assistant, exchange.reply.clone());
        exchange
    }

    /// `accept` followed immediately by `answer`.
    pub fn submit<S>(
        &mut self,
        input: &str,
        responder: &Responder,
        selector: &mut S,
    ) -> Option<Exchange>
    where
        S: ReplySelector + ?Sized,
    {
        let accepted = self.accept(input)?;
        Some(self.answer(&accepted, responder, selector))
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(Message {
            id: self.next_id,
            sender,
            text,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }
}
