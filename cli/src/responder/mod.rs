//! # Folio Responder
//!
//! File: cli/src/responder/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The keyword-routing responder behind the portfolio chat. Given a line of
//! visitor text it:
//! 1. Lower-cases the input
//! 2. Tests each topic's triggers as plain substrings, in [`Topic::PRIORITY`] order
//! 3. Falls back to [`Topic::Default`] when nothing matches
//! 4. Returns one of the topic's replies, chosen by a [`ReplySelector`]
//!
//! Punctuation is not stripped, so "hi" matches inside "this" or "which" as
//! well. The first matching topic wins.
//!
//! ## Architecture
//!
//! - `topic`: the closed set of topics and their priority order
//! - `knowledge`: the validated trigger/reply table
//! - `select`: the injectable source of randomness for picking a reply
//!
//! The responder owns only its immutable knowledge base. Calls are independent
//! and it can be shared between threads freely.
//!
//! ## Examples
//!
//! ```rust
//! use folio::responder::{FirstReply, Responder, Topic};
//!
//! let responder = Responder::default();
//! assert_eq!(responder.classify("How can I reach you?"), Topic::Contact);
//!
//! let reply = responder.reply("hello", &mut FirstReply);
//! assert!(reply.starts_with("Hello!"));
//! ```
//!
pub mod knowledge;
pub mod select;
pub mod topic;

pub use knowledge::{KnowledgeBase, TopicEntry};
pub use select::{FirstReply, RandomReply, ReplySelector};
pub use topic::Topic;

use tracing::trace;

/// One round of visitor input and the chosen reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub input: String,
    pub topic: Topic,
    pub reply: String,
}

/// Routes free text to a topic and a canned reply.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    knowledge: KnowledgeBase,
}

impl Responder {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// # Classify Input (`classify`)
    ///
    /// Maps `input` to exactly one topic. The input is lower-cased, then each
    /// topic in [`Topic::PRIORITY`] order is tested for a trigger contained in
    /// it. The first hit wins; with no hit the result is [`Topic::Default`].
    ///
    /// ## Arguments
    ///
    /// * `input`: raw visitor text. Empty or blank input is allowed.
    ///
    /// ## Returns
    ///
    /// * `Topic`: the matched topic, never absent.
    ///
    /// ```rust
    /// use folio::responder::{Responder, Topic};
    ///
    /// let responder = Responder::default();
    /// assert_eq!(responder.classify("Any WORK experience?"), Topic::Experience);
    /// assert_eq!(responder.classify(""), Topic::Default);
    /// ```
    pub fn classify(&self, input: &str) -> Topic {
        let lowered = input.to_lowercase();
        let topic = Topic::PRIORITY
            .into_iter()
            .find(|topic| {
                self.knowledge
                    .triggers(*topic)
                    .iter()
                    .any(|trigger| lowered.contains(trigger.as_str()))
            })
            .unwrap_or(Topic::Default);
        trace!("Classified {:?} as '{}'", input, topic);
        topic
    }

    /// # Reply to Input (`reply`)
    ///
    /// Classifies `input` and returns one of that topic's replies, verbatim
    /// from the knowledge base. An index past the end of the list from the
    /// selector wraps around, so a reply is always returned.
    ///
    /// ## Arguments
    ///
    /// * `input`: raw visitor text.
    /// * `selector`: picks which candidate reply to use.
    ///
    /// ## Returns
    ///
    /// * `&str`: a reply borrowed from the knowledge base.
    ///
    /// ```rust
    /// use folio::responder::{FirstReply, RandomReply, Responder, Topic};
    ///
    /// let responder = Responder::default();
    /// let contact = responder.knowledge().replies(Topic::Contact);
    ///
    /// assert_eq!(responder.reply("email?", &mut FirstReply), contact[0]);
    ///
    /// let mut seeded = RandomReply::seeded(42);
    /// let reply = responder.reply("email?", &mut seeded);
    /// assert!(contact.iter().any(|r| r == reply));
    /// ```
    pub fn reply<'a, S>(&'a self, input: &str, selector: &mut S) -> &'a str
    where
        S: ReplySelector + ?Sized,
    {
        self.pick(self.classify(input), selector)
    }

    /// # Respond to Input (`respond`)
    ///
    /// Like [`Responder::reply`], but returns an owned [`Exchange`] carrying the
    /// input, the topic it was classified as and the chosen reply.
    pub fn respond<S>(&self, input: &str, selector: &mut S) -> Exchange
    where
        S: ReplySelector + ?Sized,
    {
        let topic = self.classify(input);
        Exchange {
            input: input.to_string(),
            topic,
            reply: self.pick(topic, selector).to_string(),
        }
    }

    fn pick<S>(&self, topic: Topic, selector: &mut S) -> &str
    where
        S: ReplySelector + ?Sized,
    {
        let replies = self.knowledge.replies(topic);
        let index = selector.select(replies.len()) % replies.len();
        &replies[index]
    }
}
