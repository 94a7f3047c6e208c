//! # Folio Knowledge Base
//!
//! File: cli/src/responder/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed table of topic → trigger substrings and candidate replies that the
//! responder routes over. A `KnowledgeBase` always holds an entry for every
//! topic, and every entry satisfies:
//! - at least one non-blank reply
//! - `default` has no triggers
//! - every other topic has at least one trigger
//! - triggers are non-empty and already lowercase
//!
//! These rules are checked when the table is built, so classification never
//! has to handle a missing or empty topic.
//!
//! ## Custom Knowledge Files
//!
//! A TOML file may override any subset of topics. Topics not listed keep their
//! built-in entry:
//!
//! ```toml
//! [greeting]
//! triggers = ["hello", "hi", "hey", "good morning"]
//! replies = ["Hello! What would you like to know?"]
//!
//! [default]
//! replies = ["Try asking about experience, skills or projects."]
//! ```
//!
use crate::core::error::{FolioError, Result};
use crate::responder::topic::Topic;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Triggers and replies for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicEntry {
    /// Lowercase substrings that route input to this topic.
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Candidate replies, returned verbatim.
    pub replies: Vec<String>,
}

impl TopicEntry {
    fn from_static(triggers: &[&str], replies: &[&str]) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Immutable topic table, indexed by [`Topic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: [TopicEntry; 7],
}

impl KnowledgeBase {
    /// The portfolio assistant's built-in table.
    pub fn builtin() -> Self {
        Self {
            entries: Topic::ALL.map(builtin_entry),
        }
    }

    /// Builds a table from a complete set of entries, validating each one.
    pub fn from_entries(mut entries: BTreeMap<Topic, TopicEntry>) -> Result<Self> {
        let mut table = Vec::with_capacity(Topic::ALL.len());
        for topic in Topic::ALL {
            let entry = entries.remove(&topic).ok_or_else(|| {
                anyhow!(FolioError::KnowledgeBase(format!(
                    "topic '{}' has no entry",
                    topic
                )))
            })?;
            validate_entry(topic, &entry)?;
            table.push(entry);
        }
        let entries: [TopicEntry; 7] = table
            .try_into()
            .map_err(|_| anyhow!(FolioError::KnowledgeBase("incomplete topic table".into())))?;
        Ok(Self { entries })
    }

    /// Applies the topics listed in a TOML document on top of this table.
    pub fn with_overrides(self, content: &str) -> Result<Self> {
        let raw: BTreeMap<String, TopicEntry> =
            toml::from_str(content).context("Failed to parse knowledge base TOML")?;

        let mut merged: BTreeMap<Topic, TopicEntry> =
            Topic::ALL.into_iter().zip(self.entries).collect();
        let mut seen = BTreeSet::new();
        for (name, entry) in raw {
            let topic: Topic = name.parse()?;
            if !seen.insert(topic) {
                return Err(anyhow!(FolioError::KnowledgeBase(format!(
                    "topic '{}' is listed more than once",
                    topic
                ))));
            }
            debug!(
                "Overriding topic '{}' ({} triggers, {} replies)",
                topic,
                entry.triggers.len(),
                entry.replies.len()
            );
            merged.insert(topic, entry);
        }
        Self::from_entries(merged)
    }

    /// Loads a knowledge file and applies it on top of the built-in table.
    pub fn load_file(path: &Path) -> Result<Self> {
        info!("Loading knowledge base from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
        Self::builtin()
            .with_overrides(&content)
            .with_context(|| format!("Invalid knowledge file: {}", path.display()))
    }

    /// Trigger substrings for `topic`. Empty for [`Topic::Default`].
    pub fn triggers(&self, topic: Topic) -> &[String] {
        &self.entries[topic.index()].triggers
    }

    /// Candidate replies for `topic`. Never empty.
    pub fn replies(&self, topic: Topic) -> &[String] {
        &self.entries[topic.index()].replies
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entry(topic: Topic, entry: &TopicEntry) -> Result<()> {
    let invalid = |msg: String| Err(anyhow!(FolioError::KnowledgeBase(msg)));

    if entry.replies.is_empty() {
        return invalid(format!("topic '{}' has no replies", topic));
    }
    if entry.replies.iter().any(|r| r.trim().is_empty()) {
        return invalid(format!("topic '{}' has a blank reply", topic));
    }
    match topic {
        Topic::Default if !entry.triggers.is_empty() => {
            return invalid("topic 'default' cannot have triggers".into());
        }
        Topic::Default => {}
        _ if entry.triggers.is_empty() => {
            return invalid(format!("topic '{}' has no triggers", topic));
        }
        _ => {}
    }
    for trigger in &entry.triggers {
        if trigger.is_empty() {
            return invalid(format!("topic '{}' has an empty trigger", topic));
        }
        if *trigger != trigger.to_lowercase() {
            return invalid(format!(
                "trigger '{}' for topic '{}' must be lowercase",
                trigger, topic
            ));
        }
    }
    Ok(())
}

fn builtin_entry(topic: Topic) -> TopicEntry {
    match topic {
        Topic::Greeting => TopicEntry::from_static(
            &["hello", "hi", "hey"],
            &[
                "Hello! Thanks for visiting Adam's portfolio. What would you like to know?",
                "Hi there! I'm here to help you learn more about Adam's work and experience.",
            ],
        ),
        Topic::Experience => TopicEntry::from_static(
            &["experience", "work", "job"],
            &[
                "Adam has 6 years of experience as a Senior Web Developer, specializing in high-performance full-stack applications using React, Node.js, and Django. He has led teams at Netguru, STX Next, The Software House, and Javrix Web Development, delivering measurable results and scalable solutions.",
                "Adam has worked with companies from startups to enterprises, focusing on performance optimization, cloud deployments, and modernizing legacy systems.",
            ],
        ),
        Topic::Skills => TopicEntry::from_static(
            &["skill", "technology", "tech"],
            &[
                "Adam specializes in React, Node.js, Django, TypeScript, and modern web technologies. He's passionate about clean code, user experience, and scalable architectures.",
                "His technical stack includes React, Next.js, TypeScript, Vue.js, Node.js, Python, Django, Express, NestJS, PostgreSQL, MongoDB, Redis, AWS, Docker, and Kubernetes.",
            ],
        ),
        // "work" also routes to experience, which is tested first.
        Topic::Projects => TopicEntry::from_static(
            &["project", "portfolio", "work"],
            &[
                "Adam has built several impressive projects including e-commerce platforms, task management apps, and social media dashboards. Check out the Projects section!",
                "His featured projects include a high-traffic payment processing microservice and a collaborative task management tool with real-time features.",
            ],
        ),
        Topic::Contact => TopicEntry::from_static(
            &["contact", "email", "reach"],
            &[
                "You can reach Adam at code.specter0527@gmail.com or visit his portfolio. He's currently available for new opportunities!",
                "Feel free to use the contact form on this page or reach out directly via email. Adam typically responds within 24 hours.",
            ],
        ),
        Topic::Education => TopicEntry::from_static(
            &["education", "degree", "university"],
            &[
                "Adam holds a Bachelor of Engineering in Computer Science from University of Information Technology and Management (UITM), Rzeszów, Poland, and has completed AWS Academy programs.",
                "He has completed the AWS Academy Cloud Foundations Program and continues to pursue continuous learning through certifications and courses.",
            ],
        ),
        Topic::Default => TopicEntry::from_static(
            &[],
            &[
                "That's an interesting question! You might find more detailed information in the relevant sections of this portfolio.",
                "I'd recommend checking out the specific sections of Adam's portfolio for more detailed information about that topic.",
                "Great question! Feel free to contact Adam directly for more specific details about his work and experience.",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn builtin_map() -> BTreeMap<Topic, TopicEntry> {
        Topic::ALL
            .into_iter()
            .map(|topic| (topic, builtin_entry(topic)))
            .collect()
    }

    #[test]
    fn test_builtin_satisfies_invariants() {
        let rebuilt = KnowledgeBase::from_entries(builtin_map()).expect("builtin must validate");
        assert_eq!(rebuilt, KnowledgeBase::builtin());
    }

    #[test]
    fn test_builtin_reply_counts() {
        let kb = KnowledgeBase::builtin();
        for topic in Topic::PRIORITY {
            assert_eq!(kb.replies(topic).len(), 2, "topic {}", topic);
            assert!(!kb.triggers(topic).is_empty());
        }
        assert_eq!(kb.replies(Topic::Default).len(), 3);
        assert!(kb.triggers(Topic::Default).is_empty());
    }

    #[test]
    fn test_rejects_missing_topic() {
        let mut entries = builtin_map();
        entries.remove(&Topic::Education);
        let err = KnowledgeBase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("topic 'education' has no entry"));
    }

    #[test]
    fn test_rejects_empty_replies() {
        let mut entries = builtin_map();
        entries.get_mut(&Topic::Skills).unwrap().replies.clear();
        let err = KnowledgeBase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("topic 'skills' has no replies"));
    }

    #[test]
    fn test_rejects_default_triggers() {
        let mut entries = builtin_map();
        entries
            .get_mut(&Topic::Default)
            .unwrap()
            .triggers
            .push("anything".into());
        let err = KnowledgeBase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("cannot have triggers"));
    }

    #[test]
    fn test_rejects_uppercase_and_empty_triggers() {
        let mut entries = builtin_map();
        entries.get_mut(&Topic::Contact).unwrap().triggers = vec!["Email".into()];
        let err = KnowledgeBase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("must be lowercase"));

        let mut entries = builtin_map();
        entries.get_mut(&Topic::Contact).unwrap().triggers = vec![String::new()];
        let err = KnowledgeBase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("empty trigger"));
    }

    #[test]
    fn test_overrides_replace_listed_topics_only() {
        let content = r#"
            [greeting]
            triggers = ["hello", "good morning"]
            replies = ["Morning!"]
        "#;
        let kb = KnowledgeBase::builtin().with_overrides(content).unwrap();
        assert_eq!(kb.triggers(Topic::Greeting), ["hello", "good morning"]);
        assert_eq!(kb.replies(Topic::Greeting), ["Morning!"]);
        assert_eq!(
            kb.replies(Topic::Skills),
            KnowledgeBase::builtin().replies(Topic::Skills)
        );
    }

    #[test]
    fn test_overrides_reject_unknown_topic() {
        let content = r#"
            [weather]
            triggers = ["rain"]
            replies = ["Bring an umbrella."]
        "#;
        let err = KnowledgeBase::builtin().with_overrides(content).unwrap_err();
        assert!(err.to_string().contains("Unknown topic 'weather'"));
    }

    #[test]
    fn test_overrides_reject_duplicate_topics() {
        let content = r#"
            [Greeting]
            triggers = ["yo"]
            replies = ["Yo!"]

            [greeting]
            triggers = ["hello"]
            replies = ["Hello!"]
        "#;
        let err = KnowledgeBase::builtin().with_overrides(content).unwrap_err();
        assert!(err
            .to_string()
            .contains("topic 'greeting' is listed more than once"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("knowledge.toml");
        fs::write(
            &path,
            "[default]\nreplies = [\"Ask me about projects.\"]\n",
        )
        .unwrap();

        let kb = KnowledgeBase::load_file(&path).unwrap();
        assert_eq!(kb.replies(Topic::Default), ["Ask me about projects."]);

        let missing = dir.path().join("missing.toml");
        let err = KnowledgeBase::load_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read knowledge file"));
    }
}
