//! # Folio Topics
//!
//! File: cli/src/responder/topic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The closed set of conversational topics the responder recognizes, and the
//! fixed order in which their triggers are tested.
//!
use crate::core::error::FolioError;
use std::fmt;
use std::str::FromStr;

/// A category of visitor intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Greeting,
    Experience,
    Skills,
    Projects,
    Contact,
    Education,
    /// Fallback for input that matches no trigger. Has no triggers of its own.
    Default,
}

impl Topic {
    /// Every topic, in table order. `Default` is last.
    pub const ALL: [Topic; 7] = [
        Topic::Greeting,
        Topic::Experience,
        Topic::Skills,
        Topic::Projects,
        Topic::Contact,
        Topic::Education,
        Topic::Default,
    ];

    /// Order in which trigger sets are tested. The first topic with a matching
    /// trigger wins, so an input containing both "hi" and "project" is a greeting.
    pub const PRIORITY: [Topic; 6] = [
        Topic::Greeting,
        Topic::Experience,
        Topic::Skills,
        Topic::Projects,
        Topic::Contact,
        Topic::Education,
    ];

    /// Lowercase name, as used on the command line and in knowledge files.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Experience => "experience",
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Contact => "contact",
            Topic::Education => "education",
            Topic::Default => "default",
        }
    }

    /// Position in [`Topic::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FolioError::UnknownTopic {
                name: s.to_string(),
            })
    }
}
