//! # Folio Contact Form
//!
//! File: cli/src/contact.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The portfolio's contact form. All four fields are required and the email
//! address gets a shape check. A valid form produces a local acknowledgment;
//! nothing is transmitted anywhere.
//!
use crate::core::error::{FolioError, Result};
use tracing::debug;

/// Visitor-supplied contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Confirmation shown after a valid form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

impl Acknowledgment {
    pub const SENT: Acknowledgment = Acknowledgment {
        title: "Message sent!",
        description: "Thank you for your message. I'll get back to you soon!",
    };
}

impl ContactForm {
    /// Checks every field and returns the acknowledgment.
    pub fn validate(&self) -> Result<Acknowledgment> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(FolioError::ContactField {
                    field,
                    reason: "is required".into(),
                }
                .into());
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(FolioError::ContactField {
                field: "email",
                reason: format!("'{}' is not a valid email address", self.email.trim()),
            }
            .into());
        }
        debug!(
            "Contact form from {} <{}> accepted: {:?}",
            self.name.trim(),
            self.email.trim(),
            self.subject.trim()
        );
        Ok(Acknowledgment::SENT)
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
