//! # Folio Contact Command
//!
//! File: cli/src/commands/contact.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio contact`. The form is validated and acknowledged locally;
//! the message is not sent anywhere.
//!
//! ```bash
//! folio contact --name "Ada Lovelace" --email ada@example.com \
//!     --subject "Project inquiry" --message "Let's talk!"
//! ```
//!
use clap::Parser;
use folio::contact::ContactForm;
use folio::core::error::Result;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ContactArgs {
    /// Your full name.
    #[arg(long)]
    pub name: String,

    /// Your email address.
    #[arg(long)]
    pub email: String,

    /// What this is about.
    #[arg(long)]
    pub subject: String,

    /// The message itself.
    #[arg(long)]
    pub message: String,
}

impl From<ContactArgs> for ContactForm {
    fn from(args: ContactArgs) -> Self {
        ContactForm {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        }
    }
}

pub async fn handle_contact(args: ContactArgs) -> Result<()> {
    info!("Handling contact command for subject {:?}", args.subject);

    let ack = ContactForm::from(args).validate()?;
    println!("{}", ack.title);
    println!("{}", ack.description);
    Ok(())
}
