//! # Folio Theme Command
//!
//! File: cli/src/commands/theme.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio theme`, which reads and updates the persisted light/dark
//! preference. Without a subcommand it behaves like `show`.
//!
//! ```bash
//! folio theme            # light
//! folio theme set dark
//! folio theme toggle     # light
//! ```
//!
use anyhow::Context;
use clap::{Parser, Subcommand};
use folio::core::config;
use folio::core::error::Result;
use folio::theme::{Theme, ThemeStore};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the current theme.
    Show,
    /// Save a theme preference.
    Set {
        /// `light` or `dark`.
        theme: Theme,
    },
    /// Switch between light and dark.
    Toggle,
}

pub async fn handle_theme(args: ThemeArgs) -> Result<()> {
    info!("Handling theme command with args: {:?}", args);

    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let store = ThemeStore::locate(cfg.theme.default)?;

    let theme = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => store.load()?,
        ThemeCommand::Set { theme } => {
            store.save(theme)?;
            theme
        }
        ThemeCommand::Toggle => store.toggle()?,
    };
    println!("{}", theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_theme_subcommands() {
        let args = ThemeArgs::try_parse_from(["theme"]).unwrap();
        assert!(args.command.is_none());

        let args = ThemeArgs::try_parse_from(["theme", "set", "dark"]).unwrap();
        match args.command {
            Some(ThemeCommand::Set { theme }) => assert_eq!(theme, Theme::Dark),
            other => panic!("Incorrect subcommand parsed for 'set': {:?}", other),
        }

        let args = ThemeArgs::try_parse_from(["theme", "toggle"]).unwrap();
        assert!(matches!(args.command, Some(ThemeCommand::Toggle)));
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(ThemeArgs::try_parse_from(["theme", "set", "sepia"]).is_err());
    }
}
