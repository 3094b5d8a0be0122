//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::locale::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lingora multilingual blog companion CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: lingora.toml)
    #[arg(short = 'C', long, default_value = "lingora.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the locale metadata consumed by the site generator, as JSON
    Metadata {
        /// Restrict output to one locale
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Derive the permalink of a post from its file slug
    Permalink {
        /// Locale the post is published under
        #[arg(short, long)]
        locale: Locale,

        /// Generator-derived file slug of the post
        slug: String,
    },

    /// Run the language-switch flow against a live site and print where it lands
    Switch {
        /// Target language
        to: Locale,

        /// Path of the page being viewed
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Language of the page being viewed (defaults like a page without
        /// a `data-current-lang` attribute)
        #[arg(short, long)]
        lang: Option<Locale>,

        /// Override the site origin used for the existence probe.
        ///
        /// Useful for checking a local build without touching lingora.toml:
        ///   lingora switch ro --path /en/blog/a-post/ --base-url "http://127.0.0.1:8080"
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },

    /// Show or set the persisted language preference
    Prefs {
        /// Set the preference instead of showing it
        #[arg(short, long)]
        set: Option<Locale>,
    },
}

impl Cli {
    pub const fn is_switch(&self) -> bool {
        matches!(self.command, Commands::Switch { .. })
    }
}
