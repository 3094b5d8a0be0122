//! Lingora - multilingual companion for a static blog.
//!
//! Two loosely coupled pieces: per-locale post metadata for the external
//! site generator, and the language-switch flow visitors trigger on the
//! published pages, runnable here against a live site.

mod cli;
mod config;
mod locale;
mod metadata;
mod switcher;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use locale::Locale;
use metadata::{LocaleMetadata, PageContext, all_locales};
use std::path::Path;
use switcher::{
    ConsoleHost, FileStore, HttpProbe, Switcher,
    storage::{store_language, stored_language},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Metadata { locale } => print_metadata(*locale, config),
        Commands::Permalink { locale, slug } => print_permalink(*locale, slug, config),
        Commands::Switch { to, path, lang, .. } => run_switch(*to, path, *lang, config).await,
        Commands::Prefs { set } => run_prefs(*set, config),
    }
}

/// Load configuration from CLI arguments.
///
/// A missing config file is not an error: every setting has a default, so
/// the tool works out of the box next to any site checkout.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Print locale metadata as JSON, for one locale or all of them.
fn print_metadata(locale: Option<Locale>, config: &SiteConfig) -> Result<()> {
    let layout = &config.metadata.layout;
    let json = match locale {
        Some(lang) => serde_json::to_string_pretty(&LocaleMetadata::for_locale(lang, layout))?,
        None => serde_json::to_string_pretty(&all_locales(layout))?,
    };
    println!("{json}");
    Ok(())
}

/// Print the permalink a post would be published under.
fn print_permalink(locale: Locale, slug: &str, config: &SiteConfig) -> Result<()> {
    let meta = LocaleMetadata::for_locale(locale, &config.metadata.layout);
    println!("{}", meta.permalink(&PageContext::new(slug)));
    Ok(())
}

/// Run the full switch flow against the configured site origin and print
/// the destination the visitor would land on.
async fn run_switch(
    to: Locale,
    path: &str,
    lang: Option<Locale>,
    config: &SiteConfig,
) -> Result<()> {
    let base_url = config
        .probe_base_url()
        .context("no site origin configured")?;

    let host = ConsoleHost::new(lang, Some(path.to_owned()));
    let store = FileStore::new(config.preferences_path());
    let mut switcher = Switcher::new(host, store, HttpProbe::new(&base_url));

    switcher.switch_language(to.code()).await;

    let host = switcher.into_host();
    if let Some(destination) = host.destination() {
        println!("{destination}");
    }
    Ok(())
}

/// Show or set the persisted language preference.
fn run_prefs(set: Option<Locale>, config: &SiteConfig) -> Result<()> {
    let mut store = FileStore::new(config.preferences_path());

    match set {
        Some(lang) => {
            store_language(&mut store, lang);
            crate::log!("prefs"; "preference set to {lang}");
        }
        None => println!("{}", stored_language(&store)),
    }
    Ok(())
}
