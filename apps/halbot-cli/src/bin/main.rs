use std::env;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use halbot_cli::run_shell;
use halbot_core::config::{expand_path, Config};
use halbot_core::registry::IndexRegistry;
use halbot_dispatch::standard_dispatcher;
use halbot_solr::SolrClient;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn parse_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().cloned().unwrap_or_else(|| "halbot".to_string());
    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() { eprintln!("--config requires a path"); std::process::exit(2); }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--version" | "-V" => { println!("halbot {}", VERSION); std::process::exit(0); }
            "--help" | "-h" => {
                println!("Usage: {} [--config PATH]\nReads chat messages from stdin, one per line.", prog);
                std::process::exit(0);
            }
            other => { eprintln!("Unknown argument: {}", other); std::process::exit(2); }
        }
    }
    config_path
}

fn main() -> anyhow::Result<()> {
    let config_path = parse_args();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("Starting halbot {}", VERSION);

    let config = match config_path {
        Some(path) => Config::load_from(expand_path(path)),
        None => Config::load(),
    }
    .context("loading configuration")?;
    let settings = config.settings();

    let registry = Arc::new(IndexRegistry::from_settings(settings));
    if registry.is_empty() {
        info!("no indices configured, only non-search commands will answer");
    }
    let client = SolrClient::from_settings(&settings.http).context("building HTTP client")?;
    let dispatcher = standard_dispatcher(&settings.bot, registry, Arc::new(client)).context("registering commands")?;

    let stats = run_shell(&dispatcher, io::stdin().lock(), io::stdout().lock())?;
    info!(messages = stats.messages, replies = stats.replies, failures = stats.failures, "input closed");
    Ok(())
}
