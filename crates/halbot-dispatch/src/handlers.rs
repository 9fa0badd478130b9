//! Stock bindings: liveness, search, echo and the help catch-all.

use std::sync::Arc;

use tracing::info;

use halbot_core::config::BotSettings;
use halbot_core::error::{Error, Result};
use halbot_core::registry::IndexRegistry;
use halbot_core::traits::SearchBackend;

use crate::command::{search_pattern, SearchCommand};
use crate::dispatcher::{CommandMatch, Dispatcher, Handler};
use crate::format::render_summary;

pub const PONG: &str = "PONG";
pub const UNKNOWN_INDEX_REPLY: &str = "I do not recognize that index, Dave. Do you keep secrets from me? Dave?";

pub const PING_PATTERN: &str = r"^ping$";
pub const ECHO_PATTERN: &str = r"^echo (.+)$";

pub fn ping(_: &CommandMatch) -> Result<String> {
    Ok(PONG.to_string())
}

pub fn echo(captures: &CommandMatch) -> Result<String> {
    Ok(captures.get(0).to_string())
}

pub struct SearchHandler {
    registry: Arc<IndexRegistry>,
    backend: Arc<dyn SearchBackend>,
}

impl SearchHandler {
    pub fn new(registry: Arc<IndexRegistry>, backend: Arc<dyn SearchBackend>) -> Self {
        Self { registry, backend }
    }
}

impl Handler for SearchHandler {
    fn handle(&self, captures: &CommandMatch) -> Result<String> {
        let command = SearchCommand::from_match(captures);
        let base_endpoint = match self.registry.resolve(&command.alias) {
            Ok(endpoint) => endpoint,
            Err(Error::UnknownAlias(alias)) => {
                info!(%alias, "search for unregistered index");
                return Ok(UNKNOWN_INDEX_REPLY.to_string());
            }
            Err(e) => return Err(e),
        };
        let count = command.count()?;
        let result = self.backend.search(base_endpoint, &command.query)?;
        Ok(render_summary(&command.alias, &command.query, &result, count))
    }
}

pub struct AboutHandler {
    registry: Arc<IndexRegistry>,
    trigger: String,
}

impl AboutHandler {
    pub fn new(registry: Arc<IndexRegistry>, trigger: impl Into<String>) -> Self {
        Self { registry, trigger: trigger.into() }
    }
}

impl Handler for AboutHandler {
    fn handle(&self, _: &CommandMatch) -> Result<String> {
        let indices: Vec<&str> = self.registry.aliases().collect();
        Ok(format!(
            r#"Hi, you can ask SOLR queries for these indices: {}. Syntax: "{t} <index> q <query>", e.g. "{t} ai q source_id:48"."#,
            indices.join(", "),
            t = self.trigger
        ))
    }
}

pub fn about_pattern(trigger: &str) -> String {
    format!(r"^{}\b", regex::escape(trigger))
}

/// `ping`, search, optional `echo`, then the help catch-all, in that order.
pub fn standard_dispatcher(
    bot: &BotSettings,
    registry: Arc<IndexRegistry>,
    backend: Arc<dyn SearchBackend>,
) -> Result<Dispatcher> {
    let mut builder = Dispatcher::builder()
        .bind("ping", PING_PATTERN, ping)?
        .bind("search", &search_pattern(&bot.trigger), SearchHandler::new(registry.clone(), backend))?;
    if bot.echo {
        builder = builder.bind("echo", ECHO_PATTERN, echo)?;
    }
    builder = builder.bind("about", &about_pattern(&bot.trigger), AboutHandler::new(registry, bot.trigger.clone()))?;
    Ok(builder.build())
}
