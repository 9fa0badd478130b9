use halbot_core::error::{Error, Result};

use crate::dispatcher::CommandMatch;

/// Count tokens that mean "every document the backend returned".
/// `q` comes from users typing `qq`.
const ALL_TOKENS: [&str; 2] = ["q", "all"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedCount {
    All,
    Exactly(usize),
}

impl RequestedCount {
    /// `""` means no count was given.
    pub fn parse(token: &str) -> Result<Option<Self>> {
        if token.is_empty() {
            return Ok(None);
        }
        if ALL_TOKENS.contains(&token) {
            return Ok(Some(Self::All));
        }
        token
            .parse::<usize>()
            .map(|n| Some(Self::Exactly(n)))
            .map_err(|_| Error::InvalidCount(token.to_string()))
    }

    /// Number of items to render out of `available`; never more than that.
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Self::All => available,
            Self::Exactly(n) => n.min(available),
        }
    }
}

/// `<trigger> <alias> q<count>? <query>` after capture.
///
/// The count token stays raw until [`SearchCommand::count`] is asked for,
/// so an unknown alias is reported ahead of a malformed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    pub alias: String,
    pub count_token: String,
    pub query: String,
}

impl SearchCommand {
    /// Expects the three groups of [`search_pattern`] in order.
    pub fn from_match(captures: &CommandMatch) -> Self {
        Self {
            alias: captures.get(0).to_string(),
            count_token: captures.get(1).to_string(),
            query: captures.get(2).to_string(),
        }
    }

    pub fn count(&self) -> Result<Option<RequestedCount>> {
        RequestedCount::parse(&self.count_token)
    }
}

pub fn search_pattern(trigger: &str) -> String {
    format!(r"^{} (\w+) q(\w+)? (.+)$", regex::escape(trigger))
}
