use regex::{Captures, Regex};
use tracing::debug;

use halbot_core::error::{Error, Result};

/// Capture groups of one matched message, group 0 excluded.
/// Groups that did not participate in the match are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMatch {
    groups: Vec<String>,
}

impl CommandMatch {
    fn from_captures(captures: &Captures<'_>) -> Self {
        let groups = captures
            .iter()
            .skip(1)
            .map(|g| g.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        Self { groups }
    }

    /// Group `index` (0-based, first user group is 0); `""` if out of range.
    pub fn get(&self, index: usize) -> &str {
        self.groups.get(index).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize { self.groups.len() }

    pub fn is_empty(&self) -> bool { self.groups.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for CommandMatch {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { groups: iter.into_iter().map(Into::into).collect() }
    }
}

pub trait Handler: Send + Sync {
    fn handle(&self, captures: &CommandMatch) -> Result<String>;
}

impl<F> Handler for F
where
    F: Fn(&CommandMatch) -> Result<String> + Send + Sync,
{
    fn handle(&self, captures: &CommandMatch) -> Result<String> { self(captures) }
}

struct Binding {
    name: String,
    pattern: Regex,
    handler: Box<dyn Handler>,
}

/// Ordered pattern bindings; the first pattern that matches a message owns it.
///
/// Register specific patterns before catch-alls that would shadow them.
pub struct Dispatcher {
    bindings: Vec<Binding>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder { DispatcherBuilder::default() }

    /// `Ok(None)` when nothing matched. Handler errors are returned as-is.
    pub fn dispatch(&self, message: &str) -> Result<Option<String>> {
        for binding in &self.bindings {
            if let Some(captures) = binding.pattern.captures(message) {
                debug!(binding = %binding.name, "message matched");
                let captures = CommandMatch::from_captures(&captures);
                return binding.handler.handle(&captures).map(Some);
            }
        }
        Ok(None)
    }

    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.name.as_str())
    }
}

#[derive(Default)]
pub struct DispatcherBuilder {
    bindings: Vec<Binding>,
}

impl DispatcherBuilder {
    pub fn bind<H>(mut self, name: impl Into<String>, pattern: &str, handler: H) -> Result<Self>
    where
        H: Handler + 'static,
    {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidConfig(format!("binding {name}: {e}")))?;
        self.bindings.push(Binding { name, pattern, handler: Box::new(handler) });
        Ok(self)
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher { bindings: self.bindings }
    }
}
