use fancy_regex::Regex;
use ferrous_recon_domain::{DomainError, LifecycleError};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub type HandlerAction = Arc<dyn Fn(&[String]) -> Result<(), DomainError> + Send + Sync>;

/// A named command a module exposes to the session's command dispatcher.
#[derive(Clone)]
pub struct ModuleHandler {
    name: String,
    pattern: Regex,
    help: String,
    action: HandlerAction,
}

impl ModuleHandler {
    pub fn new<F>(name: &str, pattern: &str, help: &str, action: F) -> Result<Self, DomainError>
    where
        F: Fn(&[String]) -> Result<(), DomainError> + Send + Sync + 'static,
    {
        let pattern = Regex::new(pattern).map_err(|e| DomainError::InvalidCommandPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            pattern,
            help: help.to_string(),
            action: Arc::new(action),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Capture groups of `line` when it matches this handler's pattern
    pub fn parse(&self, line: &str) -> Option<Vec<String>> {
        let captures = self.pattern.captures(line).ok()??;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }

    pub fn exec(&self, args: &[String]) -> Result<(), DomainError> {
        (self.action)(args)
    }
}

impl fmt::Debug for ModuleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandler")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Background task contract shared by every session module.
///
/// `start` and `stop` are guarded by the module's own running state: a
/// second `start` fails with [`LifecycleError::AlreadyRunning`] and spawns
/// nothing, a `stop` on an idle module fails with
/// [`LifecycleError::AlreadyStopped`] and signals nothing.
pub trait Module: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn author(&self) -> &'static str;

    /// Commands bound to this module instance
    fn handlers(self: Arc<Self>) -> Result<Vec<ModuleHandler>, DomainError>;

    fn start(&self) -> Result<(), LifecycleError>;

    fn stop(&self) -> Result<(), LifecycleError>;

    fn is_running(&self) -> bool;

    fn on_session_ended(&self) {
        if self.is_running() {
            if let Err(e) = self.stop() {
                debug!(module = self.name(), error = %e, "Module stopped concurrently");
            }
        }
    }
}
