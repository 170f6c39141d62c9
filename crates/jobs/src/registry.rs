use crate::module::{Module, ModuleHandler};
use ferrous_recon_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info};

/// Explicit collection of the session's modules and their commands,
/// built once at startup.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
    handlers: Vec<ModuleHandler>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: Arc<dyn Module>) -> Result<Self, DomainError> {
        let handlers = Arc::clone(&module).handlers()?;
        debug!(
            module = module.name(),
            handlers = handlers.len(),
            "Module registered"
        );

        self.handlers.extend(handlers);
        self.modules.push(module);
        Ok(self)
    }

    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    pub fn handlers(&self) -> &[ModuleHandler] {
        &self.handlers
    }

    /// Run the first handler whose pattern accepts `line`
    pub fn dispatch(&self, line: &str) -> Result<(), DomainError> {
        let line = line.trim();

        for handler in &self.handlers {
            if let Some(args) = handler.parse(line) {
                debug!(command = handler.name(), ?args, "Dispatching command");
                return handler.exec(&args);
            }
        }

        Err(DomainError::UnknownCommand(line.to_string()))
    }

    /// Stop every running module; called when the session ends
    pub fn stop_all(&self) {
        for module in &self.modules {
            if module.is_running() {
                info!(module = module.name(), "Stopping module");
            }
            module.on_session_ended();
        }
    }
}
