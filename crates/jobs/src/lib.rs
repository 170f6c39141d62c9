pub mod module;
pub mod net_recon;
pub mod registry;

pub use module::{HandlerAction, Module, ModuleHandler};
pub use net_recon::NetReconModule;
pub use registry::ModuleRegistry;
