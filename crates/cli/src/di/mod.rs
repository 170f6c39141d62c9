mod adapters;
mod modules;
mod use_cases;

pub use adapters::Adapters;
pub use modules::Modules;
pub use use_cases::UseCases;
