pub mod resolve_spoof;

pub use resolve_spoof::ResolveSpoofUseCase;
