pub mod ids;
pub mod io;
pub mod lifecycle;
pub mod models;
pub mod transcode;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use lifecycle::{DocumentHost, HookOutcome, Lifecycle, LifecycleEvent, ReadOnlyGuard};
pub use models::*;
pub use transcode::{SerializeOptions, normalize, parse, serialize, serialize_with};
