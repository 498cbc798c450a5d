//! Logging abstractions for transport-agnostic logging

mod noop;
mod stderr;
mod traits;

pub use noop::NoOpLogger;
pub use stderr::StderrLogger;
pub use traits::{Logger, SharedLogger};
