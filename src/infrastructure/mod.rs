//! Infrastructure layer: I/O implementations
//!
//! This layer implements the I/O boundary traits used by services.

pub mod traits;

pub use traits::{Console, FileSystem, RealFileSystem, StdConsole};
