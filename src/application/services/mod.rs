//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Console)
//! but are themselves concrete structs, not traits.

mod roster;
mod session;

pub use roster::RosterService;
pub use session::{Session, SessionOutcome};
