//! Interactive RSVP guest-list tracker.
//!
//! Add guests with a party size, view the accumulated list, and persist it
//! to a local binary roster file between runs.
//!
//! Layering:
//! - `domain`: entities and business rules, no I/O
//! - `application`: services (roster persistence, interactive session)
//! - `infrastructure`: I/O boundary traits and real implementations
//! - `cli`: argument parsing and top-level error mapping

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
