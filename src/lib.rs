//! Change notifications for a service-discovery routing table.
//!
//! Routing table mutations (insert / update / delete) are published as
//! [`Event`]s. Each consumer owns a [`Watcher`] that filters the events by
//! destination and hands them out in arrival order until it is stopped.

mod config;
mod constants;
mod errors;
mod event;
mod route;
mod watch;
pub mod utils;

pub use config::*;
pub use constants::WILDCARD_DESTINATION;
pub use errors::*;
pub use event::*;
pub use route::*;
pub use watch::*;

#[cfg(test)]
mod errors_test;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
