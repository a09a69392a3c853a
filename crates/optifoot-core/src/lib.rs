// Library root: re-exports all modules so integration tests and the
// `optifoot` binary can access the crate's public API.

pub mod analytics;
pub mod clubs;
pub mod config;
pub mod player;
pub mod report;
pub mod roster;

#[cfg(test)]
pub(crate) mod testing;
