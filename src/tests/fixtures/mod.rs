// Shared test fixtures, compiled only for unit tests.

pub mod candidates;
pub mod commands;
pub mod events;
pub mod state;
pub mod view_events;
