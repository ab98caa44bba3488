// Composition root.
//
// Responsibilities
// - Read settings from the environment.
// - Instantiate concrete infrastructure and wire it into use case handlers.
// - Expose the REST router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
