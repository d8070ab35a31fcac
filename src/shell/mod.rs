// Composition root for the scoring service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete adapters and wire them into the use case handlers.
// - Expose the REST router and the GraphQL schema over one shared state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
