// Composition root for the employee directory.
//
// Responsibilities
// - Read config from environment.
// - Wrap the store in shared state.
// - Build the GraphQL schema and the HTTP router around it.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
