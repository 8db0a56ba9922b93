// Composition root for the recipe server.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the SQLite store and wire it into the recipe use cases.
// - Serve the REST router.

pub mod http;
pub mod state;
