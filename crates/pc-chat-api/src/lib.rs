//! Portfolio chat API: library crate for the chat server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pc-e2e-tests`) can reach `AppState`, `build_router`, and the
//! reply `Resolver`.

pub mod config;
pub mod error;
pub mod reply;
pub mod routes;
pub mod state;
