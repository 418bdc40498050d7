//! Library crate for shadesmith: the color engine plus the HTTP layers hosting it, exposed for
//! binaries and integration tests.

pub mod config;
pub mod dto;
pub mod engine;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
