//! Typed client core for a Telegram-style bot HTTP API.
//!
//! This crate is intentionally transport-agnostic: the HTTP layer lives
//! behind the [`port::Transport`] trait, implemented by adapter crates. What
//! lives here is the marshalling core — wire documents in and out of typed
//! entities, UTF-16 entity-span resolution, markup rendering, and the thin
//! per-entity convenience calls that forward to the transport.

pub mod api;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod markup;
pub mod port;
pub mod requests;
pub mod spans;
pub mod types;
pub mod wire;

pub use api::Api;
pub use errors::{Error, Result};
pub use port::Transport;
