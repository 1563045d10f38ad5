//! Networking modules for the REST backend and the image host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` covers the public auth endpoints, `session_client` is the
//! bearer-token transport with refresh-and-replay, and the domain modules
//! (`communities`, `posts`, `users`) are typed wrappers over it. `upload`
//! talks to the external image host directly.

pub mod api;
pub mod communities;
pub mod error;
pub mod posts;
pub mod session_client;
pub mod types;
pub mod upload;
pub mod users;
