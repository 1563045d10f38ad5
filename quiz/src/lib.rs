//! Quiz authoring and play engine for KnoWord blog posts.
//!
//! This crate is pure Rust with no browser dependencies. The client links it
//! into the WASM bundle and bridges it to Leptos through thin components; all
//! decisions about what a quiz may contain and how it is scored live here so
//! they can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`question`] | Committed question model and its correctness invariant |
//! | [`builder`] | Authoring state: form slots, validation, commit/edit/remove |
//! | [`player`] | Read-only play state: selection, submit freeze, scoring |
//! | [`consts`] | Shared limits (question cap, option slot count) |

pub mod builder;
pub mod consts;
pub mod player;
pub mod question;
