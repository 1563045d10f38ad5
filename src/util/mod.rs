//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and storage concerns from page and
//! component logic so the pure parts stay testable off-browser.

pub mod cookies;
pub mod debounce;
pub mod draft;
pub mod routes;
pub mod sanitize;
pub mod storage;
