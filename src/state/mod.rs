//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. The session is the only app-wide piece; availability is
//! scoped to the registration form.

pub mod availability;
pub mod session;
