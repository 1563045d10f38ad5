//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, cards, dialogs) and the form
//! widgets pages compose together, reading session state from Leptos context
//! providers. The quiz widgets are thin bridges over the `quiz` crate, which
//! owns all authoring and scoring rules.

pub mod availability_field;
pub mod community_card;
pub mod editor;
pub mod guard;
pub mod image_upload;
pub mod modal;
pub mod navbar;
pub mod post_card;
pub mod quiz_builder;
pub mod quiz_player;
