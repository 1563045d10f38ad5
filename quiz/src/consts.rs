//! Shared numeric limits for quiz authoring and play.

/// Maximum number of questions a single quiz may hold.
pub const MAX_QUESTIONS: usize = 10;

/// Number of option slots on every question. Fixed: the form always renders
/// exactly this many inputs and a committed question always carries this many
/// options.
pub const OPTION_SLOTS: usize = 4;
