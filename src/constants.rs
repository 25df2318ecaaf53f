//! Named defaults for the recommendation core.
//!
//! Every fallback the parser and engine apply is an intentional, documented
//! constant rather than an incidental literal buried in an expression.

/// Grade assumed for a slot when the player's text never states one.
pub const DEFAULT_GRADE: u32 = 3;

/// Minimum candidate count for a meaningful same-tier comparison. Fewer
/// candidates makes the slot/problem combination a defined no-op.
pub const MIN_CANDIDATES: usize = 2;
