//! Core types for hashtag lookup: entity descriptors, type priority, and the
//! pure text analysis run on every keystroke.
//!
//! Nothing in this crate performs I/O or keeps state between calls. The
//! trigger rule in particular must stay cheap enough to evaluate without
//! throttling.

/// Code region detection (fences, `[code]` blocks, inline spans, indented lines).
pub mod code;
/// In-progress term extraction at the cursor.
pub mod cursor;
/// Entity descriptors and type ordering.
pub mod hashtag;
/// Autocomplete trigger rule.
pub mod trigger;

pub use code::in_code_region;
pub use cursor::{TermSpan, term_at_cursor};
pub use hashtag::{DEFAULT_TRIGGER, Hashtag, TYPE_SUFFIX_SEPARATOR, TypeOrder, strip_type_suffix};
pub use trigger::{HEADING_MAX_COLUMN, TriggerContext, should_trigger};
