//! A sequence is anything that can hand out its elements in order, one
//! at a time, to a visitor. Implement [`SequenceCore`] and the operations
//! in [`SequenceExt`] come for free.
mod fold;
mod sequence_core;
mod traits;
mod traversal;
mod variant;

pub use sequence_core::Sequence;
pub use traits::{SequenceCore, SequenceExt};
pub use traversal::{traverse, Traversal};
pub use variant::{Empty, Many, One, Range};
