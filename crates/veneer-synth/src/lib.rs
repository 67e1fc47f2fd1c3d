//! Veneer Declaration Synthesizer
//!
//! Turns a missing-member set into insertable delegating accessors:
//! resolves each member's display type against the imports visible at the
//! insertion point, extends the import list when a namespace is not yet
//! covered, and renders accessor declarations that read and write through
//! the wrapped entity with a change-notification call on write.
//!
//! Synthesis is all-or-nothing: if the anchor constructor's parameter no
//! longer resolves, the whole invocation is a no-op and the source stays
//! untouched.

#![warn(missing_docs)]

pub mod apply;
pub mod imports;
pub mod synth;

pub use apply::apply;
pub use imports::ImportSet;
pub use synth::{synthesize, GeneratedMember, SynthOutput};
