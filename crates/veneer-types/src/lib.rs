//! Veneer Type Views
//!
//! Read-only views over the host's type system: the shape of a wrapped
//! entity type, its members, and the resolver boundary through which the
//! analyzer asks the host what type a constructor parameter has.
//!
//! Everything here is an immutable snapshot valid for a single analysis or
//! fix invocation. The host owns the underlying type information; this
//! crate never caches or copies it across invocations.

#![warn(missing_docs)]

pub mod error;
pub mod resolver;
pub mod ty;

pub use error::TypeError;
pub use resolver::{Resolution, TypeResolver};
pub use ty::{EntityMember, EntityType, MemberKind, TypeRef};
