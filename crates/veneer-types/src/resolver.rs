//! The host resolver boundary
//!
//! The analyzer never resolves symbols itself; it asks the host through
//! [`TypeResolver`]. The host answers from whatever compilation context it
//! has; the contract is only that the answer is an immutable snapshot
//! valid until the current invocation returns.

use crate::ty::EntityType;
use veneer_syntax::Parameter;

/// The host's answer to "what type does this parameter have"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The parameter resolved to a concrete declared type
    Resolved(&'a EntityType),
    /// The symbol is ambiguous or unknown to the host
    Unresolved,
}

impl<'a> Resolution<'a> {
    /// The resolved entity, if any
    pub fn entity(self) -> Option<&'a EntityType> {
        match self {
            Resolution::Resolved(entity) => Some(entity),
            Resolution::Unresolved => None,
        }
    }
}

/// Symbol-resolution query interface supplied by the host.
///
/// Implementations must be pure with respect to one invocation: repeated
/// calls with the same parameter return the same answer, and no call
/// blocks on another analysis in flight.
pub trait TypeResolver {
    /// Resolve a constructor parameter to its declared type
    fn resolve(&self, param: &Parameter) -> Resolution<'_>;
}
