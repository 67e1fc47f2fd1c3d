//! Missing-member set computation
//!
//! The set difference at the heart of the analyzer: which of the entity's
//! properties does the wrapper not yet declare.

use rustc_hash::FxHashSet;
use veneer_types::{EntityMember, EntityType};

/// Compute the entity properties not yet mirrored by the wrapper.
///
/// Filters the entity's members to property kind, then keeps every member
/// whose name is absent from `declared`. Order follows the entity's
/// declaration order, so generated output is deterministic.
///
/// Pure: no side effects, same inputs always give the same answer.
/// Feeding the returned names back into `declared` yields an empty result.
pub fn missing_members<'a>(
    entity: &'a EntityType,
    declared: &FxHashSet<&str>,
) -> Vec<&'a EntityMember> {
    entity
        .properties()
        .filter(|member| !declared.contains(member.name.as_str()))
        .collect()
}
