//! Convention detection
//!
//! Walks a class declaration and decides whether it is a wrapper missing
//! delegating members. Every negative outcome is a silent `None`: across a
//! real codebase almost every class fails one of the structural checks,
//! and that is the expected path, not an error.

use crate::conventions::Conventions;
use crate::resolve::missing_members;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use veneer_syntax::{ClassDecl, CompilationUnit, Span};
use veneer_types::{EntityType, TypeResolver};

/// Fixed identifier carried by every finding
pub const DIAGNOSTIC_ID: &str = "VN0001";

/// A wrapper observed to be missing delegating members.
///
/// Carries the anchor (the first constructor's name token) and the wrapper
/// name used as the display argument; the missing member names themselves
/// are re-derived at fix time from a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Wrapper class name
    pub wrapper: String,
    /// Entity type name the wrapper delegates to
    pub entity: String,
    /// Location of the anchor constructor's name token
    pub anchor: Span,
    /// How many entity properties the wrapper does not declare
    pub missing_count: usize,
}

impl Finding {
    /// The human-readable finding message
    pub fn message(&self) -> String {
        format!(
            "wrapper '{}' is missing {} delegating member(s) from its wrapped entity '{}'",
            self.wrapper, self.missing_count, self.entity
        )
    }
}

/// Resolve the entity type a class wraps, if the class matches the
/// wrapper convention.
///
/// The structural checks, in order; any failure yields `None`:
/// 1. the class declares a base list, and the first base type's leading
///    token contains the model marker;
/// 2. the class declares a constructor (only the first declared one is
///    ever considered) with at least one parameter;
/// 3. the host resolves the first parameter to a concrete type;
/// 4. that type declares a base type whose name contains the entity
///    marker.
///
/// This is a heuristic structural match, not semantic verification of the
/// base-class identity.
pub fn wrapped_entity<'a>(
    class: &ClassDecl,
    host: &'a dyn TypeResolver,
    conventions: &Conventions,
) -> Option<&'a EntityType> {
    let base = class.first_base()?;
    if !base.leading_token().contains(&conventions.model_marker) {
        return None;
    }

    let ctor = class.first_constructor()?;
    let param = ctor.params.first()?;

    let entity = host.resolve(param).entity()?;
    let entity_base = entity.base.as_ref()?;
    if !entity_base.name.contains(&conventions.entity_marker) {
        return None;
    }

    Some(entity)
}

/// Run convention detection over a single class declaration.
///
/// Returns a finding anchored at the first constructor's name token when
/// the class matches the wrapper convention and the wrapped entity has
/// properties the class does not declare.
pub fn detect(
    class: &ClassDecl,
    host: &dyn TypeResolver,
    conventions: &Conventions,
) -> Option<Finding> {
    let entity = wrapped_entity(class, host, conventions)?;

    let declared: FxHashSet<&str> = class.declared_names().collect();
    let missing = missing_members(entity, &declared);
    if missing.is_empty() {
        return None;
    }

    // wrapped_entity already required a constructor
    let anchor = class.first_constructor()?.name.span;

    Some(Finding {
        wrapper: class.name.name.clone(),
        entity: entity.name.clone(),
        anchor,
        missing_count: missing.len(),
    })
}

/// Run detection over every class in a compilation unit.
///
/// Findings come back in class-declaration order. Hosts that analyze
/// classes concurrently call [`detect`] directly; this is the sequential
/// convenience over one file.
pub fn analyze_unit(
    unit: &CompilationUnit,
    host: &dyn TypeResolver,
    conventions: &Conventions,
) -> Vec<Finding> {
    unit.classes
        .iter()
        .filter_map(|class| detect(class, host, conventions))
        .collect()
}
