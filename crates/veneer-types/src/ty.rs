//! Entity type and member views

use crate::error::TypeError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a named type, optionally qualified by its namespace.
///
/// References without a namespace model primitives and other globally
/// visible names (`int`, `string`); they never require an import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Short type name, e.g. `ICollection<string>`
    pub name: String,
    /// Containing namespace, e.g. `System.Collections.Generic`
    pub namespace: Option<String>,
}

impl TypeRef {
    /// A reference with no namespace
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            namespace: None,
        }
    }

    /// A reference qualified by a namespace
    pub fn in_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Parse a dotted display string into a reference.
    ///
    /// The last `.`-separated segment becomes the short name and everything
    /// before it the namespace, so `System.Threading.Tasks.Task` parses to
    /// `Task` in `System.Threading.Tasks`. A single segment parses to an
    /// unqualified reference.
    pub fn parse(display: &str) -> Result<Self, TypeError> {
        let display = display.trim();
        if display.is_empty() {
            return Err(TypeError::InvalidTypeName {
                name: display.to_string(),
            });
        }

        match display.rsplit_once('.') {
            Some((namespace, name)) => {
                if namespace.is_empty() || name.is_empty() {
                    return Err(TypeError::InvalidTypeName {
                        name: display.to_string(),
                    });
                }
                Ok(TypeRef::in_namespace(name, namespace))
            }
            None => Ok(TypeRef::new(display)),
        }
    }

    /// The short, unqualified name
    pub fn short(&self) -> &str {
        &self.name
    }

    /// The fully qualified display string
    pub fn qualified(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}.{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Member kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    /// Property with get/set accessors
    Property,
    /// Plain field
    Field,
    /// Method
    Method,
    /// Event
    Event,
}

/// One member of an entity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMember {
    /// Member name
    pub name: String,
    /// Member kind
    pub kind: MemberKind,
    /// Member type
    pub ty: TypeRef,
}

impl EntityMember {
    /// A property member
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        EntityMember {
            name: name.into(),
            kind: MemberKind::Property,
            ty,
        }
    }
}

/// Snapshot of a wrapped entity type.
///
/// Member order is the entity's declaration order; generated output
/// follows it, which keeps fixes deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    /// Type name
    pub name: String,
    /// Containing namespace
    pub namespace: Option<String>,
    /// Base type, if the entity declares one
    pub base: Option<TypeRef>,
    /// Members in declaration order
    pub members: Vec<EntityMember>,
}

impl EntityType {
    /// Property-kind members, in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &EntityMember> {
        self.members
            .iter()
            .filter(|member| member.kind == MemberKind::Property)
    }

    /// Check that member names are unique.
    ///
    /// Duplicate names are a host-side defect; hosts that cannot guarantee
    /// uniqueness call this before handing the snapshot to the analyzer.
    pub fn validate(&self) -> Result<(), TypeError> {
        let mut seen = FxHashSet::default();
        for member in &self.members {
            if !seen.insert(member.name.as_str()) {
                return Err(TypeError::DuplicateMember {
                    entity: self.name.clone(),
                    member: member.name.clone(),
                });
            }
        }
        Ok(())
    }
}
