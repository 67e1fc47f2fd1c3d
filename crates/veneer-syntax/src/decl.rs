//! Class declaration nodes
//!
//! The member variants here are the closed set the analyzer inspects:
//! properties, constructors, fields, and methods. A host feeding richer
//! syntax (events, indexers, nested types) maps anything else onto
//! `Method` or leaves it out; the analyzer only ever reads names, spans,
//! and the shapes modeled below.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A name token with its source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Token text
    pub name: String,
    /// Token location
    pub span: Span,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

// ============================================================================
// Class Declaration
// ============================================================================

/// A declared class with its base list and members
///
/// # Example
/// ```text
/// public class ImageModel : AModel<ImageEntity>
/// {
///     public ImageModel(ImageEntity entity) : base(entity) { }
///
///     public string Name { get; set; }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name
    pub name: Identifier,

    /// Base list, in declared order (empty when the class declares none)
    pub bases: Vec<BaseTypeRef>,

    /// Members in declared order
    pub members: Vec<ClassMember>,

    pub span: Span,
}

impl ClassDecl {
    /// The first declared base type, if any
    pub fn first_base(&self) -> Option<&BaseTypeRef> {
        self.bases.first()
    }

    /// The first declared constructor, if any.
    ///
    /// Later constructors are ignored throughout the analyzer; the first
    /// one is the anchor.
    pub fn first_constructor(&self) -> Option<&ConstructorDecl> {
        self.members.iter().find_map(|member| match member {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    /// Names of all declared non-constructor members
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Property(prop) => Some(prop.name.name.as_str()),
            ClassMember::Field(field) => Some(field.name.name.as_str()),
            ClassMember::Method(method) => Some(method.name.name.as_str()),
            ClassMember::Constructor(_) => None,
        })
    }
}

/// A member of a class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMember {
    /// Property declaration
    Property(PropertyDecl),
    /// Constructor declaration
    Constructor(ConstructorDecl),
    /// Field declaration
    Field(FieldDecl),
    /// Method declaration
    Method(MethodDecl),
}

impl ClassMember {
    /// Get the span of this member
    pub fn span(&self) -> &Span {
        match self {
            ClassMember::Property(m) => &m.span,
            ClassMember::Constructor(m) => &m.span,
            ClassMember::Field(m) => &m.span,
            ClassMember::Method(m) => &m.span,
        }
    }
}

/// Property declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    /// Property name
    pub name: Identifier,
    /// Declared type, as written in source
    pub ty: String,
    pub span: Span,
}

/// Constructor declaration
///
/// The name token doubles as the finding anchor and the insertion point
/// for synthesized members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    /// Constructor name token
    pub name: Identifier,
    /// Parameters in declared order
    pub params: Vec<Parameter>,
    pub span: Span,
}

/// Constructor or method parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: Identifier,
    /// Declared type, as written in source
    pub ty: String,
    pub span: Span,
}

/// Field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name
    pub name: Identifier,
    /// Declared type, as written in source
    pub ty: String,
    pub span: Span,
}

/// Method declaration
///
/// Only the name matters to the analyzer; signatures are not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name
    pub name: Identifier,
    pub span: Span,
}

// ============================================================================
// Base Types
// ============================================================================

/// A reference to a base type in a class's base list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTypeRef {
    /// The reference as written, e.g. `AModel<ImageEntity>`
    pub name: String,
    pub span: Span,
}

impl BaseTypeRef {
    /// Create a new base-type reference
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        BaseTypeRef {
            name: name.into(),
            span,
        }
    }

    /// The leading identifier token of the reference.
    ///
    /// `AModel<ImageEntity>` yields `AModel`; a plain `BindableBase`
    /// yields itself. Convention matching runs against this token only.
    pub fn leading_token(&self) -> &str {
        let end = self
            .name
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(self.name.len());
        &self.name[..end]
    }
}
