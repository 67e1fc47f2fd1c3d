//! Compilation unit and using directives

use crate::decl::ClassDecl;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single source file's worth of structure: the using directives visible
/// at its top level and the classes it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Using directives in declared order
    pub usings: Vec<UsingDirective>,
    /// Class declarations in declared order
    pub classes: Vec<ClassDecl>,
    pub span: Span,
}

impl CompilationUnit {
    /// Find a declared class by name
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|class| class.name.name == name)
    }

    /// Whether a using directive for `namespace` is already present.
    ///
    /// Exact string match only; `System` does not cover
    /// `System.Collections.Generic`.
    pub fn has_using(&self, namespace: &str) -> bool {
        self.usings.iter().any(|using| using.namespace == namespace)
    }
}

/// A namespace import at the top of a compilation unit
///
/// Two directives are equal when they name the same namespace, regardless
/// of where they appear in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsingDirective {
    /// Imported namespace, e.g. `System.Collections.Generic`
    pub namespace: String,
    pub span: Span,
}

impl UsingDirective {
    /// Create a new using directive
    pub fn new(namespace: impl Into<String>, span: Span) -> Self {
        UsingDirective {
            namespace: namespace.into(),
            span,
        }
    }
}

impl PartialEq for UsingDirective {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
    }
}

impl Eq for UsingDirective {}

impl Hash for UsingDirective {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_using_equality_ignores_span() {
        let a = UsingDirective::new("System.Linq", Span::new(0, 17, 1, 1));
        let b = UsingDirective::new("System.Linq", Span::new(40, 57, 3, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_has_using_is_exact_match() {
        let unit = CompilationUnit {
            usings: vec![UsingDirective::new("System", Span::new(0, 12, 1, 1))],
            classes: vec![],
            span: Span::new(0, 12, 1, 1),
        };
        assert!(unit.has_using("System"));
        assert!(!unit.has_using("System.Collections.Generic"));
    }
}
