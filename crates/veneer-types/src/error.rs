//! Type view errors

use thiserror::Error;

/// Errors surfaced while building or validating host type views
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// A display string could not be split into namespace and name
    #[error("Invalid type name: '{name}'")]
    InvalidTypeName {
        /// The offending display string
        name: String,
    },

    /// An entity snapshot carries two members with the same name
    #[error("Duplicate member '{member}' on entity '{entity}'")]
    DuplicateMember {
        /// Entity type name
        entity: String,
        /// Duplicated member name
        member: String,
    },
}
