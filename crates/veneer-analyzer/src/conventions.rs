//! Convention configuration
//!
//! The wrapper/entity relationship is recognized by name convention, not
//! by semantic knowledge of any particular base class. The markers here
//! are deliberately cheap substring heuristics; a class whose base merely
//! contains the marker text will match.

use serde::{Deserialize, Serialize};

/// Naming conventions the detector and synthesizer run under.
///
/// Passed by value into every entry point so that hosts can run several
/// configurations concurrently without interference. The defaults
/// reproduce the common MVVM shape: `FooModel : SomethingModel<FooEntity>`
/// wrapping an `Entity`-derived data object and notifying through
/// `RaisePropertyChanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Substring the wrapper's first base-type token must contain.
    /// Case-sensitive.
    pub model_marker: String,

    /// Substring the wrapped type's base-type name must contain.
    /// Case-sensitive.
    pub entity_marker: String,

    /// Wrapper member the generated accessors delegate through.
    pub wrapped_field: String,

    /// Parameterless change-notification call appended to every generated
    /// setter.
    pub notify_hook: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Conventions {
            model_marker: "Model".to_string(),
            entity_marker: "Entity".to_string(),
            wrapped_field: "Entity".to_string(),
            notify_hook: "RaisePropertyChanged".to_string(),
        }
    }
}
