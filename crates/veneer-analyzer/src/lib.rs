//! Veneer Wrapper Analyzer
//!
//! Detection core for the wrapper-over-entity convention: classes deriving
//! from a model-style base, holding a wrapped entity supplied through
//! their first constructor parameter, and expected to mirror the entity's
//! properties with delegating accessors.
//!
//! This crate provides:
//! - The convention configuration ([`Conventions`])
//! - The missing-member set computation ([`resolve::missing_members`])
//! - The per-class convention detector ([`detector::detect`])
//! - Finding rendering as terminal or JSON diagnostics
//!
//! # Usage
//!
//! ```ignore
//! use veneer_analyzer::{analyze_unit, Conventions};
//!
//! let conventions = Conventions::default();
//! for finding in analyze_unit(&unit, &host, &conventions) {
//!     finding.to_diagnostic(file_id).emit(&files)?;
//! }
//! ```
//!
//! Every entry point takes immutable snapshots and returns owned values;
//! the host may run detection concurrently across classes and abandon any
//! call without cleanup.

#![warn(missing_docs)]

pub mod conventions;
pub mod detector;
pub mod diagnostic;
pub mod resolve;

pub use conventions::Conventions;
pub use detector::{analyze_unit, detect, wrapped_entity, Finding, DIAGNOSTIC_ID};
pub use diagnostic::{create_files, Diagnostic, JsonDiagnostic, JsonLabel};
pub use resolve::missing_members;
