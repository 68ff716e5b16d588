// Public Initialiser - adds a public, parameterless constructor to marked public types

// Common modules
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod model;
pub mod request;
pub mod syntax;

// Tooling - file expansion and workspace checks
#[cfg(feature = "tooling")]
pub mod tooling;

// Re-export commonly used items for convenience
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use engine::{DEFAULT_MARKER, Outcome, evaluate, evaluate_with};
pub use error::{InitialiserError, Result};
pub use model::{Declaration, DeclarationKind, GeneratedFragment, Member, Modifier, Modifiers, Parameter};
