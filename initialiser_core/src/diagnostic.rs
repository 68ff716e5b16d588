//! Diagnostics produced by the engine.
//!
//! A diagnostic is data: the engine never prints. Hosts decide how to render
//! it (a `compile_error!` in the attribute macro, a `file:line:column` line in
//! the CLI) using the anchor they handed in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact wording of the redundancy warning. Kept verbatim for compatibility.
pub const REDUNDANT_INITIALISER_MESSAGE: &str = "A public, parameterless parameter already exists";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The marker sits on something that is neither a class nor a struct.
    IneligibleKind,
    /// The declaration is not public.
    NonPublicType,
    /// A public, parameterless initializer is already declared.
    RedundantInitialiser,
    /// The name of the generated constructor is already used by another
    /// member of the type. Only raised by the Rust hosts.
    ConstructorNameTaken,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::IneligibleKind
            | DiagnosticKind::NonPublicType
            | DiagnosticKind::ConstructorNameTaken => Severity::Error,
            DiagnosticKind::RedundantInitialiser => Severity::Warning,
        }
    }

    /// Renders the message for this kind. `marker` is the marker's display name,
    /// e.g. `#[public_initialiser]`.
    pub fn message(self, marker: &str) -> String {
        match self {
            DiagnosticKind::IneligibleKind => {
                format!("{marker} can only be applied to a class or a struct")
            }
            DiagnosticKind::NonPublicType => format!("{marker} can only be applied to a public type"),
            DiagnosticKind::RedundantInitialiser => REDUNDANT_INITIALISER_MESSAGE.to_string(),
            DiagnosticKind::ConstructorNameTaken => {
                format!("{marker} cannot generate `new()`: the type already defines `new`")
            }
        }
    }
}

/// A message, its severity, and the node it is anchored to.
///
/// `A` is whatever the host uses to locate the marker: a `proc_macro2::Span`
/// inside rustc, a source location in the CLI, an opaque JSON value over the
/// serialized boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic<A> {
    pub kind: DiagnosticKind,
    pub message: String,
    pub severity: Severity,
    pub anchor: A,
}

impl<A> Diagnostic<A> {
    pub fn new(kind: DiagnosticKind, marker: &str, anchor: A) -> Self {
        Diagnostic {
            kind,
            message: kind.message(marker),
            severity: kind.severity(),
            anchor,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn map_anchor<B>(self, f: impl FnOnce(A) -> B) -> Diagnostic<B> {
        Diagnostic {
            kind: self.kind,
            message: self.message,
            severity: self.severity,
            anchor: f(self.anchor),
        }
    }
}

impl<A> fmt::Display for Diagnostic<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_failures_are_errors() {
        assert_eq!(DiagnosticKind::IneligibleKind.severity(), Severity::Error);
        assert_eq!(DiagnosticKind::NonPublicType.severity(), Severity::Error);
        assert_eq!(
            DiagnosticKind::ConstructorNameTaken.severity(),
            Severity::Error
        );
        assert_eq!(
            DiagnosticKind::RedundantInitialiser.severity(),
            Severity::Warning
        );
    }

    #[test]
    fn messages_name_the_marker() {
        assert_eq!(
            DiagnosticKind::IneligibleKind.message("@PublicInitialiser"),
            "@PublicInitialiser can only be applied to a class or a struct"
        );
        assert_eq!(
            DiagnosticKind::NonPublicType.message("#[public_initialiser]"),
            "#[public_initialiser] can only be applied to a public type"
        );
    }

    #[test]
    fn redundancy_message_ignores_the_marker() {
        assert_eq!(
            DiagnosticKind::RedundantInitialiser.message("anything"),
            "A public, parameterless parameter already exists"
        );
    }

    #[test]
    fn display_prefixes_severity() {
        let diagnostic = Diagnostic::new(DiagnosticKind::RedundantInitialiser, "m", ());
        assert_eq!(
            diagnostic.to_string(),
            "warning: A public, parameterless parameter already exists"
        );
    }

    #[test]
    fn map_anchor_keeps_message() {
        let diagnostic = Diagnostic::new(DiagnosticKind::NonPublicType, "m", 3usize);
        let mapped = diagnostic.map_anchor(|line| format!("line {line}"));
        assert_eq!(mapped.anchor, "line 3");
        assert_eq!(mapped.message, "m can only be applied to a public type");
        assert!(mapped.is_error());
    }
}
