//! Eligibility and synthesis engine.
//!
//! [`evaluate`] takes one declaration and the anchor of the marker that
//! triggered it, and decides whether to synthesize a public, parameterless
//! initializer. The rules are checked in a fixed order and the first one that
//! applies wins:
//!
//! 1. the declaration must be a class or a struct,
//! 2. the declaration must be public,
//! 3. if a public, parameterless initializer already exists, warn and do nothing,
//! 4. otherwise synthesize exactly one initializer.
//!
//! The engine is pure. It never mutates the declaration and keeps no state
//! between calls, so hosts may evaluate declarations in parallel.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::model::{Declaration, GeneratedFragment, Member};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Display name of the marker used in diagnostic messages.
pub const DEFAULT_MARKER: &str = "#[public_initialiser]";

/// Result of evaluating one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome<A> {
    /// Fragments to append to the declaration. No diagnostic.
    Synthesized(Vec<GeneratedFragment>),
    /// Nothing to do; the warning is advisory and compilation continues.
    Redundant(Diagnostic<A>),
    /// Hard failure for this declaration. Nothing is synthesized.
    Rejected(Diagnostic<A>),
}

impl<A> Outcome<A> {
    pub fn fragments(&self) -> &[GeneratedFragment] {
        match self {
            Outcome::Synthesized(fragments) => fragments,
            Outcome::Redundant(_) | Outcome::Rejected(_) => &[],
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic<A>> {
        match self {
            Outcome::Synthesized(_) => None,
            Outcome::Redundant(diagnostic) | Outcome::Rejected(diagnostic) => Some(diagnostic),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Collapses the outcome into the fragments to splice, or the error that
    /// stops synthesis. A redundancy warning maps to no fragments; read it with
    /// [`Outcome::diagnostic`] before converting if it needs reporting.
    pub fn into_result(self) -> Result<Vec<GeneratedFragment>, Diagnostic<A>> {
        match self {
            Outcome::Synthesized(fragments) => Ok(fragments),
            Outcome::Redundant(_) => Ok(Vec::new()),
            Outcome::Rejected(diagnostic) => Err(diagnostic),
        }
    }

    pub fn map_anchor<B>(self, f: impl FnOnce(A) -> B) -> Outcome<B> {
        match self {
            Outcome::Synthesized(fragments) => Outcome::Synthesized(fragments),
            Outcome::Redundant(diagnostic) => Outcome::Redundant(diagnostic.map_anchor(f)),
            Outcome::Rejected(diagnostic) => Outcome::Rejected(diagnostic.map_anchor(f)),
        }
    }
}

/// Evaluates `declaration` using the default marker name in messages.
pub fn evaluate<A>(declaration: &Declaration, anchor: A) -> Outcome<A> {
    evaluate_with(declaration, anchor, DEFAULT_MARKER)
}

/// Evaluates `declaration`, naming the marker `marker` in diagnostic messages.
pub fn evaluate_with<A>(declaration: &Declaration, anchor: A, marker: &str) -> Outcome<A> {
    trace!(
        "Evaluating {} `{}` with {} member(s)",
        declaration.kind,
        declaration.name,
        declaration.members.len()
    );

    if !declaration.kind.is_class_or_struct() {
        debug!(
            "Rejecting `{}`: {} is not a class or a struct",
            declaration.name, declaration.kind
        );
        return Outcome::Rejected(Diagnostic::new(
            DiagnosticKind::IneligibleKind,
            marker,
            anchor,
        ));
    }

    if !declaration.modifiers.is_public() {
        debug!("Rejecting `{}`: not public", declaration.name);
        return Outcome::Rejected(Diagnostic::new(
            DiagnosticKind::NonPublicType,
            marker,
            anchor,
        ));
    }

    if declaration
        .members
        .iter()
        .any(Member::is_public_parameterless_initializer)
    {
        debug!(
            "`{}` already declares a public, parameterless initializer",
            declaration.name
        );
        return Outcome::Redundant(Diagnostic::new(
            DiagnosticKind::RedundantInitialiser,
            marker,
            anchor,
        ));
    }

    debug!("Synthesizing public initializer for `{}`", declaration.name);
    Outcome::Synthesized(vec![GeneratedFragment::public_initializer()])
}
