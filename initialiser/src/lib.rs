pub use initialiser_core::{
    Declaration, DeclarationKind, Diagnostic, DiagnosticKind, Outcome, config, diagnostic, engine,
    error, evaluate, model, request, tooling,
};
pub use initialiser_derive::public_initialiser;
