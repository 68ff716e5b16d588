//! Tooling for expanding and checking marked declarations outside of rustc.
//!
//! This module provides utilities for:
//! - Expanding every `#[public_initialiser]` in a Rust source file as text
//! - Scanning source trees and reporting the diagnostics each marker produces
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let expander = Expander::default();
//! let expansion = expander.expand_source(&std::fs::read_to_string("src/lib.rs")?)?;
//! for diagnostic in &expansion.diagnostics {
//!     eprintln!("{}: {}", diagnostic.anchor, diagnostic);
//! }
//! ```

mod expander;
mod source;
mod workspace_scanner;

pub use expander::*;
pub use source::*;
pub use workspace_scanner::*;
