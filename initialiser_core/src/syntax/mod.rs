//! Adapter between `syn` items and the engine's declaration model.
//!
//! - [`lower`] turns Rust items into [`Declaration`](crate::model::Declaration)s
//! - [`render`] turns generated fragments back into Rust tokens
//! - [`attribute`] is the body of the `#[public_initialiser]` attribute macro
//! - [`siblings`] finds the `impl` blocks next to a marked struct for the macro

pub mod attribute;
pub mod lower;
pub mod marker;
pub mod render;
pub mod siblings;

pub use attribute::expand_attribute;
pub use lower::{collect_inherent_members, lower_item, lower_struct};
pub use render::{CONSTRUCTOR_NAME, constructor_name_taken, evaluate_rust, render_fragment};
pub use siblings::{sibling_members, sibling_members_in_file};

/// Attribute name of the marker, without the `#[...]`.
pub const MARKER_NAME: &str = "public_initialiser";
