#![allow(dead_code)]

use initialiser_derive::public_initialiser;

/// Crate visibility is not public
#[public_initialiser]
pub(crate) struct Internal;

fn main() {}
