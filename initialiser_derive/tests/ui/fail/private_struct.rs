#![allow(dead_code)]

use initialiser_derive::public_initialiser;

/// A private type cannot expose a public initializer
#[public_initialiser]
struct Hidden {
    count: u32,
}

fn main() {}
