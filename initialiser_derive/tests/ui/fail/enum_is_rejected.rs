#![allow(dead_code)]

use initialiser_derive::public_initialiser;

/// Only structs receive an initializer
#[public_initialiser]
pub enum Shape {
    Circle,
    Square,
}

fn main() {}
