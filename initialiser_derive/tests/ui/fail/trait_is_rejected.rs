#![allow(dead_code)]

use initialiser_derive::public_initialiser;

/// Traits have no stored state to initialise
#[public_initialiser]
pub trait Drawable {
    fn draw(&self);
}

fn main() {}
