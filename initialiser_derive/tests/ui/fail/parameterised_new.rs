#![allow(dead_code)]

use initialiser_derive::public_initialiser;

/// `new` is already taken by a constructor with parameters
#[public_initialiser]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Counter { value }
    }
}

fn main() {}
