use initialiser_derive::public_initialiser;

/// A constructor with parameters does not replace the parameterless one
#[public_initialiser]
pub struct Counter {
    pub value: i64,
}

impl Counter {
    pub fn with_value(value: i64) -> Self {
        Counter { value }
    }
}

fn main() {
    assert_eq!(Counter::new().value, 0);
    assert_eq!(Counter::with_value(7).value, 7);
}
