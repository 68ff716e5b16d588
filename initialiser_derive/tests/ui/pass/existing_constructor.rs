use initialiser_derive::public_initialiser;

/// A hand-written public constructor is kept as is
#[public_initialiser]
pub struct Registry {
    pub entries: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            entries: vec!["default".to_string()],
        }
    }
}

fn main() {
    assert_eq!(Registry::new().entries, vec!["default".to_string()]);
}
