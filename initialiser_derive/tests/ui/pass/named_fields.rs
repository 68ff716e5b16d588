use initialiser_derive::public_initialiser;

/// Every named field starts from its default value
#[public_initialiser]
pub struct Settings {
    pub retries: u32,
    pub name: String,
    pub tags: Vec<String>,
}

fn main() {
    let settings = Settings::new();
    assert_eq!(settings.retries, 0);
    assert!(settings.name.is_empty());
    assert!(settings.tags.is_empty());
}
