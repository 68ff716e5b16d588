use initialiser_derive::public_initialiser;

#[public_initialiser]
pub struct Pair(pub u8, pub Option<char>);

#[public_initialiser]
pub struct Marker;

fn main() {
    let pair = Pair::new();
    assert_eq!(pair.0, 0);
    assert_eq!(pair.1, None);

    let _marker: Marker = Marker::new();
}
