mod model {
    use initialiser_derive::public_initialiser;

    #[public_initialiser]
    #[derive(Debug, PartialEq)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }
}

fn main() {
    assert_eq!(model::Point::new(), model::Point { x: 0.0, y: 0.0 });
}
