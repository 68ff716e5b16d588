use initialiser_derive::public_initialiser;

/// Generics, defaults and where clauses carry over to the impl
#[public_initialiser]
pub struct Buffer<T: Clone = u8, const N: usize = 4>
where
    T: Default,
{
    pub items: Vec<T>,
}

impl<T: Clone, const N: usize> Buffer<T, N>
where
    T: Default,
{
    pub fn capacity(&self) -> usize {
        N
    }
}

fn main() {
    let buffer: Buffer = Buffer::new();
    assert!(buffer.items.is_empty());
    assert_eq!(buffer.capacity(), 4);

    let strings = Buffer::<String, 2>::new();
    assert_eq!(strings.capacity(), 2);
}
