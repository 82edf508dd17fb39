/// Which deletion case ran when a value was removed from a [`Tree`][crate::Tree].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// The node had no children and was unlinked from its parent.
    Leaf,
    /// The node had one child, which took its place.
    Spliced,
    /// The node had two children. Its in-order successor's value was moved into it and the
    /// successor was unlinked instead.
    Replaced,
}

impl Removal {
    /// Whether one of the removed node's descendants took its place.
    pub fn was_replaced_by_child(self) -> bool {
        !matches!(self, Self::Leaf)
    }
}
