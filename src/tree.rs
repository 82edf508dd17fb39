//! An unbalanced BST holding a set of values. Each `Node` owns its children outright so there
//! are no parent pointers - operations that need a parent (e.g. `lookup_parent` or `delete`)
//! carry it down the descent instead.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Removal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&5).is_none());
//!
//! for value in [5, 3, 8, 1] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.traverse(), [&1, &3, &5, &8]);
//!
//! // Inserting a value that's already there does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 4);
//!
//! // 5 has two children so its successor, 8, moves into its place.
//! assert_eq!(tree.delete(&5), Ok(Removal::Replaced));
//! assert_eq!(tree.traverse(), [&1, &3, &8]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::{Error, Removal};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree. This can be used for inserting, searching, and deleting values. No
/// balancing is done so inserting sorted values degrades it to a linked list. Every walk over
/// the tree (including `Clone` and `Drop`) is a loop, so a list-shaped tree costs time but not
/// stack.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach both children before a node goes out of scope so dropping a `Box<Node>` never
        // recurses into a subtree.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Copies the tree bottom up: a node is copied once both of its children have been, taking their
/// copies off the `built` stack.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        enum Visit<'a, T> {
            Enter(&'a Node<T>),
            Exit(&'a Node<T>),
        }

        let mut todo: Vec<Visit<'_, T>> = self.root().map(Visit::Enter).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();

        while let Some(visit) = todo.pop() {
            match visit {
                Visit::Enter(node) => {
                    todo.push(Visit::Exit(node));
                    todo.extend(node.right().map(Visit::Enter));
                    todo.extend(node.left().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    // The left subtree finishes first so its copy sits below the right one.
                    let right = node.right.as_ref().and_then(|_| built.pop());
                    let left = node.left.as_ref().and_then(|_| built.pop());
                    built.push(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the node holding the smallest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// assert_eq!(tree.find_min().map(|n| *n.value()), Err(Error::EmptyTree));
    ///
    /// tree.extend([5, 3, 8]);
    /// assert_eq!(tree.find_min().map(|n| *n.value()), Ok(3));
    /// ```
    pub fn find_min(&self) -> Result<&Node<T>, Error> {
        self.root().map(Node::find_min).ok_or(Error::EmptyTree)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Collects the values by walking the tree in order (left subtree, node, right subtree), so
    /// they come out ascending.
    pub fn traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the value into the tree. Returns `false` if the value was already there, in which
    /// case the tree is unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            if cfg!(debug_assertions) {
                node.assert_ordered();
            }
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        tracing::trace!(len = self.len, "inserting new leaf");
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Finds the node holding the given value by walking down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }

        tracing::debug!(len = self.len, "search missed");
        None
    }

    /// Whether the value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// How many children (0, 1 or 2) the node holding `value` has.
    pub fn children_count(&self, value: &T) -> Result<usize, Error> {
        self.search(value)
            .map(Node::children_count)
            .ok_or(Error::NotFound)
    }

    /// Returns the parent of the node holding `value`. This is `None` both when the value is at
    /// the root and when it isn't in the tree at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.lookup_parent(&1).map(|n| *n.value()), Some(3));
    /// assert!(tree.lookup_parent(&5).is_none());
    /// assert!(tree.lookup_parent(&42).is_none());
    /// ```
    pub fn lookup_parent(&self, value: &T) -> Option<&Node<T>> {
        // The node we came from, which is `None` while we're still at the root.
        let mut parent = None;
        let mut current = self.root()?;
        loop {
            let next = match value.cmp(&current.value) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return parent,
                Ordering::Greater => current.right()?,
            };
            parent = Some(current);
            current = next;
        }
    }

    /// Deletes the value from the tree and reports which deletion case ran. Deleting a value that
    /// isn't in the tree is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Removal, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&1), Ok(Removal::Leaf));
    /// assert_eq!(tree.delete(&1), Err(Error::NotFound));
    /// assert_eq!(tree.traverse(), [&3, &5, &8]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<Removal, Error> {
        let slot = locate(&mut self.root, value).ok_or(Error::NotFound)?;
        let mut node = slot.take().ok_or(Error::NotFound)?;

        let removal = match (node.left.take(), node.right.take()) {
            // The slot is already empty and `node` is dropped.
            (None, None) => Removal::Leaf,
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                Removal::Spliced
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                // The right subtree is non-empty so there always is a successor.
                if let Some(successor) = detach_min(&mut node.right) {
                    let Node {
                        value: successor_value,
                        ..
                    } = *successor;
                    node.value = successor_value;
                }
                *slot = Some(node);
                Removal::Replaced
            }
        };

        self.len -= 1;
        tracing::debug!(?removal, len = self.len, "deleted value");
        Ok(removal)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the link that owns the node holding `value`. This is either the tree's root link or
/// a child link of the target's parent, so rewriting it re-parents whatever is stored there.
fn locate<'a, T>(mut link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
where
    T: Ord,
{
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => return Some(link),
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }
}

/// Unlinks the leftmost node of the subtree in `link` and returns it with no children. The
/// leftmost node has no left child so its right child takes its place under its parent (or in
/// `link` itself when the subtree's root is the leftmost node).
fn detach_min<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// A `Node` holds a value and owns up to two children.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child. Every value under it is smaller than this node's value.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child. Every value under it is larger than this node's value.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many children (0, 1 or 2) this node has.
    pub fn children_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Returns the node with the smallest value in this subtree.
    pub fn find_min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }
}

impl<T> Node<T>
where
    T: Ord,
{
    /// Checks the ordering invariant between this node and its direct children.
    fn assert_ordered(&self) {
        if let Some(left) = self.left() {
            assert!(self.value > left.value);
        }
        if let Some(right) = self.right() {
            assert!(self.value < right.value);
        }
    }
}

/// Shows the children by value only so formatting never walks a whole subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A node with value {}.", self.value)?;
        match (self.left(), self.right()) {
            (None, None) => Ok(()),
            (Some(left), Some(right)) => write!(
                f,
                " Its left child is a node with value {}, and the right child is a node with value {}.",
                left.value, right.value
            ),
            (Some(left), None) => write!(f, " Its left child is a node with value {}.", left.value),
            (None, Some(right)) => {
                write!(f, " Its right child is a node with value {}.", right.value)
            }
        }
    }
}

/// An in-order iterator over the values of a [`Tree`]. Keeps the path of pending ancestors on a
/// stack instead of recursing.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}
