//! The node graph and the core search/insert/remove engine.
//!
//! Every `Node` is exclusively owned by the `Link` it hangs from: either the
//! tree's root or one of its parent's child slots. There are no parent
//! pointers. Operations that need to re-attach a subtree walk down from the
//! root and keep hold of the slot they arrived through instead.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Tree, TreeError};
//!
//! let mut tree: Tree<i32> = Tree::new();
//! assert_eq!(tree.find_min(), Err(TreeError::Underflow));
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//!
//! // Duplicates are ignored.
//! tree.insert(3);
//! assert_eq!(tree.in_order(), vec![&3, &5, &8]);
//!
//! tree.remove(&5);
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.find_max(), Ok(&8));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::TreeError;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of the tree.
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.element
    }

    fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.element
    }
}

/// Walks down from `link` to the slot holding `element`, returning it with its depth.
pub(crate) fn find_slot<'a, T>(
    mut link: &'a mut Link<T>,
    element: &T,
) -> Option<(&'a mut Link<T>, usize)>
where
    T: Ord,
{
    let mut depth = 0;
    loop {
        let ordering = element.cmp(&link.as_ref()?.element);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => return Some((link, depth)),
            Ordering::Greater => &mut link.as_mut()?.right,
        };
        depth += 1;
    }
}

/// Unlinks the node in `slot`. A node with two children takes its successor's element instead:
/// the smallest element of the right subtree is larger than everything on the left and smaller
/// than the rest of the right.
fn splice_out<T>(slot: &mut Link<T>) {
    let Some(node) = slot.as_mut() else {
        return;
    };

    if node.left.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            node.element = successor;
            debug!("removed a node with two children by splicing in its successor");
            return;
        }
    }
    let child = node.left.take().or_else(|| node.right.take());
    *slot = child;
}

/// Detaches the leftmost node of the subtree hanging off `link`, re-attaching its right child in
/// its place, and returns its element.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let node = link.take()?;
    let Node { element, right, .. } = *node;
    *link = right;
    Some(element)
}

/// Drops a subtree without recursing so that long chains can't overflow the stack.
fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// An unbalanced Binary Search Tree. This can be used for inserting, finding,
/// and removing elements, for comparing and copying whole trees, and for
/// rotating individual nodes.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.make_empty();
    ///
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn make_empty(&mut self) {
        if self.root.is_some() {
            debug!("discarding every node of the tree");
        }
        release(self.root.take());
    }

    /// Inserts the given element into the tree. Inserting an element that is
    /// already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("ignored duplicate insert");
                    return;
                }
            };
        }
        *link = Some(Node::new_boxed(element));
    }

    /// Removes the given element from the tree. If the tree does not contain
    /// the element, nothing happens.
    ///
    /// A node with two children is replaced by its successor, the smallest
    /// element of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    /// tree.remove(&42);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &3]);
    /// ```
    pub fn remove(&mut self, element: &T)
    where
        T: Ord,
    {
        match find_slot(&mut self.root, element) {
            Some((slot, _)) => splice_out(slot),
            None => trace!("ignored remove of an absent element"),
        }
    }

    /// Returns `true` if the tree contains the given element.
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Returns the smallest element in the tree, or [`TreeError::Underflow`]
    /// if the tree is empty.
    pub fn find_min(&self) -> Result<&T, TreeError> {
        self.root
            .as_ref()
            .map(|root| root.min())
            .ok_or(TreeError::Underflow)
    }

    /// Returns the largest element in the tree, or [`TreeError::Underflow`]
    /// if the tree is empty.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        self.root
            .as_ref()
            .map(|root| root.max())
            .ok_or(TreeError::Underflow)
    }

    /// Gets the height of this tree: the number of edges on the longest path
    /// from the root to a leaf. A tree with a single node has height `0` and
    /// the empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 0)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Returns every element in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
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
        for element in iter {
            self.insert(element);
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

/// An in-order iterator over the elements of a [`Tree`].
///
/// It keeps the path of nodes whose left subtrees are being visited on an
/// explicit stack, so it never recurses.
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
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.element)
    }
}
