//! Whole-tree structural analysis: counting, fullness, shape and value
//! comparisons, deep copies and mirror images.
//!
//! Comparisons between two trees are positional. Nodes are matched left to
//! left and right to right (or left to right, for mirrors), never by sorted
//! order, so two trees holding the same elements in different shapes are not
//! equal.

use crate::tree::{Link, Node, Tree};

/// Walks `a` and `b` in lockstep, pairing left with left (or with right, when `mirrored`), and
/// checks that both have a node at every position and that `same` holds for each pair.
fn zip_all<T, U>(
    a: Option<&Node<T>>,
    b: Option<&Node<U>>,
    mirrored: bool,
    mut same: impl FnMut(&T, &U) -> bool,
) -> bool {
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                if !same(&a.element, &b.element) {
                    return false;
                }
                let (b_left, b_right) = if mirrored {
                    (b.right.as_deref(), b.left.as_deref())
                } else {
                    (b.left.as_deref(), b.right.as_deref())
                };
                stack.push((a.right.as_deref(), b_right));
                stack.push((a.left.as_deref(), b_left));
            }
            _ => return false,
        }
    }
    true
}

/// Builds a fresh copy of the subtree under `root`, swapping every node's children when
/// `mirrored`. Nodes are allocated in pre-order: each element is cloned before either child.
fn clone_nodes<T>(root: Option<&Node<T>>, mirrored: bool) -> Link<T>
where
    T: Clone,
{
    let mut copy = None;
    let mut stack = vec![(root?, &mut copy)];
    while let Some((source, slot)) = stack.pop() {
        let node = slot.insert(Node::new_boxed(source.element.clone()));
        let Node { left, right, .. } = &mut **node;
        let (to_left, to_right) = if mirrored {
            (source.right.as_deref(), source.left.as_deref())
        } else {
            (source.left.as_deref(), source.right.as_deref())
        };
        // Right goes on the stack first so the left subtree is built first.
        stack.extend(to_right.map(|n| (n, right)));
        stack.extend(to_left.map(|n| (n, left)));
    }
    copy
}

impl<T> Tree<T> {
    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if every node has either zero or two children. The
    /// empty tree is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let full: Tree<_> = [25, 20, 30, 18, 22, 28, 33].into_iter().collect();
    /// assert!(full.is_full());
    ///
    /// let chain: Tree<_> = (0..=40).collect();
    /// assert!(!chain.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            match (node.left.as_deref(), node.right.as_deref()) {
                (None, None) => {}
                (Some(left), Some(right)) => stack.extend([left, right]),
                _ => return false,
            }
        }
        true
    }

    /// Returns `true` if both trees have nodes in exactly the same positions,
    /// whatever elements those nodes hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let low: Tree<_> = (0..=40).collect();
    /// let high: Tree<_> = (60..=100).collect();
    ///
    /// assert!(low.compare_structure(&high));
    /// assert!(!low.equals(&high));
    /// ```
    pub fn compare_structure<U>(&self, other: &Tree<U>) -> bool {
        zip_all(self.root.as_deref(), other.root.as_deref(), false, |_, _| true)
    }

    /// Returns `true` if both trees have the same shape and hold equal
    /// elements at every position. This is what `==` uses.
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        zip_all(self.root.as_deref(), other.root.as_deref(), false, |a, b| a == b)
    }

    /// Returns a deep copy of the tree that shares no nodes with it. This is
    /// what `clone` uses.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: clone_nodes(self.root.as_deref(), false),
        }
    }

    /// Returns a new tree in which every node's children are swapped.
    ///
    /// The mirror of a BST keeps its larger elements on the left, so the
    /// result is only useful for structural comparison. Searching, inserting
    /// into, or removing from it gives meaningless results.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mirror = tree.mirror();
    ///
    /// assert_eq!(mirror.in_order(), vec![&3, &2, &1]);
    /// assert!(tree.is_mirror(&mirror));
    /// assert!(mirror.mirror() == tree);
    /// ```
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: clone_nodes(self.root.as_deref(), true),
        }
    }

    /// Returns `true` if `other` is the mirror image of this tree: same
    /// elements, with every node's children swapped.
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        zip_all(self.root.as_deref(), other.root.as_deref(), true, |a, b| a == b)
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T> Eq for Tree<T> where T: Eq {}
