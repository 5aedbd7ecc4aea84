//! Text renderings of a tree for inspection.

use std::fmt::{self, Write};

use crate::tree::{Node, Tree};

/// Lists the elements at each depth from left to right, each followed by a space.
fn collect_levels<T>(root: Option<&Node<T>>) -> Result<Vec<String>, fmt::Error>
where
    T: fmt::Display,
{
    let mut levels: Vec<String> = Vec::new();
    let mut stack: Vec<(&Node<T>, usize)> = root.into_iter().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        // Pre-order reaches every depth for the first time in increasing order.
        if levels.len() == depth {
            levels.push(String::new());
        }
        write!(levels[depth], "{} ", node.element)?;
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
    }
    Ok(levels)
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Renders the elements in ascending order, one per line, or `Empty tree`
    /// if there are none.
    pub fn render_in_order(&self) -> String {
        if self.is_empty() {
            return "Empty tree\n".to_string();
        }

        self.iter().map(|element| format!("{element}\n")).collect()
    }

    /// Renders the tree one depth per line, listing each level's elements
    /// from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [100, 150, 50, 70].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.render_levels(),
    ///     "Printing Tree Level-By-Level:\n\
    ///      Level(Depth) 0: 100 \n\
    ///      Level(Depth) 1: 50 150 \n\
    ///      Level(Depth) 2: 70 \n"
    /// );
    /// ```
    pub fn render_levels(&self) -> String {
        self.to_string()
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = collect_levels(self.root.as_deref())?;

        writeln!(f, "Printing Tree Level-By-Level:")?;
        for (depth, level) in levels.iter().enumerate() {
            writeln!(f, "Level(Depth) {depth}: {level}")?;
        }
        Ok(())
    }
}
