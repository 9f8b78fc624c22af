//! The clue index: an unbalanced binary search tree keyed by clue
//! text. Clues are inserted as they are discovered; inserting a clue
//! that is already present changes nothing. No rebalancing is done —
//! clue counts are bounded by the room count, so worst-case depth is
//! a non-issue here.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

/// Ordered set of discovered clue texts.
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a clue, keeping the search-tree order. Returns whether
    /// a new node was created (`false` means the clue was already
    /// indexed and nothing changed).
    pub fn insert(&mut self, text: &str) -> bool {
        fn insert_at(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
            match slot {
                None => {
                    *slot = Some(Box::new(ClueNode {
                        text: text.to_owned(),
                        left: None,
                        right: None,
                    }));
                    true
                }
                Some(node) => match text.cmp(node.text.as_str()) {
                    Ordering::Less => insert_at(&mut node.left, text),
                    Ordering::Greater => insert_at(&mut node.right, text),
                    Ordering::Equal => false,
                },
            }
        }

        let added = insert_at(&mut self.root, text);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order traversal: ascending lexicographic clue order. The
    /// iterator is lazy and can be restarted by calling `iter` again.
    pub fn iter(&self) -> InOrder<'_> {
        let mut walk = InOrder { stack: Vec::new() };
        walk.push_left_spine(self.root.as_deref());
        walk
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Explicit-stack in-order walk (left, self, right).
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.text.as_str())
    }
}
