// src/trie/iter.rs
// =============================================================================
// Lazy traversals over a Trie.
//
// Frames hold references into the trie's node Vec; child slots are looked up
// in that same Vec by index.
//
// Both iterators walk the tree with an explicit stack instead of recursion, so
// they can stop after any item and pick up again on the next call to `next()`.
// The current key is kept in one String: a character is pushed when we enter
// a node and popped when we leave it.
//
// Children are visited in slot order (a..z, then "other"), which gives keys in
// lexicographic order. Subtrees whose cached size is 0 hold no values (only
// deleted keys), so they are never entered.
// =============================================================================

use std::iter::FusedIterator;

use super::{slot_of, TrieNode, ROOT, SLOTS, WILDCARD};

// One node on the traversal stack, plus the range of child slots still to visit
struct Frame<'a, V> {
    node: &'a TrieNode<V>,
    next: usize,
    end: usize,
}

impl<'a, V> Frame<'a, V> {
    // Advances the cursor to the next child that holds at least one value
    fn next_live_child(&mut self, nodes: &'a [TrieNode<V>]) -> Option<&'a TrieNode<V>> {
        let node: &'a TrieNode<V> = self.node;
        while self.next < self.end {
            let slot = self.next;
            self.next += 1;
            if let Some(child) = node.children[slot].map(|id| &nodes[id]) {
                if child.size > 0 {
                    return Some(child);
                }
            }
        }
        None
    }
}

// Depth-first walk shared by both iterators. `enter` decides, for a node at a
// given depth, which slot range to descend into and whether its value counts.
struct Walk<'a, V> {
    nodes: &'a [TrieNode<V>],
    stack: Vec<Frame<'a, V>>,
    pending: Option<&'a TrieNode<V>>,
    key: String,
}

impl<'a, V> Walk<'a, V> {
    fn new(nodes: &'a [TrieNode<V>]) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            pending: nodes.get(ROOT),
            key: String::new(),
        }
    }

    fn next_with<F>(&mut self, mut enter: F) -> Option<(String, &'a V)>
    where
        F: FnMut(usize) -> (usize, usize, bool),
    {
        loop {
            if let Some(node) = self.pending.take() {
                let depth = self.stack.len();
                let (next, end, emit) = enter(depth);
                self.key.extend(node.label);
                self.stack.push(Frame { node, next, end });

                if emit {
                    if let Some(value) = node.value.as_ref() {
                        return Some((self.key.clone(), value));
                    }
                }
                continue;
            }

            let nodes = self.nodes;
            let frame = self.stack.last_mut()?;
            match frame.next_live_child(nodes) {
                Some(child) => self.pending = Some(child),
                None => {
                    if let Some(done) = self.stack.pop() {
                        if done.node.label.is_some() {
                            self.key.pop();
                        }
                    }
                }
            }
        }
    }
}

/// Iterator over every `(key, value)` pair of a [`Trie`](super::Trie).
pub struct Iter<'a, V> {
    walk: Walk<'a, V>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(nodes: &'a [TrieNode<V>]) -> Self {
        Self {
            walk: Walk::new(nodes),
            remaining: nodes.get(ROOT).map_or(0, |root| root.size),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.walk.next_with(|_| (0, SLOTS, true))?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over the keys of a [`Trie`](super::Trie), in order.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(super) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over the `(key, value)` pairs matching a wildcard pattern.
pub struct WildcardSearch<'a, V> {
    walk: Walk<'a, V>,
    pattern: Vec<char>,
}

impl<'a, V> WildcardSearch<'a, V> {
    pub(super) fn new(nodes: &'a [TrieNode<V>], pattern: &str) -> Self {
        Self {
            walk: Walk::new(nodes),
            pattern: pattern.chars().collect(),
        }
    }
}

impl<'a, V> Iterator for WildcardSearch<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.pattern;
        self.walk.next_with(|depth| match pattern.get(depth) {
            // Key is as long as the pattern: report it, go no deeper
            None => (0, 0, true),
            Some(&WILDCARD) => (0, SLOTS, false),
            Some(&c) => {
                let slot = slot_of(c);
                (slot, slot + 1, false)
            }
        })
    }
}

impl<V> FusedIterator for WildcardSearch<'_, V> {}
