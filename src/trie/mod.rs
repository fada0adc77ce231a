// src/trie/mod.rs
// =============================================================================
// A 27-way trie that maps words to values.
//
// Every node has one child slot per letter a-z plus one shared slot for
// everything else (digits, apostrophes, punctuation). Letters are matched
// case-insensitively, so "Cat" and "cat" are the same key.
//
// Nodes live in one Vec and point at their children by index, so walking,
// cloning and dropping the trie never recurses, however long a key is.
//
// Each node caches how many values live in its subtree. Every set/delete
// records the path it walked and recomputes those nodes from the bottom up,
// so `len()` is a field read.
//
// Deleting a key only clears the value; the nodes on its path stay in place
// until the trie is dropped. Traversals skip subtrees whose cached size is 0.
// =============================================================================

mod iter;

use std::fmt;

use crate::error::TrieError;

pub use iter::{Iter, Keys, WildcardSearch};

/// Number of child slots per node: 26 letters plus the shared "other" slot.
pub const SLOTS: usize = 27;

/// The slot every non-letter character maps to.
pub const OTHER_SLOT: usize = 26;

/// Pattern character that matches any single stored character.
pub const WILDCARD: char = '*';

/// Label given to nodes in the "other" slot. Keys read back from the trie use
/// it in place of the original digit or punctuation character.
pub const OTHER_LABEL: char = '_';

/// Maps a character to its child slot.
///
/// `a`-`z` and `A`-`Z` map to 0-25; anything else maps to [`OTHER_SLOT`].
///
/// ```
/// # use word_crawler::trie::{slot_of, OTHER_SLOT};
/// assert_eq!(slot_of('a'), 0);
/// assert_eq!(slot_of('Z'), 25);
/// assert_eq!(slot_of('\''), OTHER_SLOT);
/// ```
pub fn slot_of(c: char) -> usize {
    if c.is_ascii_alphabetic() {
        usize::from(c.to_ascii_lowercase() as u8 - b'a')
    } else {
        OTHER_SLOT
    }
}

fn label_of(slot: usize) -> char {
    if slot < OTHER_SLOT {
        char::from(b'a' + slot as u8)
    } else {
        OTHER_LABEL
    }
}

/// Spells `key` the way the trie hands it back: lowercase letters, with
/// [`OTHER_LABEL`] for every other character.
///
/// ```
/// # use word_crawler::trie::normalize_key;
/// assert_eq!(normalize_key("It's"), "it_s");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.chars().map(|c| label_of(slot_of(c))).collect()
}

// Position of a node in `Trie::nodes`
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone)]
struct TrieNode<V> {
    children: [Option<NodeId>; SLOTS],
    value: Option<V>,
    // Number of values stored in this node and below it
    size: usize,
    // Character on the edge into this node; None only for the root
    label: Option<char>,
}

impl<V> TrieNode<V> {
    fn new(label: Option<char>) -> Self {
        Self {
            children: [None; SLOTS],
            value: None,
            size: 0,
            label,
        }
    }
}

/// A trie mapping string keys to values of type `V`.
///
/// Keys are read one character per level; letters are case-insensitive and
/// every other character shares a single slot, so `"a1"` and `"a2"` are the
/// same key. Keys handed back by [`Trie::iter`] and [`Trie::wildcard_search`]
/// are rebuilt from the path: lowercase, with `_` for non-letters.
///
/// ```
/// # use word_crawler::Trie;
/// let mut trie = Trie::new();
/// trie.set("cat", 1);
/// trie.set("car", 2);
/// trie.set("dog", 3);
///
/// assert_eq!(trie.get("CAT"), Ok(&1));
/// assert_eq!(trie.len(), 3);
///
/// let keys: Vec<String> = trie.keys().collect();
/// assert_eq!(keys, ["car", "cat", "dog"]);
///
/// let hits: Vec<String> = trie.wildcard_search("ca*").map(|(key, _)| key).collect();
/// assert_eq!(hits, ["car", "cat"]);
/// ```
#[derive(Clone)]
pub struct Trie<V> {
    // nodes[ROOT] is the root; every other node is reachable from it
    nodes: Vec<TrieNode<V>>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None)],
        }
    }

    /// Number of keys that currently have a value.
    pub fn len(&self) -> usize {
        self.nodes[ROOT].size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored under `key`.
    ///
    /// Fails with [`TrieError::KeyNotFound`] if any character on the path has
    /// no node, or the final node holds no value.
    pub fn get(&self, key: &str) -> Result<&V, TrieError> {
        self.find(key)
            .and_then(|id| self.nodes[id].value.as_ref())
            .ok_or_else(|| TrieError::KeyNotFound(key.to_string()))
    }

    /// Mutable access to the value stored under `key`. Never changes which
    /// keys are present, so sizes are left alone.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, TrieError> {
        let value = match self.find(key) {
            Some(id) => self.nodes[id].value.as_mut(),
            None => None,
        };
        value.ok_or_else(|| TrieError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Stores `value` under `key`, overwriting and returning any previous value.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let mut path = Vec::with_capacity(key.len() + 1);
        let mut id = ROOT;
        path.push(id);

        for c in key.chars() {
            let slot = slot_of(c);
            id = match self.nodes[id].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new(Some(label_of(slot))));
                    self.nodes[id].children[slot] = Some(child);
                    child
                }
            };
            path.push(id);
        }

        let old = self.nodes[id].value.replace(value);
        if old.is_none() {
            self.recompute_sizes(&path);
        }
        old
    }

    /// Removes and returns the value stored under `key`.
    ///
    /// The nodes along the path are kept; only the value is cleared.
    pub fn delete(&mut self, key: &str) -> Result<V, TrieError> {
        let not_found = || TrieError::KeyNotFound(key.to_string());

        let path = self.path_to(key).ok_or_else(not_found)?;
        let last = path.last().copied().unwrap_or(ROOT);
        let removed = self.nodes[last].value.take().ok_or_else(not_found)?;

        self.recompute_sizes(&path);
        Ok(removed)
    }

    /// All `(key, value)` pairs, depth first, in slot order (`a`..`z`, then
    /// the "other" slot). Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.nodes)
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// All `(key, value)` pairs whose key has exactly as many characters as
    /// `pattern` and matches it position by position. [`WILDCARD`] matches
    /// any single character; every other pattern character must land in the
    /// same slot as the key's character.
    ///
    /// A pattern that matches nothing yields an empty iterator.
    pub fn wildcard_search(&self, pattern: &str) -> WildcardSearch<'_, V> {
        WildcardSearch::new(&self.nodes, pattern)
    }

    fn find(&self, key: &str) -> Option<NodeId> {
        let mut id = ROOT;
        for c in key.chars() {
            id = self.nodes[id].children[slot_of(c)]?;
        }
        Some(id)
    }

    // Every node from the root down to the end of `key`, or None if the
    // path breaks off early
    fn path_to(&self, key: &str) -> Option<Vec<NodeId>> {
        let mut path = Vec::with_capacity(key.len() + 1);
        let mut id = ROOT;
        path.push(id);
        for c in key.chars() {
            id = self.nodes[id].children[slot_of(c)]?;
            path.push(id);
        }
        Some(path)
    }

    // Recomputes cached sizes along `path`, deepest node first
    fn recompute_sizes(&mut self, path: &[NodeId]) {
        for &id in path.iter().rev() {
            let node = &self.nodes[id];
            let below: usize = node
                .children
                .iter()
                .flatten()
                .map(|&child| self.nodes[child].size)
                .sum();
            let size = below + usize::from(node.value.is_some());
            self.nodes[id].size = size;
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rstest::rstest;

    use super::*;

    fn node_count<V>(trie: &Trie<V>) -> usize {
        trie.nodes.len()
    }

    fn keys_of<V>(trie: &Trie<V>) -> Vec<String> {
        trie.keys().collect()
    }

    fn search<V>(trie: &Trie<V>, pattern: &str) -> Vec<String> {
        trie.wildcard_search(pattern).map(|(key, _)| key).collect()
    }

    #[rstest]
    #[case('a', 0)]
    #[case('A', 0)]
    #[case('m', 12)]
    #[case('z', 25)]
    #[case('Z', 25)]
    #[case('0', OTHER_SLOT)]
    #[case('\'', OTHER_SLOT)]
    #[case('-', OTHER_SLOT)]
    #[case(' ', OTHER_SLOT)]
    #[case('é', OTHER_SLOT)]
    fn test_slot_of(#[case] c: char, #[case] slot: usize) {
        assert_eq!(slot_of(c), slot);
    }

    #[test]
    fn test_set_then_get() {
        let mut trie = Trie::new();
        assert_eq!(trie.set("cat", 1), None);
        assert_eq!(trie.get("cat"), Ok(&1));
        assert_eq!(trie.get("CaT"), Ok(&1));
    }

    #[test]
    fn test_set_overwrites() {
        let mut trie = Trie::new();
        trie.set("cat", 1);
        assert_eq!(trie.set("cat", 2), Some(1));
        assert_eq!(trie.get("cat"), Ok(&2));
        assert_eq!(trie.len(), 1);
    }

    #[rstest]
    #[case("ca")] // path exists, no value
    #[case("cats")] // path runs out
    #[case("dog")] // first character missing
    #[case("")] // nothing stored at the root
    fn test_get_missing(#[case] key: &str) {
        let mut trie = Trie::new();
        trie.set("cat", 1);
        assert_eq!(trie.get(key), Err(TrieError::KeyNotFound(key.to_string())));
    }

    #[test]
    fn test_delete_then_get_fails() {
        let mut trie = Trie::new();
        trie.set("cat", 1);
        trie.set("car", 2);

        assert_eq!(trie.delete("cat"), Ok(1));
        assert_eq!(trie.get("cat"), Err(TrieError::KeyNotFound("cat".to_string())));
        assert_eq!(trie.get("car"), Ok(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_delete_missing_leaves_trie_alone() {
        let mut trie = Trie::new();
        trie.set("cat", 1);

        assert!(trie.delete("dog").is_err());
        assert!(trie.delete("ca").is_err());
        assert!(trie.delete("cats").is_err());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("cat"), Ok(&1));
    }

    #[test]
    fn test_delete_twice_fails_the_second_time() {
        let mut trie = Trie::new();
        trie.set("cat", 1);
        assert_eq!(trie.delete("cat"), Ok(1));
        assert!(trie.delete("cat").is_err());
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn test_delete_keeps_nodes() {
        let mut trie = Trie::new();
        trie.set("cat", 1);
        let nodes = node_count(&trie);

        trie.delete("cat").unwrap();
        assert_eq!(node_count(&trie), nodes);
        assert!(trie.is_empty());
        assert_eq!(trie.iter().count(), 0);

        // Reusing the dead branch keeps the counts right
        trie.set("ca", 5);
        trie.set("cat", 6);
        assert_eq!(node_count(&trie), nodes);
        assert_eq!(trie.len(), 2);
        assert_eq!(keys_of(&trie), ["ca", "cat"]);
    }

    #[test]
    fn test_len_matches_iteration() {
        let mut trie = Trie::new();
        let ops: &[(&str, bool)] = &[
            ("apple", true),
            ("app", true),
            ("apply", true),
            ("app", false),
            ("banana", true),
            ("band", true),
            ("apple", false),
            ("", true),
            ("zebra", true),
            ("band", false),
            ("app", true),
            ("x1", true),
            ("x2", true),
        ];

        for (i, (key, insert)) in ops.iter().enumerate() {
            if *insert {
                trie.set(key, i);
            } else {
                trie.delete(key).unwrap();
            }
            assert_eq!(trie.len(), trie.iter().count(), "after op {i}");
            assert_eq!(trie.iter().len(), trie.len());
        }
        assert_eq!(keys_of(&trie), ["", "app", "apply", "banana", "x_", "zebra"]);
    }

    #[rstest]
    #[case(&["cat", "car", "dog"], &["car", "cat", "dog"])]
    #[case(&["b", "a", "ab", "aa", ""], &["", "a", "aa", "ab", "b"])]
    #[case(&["z9", "za", "9"], &["za", "z_", "_"])]
    #[case(&["Hello", "help", "HELD"], &["held", "hello", "help"])]
    fn test_iter_order(#[case] input: &[&str], #[case] output: &[&str]) {
        let trie: Trie<()> = input.iter().map(|key| (*key, ())).collect();
        assert_eq!(keys_of(&trie), output);
    }

    #[test]
    fn test_iter_is_restartable() {
        let trie: Trie<usize> = [("one", 1), ("two", 2), ("three", 3)].into_iter().collect();
        let first: Vec<_> = trie.iter().collect();
        let second: Vec<_> = (&trie).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_empty_key_lives_at_root() {
        let mut trie = Trie::new();
        trie.set("", "root");
        trie.set("a", "child");

        assert_eq!(trie.get(""), Ok(&"root"));
        assert_eq!(trie.len(), 2);
        assert_eq!(
            trie.iter().collect::<Vec<_>>(),
            [(String::new(), &"root"), ("a".to_string(), &"child")]
        );

        assert_eq!(trie.delete(""), Ok("root"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_falsy_values_are_present() {
        let mut trie = Trie::new();
        trie.set("zero", BTreeSet::<String>::new());
        trie.set("also", BTreeSet::new());

        assert_eq!(trie.len(), 2);
        assert!(trie.contains_key("zero"));
        assert!(trie.get("zero").unwrap().is_empty());
    }

    #[test]
    fn test_non_letters_share_a_slot() {
        let mut trie = Trie::new();
        trie.set("it's", 1);
        assert_eq!(trie.set("it-s", 2), Some(1));
        assert_eq!(trie.get("it's"), Ok(&2));
        assert_eq!(trie.len(), 1);
        assert_eq!(keys_of(&trie), ["it_s"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut trie = Trie::new();
        trie.set("word", vec!["a"]);
        trie.get_mut("word").unwrap().push("b");

        assert_eq!(trie.get("word"), Ok(&vec!["a", "b"]));
        assert_eq!(trie.len(), 1);
        assert!(trie.get_mut("wor").is_err());
    }

    #[test]
    fn test_wildcard_middle() {
        let trie: Trie<()> = ["cat", "cut", "cot", "dog"].into_iter().map(|k| (k, ())).collect();
        assert_eq!(search(&trie, "c*t"), ["cat", "cot", "cut"]);
    }

    #[test]
    fn test_wildcard_matches_exact_length_only() {
        let trie: Trie<()> = ["ab", "cd", "abc"].into_iter().map(|k| (k, ())).collect();
        assert_eq!(search(&trie, "**"), ["ab", "cd"]);
        assert_eq!(search(&trie, "***"), ["abc"]);
        assert_eq!(search(&trie, "*"), Vec::<String>::new());
    }

    #[test]
    fn test_wildcard_literals_are_case_insensitive() {
        let trie: Trie<u8> = [("cat", 1), ("car", 2)].into_iter().collect();
        let hits: Vec<_> = trie.wildcard_search("CA*").collect();
        assert_eq!(hits, [("car".to_string(), &2), ("cat".to_string(), &1)]);
    }

    #[test]
    fn test_wildcard_without_stars_is_exact_lookup() {
        let trie: Trie<u8> = [("cat", 1), ("cats", 2)].into_iter().collect();
        assert_eq!(search(&trie, "cat"), ["cat"]);
        assert_eq!(search(&trie, "ca"), Vec::<String>::new());
    }

    #[test]
    fn test_wildcard_no_match_is_empty() {
        let trie: Trie<u8> = [("cat", 1)].into_iter().collect();
        assert_eq!(trie.wildcard_search("d*g").count(), 0);
        assert_eq!(trie.wildcard_search("*****").count(), 0);
        assert_eq!(Trie::<u8>::new().wildcard_search("*").count(), 0);
    }

    #[test]
    fn test_wildcard_empty_pattern_hits_root() {
        let mut trie: Trie<u8> = [("a", 1)].into_iter().collect();
        assert_eq!(trie.wildcard_search("").count(), 0);
        trie.set("", 0);
        assert_eq!(search(&trie, ""), [""]);
    }

    #[test]
    fn test_wildcard_skips_deleted_keys() {
        let mut trie: Trie<()> = ["cat", "cot"].into_iter().map(|k| (k, ())).collect();
        trie.delete("cat").unwrap();
        assert_eq!(search(&trie, "c*t"), ["cot"]);
    }

    #[test]
    fn test_wildcard_covers_other_slot() {
        let trie: Trie<()> = ["a1", "ab", "a'"].into_iter().map(|k| (k, ())).collect();
        assert_eq!(search(&trie, "a*"), ["ab", "a_"]);
        assert_eq!(search(&trie, "a9"), ["a_"]);
    }

    #[test]
    fn test_debug_lists_entries() {
        let trie: Trie<u8> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(format!("{trie:?}"), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    fn test_very_long_key() {
        let word = "ab1".repeat(70_000);
        let mut trie = Trie::new();
        trie.set("ab", 0);
        assert_eq!(trie.set(&word, 1), None);

        assert_eq!(trie.get(&word), Ok(&1));
        assert_eq!(trie.len(), 2);

        let keys = keys_of(&trie);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1], normalize_key(&word));

        let pattern = format!("*{}", &word[1..]);
        assert_eq!(trie.wildcard_search(&pattern).count(), 1);

        let copy = trie.clone();
        assert_eq!(trie.delete(&word), Ok(1));
        assert_eq!(trie.len(), 1);
        assert_eq!(copy.len(), 2);

        drop(copy);
        drop(trie);
    }

    #[rstest]
    #[case("", "")]
    #[case("Cat", "cat")]
    #[case("It's", "it_s")]
    #[case("123-go", "___go")]
    fn test_normalize_key(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(normalize_key(key), expected);
    }

    #[test]
    fn test_normalize_key_matches_iteration() {
        let trie: Trie<()> = [("It's", ())].into_iter().collect();
        assert_eq!(keys_of(&trie), [normalize_key("It's")]);
    }
}
