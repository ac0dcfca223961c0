mod node;

use std::{cmp::Ordering, fmt};

use proptest::{collection::vec, prelude::*};

use crate::prelude::*;

pub use node::Node;

/// A binary search tree mapping keys to data payloads, ordered by a
/// pluggable [`Comparator`].
///
/// A tree is seeded with its root entry at construction and is never empty;
/// there is no delete operation. The comparator is fixed per instance, so
/// every insert and lookup on a given tree descends by the same ordering.
/// Inserting a key the tree already holds overwrites that node's data in
/// place instead of growing the tree.
///
/// ```
/// use bintree::prelude::*;
///
/// let mut tree = BinTree::new(1, 666);
/// tree.insert(2, 777)?;
/// tree.insert(3, 888)?;
///
/// assert_eq!(tree.get(&2), Some(&777));
/// assert_eq!(tree.listify(), vec![(&1, &666), (&2, &777), (&3, &888)]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BinTree<K, V, C = Natural> {
    root: Node<K, V>,
    comparator: C,
    len: usize,
}

impl<K: Ord, V> BinTree<K, V> {
    /// Creates a tree whose root holds the given entry, ordered naturally.
    pub fn new(key: K, data: V) -> Self {
        Self {
            root: Node::new(key, data),
            comparator: Natural,
            len: 1,
        }
    }
}

impl<K, V, C> BinTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Creates a tree whose root holds the given entry, ordered by the given
    /// comparator for the rest of its life.
    ///
    /// Rejects a root key the comparator cannot place, i.e. one it does not
    /// report as equal to itself.
    pub fn with_comparator(key: K, data: V, comparator: C) -> Result<Self> {
        if comparator.compare(&key, &key) != Ordering::Equal {
            return Err(Error::UnorderableKey);
        }

        Ok(Self {
            root: Node::new(key, data),
            comparator,
            len: 1,
        })
    }

    /// Inserts the entry, or overwrites the data held under an equal key.
    ///
    /// Returns the replaced data when the key was already present. The key
    /// check happens before any descent, so a rejected key leaves the tree
    /// untouched.
    pub fn insert(&mut self, key: K, data: V) -> Result<Option<V>> {
        if self.comparator.compare(&key, &key) != Ordering::Equal {
            return Err(Error::UnorderableKey);
        }

        let replaced = self.root.insert(&self.comparator, key, data);
        if replaced.is_none() {
            self.len += 1;
        }

        Ok(replaced)
    }

    /// Looks the key up, yielding its data if any node holds it. A missing
    /// key is reported as `None`, never as an error.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.root.get(&self.comparator, key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.get_mut(&self.comparator, key)
    }

    /// Collects every entry in ascending comparator order, by in-order
    /// traversal. The list is rebuilt on every call, so repeated calls with
    /// no intervening insert yield identical sequences.
    pub fn listify(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len);
        self.root.visit_in_order(&mut entries);
        entries
    }

    /// Number of distinct keys held. At least 1: the tree is seeded with its
    /// root entry and nothing ever removes a node.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> &Node<K, V> {
        &self.root
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<K, V, C> fmt::Debug for BinTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K, V, C> fmt::Display for BinTree<K, V, C>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinTree({})", self.root)
    }
}

impl<K, V> Arbitrary for BinTree<K, V>
where
    K: 'static + Arbitrary + Ord,
    V: 'static + Arbitrary,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<(K, V)>(), vec(any::<(K, V)>(), 0..32))
            .prop_map(|((key, data), rest)| {
                rest.into_iter().fold(Self::new(key, data), |mut tree, (k, v)| {
                    tree.insert(k, v).expect("natural ordering accepts every key");
                    tree
                })
            })
            .boxed()
    }
}
