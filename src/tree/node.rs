use std::{cmp::Ordering, fmt, mem};

use crate::prelude::*;

/// Storage for a single key/data pair.
///
/// A node owns its children exclusively; an absent child is `None`. Every
/// key reachable through `left` orders before this node's key under the
/// tree's comparator, and every key reachable through `right` orders after
/// it.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K, V> {
    key: K,
    data: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, data: V) -> Self {
        Self {
            key,
            data,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    /// Inserts into the subtree rooted at this node, returning the data the
    /// key previously held. Matching a present key overwrites that node's
    /// data in place and never touches the structure.
    pub(crate) fn insert<C>(&mut self, comparator: &C, key: K, data: V) -> Option<V>
    where
        C: Comparator<K>,
    {
        match comparator.compare(&self.key, &key) {
            Ordering::Equal => Some(mem::replace(&mut self.data, data)),
            Ordering::Greater => match self.left.as_mut() {
                Some(left) => left.insert(comparator, key, data),
                None => {
                    self.left = Some(Box::new(Self::new(key, data)));
                    None
                }
            },
            Ordering::Less => match self.right.as_mut() {
                Some(right) => right.insert(comparator, key, data),
                None => {
                    self.right = Some(Box::new(Self::new(key, data)));
                    None
                }
            },
        }
    }

    pub(crate) fn get<'a, C>(&'a self, comparator: &C, key: &K) -> Option<&'a V>
    where
        C: Comparator<K>,
    {
        match comparator.compare(&self.key, key) {
            Ordering::Equal => Some(&self.data),
            Ordering::Greater => self.left.as_ref().and_then(|left| left.get(comparator, key)),
            Ordering::Less => self
                .right
                .as_ref()
                .and_then(|right| right.get(comparator, key)),
        }
    }

    pub(crate) fn get_mut<'a, C>(&'a mut self, comparator: &C, key: &K) -> Option<&'a mut V>
    where
        C: Comparator<K>,
    {
        match comparator.compare(&self.key, key) {
            Ordering::Equal => Some(&mut self.data),
            Ordering::Greater => self
                .left
                .as_mut()
                .and_then(|left| left.get_mut(comparator, key)),
            Ordering::Less => self
                .right
                .as_mut()
                .and_then(|right| right.get_mut(comparator, key)),
        }
    }

    /// In-order traversal: left subtree, this node, right subtree.
    pub(crate) fn visit_in_order<'a>(&'a self, entries: &mut Vec<(&'a K, &'a V)>) {
        if let Some(left) = &self.left {
            left.visit_in_order(entries);
        }
        entries.push((&self.key, &self.data));
        if let Some(right) = &self.right {
            right.visit_in_order(entries);
        }
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("data", &self.data)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K, V> fmt::Display for Node<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.key, self.data)
    }
}
