use std::hash::Hash;

use itertools::Itertools;
use proptest::{
    collection::{hash_map, vec, SizeRange},
    prelude::*,
};

/// Entry vectors whose keys are pairwise distinct, in no particular order.
pub fn unique_entries<K, V>(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<(K, V)>>
where
    K: Arbitrary + Hash + Eq,
    V: Arbitrary,
{
    hash_map(any::<K>(), any::<V>(), size).prop_map(|entries| entries.into_iter().collect_vec())
}

/// Entry vectors with no uniqueness constraint; a repeated key overwrites.
pub fn entries<K, V>(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<(K, V)>>
where
    K: Arbitrary,
    V: Arbitrary,
{
    vec(any::<(K, V)>(), size)
}
