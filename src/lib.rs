mod error;

pub mod compare;
pub mod prelude;
pub mod testing;
pub mod tree;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use paste;
    pub use proptest;
    pub use test_strategy;
}

/// Checks the laws every comparator must uphold, plus the tree-level
/// consequences of them: reflexivity, antisymmetry, and in-order listing
/// that follows the comparator's idea of ascending.
#[macro_export]
macro_rules! test_comparator_laws {
    ($name:ident, $key:ty, $comparator:expr) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_comparator_laws_ $name>] {
                use $crate::__dependencies::{
                    proptest::prelude::*,
                    test_strategy,
                };
                use $crate::prelude::*;

                #[test_strategy::proptest(fork = false)]
                fn test_reflexivity(key: $key) {
                    prop_assert_eq!(
                        Comparator::compare(&$comparator, &key, &key),
                        std::cmp::Ordering::Equal
                    );
                }

                #[test_strategy::proptest(fork = false)]
                fn test_antisymmetry(a: $key, b: $key) {
                    let forward = Comparator::compare(&$comparator, &a, &b);
                    let backward = Comparator::compare(&$comparator, &b, &a);

                    prop_assert_eq!(forward, backward.reverse());
                }

                #[test_strategy::proptest(fork = false)]
                fn test_listify_follows_the_comparator(
                    #[strategy($crate::testing::unique_entries(1..16))] entries: Vec<($key, u64)>,
                ) {
                    let mut entries = entries.into_iter();
                    let (key, data) = entries.next().unwrap();
                    let mut tree = BinTree::with_comparator(key, data, $comparator)?;
                    for (k, v) in entries {
                        tree.insert(k, v)?;
                    }

                    let listed = tree.listify();
                    let is_sorted = listed.windows(2).all(|pair| {
                        Comparator::compare(&$comparator, pair[0].0, pair[1].0).is_lt()
                    });
                    prop_assert!(is_sorted);
                }
            }
        }
    };
}
