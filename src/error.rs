use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The active comparator did not report the key as equal to itself, so
    /// there is no slot in the tree the key could occupy.
    #[error("key does not order equal to itself under the active comparator")]
    UnorderableKey,
}
