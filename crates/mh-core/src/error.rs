/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// An inventory index did not refer to an item.
    #[error("inventory index {index} out of range (inventory holds {len} items)")]
    InventoryIndex {
        /// The requested index.
        index: usize,
        /// The inventory size at the time of the request.
        len: usize,
    },
}
