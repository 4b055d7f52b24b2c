// ============================================================================
// Restaurant Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RestaurantError {
    #[error("Item not found on the menu: {0}")]
    ItemNotFound(String),
}
