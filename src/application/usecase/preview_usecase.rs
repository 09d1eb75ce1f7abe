// src/application/usecase/preview_usecase.rs

/// Default number of rows in a preview panel.
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

/// First `limit` items in the order received. Ordering is the upstream's job.
pub fn select_preview<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}
