pub mod aggregates_usecase;
pub mod dashboard_usecase;
pub mod preview_usecase;

// Re-export public API
pub use aggregates_usecase::{
    attention_summary, compute_aggregates, needs_attention, Aggregates, AttentionSummary,
    NumericPolicy,
};
pub use dashboard_usecase::{
    DashboardAggregator, DashboardSettings, DashboardUseCase, DashboardView, ProducePreview,
    TransactionView,
};
pub use preview_usecase::{select_preview, DEFAULT_PREVIEW_LIMIT};
