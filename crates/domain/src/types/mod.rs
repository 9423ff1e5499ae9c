//! Domain types and models

pub mod calendar;
pub mod catalog;
pub mod grid;
pub mod planning;
pub mod record;

// Re-export for convenience
pub use calendar::CalendarWeek;
pub use catalog::{
    EntityDeleted, EntityKind, Sku, SkuDraft, SkuEdit, Store, StoreDraft, StoreEdit,
    StoresEnvelope,
};
pub use grid::{PlanningRow, WeeklyMargin};
pub use planning::{
    planning_id, ForecastInput, PlanningCollection, PlanningEnvelope, PlanningItem, WeekData,
};
pub use record::{promote, DraftRecord, GridRecord, Promotion};
