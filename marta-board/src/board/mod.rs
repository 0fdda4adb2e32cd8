//! The arrivals board pipeline.
//!
//! This module implements the core record-processing pipeline that turns a
//! raw feed snapshot into the view a rider sees: "which trains are coming,
//! grouped by station, under my filters?"
//!
//! The pipeline runs in three pure stages: reconcile duplicate observations
//! down to one record per (train, station) slot, apply the user's filter
//! criteria, and group the survivors by station in display order. It does
//! no I/O and holds no state, so every line change or filter change simply
//! recomputes the view from the current snapshot.

mod filter;
mod group;
mod reconcile;
mod view;

pub use filter::{ARRIVING_SOON_MAX_SECS, apply_filters};
pub use group::{StationGroup, group};
pub use reconcile::reconcile;
pub use view::{BoardView, build_view};
