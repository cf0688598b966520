//! CPU scheduling domain models.
//!
//! Input descriptors, per-process results, and the execution timeline.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | [`ProcessDescriptor`] |
//! | Per-process output | [`ProcessResult`] |
//! | CPU occupancy | [`Timeline`] of [`TimelineSegment`]s |
//! | Run output | [`ScheduleOutcome`] |

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessResult, ScheduleOutcome};
pub use process::ProcessDescriptor;
pub use timeline::{IdleGap, Timeline, TimelineSegment};
