//! Execution timeline model.
//!
//! A timeline is the ordered sequence of CPU occupancy slices produced by a
//! scheduling run, ready to be drawn as a Gantt chart. Idle periods are not
//! stored as segments; [`Timeline::idle_gaps`] derives them on demand.

use serde::{Deserialize, Serialize};

/// One uninterrupted slice of CPU occupancy by a process.
///
/// Covers the half-open interval `[start, end)`; `end > start` always holds
/// for segments produced by a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Process occupying the CPU.
    pub id: String,
    /// First time unit of the slice.
    pub start: i64,
    /// Time unit at which the slice ends (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Creates a new segment.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two segments share any instant.
    #[inline]
    pub fn overlaps(&self, other: &TimelineSegment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// An idle CPU interval `[start, end)` between segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// First idle time unit.
    pub start: i64,
    /// Time unit at which the CPU becomes busy again (exclusive).
    pub end: i64,
}

impl IdleGap {
    /// Length of the gap.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered CPU timeline of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments ordered by start time.
    pub segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice of CPU time for `id`.
    ///
    /// A slice that directly continues the last segment of the same process
    /// is merged into it, so an uninterrupted run is always one segment.
    /// Empty slices are ignored.
    pub fn push(&mut self, id: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.id == id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(TimelineSegment::new(id, start, end));
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments in start order.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineSegment> {
        self.segments.iter()
    }

    /// Latest end time across all segments (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total CPU time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(TimelineSegment::duration).sum()
    }

    /// All segments belonging to a process, in start order.
    pub fn segments_for(&self, id: &str) -> Vec<&TimelineSegment> {
        self.segments.iter().filter(|s| s.id == id).collect()
    }

    /// Total CPU time received by a process.
    pub fn busy_time_for(&self, id: &str) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.id == id)
            .map(TimelineSegment::duration)
            .sum()
    }

    /// Process ids in dispatch order (one entry per segment).
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.id.as_str()).collect()
    }

    /// Idle intervals from t=0 up to the makespan.
    ///
    /// Renderers that need contiguous coverage can interleave these with
    /// the segments.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for segment in &self.segments {
            if segment.start > cursor {
                gaps.push(IdleGap {
                    start: cursor,
                    end: segment.start,
                });
            }
            cursor = cursor.max(segment.end);
        }
        gaps
    }

    /// Whether any two segments overlap in time.
    pub fn has_overlap(&self) -> bool {
        self.segments
            .windows(2)
            .any(|pair| pair[0].overlaps(&pair[1]) || pair[1].start < pair[0].start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineSegment;
    type IntoIter = std::slice::Iter<'a, TimelineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
