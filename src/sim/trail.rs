//! Bounded trail history for a single bob
//!
//! Records the path of one mass for trail rendering. Memory stays bounded
//! two ways: near-duplicate points are decimated on the way in, and the
//! oldest point is evicted once the buffer is full.

use glam::DVec2;
use std::collections::VecDeque;

use crate::consts::TRAIL_DECIMATION;

/// A recorded bob position in the render coordinate frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: DVec2,
}

impl TrailPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { pos: DVec2::new(x, y) }
    }
}

impl From<DVec2> for TrailPoint {
    fn from(pos: DVec2) -> Self {
        Self { pos }
    }
}

/// FIFO history of trail points with decimation and capacity eviction
///
/// Insertion order is temporal order. After any mutation
/// `len() <= capacity()` holds.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl TrailBuffer {
    /// Empty buffer holding at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a position, skipping it when the bob has barely moved.
    ///
    /// A point within one distance unit of the last stored point on both
    /// axes is discarded. After a real append the oldest point is evicted
    /// if the buffer has grown past capacity.
    pub fn append(&mut self, point: TrailPoint) {
        if let Some(last) = self.points.back() {
            let dx = point.pos.x - last.pos.x;
            let dy = point.pos.y - last.pos.y;
            if dx.abs() <= TRAIL_DECIMATION && dy.abs() <= TRAIL_DECIMATION {
                return;
            }
        }
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Clear all points (on host reset)
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Points oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
