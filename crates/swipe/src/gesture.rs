//! Drag gesture tracking for the candidate card.
//!
//! Pure functions of the drag offset: nothing here animates. A release
//! commits a decision only when the horizontal travel is strictly past
//! 30% of the viewport width; right accepts, left rejects.

use crate::deck::Decision;
use serde::{Deserialize, Serialize};

/// Fraction of the viewport width a drag must exceed to commit
pub const SWIPE_THRESHOLD_RATIO: f32 = 0.3;

/// Card tilt at half a viewport of travel
pub const MAX_ROTATION_DEG: f32 = 30.0;

/// What the card should look like for the current drag offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragFrame {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation_deg: f32,
    /// Opacity of the "like" label, 0..=1
    pub like_opacity: f32,
    /// Opacity of the "nope" label, 0..=1
    pub nope_opacity: f32,
    /// Decision a release at this offset would commit
    pub pending: Option<Decision>,
}

/// Outcome of releasing the card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragRelease {
    /// Fly the card off screen to `fly_to_x`, then apply the decision
    Commit { decision: Decision, fly_to_x: f32 },
    /// Spring back to rest; nothing is decided
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    viewport_width: f32,
}

impl DragTracker {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width: viewport_width.max(1.0),
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn threshold(&self) -> f32 {
        self.viewport_width * SWIPE_THRESHOLD_RATIO
    }

    pub fn on_drag_update(&self, dx: f32, dy: f32) -> DragFrame {
        // An unreadable offset renders as a card at rest
        let dx = if dx.is_nan() { 0.0 } else { dx };
        let dy = if dy.is_nan() { 0.0 } else { dy };
        let half = self.viewport_width / 2.0;
        let quarter = self.viewport_width / 4.0;

        DragFrame {
            translate_x: dx,
            translate_y: dy,
            rotation_deg: (dx / half).clamp(-1.0, 1.0) * MAX_ROTATION_DEG,
            like_opacity: (dx / quarter).clamp(0.0, 1.0),
            nope_opacity: (-dx / quarter).clamp(0.0, 1.0),
            pending: self.decision_for(dx),
        }
    }

    /// The decision committed by releasing at `(dx, dy)`, if any.
    /// Vertical travel never decides.
    pub fn on_drag_end(&self, dx: f32, _dy: f32) -> Option<Decision> {
        self.decision_for(dx)
    }

    /// Like `on_drag_end`, with where the card should go next
    pub fn release(&self, dx: f32, dy: f32) -> DragRelease {
        match self.on_drag_end(dx, dy) {
            Some(decision) => DragRelease::Commit {
                decision,
                fly_to_x: match decision {
                    Decision::Accept => self.viewport_width,
                    Decision::Reject => -self.viewport_width,
                },
            },
            None => DragRelease::SnapBack,
        }
    }

    /// NaN compares false everywhere, so it falls through to `None`.
    fn decision_for(&self, dx: f32) -> Option<Decision> {
        if dx.abs() > self.threshold() {
            if dx > 0.0 {
                Some(Decision::Accept)
            } else {
                Some(Decision::Reject)
            }
        } else {
            None
        }
    }
}
