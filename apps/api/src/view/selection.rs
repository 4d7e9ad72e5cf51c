#![allow(dead_code)]

//! Selection & detail view state machine.
//!
//! At most one posting is "active" for the detail pane. Transitions are
//! driven by explicit events rather than UI-toolkit callbacks, so the same
//! machine backs the overlay modal, the split-pane view, and touch gestures.

use crate::models::job::JobPosting;

/// Minimum horizontal travel, in the caller's coordinate units, before a
/// rightward swipe dismisses the detail pane. Strictly greater-than: a swipe
/// of exactly this distance does not dismiss.
pub const SWIPE_DISMISS_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

/// Events the detail view reacts to. `Pick` carries a posting id; the swipe
/// carries raw touch-start/touch-end x coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Pick(String),
    Back,
    DismissOverlay,
    Escape,
    SwipeEnd { start_x: f32, end_x: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    selection: Selection,
}

impl DetailView {
    pub fn new() -> Self {
        DetailView::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Applies one event against the currently visible posting set. Picking
    /// an id not in the visible set is not a defined transition and leaves
    /// the state unchanged.
    pub fn apply(&mut self, event: ViewEvent, visible: &[JobPosting]) {
        match event {
            ViewEvent::Pick(id) => {
                if visible.iter().any(|job| job.id == id) {
                    self.selection = Selection::Selected(id);
                }
            }
            ViewEvent::Back | ViewEvent::DismissOverlay | ViewEvent::Escape => {
                self.selection = Selection::NoSelection;
            }
            ViewEvent::SwipeEnd { start_x, end_x } => {
                if end_x - start_x > SWIPE_DISMISS_THRESHOLD {
                    self.selection = Selection::NoSelection;
                }
            }
        }
    }

    /// Call after a filter change: a selection that fell out of the visible
    /// set becomes `NoSelection` instead of dangling.
    pub fn retain_visible(&mut self, visible: &[JobPosting]) {
        if let Selection::Selected(id) = &self.selection {
            if !visible.iter().any(|job| &job.id == id) {
                self.selection = Selection::NoSelection;
            }
        }
    }
}
