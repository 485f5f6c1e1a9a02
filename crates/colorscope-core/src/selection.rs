use crate::region::{Point, Region};

/// Pointer events delivered by the windowing layer, in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

/// Selection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging { start: Point },
    Done { region: Region },
}

/// What the controller reports back after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Event ignored in the current state.
    None,
    /// Live rectangle while dragging.
    Preview(Region),
    /// Drag finished. `sample_ready` is false for a release at the press point.
    Finished { region: Region, sample_ready: bool },
}

impl SelectionUpdate {
    /// The region to sample, if this update completes a usable selection.
    pub fn sample_region(&self) -> Option<Region> {
        match *self {
            Self::Finished {
                region,
                sample_ready: true,
            } => Some(region),
            _ => None,
        }
    }
}

/// Press/drag/release state machine turning raw pointer events into regions.
///
/// Invalid orderings never fail: moves and releases outside a drag are
/// ignored, and a press always starts a fresh drag.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Region of the last completed drag, until the next press.
    pub fn last_region(&self) -> Option<Region> {
        match self.state {
            SelectionState::Done { region } => Some(region),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> SelectionUpdate {
        match (self.state, event) {
            (_, PointerEvent::Press(p)) => {
                self.state = SelectionState::Dragging { start: p };
                SelectionUpdate::None
            }
            (SelectionState::Dragging { start }, PointerEvent::Move(p)) => {
                SelectionUpdate::Preview(Region::new(start, p))
            }
            (SelectionState::Dragging { start }, PointerEvent::Release(p)) => {
                let region = Region::new(start, p);
                self.state = SelectionState::Done { region };
                SelectionUpdate::Finished {
                    region,
                    sample_ready: start != p,
                }
            }
            (_, PointerEvent::Move(_) | PointerEvent::Release(_)) => SelectionUpdate::None,
        }
    }
}
