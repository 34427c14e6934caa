//! Press/long-press/drag discrimination for a single pointer.
//!
//! ```text
//! Idle --down--> Armed --(long press | move > threshold)--> Dragging
//!   ^              |                                          |
//!   +----up/cancel-+-------------------up/cancel--------------+
//! ```
//!
//! Only one pointer owns a session; everything from other pointer ids is
//! ignored until the session ends.

use super::geometry::{Point, Position};

/// Where a pointer-down landed inside the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Body,
    /// Inputs, links, labels, sliders and anything marked `data-no-drag`.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Monotonic session number, used to discard stale long-press timers.
    pub id: u32,
    pub pointer_id: i32,
    pub start: Point,
    pub origin: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Armed(Session),
    Dragging(Session),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The input doesn't belong to the current session, or there is none.
    Ignored,
    /// Idle -> Armed.
    Armed(Session),
    /// Armed -> Dragging.
    Promoted(Session),
    /// Armed, movement still within threshold.
    Held,
    /// Dragging, pointer moved by the delta from the session start.
    Dragged { origin: Position, dx: f64, dy: f64 },
    /// Armed -> Idle: a tap or a cancelled press.
    Disarmed(Session),
    /// Dragging -> Idle.
    Dropped(Session),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging(_))
    }

    pub fn session(&self) -> Option<Session> {
        match *self {
            Gesture::Idle => None,
            Gesture::Armed(s) | Gesture::Dragging(s) => Some(s),
        }
    }

    fn owns(&self, pointer_id: i32) -> bool {
        self.session().is_some_and(|s| s.pointer_id == pointer_id)
    }

    pub fn press(&mut self, session: Session, target: PointerTarget) -> Transition {
        if !self.is_idle() || target == PointerTarget::Control {
            return Transition::Ignored;
        }
        *self = Gesture::Armed(session);
        Transition::Armed(session)
    }

    pub fn long_press(&mut self, session_id: u32) -> Transition {
        match *self {
            Gesture::Armed(s) if s.id == session_id => {
                *self = Gesture::Dragging(s);
                Transition::Promoted(s)
            }
            _ => Transition::Ignored,
        }
    }

    /// Handles a pointer move. An armed session that crosses `threshold` is
    /// promoted first; the caller sees `Promoted` and should follow up with a
    /// second `motion` call to apply the delta.
    pub fn motion(&mut self, pointer_id: i32, at: Point, threshold: f64) -> Transition {
        if !self.owns(pointer_id) {
            return Transition::Ignored;
        }
        match *self {
            Gesture::Armed(s) => {
                let (dx, dy) = at.delta_from(s.start);
                if dx.abs() > threshold || dy.abs() > threshold {
                    *self = Gesture::Dragging(s);
                    Transition::Promoted(s)
                } else {
                    Transition::Held
                }
            }
            Gesture::Dragging(s) => {
                let (dx, dy) = at.delta_from(s.start);
                Transition::Dragged {
                    origin: s.origin,
                    dx,
                    dy,
                }
            }
            Gesture::Idle => Transition::Ignored,
        }
    }

    /// Pointer up and pointer cancel both end the session.
    pub fn release(&mut self, pointer_id: i32) -> Transition {
        if !self.owns(pointer_id) {
            return Transition::Ignored;
        }
        let prev = std::mem::take(self);
        match prev {
            Gesture::Armed(s) => Transition::Disarmed(s),
            Gesture::Dragging(s) => Transition::Dropped(s),
            Gesture::Idle => Transition::Ignored,
        }
    }
}
