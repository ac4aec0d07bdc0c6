use crate::nav::{Direction, NavigationState};

pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Capability the card stack exposes to whatever recognizes drags.
pub trait DragHandler {
    fn on_drag_move(&mut self, delta_x: f64);
    fn on_drag_end(&mut self, delta_x: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Commit(Direction),
    SnapBack,
}

/// A right swipe goes back, a left swipe goes forward.
pub fn resolve_release(delta_x: f64) -> DragOutcome {
    if delta_x.abs() <= SWIPE_THRESHOLD_PX || delta_x.is_nan() {
        return DragOutcome::SnapBack;
    }
    if delta_x > 0.0 {
        DragOutcome::Commit(Direction::Prev)
    } else {
        DragOutcome::Commit(Direction::Next)
    }
}

impl NavigationState {
    pub fn release_drag(self, delta_x: f64) -> Self {
        match resolve_release(delta_x) {
            DragOutcome::Commit(direction) => self.step(direction),
            DragOutcome::SnapBack => self,
        }
    }
}

/// Tracks one pointer from press to release and feeds a [`DragHandler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    pointer_id: i32,
    start_x: f64,
    last_dx: f64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn begin(&mut self, pointer_id: i32, x: f64) {
        self.active = Some(ActiveDrag {
            pointer_id,
            start_x: x,
            last_dx: 0.0,
        });
    }

    pub fn update<H: DragHandler + ?Sized>(&mut self, pointer_id: i32, x: f64, handler: &mut H) {
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        if drag.pointer_id != pointer_id {
            return;
        }
        drag.last_dx = x - drag.start_x;
        handler.on_drag_move(drag.last_dx);
    }

    pub fn finish<H: DragHandler + ?Sized>(&mut self, pointer_id: i32, x: f64, handler: &mut H) {
        let Some(drag) = self.active else {
            return;
        };
        if drag.pointer_id != pointer_id {
            return;
        }
        self.active = None;
        handler.on_drag_end(x - drag.start_x);
    }

    /// Ends the drag at its last known delta, for cancelled pointers.
    pub fn cancel<H: DragHandler + ?Sized>(&mut self, pointer_id: i32, handler: &mut H) {
        let Some(drag) = self.active else {
            return;
        };
        if drag.pointer_id != pointer_id {
            return;
        }
        self.active = None;
        handler.on_drag_end(drag.last_dx);
    }
}
