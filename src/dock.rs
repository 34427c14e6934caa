//! Floating music dock: a pill button that expands into a player card, which
//! the visitor can drag anywhere on screen and resize with a slider.
//!
//! [`FloatingDock`] holds all widget state and never touches the DOM. The view
//! layer feeds it [`DockEvent`]s and carries out the [`DockEffect`]s it returns
//! (timers, listeners, pointer capture, storage writes, frame requests), so
//! every rule here is testable without a browser.

mod geometry;
mod gesture;
pub mod store;

use std::time::Duration;

pub use geometry::{clamp_to_viewport, Layout, Point, Position, Size};
pub use gesture::{Gesture, PointerTarget, Session};
pub use store::StoreError;

use gesture::Transition;

/// Embedded player shown inside the open dock.
pub const PLAYER_EMBED_URL: &str =
    "https://open.spotify.com/embed/playlist/5kajo3mgDkcaQr6RbNPSkR?utm_source=generator";

/// Selector for pointer-down targets that must keep their native behavior.
pub const NO_DRAG_SELECTOR: &str =
    r#"input, textarea, select, a, label, [role="slider"], [data-no-drag]"#;

/// Height taken by the dock header above the player.
const DOCK_CHROME_H: f64 = 48.0;
/// Fallback height of the closed pill.
const PILL_H: f64 = 36.0;
/// Frames to wait for a measurable wrapper before falling back to estimates.
const MAX_MEASURE_RETRIES: u8 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct DockConfig {
    /// Gap kept between the dock and every viewport edge.
    pub margin: f64,
    pub long_press: Duration,
    /// Movement on either axis that turns a press into a drag.
    pub drag_threshold: f64,
    /// Intrinsic size of the embedded player.
    pub base_width: f64,
    pub base_height: f64,
    /// Horizontal padding of the card on each side.
    pub pad_x: f64,
    pub min_scale: f64,
    pub default_scale: f64,
    pub scale_cap: f64,
    /// Horizontal room reserved outside the card when fitting the scale.
    pub view_margin: f64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            long_press: Duration::from_millis(180),
            drag_threshold: 6.0,
            base_width: 360.0,
            base_height: 152.0,
            pad_x: 8.0,
            min_scale: 0.6,
            default_scale: 0.84,
            scale_cap: 1.2,
            view_margin: 16.0,
        }
    }
}

impl DockConfig {
    /// Largest scale whose card still fits a viewport `viewport_width` wide.
    /// Never below `min_scale`, never above `scale_cap`.
    pub fn max_scale(&self, viewport_width: f64) -> f64 {
        let room = viewport_width - self.view_margin - 2.0 * self.pad_x;
        let fit = room / self.base_width;
        if fit.is_nan() {
            return self.min_scale;
        }
        fit.min(self.scale_cap).max(self.min_scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DockEvent {
    /// Component mounted: the single storage read and the first viewport.
    Mount {
        stored: Result<Option<Position>, StoreError>,
        viewport: Size,
    },
    /// A frame has rendered; place or re-clamp against the fresh layout.
    Layout(Layout),
    /// Window resized.
    Resize(Layout),
    /// Click on the pill, or the close button in the dock.
    Toggle,
    /// Raw value from the resize slider.
    SetScale(f64),
    PointerDown {
        pointer_id: i32,
        at: Point,
        target: PointerTarget,
    },
    PointerMove {
        pointer_id: i32,
        at: Point,
        layout: Layout,
    },
    PointerUp {
        pointer_id: i32,
    },
    PointerCancel {
        pointer_id: i32,
    },
    LongPress {
        session: u32,
    },
    /// The task that delivered the drop has finished; any click belonging to
    /// the drag has been dispatched by now.
    DropSettled,
}

/// Side effects requested by the controller, to be executed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DockEffect {
    StartLongPress { session: u32, delay: Duration },
    CancelLongPress,
    /// Window-level `pointermove`, `pointerup` and `pointercancel`.
    AttachPointerListeners,
    DetachPointerListeners,
    CapturePointer(i32),
    ReleasePointer(i32),
    LockTextSelection,
    UnlockTextSelection,
    Persist(Position),
    /// Dispatch [`DockEvent::DropSettled`] from a zero-delay timer.
    SettleDrop,
    /// Dispatch [`DockEvent::Layout`] after the next animation frame.
    RequestLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingDock {
    config: DockConfig,
    open: bool,
    scale: f64,
    max_scale: f64,
    /// `None` until the first placement; the view stays hidden meanwhile.
    position: Option<Position>,
    /// Candidate for the first placement, taken from storage at mount.
    seed: Option<Position>,
    mounted: bool,
    measure_retries: u8,
    gesture: Gesture,
    next_session: u32,
    /// A drag just ended and its click hasn't been dispatched yet.
    swallow_click: bool,
}

impl Default for FloatingDock {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}

impl FloatingDock {
    pub fn new(config: DockConfig) -> Self {
        let scale = config.default_scale;
        let max_scale = config.scale_cap;
        Self {
            config,
            open: false,
            scale,
            max_scale,
            position: None,
            seed: None,
            mounted: false,
            measure_retries: 0,
            gesture: Gesture::Idle,
            next_session: 0,
            swallow_click: false,
        }
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.config.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Player width and height after scaling, in whole pixels.
    pub fn content_size(&self) -> (f64, f64) {
        (
            (self.config.base_width * self.scale).round(),
            (self.config.base_height * self.scale).round(),
        )
    }

    /// Width of the open card: the player plus horizontal padding.
    pub fn card_width(&self) -> f64 {
        self.content_size().0 + 2.0 * self.config.pad_x
    }

    /// Best guess at the rendered box when it can't be measured.
    pub fn estimated_footprint(&self) -> Size {
        let (_, content_h) = self.content_size();
        let height = if self.open {
            content_h + DOCK_CHROME_H
        } else {
            PILL_H
        };
        Size::new(self.card_width(), height)
    }

    fn footprint(&self, layout: &Layout) -> Size {
        layout
            .measured
            .unwrap_or_else(|| self.estimated_footprint())
    }

    fn clamp(&self, position: Position, layout: &Layout) -> Position {
        clamp_to_viewport(
            position,
            layout.viewport,
            self.footprint(layout),
            self.config.margin,
        )
    }

    /// Top-right corner, inset by the margin.
    fn default_position(&self, layout: &Layout) -> Position {
        let width = self.footprint(layout).width;
        Position::new(
            layout.viewport.width - width - self.config.margin,
            self.config.margin,
        )
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.max_scale)
    }

    pub fn handle(&mut self, event: DockEvent) -> Vec<DockEffect> {
        match event {
            DockEvent::Mount { stored, viewport } => self.mount(stored, viewport),
            DockEvent::Layout(layout) => self.relayout(layout),
            DockEvent::Resize(layout) => self.resize(layout),
            DockEvent::Toggle => self.toggle(),
            DockEvent::SetScale(scale) => self.set_scale(scale),
            DockEvent::PointerDown {
                pointer_id,
                at,
                target,
            } => self.pointer_down(pointer_id, at, target),
            DockEvent::PointerMove {
                pointer_id,
                at,
                layout,
            } => self.pointer_move(pointer_id, at, layout),
            DockEvent::PointerUp { pointer_id } => self.pointer_up(pointer_id, false),
            DockEvent::PointerCancel { pointer_id } => self.pointer_up(pointer_id, true),
            DockEvent::LongPress { session } => self.long_press(session),
            DockEvent::DropSettled => {
                self.swallow_click = false;
                Vec::new()
            }
        }
    }

    fn mount(
        &mut self,
        stored: Result<Option<Position>, StoreError>,
        viewport: Size,
    ) -> Vec<DockEffect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        self.seed = match stored {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("couldn't read dock position, using default: {e}");
                None
            }
        };
        self.max_scale = self.config.max_scale(viewport.width);
        self.scale = self.clamp_scale(self.scale);
        vec![DockEffect::RequestLayout]
    }

    fn relayout(&mut self, layout: Layout) -> Vec<DockEffect> {
        if !self.mounted {
            return Vec::new();
        }
        match self.position {
            Some(current) => self.settle(self.clamp(current, &layout)),
            None => {
                if layout.measured.is_none() && self.measure_retries < MAX_MEASURE_RETRIES {
                    self.measure_retries += 1;
                    return vec![DockEffect::RequestLayout];
                }
                let candidate = self
                    .seed
                    .take()
                    .unwrap_or_else(|| self.default_position(&layout));
                let placed = self.clamp(candidate, &layout);
                log::debug!("dock placed at ({}, {})", placed.x, placed.y);
                self.position = Some(placed);
                vec![DockEffect::Persist(placed)]
            }
        }
    }

    /// Moves to `next` outside of a drag, persisting only real changes.
    fn settle(&mut self, next: Position) -> Vec<DockEffect> {
        if self.position == Some(next) {
            return Vec::new();
        }
        self.position = Some(next);
        if self.gesture.is_idle() {
            vec![DockEffect::Persist(next)]
        } else {
            Vec::new()
        }
    }

    fn resize(&mut self, layout: Layout) -> Vec<DockEffect> {
        self.max_scale = self.config.max_scale(layout.viewport.width);
        let scale = self.clamp_scale(self.scale);
        let rescaled = scale != self.scale;
        self.scale = scale;

        let mut effects = match self.position {
            Some(current) => self.settle(self.clamp(current, &layout)),
            None => Vec::new(),
        };
        if rescaled && self.open {
            // the measured box predates the new scale
            effects.push(DockEffect::RequestLayout);
        }
        effects
    }

    fn toggle(&mut self) -> Vec<DockEffect> {
        if std::mem::take(&mut self.swallow_click) {
            return Vec::new();
        }
        self.open = !self.open;
        vec![DockEffect::RequestLayout]
    }

    fn set_scale(&mut self, scale: f64) -> Vec<DockEffect> {
        if scale.is_nan() {
            return Vec::new();
        }
        let scale = self.clamp_scale(scale);
        if scale == self.scale {
            return Vec::new();
        }
        self.scale = scale;
        vec![DockEffect::RequestLayout]
    }

    fn pointer_down(
        &mut self,
        pointer_id: i32,
        at: Point,
        target: PointerTarget,
    ) -> Vec<DockEffect> {
        let origin = match self.position {
            Some(origin) if self.gesture.is_idle() => origin,
            _ => return Vec::new(),
        };
        self.swallow_click = false;
        let session = Session {
            id: self.next_session,
            pointer_id,
            start: at,
            origin,
        };
        match self.gesture.press(session, target) {
            Transition::Armed(s) => {
                self.next_session = self.next_session.wrapping_add(1);
                vec![
                    DockEffect::StartLongPress {
                        session: s.id,
                        delay: self.config.long_press,
                    },
                    DockEffect::AttachPointerListeners,
                ]
            }
            _ => Vec::new(),
        }
    }

    fn long_press(&mut self, session: u32) -> Vec<DockEffect> {
        match self.gesture.long_press(session) {
            Transition::Promoted(s) => Self::drag_entry(s, false),
            _ => Vec::new(),
        }
    }

    fn drag_entry(session: Session, cancel_timer: bool) -> Vec<DockEffect> {
        let mut effects = Vec::with_capacity(3);
        if cancel_timer {
            effects.push(DockEffect::CancelLongPress);
        }
        effects.push(DockEffect::CapturePointer(session.pointer_id));
        effects.push(DockEffect::LockTextSelection);
        effects
    }

    fn pointer_move(&mut self, pointer_id: i32, at: Point, layout: Layout) -> Vec<DockEffect> {
        let threshold = self.config.drag_threshold;
        let mut effects = Vec::new();
        let mut transition = self.gesture.motion(pointer_id, at, threshold);
        if let Transition::Promoted(s) = transition {
            effects = Self::drag_entry(s, true);
            transition = self.gesture.motion(pointer_id, at, threshold);
        }
        if let Transition::Dragged { origin, dx, dy } = transition {
            self.position = Some(self.clamp(origin.offset(dx, dy), &layout));
        }
        effects
    }

    fn pointer_up(&mut self, pointer_id: i32, cancelled: bool) -> Vec<DockEffect> {
        match self.gesture.release(pointer_id) {
            Transition::Disarmed(_) => {
                vec![
                    DockEffect::CancelLongPress,
                    DockEffect::DetachPointerListeners,
                ]
            }
            Transition::Dropped(s) => {
                // a cancelled pointer never produces a click to swallow
                self.swallow_click = !cancelled;
                let mut effects = vec![
                    DockEffect::CancelLongPress,
                    DockEffect::ReleasePointer(s.pointer_id),
                    DockEffect::UnlockTextSelection,
                    DockEffect::DetachPointerListeners,
                ];
                if let Some(pos) = self.position {
                    effects.push(DockEffect::Persist(pos));
                }
                if self.swallow_click {
                    effects.push(DockEffect::SettleDrop);
                }
                effects
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::store::testing::{BrokenStore, MemoryStore};
    use super::store::{load_position, save_position};
    use super::*;
    use pretty_assertions::assert_eq;

    const PILL: Size = Size::new(150.0, 36.0);

    fn layout(width: f64, height: f64, measured: Size) -> Layout {
        Layout::new(Size::new(width, height), Some(measured))
    }

    /// Mounts and places a dock, returning the placement effects.
    fn mounted(
        stored: Result<Option<Position>, StoreError>,
        at: Layout,
    ) -> (FloatingDock, Vec<DockEffect>) {
        let mut dock = FloatingDock::default();
        let effects = dock.handle(DockEvent::Mount {
            stored,
            viewport: at.viewport,
        });
        assert_eq!(effects, vec![DockEffect::RequestLayout]);
        let effects = dock.handle(DockEvent::Layout(at));
        (dock, effects)
    }

    fn down(dock: &mut FloatingDock, x: f64, y: f64) -> Vec<DockEffect> {
        dock.handle(DockEvent::PointerDown {
            pointer_id: 1,
            at: Point::new(x, y),
            target: PointerTarget::Body,
        })
    }

    fn drag_to(dock: &mut FloatingDock, x: f64, y: f64, at: Layout) -> Vec<DockEffect> {
        dock.handle(DockEvent::PointerMove {
            pointer_id: 1,
            at: Point::new(x, y),
            layout: at,
        })
    }

    fn up(dock: &mut FloatingDock) -> Vec<DockEffect> {
        dock.handle(DockEvent::PointerUp { pointer_id: 1 })
    }

    #[test]
    fn test_mount_defaults_to_top_right() {
        let (dock, effects) = mounted(Ok(None), layout(1000.0, 800.0, PILL));
        let expected = Position::new(1000.0 - 150.0 - 8.0, 8.0);
        assert_eq!(dock.position(), Some(expected));
        assert_eq!(effects, vec![DockEffect::Persist(expected)]);
    }

    #[test]
    fn test_mount_with_failing_storage_uses_default() {
        let stored = load_position(&BrokenStore);
        assert!(stored.is_err());
        let (dock, _) = mounted(stored, layout(1000.0, 800.0, PILL));
        assert_eq!(dock.position(), Some(Position::new(842.0, 8.0)));
    }

    #[test]
    fn test_mount_clamps_stored_position() {
        let (dock, effects) = mounted(
            Ok(Some(Position::new(4000.0, -20.0))),
            layout(1000.0, 800.0, PILL),
        );
        assert_eq!(dock.position(), Some(Position::new(842.0, 8.0)));
        assert_eq!(effects, vec![DockEffect::Persist(Position::new(842.0, 8.0))]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let store = MemoryStore::default();
        save_position(&store, Position::new(100.0, 50.0)).unwrap();

        let (dock, _) = mounted(load_position(&store), layout(1000.0, 800.0, PILL));
        assert_eq!(dock.position(), Some(Position::new(100.0, 50.0)));

        // a smaller screen later pulls the restored spot back in
        let (dock, _) = mounted(load_position(&store), layout(200.0, 60.0, PILL));
        assert_eq!(dock.position(), Some(Position::new(42.0, 16.0)));
    }

    #[test]
    fn test_unmeasured_layout_retries_then_falls_back() {
        let mut dock = FloatingDock::default();
        dock.handle(DockEvent::Mount {
            stored: Ok(None),
            viewport: Size::new(1000.0, 800.0),
        });
        let blank = Layout::new(Size::new(1000.0, 800.0), None);
        for _ in 0..MAX_MEASURE_RETRIES {
            assert_eq!(
                dock.handle(DockEvent::Layout(blank)),
                vec![DockEffect::RequestLayout]
            );
            assert_eq!(dock.position(), None);
        }
        dock.handle(DockEvent::Layout(blank));
        let card = dock.card_width();
        assert_eq!(dock.position(), Some(Position::new(1000.0 - card - 8.0, 8.0)));
    }

    #[test]
    fn test_layout_before_mount_is_ignored() {
        let mut dock = FloatingDock::default();
        assert!(dock.handle(DockEvent::Layout(layout(1000.0, 800.0, PILL))).is_empty());
        assert_eq!(dock.position(), None);
    }

    #[test]
    fn test_tap_toggles_without_moving() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        let effects = down(&mut dock, 320.0, 210.0);
        assert_eq!(
            effects,
            vec![
                DockEffect::StartLongPress {
                    session: 0,
                    delay: Duration::from_millis(180)
                },
                DockEffect::AttachPointerListeners,
            ]
        );
        assert_eq!(
            up(&mut dock),
            vec![
                DockEffect::CancelLongPress,
                DockEffect::DetachPointerListeners
            ]
        );
        assert_eq!(dock.handle(DockEvent::Toggle), vec![DockEffect::RequestLayout]);
        assert!(dock.is_open());
        assert_eq!(dock.position(), Some(Position::new(300.0, 200.0)));
    }

    #[test]
    fn test_drag_moves_by_delta_and_swallows_click() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 320.0, 210.0);
        let effects = drag_to(&mut dock, 330.0, 210.0, at);
        assert_eq!(
            effects,
            vec![
                DockEffect::CancelLongPress,
                DockEffect::CapturePointer(1),
                DockEffect::LockTextSelection,
            ]
        );
        assert!(dock.is_dragging());
        assert_eq!(dock.position(), Some(Position::new(310.0, 200.0)));

        let effects = up(&mut dock);
        assert_eq!(
            effects,
            vec![
                DockEffect::CancelLongPress,
                DockEffect::ReleasePointer(1),
                DockEffect::UnlockTextSelection,
                DockEffect::DetachPointerListeners,
                DockEffect::Persist(Position::new(310.0, 200.0)),
                DockEffect::SettleDrop,
            ]
        );
        assert!(dock.handle(DockEvent::Toggle).is_empty());
        assert!(!dock.is_open());
        assert_eq!(dock.position(), Some(Position::new(310.0, 200.0)));
    }

    #[test]
    fn test_drag_is_clamped_every_step() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        drag_to(&mut dock, -500.0, 5000.0, at);
        assert_eq!(dock.position(), Some(Position::new(8.0, 756.0)));
        drag_to(&mut dock, 310.0, 200.0, at);
        assert_eq!(dock.position(), Some(Position::new(310.0, 200.0)));
    }

    #[test]
    fn test_drag_does_not_persist_until_drop() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        for step in 1..20 {
            let effects = drag_to(&mut dock, 300.0 + step as f64 * 10.0, 200.0, at);
            assert!(!effects
                .iter()
                .any(|e| matches!(e, DockEffect::Persist(_))));
        }
    }

    #[test]
    fn test_long_press_without_movement() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 320.0, 210.0);
        let effects = dock.handle(DockEvent::LongPress { session: 0 });
        assert_eq!(
            effects,
            vec![DockEffect::CapturePointer(1), DockEffect::LockTextSelection]
        );
        assert!(dock.is_dragging());

        let effects = up(&mut dock);
        assert!(effects.contains(&DockEffect::ReleasePointer(1)));
        assert!(dock.handle(DockEvent::Toggle).is_empty());
        assert!(!dock.is_open());
        assert_eq!(dock.position(), Some(Position::new(300.0, 200.0)));
    }

    #[test]
    fn test_stale_long_press_is_ignored() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 320.0, 210.0);
        up(&mut dock);
        down(&mut dock, 320.0, 210.0);
        assert!(dock.handle(DockEvent::LongPress { session: 0 }).is_empty());
        assert!(!dock.is_dragging());
        assert!(!dock.handle(DockEvent::LongPress { session: 1 }).is_empty());
    }

    #[test]
    fn test_control_press_never_arms() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(None), at);
        let effects = dock.handle(DockEvent::PointerDown {
            pointer_id: 1,
            at: Point::new(900.0, 20.0),
            target: PointerTarget::Control,
        });
        assert!(effects.is_empty());
        assert!(dock.gesture().is_idle());
    }

    #[test]
    fn test_press_before_placement_is_ignored() {
        let mut dock = FloatingDock::default();
        assert!(down(&mut dock, 10.0, 10.0).is_empty());
    }

    #[test]
    fn test_cancelled_drag_does_not_swallow_next_click() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        drag_to(&mut dock, 350.0, 200.0, at);
        let effects = dock.handle(DockEvent::PointerCancel { pointer_id: 1 });
        assert!(effects.contains(&DockEffect::DetachPointerListeners));
        assert!(effects.contains(&DockEffect::ReleasePointer(1)));
        assert!(!dock.handle(DockEvent::Toggle).is_empty());
        assert!(dock.is_open());
    }

    #[test]
    fn test_keyboard_toggle_after_drag_settles() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        drag_to(&mut dock, 350.0, 200.0, at);
        assert!(up(&mut dock).contains(&DockEffect::SettleDrop));
        // the captured click landed on the wrapper, never reaching the toggle
        assert!(dock.handle(DockEvent::DropSettled).is_empty());

        // Enter on the focused pill: a click with no pointer-down before it
        assert_eq!(dock.handle(DockEvent::Toggle), vec![DockEffect::RequestLayout]);
        assert!(dock.is_open());
    }

    #[test]
    fn test_cancel_while_armed_detaches_listeners() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        let effects = dock.handle(DockEvent::PointerCancel { pointer_id: 1 });
        assert_eq!(
            effects,
            vec![
                DockEffect::CancelLongPress,
                DockEffect::DetachPointerListeners
            ]
        );
        assert!(dock.gesture().is_idle());
        assert!(!dock.handle(DockEvent::Toggle).is_empty());
    }

    #[test]
    fn test_next_press_clears_pending_swallow() {
        let at = layout(1000.0, 800.0, PILL);
        let (mut dock, _) = mounted(Ok(Some(Position::new(300.0, 200.0))), at);

        down(&mut dock, 300.0, 200.0);
        drag_to(&mut dock, 350.0, 200.0, at);
        up(&mut dock);
        // released off the pill, so no click arrived; the next tap must work
        down(&mut dock, 360.0, 210.0);
        up(&mut dock);
        dock.handle(DockEvent::Toggle);
        assert!(dock.is_open());
    }

    #[test]
    fn test_resize_reclamps_position() {
        let (mut dock, _) = mounted(
            Ok(Some(Position::new(900.0, 10.0))),
            layout(1000.0, 800.0, PILL),
        );
        assert_eq!(dock.position(), Some(Position::new(842.0, 10.0)));

        let effects = dock.handle(DockEvent::Resize(layout(500.0, 800.0, PILL)));
        assert_eq!(dock.position(), Some(Position::new(342.0, 10.0)));
        assert_eq!(effects, vec![DockEffect::Persist(Position::new(342.0, 10.0))]);
    }

    #[test]
    fn test_resize_clamps_scale() {
        let (mut dock, _) = mounted(Ok(None), layout(1000.0, 800.0, PILL));
        dock.handle(DockEvent::SetScale(1.2));
        assert_eq!(dock.scale(), 1.2);

        dock.handle(DockEvent::Resize(layout(200.0, 800.0, PILL)));
        assert_eq!(dock.max_scale(), 0.6);
        assert_eq!(dock.scale(), 0.6);
    }

    #[test]
    fn test_open_resize_requests_relayout_after_rescale() {
        let (mut dock, _) = mounted(Ok(None), layout(1000.0, 800.0, PILL));
        dock.handle(DockEvent::Toggle);
        let effects = dock.handle(DockEvent::Resize(layout(320.0, 800.0, PILL)));
        assert_eq!(effects.last(), Some(&DockEffect::RequestLayout));
    }

    #[test]
    fn test_set_scale_clamps_input() {
        let (mut dock, _) = mounted(Ok(None), layout(1000.0, 800.0, PILL));
        dock.handle(DockEvent::SetScale(3.0));
        assert_eq!(dock.scale(), 1.2);
        dock.handle(DockEvent::SetScale(0.1));
        assert_eq!(dock.scale(), 0.6);
        assert!(dock.handle(DockEvent::SetScale(f64::NAN)).is_empty());
        assert_eq!(dock.scale(), 0.6);
    }

    #[test]
    fn test_scale_changes_content_size() {
        let mut dock = FloatingDock::default();
        assert_eq!(dock.content_size(), (302.0, 128.0));
        assert_eq!(dock.card_width(), 318.0);
        dock.handle(DockEvent::SetScale(1.0));
        assert_eq!(dock.content_size(), (360.0, 152.0));
        assert_eq!(dock.card_width(), 376.0);
    }

    #[test]
    fn test_toggle_relayout_reclamps_new_footprint() {
        let (mut dock, _) = mounted(Ok(None), layout(1000.0, 800.0, PILL));
        assert_eq!(dock.position(), Some(Position::new(842.0, 8.0)));

        dock.handle(DockEvent::Toggle);
        let opened = Size::new(dock.card_width(), 176.0);
        let effects = dock.handle(DockEvent::Layout(layout(1000.0, 800.0, opened)));
        let expected = Position::new(1000.0 - 318.0 - 8.0, 8.0);
        assert_eq!(dock.position(), Some(expected));
        assert_eq!(effects, vec![DockEffect::Persist(expected)]);

        // settled already, nothing to write
        assert!(dock.handle(DockEvent::Layout(layout(1000.0, 800.0, opened))).is_empty());
    }

    #[test]
    fn test_max_scale_bounds_and_monotonic() {
        let config = DockConfig::default();
        assert_eq!(config.max_scale(0.0), 0.6);
        assert_eq!(config.max_scale(4000.0), 1.2);
        // (400 - 16 - 16) / 360
        assert!((config.max_scale(400.0) - 368.0 / 360.0).abs() < 1e-9);

        let mut prev = config.max_scale(0.0);
        for vw in (0..3000).step_by(7) {
            let max = config.max_scale(vw as f64);
            assert!(max >= prev);
            assert!((0.6..=1.2).contains(&max));
            prev = max;
        }
    }
}
