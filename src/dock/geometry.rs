use serde::{Deserialize, Serialize};

/// Top-left corner of the dock, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pointer coordinates as reported by the browser (`clientX`/`clientY`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Snapshot of the environment a clamp is computed against.
///
/// `measured` is the rendered bounding box of the dock wrapper, or `None` when
/// the node is not mounted yet or reports an empty rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub viewport: Size,
    pub measured: Option<Size>,
}

impl Layout {
    pub const fn new(viewport: Size, measured: Option<Size>) -> Self {
        Self { viewport, measured }
    }
}

/// Keeps the whole `widget` box inside `viewport`, leaving `margin` on every
/// side. When the viewport is too small both bounds collapse to `margin`.
pub fn clamp_to_viewport(
    position: Position,
    viewport: Size,
    widget: Size,
    margin: f64,
) -> Position {
    let max_x = (viewport.width - widget.width - margin).max(margin);
    let max_y = (viewport.height - widget.height - margin).max(margin);
    // a NaN coordinate would survive f64::clamp, pin it to the margin instead
    let position = if position.is_finite() {
        position
    } else {
        Position::new(margin, margin)
    };
    Position {
        x: position.x.clamp(margin, max_x),
        y: position.y.clamp(margin, max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MARGIN: f64 = 8.0;

    #[test]
    fn test_clamp_keeps_inner_positions() {
        let p = clamp_to_viewport(
            Position::new(100.0, 50.0),
            Size::new(1000.0, 800.0),
            Size::new(150.0, 36.0),
            MARGIN,
        );
        assert_eq!(p, Position::new(100.0, 50.0));
    }

    #[test]
    fn test_clamp_pulls_back_from_each_edge() {
        let viewport = Size::new(1000.0, 800.0);
        let widget = Size::new(150.0, 36.0);

        let p = clamp_to_viewport(Position::new(-40.0, -3.0), viewport, widget, MARGIN);
        assert_eq!(p, Position::new(8.0, 8.0));

        let p = clamp_to_viewport(Position::new(5000.0, 5000.0), viewport, widget, MARGIN);
        assert_eq!(p, Position::new(842.0, 756.0));
    }

    #[test]
    fn test_clamp_degenerate_viewport_collapses_to_margin() {
        let p = clamp_to_viewport(
            Position::new(30.0, 30.0),
            Size::new(100.0, 40.0),
            Size::new(392.0, 212.0),
            MARGIN,
        );
        assert_eq!(p, Position::new(8.0, 8.0));
    }

    #[test]
    fn test_clamp_invariant_over_grid() {
        let widget = Size::new(318.0, 176.0);
        for vw in [320.0, 480.0, 768.0, 1280.0, 1920.0] {
            for vh in [480.0, 720.0, 1080.0] {
                let viewport = Size::new(vw, vh);
                for x in [-500.0, 0.0, 8.0, 250.0, vw, vw * 3.0] {
                    for y in [-500.0, 0.0, 120.0, vh, vh * 2.0] {
                        let p = clamp_to_viewport(Position::new(x, y), viewport, widget, MARGIN);
                        if vw >= widget.width + 2.0 * MARGIN {
                            assert!(p.x >= MARGIN && p.x <= vw - widget.width - MARGIN);
                        } else {
                            assert_eq!(p.x, MARGIN);
                        }
                        assert!(p.y >= MARGIN && p.y <= vh - widget.height - MARGIN);
                    }
                }
            }
        }
    }

    #[test]
    fn test_clamp_non_finite_position() {
        let p = clamp_to_viewport(
            Position::new(f64::NAN, f64::INFINITY),
            Size::new(1000.0, 800.0),
            Size::new(150.0, 36.0),
            MARGIN,
        );
        assert_eq!(p, Position::new(8.0, 8.0));
    }
}
