//! Circular index shared by the resume pager, the image carousel and the
//! testimonial picker, plus the key/swipe normalization that drives them.

/// Horizontal swipe distance that flips a resume page.
pub const PAGE_SWIPE_PX: f64 = 80.0;
/// Horizontal touch distance that changes a carousel slide.
pub const SLIDE_SWIPE_PX: f64 = 40.0;
/// Horizontal offset a page slides in from / out to.
pub const SLIDE_OFFSET_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Step::Prev => -1,
            Step::Next => 1,
        }
    }

    /// Arrow keys only; everything else is left to the browser.
    pub fn from_key(key: &str) -> Option<Step> {
        match key {
            "ArrowRight" => Some(Step::Next),
            "ArrowLeft" => Some(Step::Prev),
            _ => None,
        }
    }

    /// Swiping left advances, swiping right goes back. The distance has to
    /// exceed `threshold` strictly.
    pub fn from_swipe(dx: f64, threshold: f64) -> Option<Step> {
        if dx < -threshold {
            Some(Step::Next)
        } else if dx > threshold {
            Some(Step::Prev)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// X offset (px) the incoming page starts from.
    pub fn enter_offset(self) -> f64 {
        match self {
            Direction::Forward => SLIDE_OFFSET_PX,
            Direction::Backward => -SLIDE_OFFSET_PX,
            Direction::Still => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    index: usize,
    direction: Direction,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            direction: Direction::Still,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_current(&self, i: usize) -> bool {
        !self.is_empty() && self.index == i
    }

    /// Moves `delta` pages, wrapping around both ends.
    pub fn paginate(&mut self, delta: isize) {
        if self.is_empty() || delta == 0 {
            return;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        self.direction = if delta > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
    }

    pub fn step(&mut self, step: Step) {
        self.paginate(step.delta());
    }

    /// Jumps straight to `i`, clamped to the last page.
    pub fn go_to(&mut self, i: usize) {
        if self.is_empty() {
            return;
        }
        let target = i.min(self.len - 1);
        self.direction = match target.cmp(&self.index) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => self.direction,
        };
        self.index = target;
    }
}

/// Remembers where a touch started so the end of the gesture can be turned
/// into a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f64, threshold: f64) -> Option<Step> {
        let start = self.start_x.take()?;
        Step::from_swipe(x - start, threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
