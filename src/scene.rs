// Per-frame orchestration: drain input -> update radii -> generate curves -> hand off to a sink.
// Visual: whatever this returns for a frame is what the window shows for that frame.

use std::collections::VecDeque;

use serde::Deserialize;

use crate::animation::AnimationState;
use crate::curve::{generate_circle, generate_ellipse};
use crate::drag::DragState;
use crate::types::{Curve, ShapeParameters, Viewport};

/// Discrete input, already translated from raw window state by the host loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    ToggleAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manual,
    Animated,
}

/// Which generators run each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Ellipse,
    Circle,
    /// Ellipse on the left half, circle of radius `min(rx, ry)` on the right.
    Split,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::Ellipse => ViewMode::Circle,
            ViewMode::Circle => ViewMode::Split,
            ViewMode::Split => ViewMode::Ellipse,
        }
    }
}

/// Part of the window a curve is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRegion {
    Full,
    Left,
    Right,
}

/// The rendering side. Gets every curve of a frame, in order, exactly once.
pub trait CurveSink {
    fn submit(&mut self, region: ScreenRegion, curve: &Curve);
}

/// Owns all mutable state of the demo; the host loop only feeds events and a timestamp.
pub struct Scene {
    pub shape: ShapeParameters,
    pub drag: DragState,
    pub animation: AnimationState,
    view: ViewMode,
    width: f32,  // full window, pixels
    height: f32,
    events: VecDeque<InputEvent>,
}

impl Scene {
    /// `width`/`height` are the window size; the shape is centered in its region.
    pub fn new(width: f32, height: f32, rx: f32, ry: f32, animation: AnimationState, view: ViewMode) -> Self {
        let mut scene = Self {
            shape: ShapeParameters::new((0.0, 0.0), rx, ry),
            drag: DragState::default(),
            animation,
            view,
            width,
            height,
            events: VecDeque::new(),
        };
        scene.recenter();
        scene
    }

    pub fn mode(&self) -> Mode {
        if self.animation.enabled { Mode::Animated } else { Mode::Manual }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch generators. The shape is re-centered in the new region size.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.recenter();
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Viewport (pixel extent) of one region.
    pub fn viewport(&self, region: ScreenRegion) -> Viewport {
        match region {
            ScreenRegion::Full => Viewport::new(self.width, self.height),
            ScreenRegion::Left | ScreenRegion::Right => Viewport::new(self.width / 2.0, self.height),
        }
    }

    fn recenter(&mut self) {
        let vp = match self.view {
            ViewMode::Split => self.viewport(ScreenRegion::Left),
            _ => self.viewport(ScreenRegion::Full),
        };
        self.shape.center = (vp.width / 2.0, vp.height / 2.0);
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag.press(&self.shape, (x, y));
                log::debug!("drag start at ({x}, {y}) rx={} ry={}", self.shape.rx(), self.shape.ry());
            }
            InputEvent::PointerMove { x, y } => {
                self.drag.drag_to(&mut self.shape, (x, y));
            }
            InputEvent::PointerUp => {
                if self.drag.active {
                    log::debug!("drag end rx={} ry={}", self.shape.rx(), self.shape.ry());
                }
                self.drag.release();
            }
            InputEvent::ToggleAnimation => {
                self.animation.toggle();
                log::debug!("mode -> {:?}", self.mode());
            }
        }
    }

    /// Run one frame.
    ///
    /// Order: queued events (drag writes), then the animation write when
    /// animated, then generation. Animation therefore wins over a drag in the
    /// same frame. `timestamp` is seconds since start-up.
    /// Returns the number of points handed to `sink`.
    pub fn run_frame(&mut self, timestamp: f32, sink: &mut impl CurveSink) -> usize {
        while let Some(event) = self.events.pop_front() {
            self.handle(event);
        }
        self.animation.tick(timestamp, &mut self.shape);

        let shape = self.shape;
        let mut points = 0;
        let mut emit = |region: ScreenRegion, curve: Curve| {
            points += curve.len();
            sink.submit(region, &curve);
        };
        match self.view {
            ViewMode::Ellipse => {
                let vp = self.viewport(ScreenRegion::Full);
                emit(ScreenRegion::Full, generate_ellipse(shape.center, shape.rx(), shape.ry(), vp));
            }
            ViewMode::Circle => {
                let vp = self.viewport(ScreenRegion::Full);
                emit(ScreenRegion::Full, generate_circle(shape.center, shape.min_radius(), vp));
            }
            ViewMode::Split => {
                let vp = self.viewport(ScreenRegion::Left);
                emit(ScreenRegion::Left, generate_ellipse(shape.center, shape.rx(), shape.ry(), vp));
                emit(ScreenRegion::Right, generate_circle(shape.center, shape.min_radius(), vp));
            }
        }
        points
    }
}
