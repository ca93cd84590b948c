// viewport.rs - Zoom level to raster sub-rectangle mapping
//
// The rectangle is only recomputed when the zoom level changes. Moving the
// pointer while zoomed does not pan the view.

use log::debug;

pub const BASE_VIEW_SIZE: u32 = 1000;   // Display side length in pixels
pub const ZOOM_STEP: u32 = 10;          // Pixels removed from the view side per zoom level

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomEvent {
    In,
    Out,
}

/// Rectangle in raster pixels; `max` is exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl ViewRect {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// The part of the rectangle that lies inside a `width x height` raster.
    pub fn clipped(&self, width: usize, height: usize) -> ViewRect {
        let clip = ViewRect {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(width as i32),
            max_y: self.max_y.min(height as i32),
        };
        if clip.is_empty() { ViewRect::default() } else { clip }
    }
}

#[derive(Clone, Debug)]
pub struct Viewport {
    base_size: u32,
    step: u32,
    zoom_level: u32,
    rect: ViewRect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(BASE_VIEW_SIZE, ZOOM_STEP)
    }
}

impl Viewport {
    pub fn new(base_size: u32, step: u32) -> Self {
        Self {
            base_size,
            step,
            zoom_level: 0,
            rect: ViewRect::default(),
        }
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom_level
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom_level > 0
    }

    /// Highest level that still leaves a non-degenerate view.
    pub fn max_zoom_level(&self) -> u32 {
        self.base_size.saturating_sub(1) / self.step.max(1)
    }

    /// Side length `S` of the square view at the current level.
    pub fn side(&self) -> u32 {
        self.base_size - self.step * self.zoom_level
    }

    /// Display magnification, 1.0 when not zoomed.
    pub fn scale(&self) -> f32 {
        match self.side() {
            0 => 1.0,
            side => self.base_size as f32 / side as f32,
        }
    }

    pub fn base_size(&self) -> u32 {
        self.base_size
    }

    /// Raster rectangle shown while zoomed. Stale at level 0.
    pub fn rect(&self) -> ViewRect {
        self.rect
    }

    /// Applies one zoom event centered on `focal` (raster pixels).
    /// Returns whether the level changed; the rectangle is only rebuilt then.
    pub fn zoom(&mut self, event: ZoomEvent, focal: (f32, f32)) -> bool {
        let level = match event {
            ZoomEvent::In => (self.zoom_level + 1).min(self.max_zoom_level()),
            ZoomEvent::Out => self.zoom_level.saturating_sub(1),
        };
        if level == self.zoom_level {
            return false;
        }
        self.zoom_level = level;

        let half = (self.side() / 2) as i32;
        let (fx, fy) = (focal.0 as i32, focal.1 as i32);
        self.rect = ViewRect {
            min_x: fx - half,
            min_y: fy - half,
            max_x: fx + half,
            max_y: fy + half,
        };
        debug!("zoom level {} -> side {} at ({}, {})", level, self.side(), fx, fy);
        true
    }

    /// Maps a point on the displayed image back to raster pixels.
    pub fn display_to_raster(&self, x: f32, y: f32) -> (f32, f32) {
        if !self.is_zoomed() {
            return (x, y);
        }
        let scale = self.scale();
        (
            self.rect.min_x as f32 + x / scale,
            self.rect.min_y as f32 + y / scale,
        )
    }
}
