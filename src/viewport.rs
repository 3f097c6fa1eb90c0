//! Viewport state and screen/document coordinate conversion.
//!
//! The rendering transform is `screen = (document + pan) * zoom + origin`,
//! where `origin` is the fixed projection offset chosen at initialization
//! (the drawing surface's top-left inset) and `pan` accumulates in document
//! units. [`Viewport::screen_to_document`] is the exact inverse of that
//! transform at the time of the call; nothing is cached across pan or zoom
//! changes.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Rect};

/// Pan/zoom state plus the fixed document-to-screen projection.
#[derive(Clone, Debug)]
pub struct Viewport {
    zoom: f32,
    /// Accumulated pan in document units.
    pan: Point,
    /// Fixed projection offset in screen pixels.
    origin: Point,
    /// Drawing surface size in screen pixels.
    surface: (f32, f32),
    /// Pan that centers the document at zoom 1.0, restored by `reset`.
    initial_pan: Point,
}

impl Viewport {
    /// Create a viewport for a drawing surface of `surface` screen pixels
    /// showing a document of `document` pixels, centered at zoom 1.0.
    pub fn new(surface: (f32, f32), document: (f32, f32)) -> Self {
        Self::with_origin(surface, document, Point::ZERO)
    }

    /// As [`Viewport::new`], with a fixed screen-space projection offset
    /// (e.g. a toolbar inset).
    pub fn with_origin(surface: (f32, f32), document: (f32, f32), origin: Point) -> Self {
        let initial_pan = Point::new(
            (surface.0 - document.0) / 2.0,
            (surface.1 - document.1) / 2.0,
        );
        Self {
            zoom: DEFAULT_ZOOM,
            pan: initial_pan,
            origin,
            surface,
            initial_pan,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan_offset(&self) -> Point {
        self.pan
    }

    /// Convert a raw pointer position to document coordinates.
    #[inline]
    pub fn screen_to_document(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x) / self.zoom - self.pan.x,
            (screen.y - self.origin.y) / self.zoom - self.pan.y,
        )
    }

    /// Convert a document position to screen pixels.
    #[inline]
    pub fn document_to_screen(&self, document: Point) -> Point {
        Point::new(
            (document.x + self.pan.x) * self.zoom + self.origin.x,
            (document.y + self.pan.y) * self.zoom + self.origin.y,
        )
    }

    /// Multiply the current zoom by `factor`, clamping to
    /// [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Out-of-range results clamp silently;
    /// callers must not assume the unclamped value was applied. Returns the
    /// zoom actually in effect.
    pub fn set_zoom(&mut self, factor: f32) -> f32 {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom
    }

    /// Pan by a screen-pixel delta. The delta is converted to document
    /// units at the current zoom before accumulating.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan.x += dx / self.zoom;
        self.pan.y += dy / self.zoom;
    }

    /// Restore the initial centered view (used on load failure or explicit
    /// recenter).
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.pan = self.initial_pan;
    }

    /// Restore persisted pan/zoom (load path). The zoom clamp still
    /// applies: a payload written by a newer build cannot smuggle an
    /// out-of-range zoom in.
    pub fn restore(&mut self, zoom: f32, pan: Point) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = pan;
    }

    /// The document rectangle currently visible on the surface.
    pub fn visible_window(&self) -> Rect {
        let min = self.screen_to_document(self.origin);
        let max = self.screen_to_document(Point::new(
            self.origin.x + self.surface.0,
            self.origin.y + self.surface.1,
        ));
        Rect::new(min, max)
    }
}
