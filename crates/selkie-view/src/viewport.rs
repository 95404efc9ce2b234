use crate::geom::{Point, Transform, Vector, point, vector};
use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;

/// Wheel delta to scale conversion rate.
const WHEEL_ZOOM_RATE: f64 = 0.001;
/// Multiplicative step for the zoom in/out buttons.
const BUTTON_ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Pan/zoom state over an opaque child visual.
///
/// Dragging records an anchor in child coordinates
/// (`pointer − current translation`); each move re-derives the translation
/// from the live pointer position, so drags stay exact regardless of event
/// frequency. Zoom is center-anchored: the translation is untouched by scale
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    scale: f64,
    translate: Vector,
    drag_anchor: Option<Point>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: vector(0.0, 0.0),
            drag_anchor: None,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> Vector {
        self.translate
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Starts a drag. Only the primary button pans; other buttons are ignored.
    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag_anchor = Some(point(x - self.translate.x, y - self.translate.y));
    }

    /// Updates the translation while dragging; a no-op otherwise.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(anchor) = self.drag_anchor {
            self.translate = vector(x - anchor.x, y - anchor.y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    /// Leaving the viewport ends the drag exactly like releasing the button.
    pub fn pointer_leave(&mut self) {
        self.drag_anchor = None;
    }

    /// Wheel zoom: additive in the wheel delta, clamped. Translation is
    /// untouched (center-anchored zoom, not cursor-anchored).
    pub fn wheel(&mut self, delta_y: f64) {
        self.set_scale(self.scale + (-delta_y * WHEEL_ZOOM_RATE));
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / BUTTON_ZOOM_STEP);
    }

    /// Restores scale 1.0 and zero translation. Does not end an active drag.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.translate = vector(0.0, 0.0);
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// The displayed transform: scale about the child's center, then translate.
    pub fn transform(&self) -> Transform {
        Transform::scale(self.scale, self.scale).then_translate(self.translate)
    }

    /// CSS-style transform string, `translate(..px, ..px) scale(..)`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// Whether the presentation layer may smooth transform transitions.
    /// Always false during a drag: smoothing there reads as input lag.
    pub fn smoothing(&self) -> bool {
        !self.is_dragging()
    }

    /// Rounded percentage for the zoom indicator label.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_translates_by_the_pointer_delta() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 100.0, 100.0);
        vp.pointer_move(150.0, 130.0);
        assert_eq!(vp.translate(), vector(50.0, 30.0));
        assert!(vp.is_dragging());
    }

    #[test]
    fn pointer_leave_ends_the_drag_at_the_last_translate() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 100.0, 100.0);
        vp.pointer_move(150.0, 130.0);
        vp.pointer_leave();
        assert!(!vp.is_dragging());
        assert_eq!(vp.translate(), vector(50.0, 30.0));
        // Moves after the drag ended change nothing.
        vp.pointer_move(500.0, 500.0);
        assert_eq!(vp.translate(), vector(50.0, 30.0));
    }

    #[test]
    fn non_primary_buttons_do_not_start_a_drag() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Secondary, 10.0, 10.0);
        vp.pointer_move(50.0, 50.0);
        assert!(!vp.is_dragging());
        assert_eq!(vp.translate(), vector(0.0, 0.0));
    }

    #[test]
    fn drag_accounts_for_existing_translation() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        vp.pointer_move(10.0, 20.0);
        vp.pointer_up();
        // Second drag continues from (10, 20), not from the origin.
        vp.pointer_down(PointerButton::Primary, 100.0, 100.0);
        vp.pointer_move(105.0, 95.0);
        assert_eq!(vp.translate(), vector(15.0, 15.0));
    }

    #[test]
    fn wheel_zoom_is_additive_and_clamped() {
        let mut vp = Viewport::new();
        vp.wheel(-1000.0);
        assert_eq!(vp.scale(), 2.0);
        // Further upward deltas saturate at the maximum.
        vp.wheel(-10_000.0);
        assert_eq!(vp.scale(), MAX_SCALE);
        vp.wheel(-1.0);
        assert_eq!(vp.scale(), MAX_SCALE);

        vp.wheel(10_000.0);
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn wheel_zoom_leaves_translation_unchanged() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        vp.pointer_move(30.0, 40.0);
        vp.pointer_up();
        vp.wheel(-500.0);
        assert_eq!(vp.translate(), vector(30.0, 40.0));
    }

    #[test]
    fn button_zoom_is_multiplicative_and_clamped() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        assert!((vp.scale() - 1.2).abs() < 1e-12);
        vp.zoom_out();
        assert!((vp.scale() - 1.0).abs() < 1e-12);

        for _ in 0..20 {
            vp.zoom_in();
        }
        assert_eq!(vp.scale(), MAX_SCALE);
        for _ in 0..40 {
            vp.zoom_out();
        }
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn reset_restores_identity_regardless_of_history() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        vp.pointer_move(77.0, -33.0);
        vp.wheel(-2000.0);
        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), vector(0.0, 0.0));
        // Reset does not end the drag itself.
        assert!(vp.is_dragging());
    }

    #[test]
    fn smoothing_is_disabled_only_while_dragging() {
        let mut vp = Viewport::new();
        assert!(vp.smoothing());
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        assert!(!vp.smoothing());
        vp.pointer_up();
        assert!(vp.smoothing());
    }

    #[test]
    fn transform_scales_then_translates() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        vp.pointer_move(10.0, 20.0);
        vp.pointer_up();
        vp.wheel(-1000.0); // scale 2.0
        let t = vp.transform();
        let p = t.transform_point(point(3.0, 4.0));
        assert_eq!(p, point(16.0, 28.0));
    }

    #[test]
    fn css_transform_formats_like_the_presentation_layer_expects() {
        let mut vp = Viewport::new();
        vp.pointer_down(PointerButton::Primary, 0.0, 0.0);
        vp.pointer_move(50.0, 30.0);
        vp.pointer_up();
        assert_eq!(vp.css_transform(), "translate(50px, 30px) scale(1)");
    }

    #[test]
    fn zoom_percent_rounds_the_scale() {
        let mut vp = Viewport::new();
        assert_eq!(vp.zoom_percent(), 100);
        vp.zoom_in();
        assert_eq!(vp.zoom_percent(), 120);
        vp.wheel(10_000.0);
        assert_eq!(vp.zoom_percent(), 10);
    }
}
