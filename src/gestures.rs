use crate::core::{MAX_SCALE, MIN_SCALE, PAN_LIMIT_PER_SCALE, PINCH_SCALE_STEP};

/// Pan/zoom state for the grid view. Two-finger pinch scales, one-finger
/// drag pans once zoomed in; offsets are clamped so the grid cannot be
/// dragged fully out of view. Shares no state with the answer-editing flow.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PanZoomState {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    last_touch: Option<(f64, f64)>,
    last_distance: Option<f64>,
}

impl PanZoomState {
    pub(crate) fn new() -> Self {
        Self {
            scale: MIN_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            last_touch: None,
            last_distance: None,
        }
    }

    pub(crate) fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn touch_start_single(&mut self, x: f64, y: f64) {
        self.last_touch = Some((x, y));
        self.last_distance = None;
    }

    pub(crate) fn touch_start_pinch(&mut self, distance: f64) {
        self.last_distance = Some(distance);
        self.last_touch = None;
    }

    pub(crate) fn touch_move_single(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.last_touch else {
            return;
        };
        if self.scale > MIN_SCALE {
            let max_offset = (self.scale - 1.0) * PAN_LIMIT_PER_SCALE;
            self.offset_x = (self.offset_x + (x - last_x)).clamp(-max_offset, max_offset);
            self.offset_y = (self.offset_y + (y - last_y)).clamp(-max_offset, max_offset);
        }
        self.last_touch = Some((x, y));
    }

    pub(crate) fn touch_move_pinch(&mut self, distance: f64) {
        if let Some(last) = self.last_distance {
            let delta = distance - last;
            self.scale = (self.scale + delta * PINCH_SCALE_STEP).clamp(MIN_SCALE, MAX_SCALE);
            let max_offset = (self.scale - 1.0) * PAN_LIMIT_PER_SCALE;
            self.offset_x = self.offset_x.clamp(-max_offset, max_offset);
            self.offset_y = self.offset_y.clamp(-max_offset, max_offset);
        }
        self.last_distance = Some(distance);
    }

    pub(crate) fn touch_end(&mut self) {
        self.last_touch = None;
        self.last_distance = None;
    }

    pub(crate) fn transform_style(&self) -> String {
        format!(
            "transform: scale({}) translate({}px, {}px); transform-origin: center;",
            self.scale, self.offset_x, self.offset_y
        )
    }
}
