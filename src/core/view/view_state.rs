use crate::core::data::complex::Complex;
use crate::core::view::drag::DragState;
use crate::core::view::palette::PaletteIndex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const MAX_ITERATIONS_LIMIT: u32 = 1000;
/// Floor applied when the user lowers the iteration cap from the keyboard.
pub const MIN_ADJUSTED_ITERATIONS: u32 = 10;
pub const ITERATION_STEP: u32 = 10;

const DEFAULT_ZOOM: f64 = 1.0;
const DEFAULT_OFFSET: Complex = Complex::new(0.3, 1.0);

const HOME_ZOOM: f64 = 2.0;
const HOME_OFFSET: Complex = Complex::ZERO;

/// Everything needed to place the fractal on screen.
///
/// The fields are private so that `zoom > 0` and the iteration bound hold
/// however the state is driven; the input mapper goes through the methods
/// below.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset: Complex,
    max_iterations: u32,
    initial_max_iterations: u32,
    adaptive_iterations: bool,
    color_index: PaletteIndex,
    background_color_index: PaletteIndex,
    drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl ViewState {
    /// Startup state. `max_iterations` is clamped to `0..=1000`.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        let max_iterations = max_iterations.min(MAX_ITERATIONS_LIMIT);

        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            max_iterations,
            initial_max_iterations: max_iterations,
            adaptive_iterations: true,
            color_index: PaletteIndex::default(),
            background_color_index: PaletteIndex::default(),
            drag: DragState::Idle,
        }
    }

    /// Replaces zoom and offset. A non-positive or non-finite zoom is ignored.
    #[must_use]
    pub fn with_view(mut self, zoom: f64, offset: Complex) -> Self {
        if is_valid_zoom(zoom) {
            self.zoom = zoom;
        }
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn adaptive_iterations(&self) -> bool {
        self.adaptive_iterations
    }

    #[must_use]
    pub fn color_index(&self) -> PaletteIndex {
        self.color_index
    }

    #[must_use]
    pub fn background_color_index(&self) -> PaletteIndex {
        self.background_color_index
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub(crate) fn set_drag(&mut self, drag: DragState) {
        self.drag = drag;
    }

    /// Scales the zoom by `factor` while keeping the plane point at `anchor_ndc`
    /// fixed on screen. Returns false, leaving the state untouched, when the
    /// new zoom would leave the representable positive range.
    pub(crate) fn zoom_about(&mut self, anchor_ndc: Complex, factor: f64) -> bool {
        let anchored = anchor_ndc * self.zoom + self.offset;
        let zoom = self.zoom * factor;

        if !is_valid_zoom(zoom) {
            return false;
        }

        self.zoom = zoom;
        self.offset = anchored - anchor_ndc * zoom;
        true
    }

    /// Moves the view window by `-delta`: the content follows the cursor.
    pub(crate) fn pan_by(&mut self, delta: Complex) {
        self.offset = self.offset - delta;
    }

    pub(crate) fn cycle_color(&mut self, step: i64) {
        self.color_index = self.color_index.step(step);
    }

    pub(crate) fn cycle_background_color(&mut self, step: i64) {
        self.background_color_index = self.background_color_index.step(step);
    }

    pub(crate) fn increase_max_iterations(&mut self) {
        self.max_iterations = (self.max_iterations + ITERATION_STEP).min(MAX_ITERATIONS_LIMIT);
    }

    pub(crate) fn decrease_max_iterations(&mut self) {
        self.max_iterations = self
            .max_iterations
            .saturating_sub(ITERATION_STEP)
            .max(MIN_ADJUSTED_ITERATIONS);
    }

    pub(crate) fn toggle_adaptive_iterations(&mut self) {
        self.adaptive_iterations = !self.adaptive_iterations;
    }

    /// Returns to the home view that frames the whole set. The background
    /// colour and any gesture in progress are left alone.
    pub(crate) fn reset(&mut self) {
        self.zoom = HOME_ZOOM;
        self.offset = HOME_OFFSET;
        self.max_iterations = self.initial_max_iterations;
        self.color_index = PaletteIndex::default();
        self.adaptive_iterations = true;
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom >= f64::MIN_POSITIVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen_point::ScreenPoint;

    #[test]
    fn default_state_matches_startup_values() {
        let state = ViewState::default();

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.offset(), Complex::new(0.3, 1.0));
        assert_eq!(state.max_iterations(), 100);
        assert!(state.adaptive_iterations());
        assert_eq!(state.color_index().get(), 0);
        assert_eq!(state.background_color_index().get(), 0);
        assert_eq!(state.drag(), DragState::Idle);
    }

    #[test]
    fn new_clamps_max_iterations_to_limit() {
        assert_eq!(ViewState::new(5000).max_iterations(), 1000);
        assert_eq!(ViewState::new(0).max_iterations(), 0);
    }

    #[test]
    fn iteration_adjustments_stay_in_bounds() {
        let mut state = ViewState::new(0);

        for _ in 0..150 {
            state.increase_max_iterations();
            assert!((10..=1000).contains(&state.max_iterations()));
        }
        assert_eq!(state.max_iterations(), 1000);

        for _ in 0..150 {
            state.decrease_max_iterations();
            assert!((10..=1000).contains(&state.max_iterations()));
        }
        assert_eq!(state.max_iterations(), 10);
    }

    #[test]
    fn decreasing_from_zero_lands_on_floor() {
        let mut state = ViewState::new(0);

        state.decrease_max_iterations();

        assert_eq!(state.max_iterations(), 10);
    }

    #[test]
    fn zoom_about_rejects_underflow() {
        let mut state = ViewState::default().with_view(f64::MIN_POSITIVE, Complex::ZERO);

        assert!(!state.zoom_about(Complex::new(0.5, 0.5), 0.5));
        assert_eq!(state.zoom(), f64::MIN_POSITIVE);
    }

    #[test]
    fn with_view_ignores_invalid_zoom() {
        let state = ViewState::default().with_view(-1.0, Complex::ZERO);

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.offset(), Complex::ZERO);
    }

    #[test]
    fn reset_restores_home_view_but_keeps_background_and_drag() {
        let mut state = ViewState::new(250).with_view(0.001, Complex::new(-0.7, 0.2));
        state.cycle_color(3);
        state.cycle_background_color(2);
        state.toggle_adaptive_iterations();
        state.increase_max_iterations();
        let drag = DragState::Dragging {
            last: ScreenPoint::new(4.0, 5.0),
        };
        state.set_drag(drag);

        state.reset();

        assert_eq!(state.zoom(), 2.0);
        assert_eq!(state.offset(), Complex::ZERO);
        assert_eq!(state.max_iterations(), 250);
        assert_eq!(state.color_index().get(), 0);
        assert!(state.adaptive_iterations());
        assert_eq!(state.background_color_index().get(), 2);
        assert_eq!(state.drag(), drag);
    }
}
