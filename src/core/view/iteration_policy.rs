use crate::core::view::view_state::{MAX_ITERATIONS_LIMIT, ViewState};

const ADAPTIVE_MIN_ITERATIONS: u32 = 10;
const ITERATIONS_PER_OCTAVE: f64 = 50.0;

/// Derives the iteration count the shader should run for a given view.
///
/// In adaptive mode every halving of `zoom` below 1.0 adds
/// `iterations_per_octave` on top of the configured cap, and the result is
/// clamped to `min_iterations..=max_iterations`. Zooming out past 1.0 adds
/// nothing, which keeps the curve monotonic in `1 / zoom`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationPolicy {
    pub iterations_per_octave: f64,
    pub min_iterations: u32,
    pub max_iterations: u32,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            iterations_per_octave: ITERATIONS_PER_OCTAVE,
            min_iterations: ADAPTIVE_MIN_ITERATIONS,
            max_iterations: MAX_ITERATIONS_LIMIT,
        }
    }
}

impl IterationPolicy {
    #[must_use]
    pub fn effective_iterations(&self, state: &ViewState) -> u32 {
        if !state.adaptive_iterations() {
            return state.max_iterations();
        }

        let depth = state.zoom().recip().log2().max(0.0);
        let boosted = f64::from(state.max_iterations()) + self.iterations_per_octave * depth;

        boosted.clamp(
            f64::from(self.min_iterations),
            f64::from(self.max_iterations),
        ) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn state_at(zoom: f64, max_iterations: u32, adaptive: bool) -> ViewState {
        let mut state = ViewState::new(max_iterations).with_view(zoom, Complex::ZERO);
        if !adaptive {
            state.toggle_adaptive_iterations();
        }
        state
    }

    #[test]
    fn fixed_mode_passes_through_max_iterations() {
        let policy = IterationPolicy::default();

        for zoom in [4.0, 1.0, 1e-3, 1e-12] {
            assert_eq!(policy.effective_iterations(&state_at(zoom, 100, false)), 100);
        }
        assert_eq!(policy.effective_iterations(&state_at(1.0, 0, false)), 0);
    }

    #[test]
    fn adaptive_mode_is_monotonic_as_zoom_deepens() {
        let policy = IterationPolicy::default();
        let mut zoom = 8.0;
        let mut previous = policy.effective_iterations(&state_at(zoom, 100, true));

        for _ in 0..200 {
            zoom *= 0.85;
            let current = policy.effective_iterations(&state_at(zoom, 100, true));
            assert!(
                current >= previous,
                "zoom={} current={} previous={}",
                zoom,
                current,
                previous
            );
            previous = current;
        }
    }

    #[test]
    fn adaptive_mode_stays_within_bounds() {
        let policy = IterationPolicy::default();

        for max_iterations in [0, 10, 100, 1000] {
            for zoom in [1e6, 2.0, 1.0, 0.5, 1e-5, 1e-300] {
                let iterations =
                    policy.effective_iterations(&state_at(zoom, max_iterations, true));
                assert!(
                    (10..=1000).contains(&iterations),
                    "zoom={} max={} iterations={}",
                    zoom,
                    max_iterations,
                    iterations
                );
            }
        }
    }

    #[test]
    fn adaptive_mode_adds_iterations_per_octave() {
        let policy = IterationPolicy::default();

        assert_eq!(policy.effective_iterations(&state_at(1.0, 100, true)), 100);
        assert_eq!(policy.effective_iterations(&state_at(0.5, 100, true)), 150);
        assert_eq!(policy.effective_iterations(&state_at(0.25, 100, true)), 200);
    }

    #[test]
    fn zooming_out_does_not_reduce_below_configured_cap() {
        let policy = IterationPolicy::default();

        assert_eq!(policy.effective_iterations(&state_at(2.0, 100, true)), 100);
        assert_eq!(policy.effective_iterations(&state_at(1e9, 100, true)), 100);
    }
}
