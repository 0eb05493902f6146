use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::overlay_line::OverlayLine;
use crate::controllers::interactive::fps_counter::FpsCounter;
use crate::core::actions::map_input::input_mapper::{InputMapper, MapOutcome};
use crate::core::data::fractal_uniforms::FractalUniforms;
use crate::core::data::host_event::HostEvent;
use crate::core::data::viewport::Viewport;
use crate::core::view::iteration_policy::IterationPolicy;
use crate::core::view::view_state::ViewState;
use std::time::Instant;
use tracing::debug;

const OVERLAY_X: f32 = 10.0;
const FPS_LINE_Y: f32 = 30.0;
const STATE_LINE_Y: f32 = 60.0;
const OVERLAY_SCALE: f32 = 1.0;
const OVERLAY_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

pub struct ViewerController {
    state: ViewState,
    mapper: InputMapper,
    policy: IterationPolicy,
    viewport: Viewport,
    fps: FpsCounter,
}

impl ViewerController {
    #[must_use]
    pub fn new(max_iterations: u32, viewport: Viewport, now: Instant) -> Self {
        Self {
            state: ViewState::new(max_iterations),
            mapper: InputMapper::default(),
            policy: IterationPolicy::default(),
            viewport,
            fps: FpsCounter::new(now),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn effective_iterations(&self) -> u32 {
        self.policy.effective_iterations(&self.state)
    }

    /// Applies one host event. Resizes are recorded here before the mapper
    /// sees the event, so coordinate mapping always uses the current size.
    pub fn handle_event(&mut self, event: &HostEvent) -> MapOutcome {
        if let HostEvent::Resized { width, height } = *event {
            self.viewport = Viewport::new(width, height);
            debug!(width, height, "viewport resized");
        }

        self.mapper.handle(&mut self.state, self.viewport, event)
    }

    /// Describes the frame about to be presented at `now` and counts it.
    pub fn frame(&mut self, now: Instant) -> FrameData {
        self.fps.tick(now);

        let iterations = self.effective_iterations();
        let uniforms = FractalUniforms::from_view(&self.state, self.viewport, iterations);

        FrameData {
            uniforms,
            overlay: vec![
                self.overlay_line(format!("FPS: {}", self.fps.fps().round() as u32), FPS_LINE_Y),
                self.overlay_line(self.state_summary(iterations), STATE_LINE_Y),
            ],
        }
    }

    fn state_summary(&self, iterations: u32) -> String {
        format!(
            "Zoom: {:.3e}  Iter: {}{}",
            self.state.zoom(),
            iterations,
            if self.state.adaptive_iterations() {
                " (adaptive)"
            } else {
                ""
            }
        )
    }

    fn overlay_line(&self, text: String, y: f32) -> OverlayLine {
        OverlayLine {
            text,
            x: OVERLAY_X,
            y,
            scale: OVERLAY_SCALE,
            color: OVERLAY_COLOR,
        }
    }
}
