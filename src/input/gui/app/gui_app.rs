use crate::controllers::interactive::ViewerController;
use crate::core::actions::map_input::input_mapper::MapOutcome;
use crate::core::data::host_event::HostEvent;
use crate::errors::{AppError, RenderBackendError};
use crate::input::gui::app::controls_panel::show_controls_panel;
use crate::input::gui::app::host_events::{HostEventTranslator, reaches_viewer};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use tracing::{error, info};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: ViewerController,
    translator: HostEventTranslator,
    show_controls: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ViewerController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            controller,
            translator: HostEventTranslator::default(),
            show_controls: false,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or Escape is pressed. A render failure
    /// stops the loop and is returned.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), AppError> {
        let mut failure: Option<AppError> = None;

        info!(backend = %self.presenter.backend_summary(), "entering event loop");

        event_loop
            .run(|event, elwt| {
                elwt.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                        let step = match event {
                            WindowEvent::RedrawRequested => self.redraw(),
                            _ => self.handle_window_event(event),
                        };

                        match step {
                            Ok(MapOutcome::Continue) => {}
                            Ok(MapOutcome::Quit) => elwt.exit(),
                            Err(error) => {
                                error!(%error, "stopping viewer");
                                failure = Some(error.into());
                                elwt.exit();
                            }
                        }
                    }
                    Event::AboutToWait => self.window.request_redraw(),
                    _ => {}
                }
            })
            .map_err(|error| RenderBackendError::Window(error.to_string()))?;

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<MapOutcome, RenderBackendError> {
        let response = self.egui_state.on_window_event(self.window, event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::F1),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.show_controls = !self.show_controls;
                return Ok(MapOutcome::Continue);
            }
            WindowEvent::Resized(size) => {
                self.presenter.resize(size.width, size.height)?;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.presenter.resize(size.width, size.height)?;
                return Ok(self.controller.handle_event(&HostEvent::Resized {
                    width: size.width,
                    height: size.height,
                }));
            }
            _ => {}
        }

        let Some(host_event) = self.translator.translate(event) else {
            return Ok(MapOutcome::Continue);
        };

        if !reaches_viewer(&host_event, response.consumed) {
            return Ok(MapOutcome::Continue);
        }

        Ok(self.controller.handle_event(&host_event))
    }

    fn redraw(&mut self) -> Result<MapOutcome, RenderBackendError> {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let iterations = self.controller.effective_iterations();

        let state = self.controller.state();
        let show_controls = &mut self.show_controls;
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            show_controls_panel(ctx, show_controls, state, iterations);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        let frame = self.controller.frame(Instant::now());

        if self.controller.viewport().is_degenerate() {
            return Ok(MapOutcome::Continue);
        }

        self.presenter.render(&frame, egui_output, &self.egui_ctx)?;

        Ok(MapOutcome::Continue)
    }
}
