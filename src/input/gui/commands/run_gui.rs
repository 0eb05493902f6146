use crate::config::viewer_config::{ViewerConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::controllers::interactive::ViewerController;
use crate::core::data::viewport::Viewport;
use crate::errors::{AppError, RenderBackendError};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::{GuiApp, log_controls};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use std::marker::PhantomData;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    pub fn execute(&self, config: &ViewerConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new().map_err(|error| RenderBackendError::Window(error.to_string()))?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .map_err(|error| RenderBackendError::Window(error.to_string()))?,
        ));

        let presenter: P = self.presenter_factory.build(window, config)?;

        let size = window.inner_size();
        let controller = ViewerController::new(
            config.max_iterations,
            Viewport::new(size.width, size.height),
            Instant::now(),
        );

        log_controls();

        GuiApp::new(window, &event_loop, presenter, controller).run(event_loop)
    }
}
