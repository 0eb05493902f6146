use crate::config::viewer_config::ViewerConfig;
use crate::errors::AppError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, config: &ViewerConfig) -> Result<T, AppError>;
}
