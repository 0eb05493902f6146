use crate::controllers::interactive::data::frame_data::FrameData;
use crate::errors::RenderBackendError;
use egui::Context as EguiContext;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        frame: &FrameData,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), RenderBackendError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderBackendError>;
    fn backend_summary(&self) -> String;
}
