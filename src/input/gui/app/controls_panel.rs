use crate::core::view::view_state::ViewState;
use egui::Context;
use tracing::info;

pub const CONTROLS: &[(&str, &str)] = &[
    ("Mouse drag", "Pan"),
    ("Mouse wheel", "Zoom at cursor"),
    ("R", "Reset view"),
    ("C / V", "Next / previous colour"),
    ("B / N", "Next / previous background"),
    ("+ / -", "Iterations +10 / -10"),
    ("A", "Toggle adaptive iterations"),
    ("F1", "Show / hide this panel"),
    ("Escape", "Quit"),
];

pub fn log_controls() {
    for (input, action) in CONTROLS {
        info!("{input:>12}: {action}");
    }
}

/// Read-only summary of the bindings and the current view.
pub fn show_controls_panel(ctx: &Context, open: &mut bool, state: &ViewState, iterations: u32) {
    egui::Window::new("Controls")
        .open(open)
        .default_pos([10.0, 90.0])
        .default_size([260.0, 260.0])
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("key_bindings")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (input, action) in CONTROLS {
                        ui.label(*input);
                        ui.label(*action);
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(format!("Zoom: {:.6e}", state.zoom()));
            ui.label(format!(
                "Centre: {:.12} {:+.12}i",
                state.offset().real,
                state.offset().imag
            ));
            ui.label(format!(
                "Iterations: {} (cap {}, adaptive {})",
                iterations,
                state.max_iterations(),
                if state.adaptive_iterations() { "on" } else { "off" }
            ));
            ui.label(format!(
                "Colour {} / background {}",
                state.color_index().get(),
                state.background_color_index().get()
            ));
        });
}
