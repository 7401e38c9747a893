use eframe::egui::Ui;
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoints, Points};

use kegg_scatter::state::{LegendPosition, PlotState};

// ---------------------------------------------------------------------------
// Pathway scatter plot (central panel)
// ---------------------------------------------------------------------------

fn legend_corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::UpperLeft => Corner::LeftTop,
        LegendPosition::UpperRight => Corner::RightTop,
        LegendPosition::LowerLeft => Corner::LeftBottom,
        LegendPosition::LowerRight => Corner::RightBottom,
    }
}

/// Render one point series per pathway on shared axes.
pub fn scatter_plot(ui: &mut Ui, state: &PlotState) {
    if state.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No pathways to plot");
        });
        return;
    }

    Plot::new("pathway_scatter")
        .legend(Legend::default().position(legend_corner(state.legend)))
        .x_axis_label(state.x_label.as_str())
        .y_axis_label(state.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for layer in &state.layers {
                let points: PlotPoints = layer.points.iter().copied().collect();

                let series = Points::new(points)
                    .name(&layer.pathway)
                    .color(layer.color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0);

                plot_ui.points(series);
            }
        });
}
