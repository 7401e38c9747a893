use anyhow::Result;
use eframe::egui;

use kegg_scatter::state::{PlotState, ScatterRenderer};

use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct KeggScatterApp {
    pub state: PlotState,
}

impl eframe::App for KeggScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Native window renderer
// ---------------------------------------------------------------------------

/// Shows the plot in a native window and blocks until it is closed.
pub struct WindowRenderer {
    pub title: String,
    pub options: eframe::NativeOptions,
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self {
            title: "KEGG Pathway Scatter".to_string(),
            options: eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([1000.0, 700.0])
                    .with_min_inner_size([500.0, 350.0]),
                ..Default::default()
            },
        }
    }
}

impl ScatterRenderer for WindowRenderer {
    fn render(&mut self, plot: PlotState) -> Result<()> {
        let app = KeggScatterApp { state: plot };
        eframe::run_native(
            &self.title,
            std::mem::take(&mut self.options),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        // eframe::Error is not Send + Sync and carries no source chain.
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
    }
}
