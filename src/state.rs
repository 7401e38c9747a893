use anyhow::{Context, Result};
use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::assemble::assemble_series;
use crate::data::model::{PathwayMembership, ProteinMeasurements, SeriesMap};

pub const X_AXIS_LABEL: &str = "log2 Ratio H/L";
pub const Y_AXIS_LABEL: &str = "log10 (protein abundance)";

// ---------------------------------------------------------------------------
// Plot state
// ---------------------------------------------------------------------------

/// Where the legend sits inside the plot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    UpperLeft,
    #[default]
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// One named point series drawn in a single colour.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayer {
    pub pathway: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

/// Everything a renderer needs, independent of any UI toolkit.
#[derive(Debug, Clone)]
pub struct PlotState {
    /// One layer per pathway, in pathway order.
    pub layers: Vec<PlotLayer>,
    pub x_label: String,
    pub y_label: String,
    pub legend: LegendPosition,
}

impl PlotState {
    /// Build the render model from assembled series.
    pub fn from_series(series: &SeriesMap) -> Self {
        let color_map = ColorMap::new(series.keys());
        let layers = series
            .iter()
            .map(|(pathway, coords)| PlotLayer {
                pathway: pathway.clone(),
                points: coords.points().collect(),
                color: color_map.color_for(pathway),
            })
            .collect();

        PlotState {
            layers,
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            legend: LegendPosition::default(),
        }
    }

    /// Number of layers (pathways).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of points across all layers.
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|l| l.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Rendering seam
// ---------------------------------------------------------------------------

/// Something that can put a [`PlotState`] in front of the user.
pub trait ScatterRenderer {
    fn render(&mut self, plot: PlotState) -> Result<()>;
}

/// Join the two tables and hand the resulting plot to `renderer`.
///
/// The renderer is not called when the join fails.
pub fn create_plot<R: ScatterRenderer + ?Sized>(
    measurements: &ProteinMeasurements,
    pathways: &PathwayMembership,
    renderer: &mut R,
) -> Result<()> {
    let series =
        assemble_series(measurements, pathways).context("joining pathways with measurements")?;
    let plot = PlotState::from_series(&series);
    log::info!(
        "Rendering {} pathways ({} points)",
        plot.len(),
        plot.point_count()
    );
    renderer.render(plot)
}
