use crate::render::model::{FigureModel, PanelModel};
use anyhow::{anyhow, Context};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

/// Two-ray, u-factor, free-space.
const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// Renders a [`FigureModel`] as a PNG with one log-distance panel per band set.
pub struct FigureRenderer {
    width: u32,
    height: u32,
}

impl Default for FigureRenderer {
    fn default() -> Self {
        Self::new(2000, 1500)
    }
}

impl FigureRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Draws every panel and writes the image, replacing any previous file.
    pub fn render_to_file(&self, figure: &FigureModel, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating figure directory {}", parent.display()))?;
        }

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("clearing figure canvas: {e}"))?;
        let body = root
            .titled(&figure.title, ("sans-serif", 32))
            .map_err(|e| anyhow!("drawing figure title: {e}"))?;

        let panels = body.split_evenly(figure.grid());
        for (panel, area) in figure.panels.iter().zip(panels.iter()) {
            draw_panel(area, figure, panel)?;
        }

        root.present()
            .map_err(|e| anyhow!("writing figure {}: {e}", path.display()))?;
        info!("figure written to {}", path.display());
        Ok(())
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &FigureModel,
    panel: &PanelModel,
) -> anyhow::Result<()> {
    let (y_min, y_max) = panel.y_bounds().unwrap_or((-1.0, 1.0));
    let pad = ((y_max - y_min) * 0.05).max(0.5);
    let (x_min, x_max) = figure.x_range;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min - pad)..(y_max + pad))
        .map_err(|e| anyhow!("building panel {}: {e}", panel.title))?;

    chart
        .configure_mesh()
        .x_desc(&figure.x_label)
        .y_desc(&figure.y_label)
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .draw()
        .map_err(|e| anyhow!("drawing mesh for {}: {e}", panel.title))?;

    for (series, &color) in panel.series.iter().zip(SERIES_COLORS.iter()) {
        let points = series.points.iter().copied().filter(|(_, y)| y.is_finite());
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| anyhow!("drawing series {}: {e}", series.label))?
            .label(&series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("drawing legend for {}: {e}", panel.title))?;

    // Annotation block sits just above the x axis, left-aligned with the plot.
    let (_, height) = area.dim_in_pixel();
    let style = TextStyle::from(("sans-serif", 16).into_font());
    let lines = panel.annotations.len() as i32;
    for (index, line) in panel.annotations.iter().enumerate() {
        let y = height as i32 - 70 - (lines - index as i32) * 20;
        area.draw_text(line, &style, (90, y))
            .map_err(|e| anyhow!("annotating {}: {e}", panel.title))?;
    }

    Ok(())
}
