use crate::workflow::runner::WorkflowResult;
use tworaycore::LossComparison;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesModel {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// One subplot: the three curves of a band set plus annotation lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelModel {
    pub title: String,
    pub series: Vec<SeriesModel>,
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureModel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub panels: Vec<PanelModel>,
}

fn zip_points<'a>(distances: &[f64], values: impl IntoIterator<Item = &'a f64>) -> Vec<(f64, f64)> {
    distances.iter().copied().zip(values.into_iter().copied()).collect()
}

impl PanelModel {
    fn from_comparison(comparison: &LossComparison, distances: &[f64], reflection: f64, u: f64) -> Self {
        let curves = &comparison.curves;
        let summary = &comparison.summary;

        Self {
            title: format!("Bands={}MHz", comparison.bands.label()),
            series: vec![
                SeriesModel {
                    label: format!("Two-Ray ground-reflection analytical model (Γ={})", reflection),
                    points: zip_points(distances, &curves.two_ray),
                },
                SeriesModel {
                    label: format!("u={}", u),
                    points: zip_points(distances, &curves.u_model),
                },
                SeriesModel {
                    label: "Free Space (FSPL)".to_string(),
                    points: zip_points(distances, &curves.free_space),
                },
            ],
            annotations: vec![
                format!(
                    "{:.2}% of values (u={} model) greater than analytical model",
                    summary.u_model_at_or_above_pct, u
                ),
                format!(
                    "Mean diff. [(u={}), analytical two-ray]:={:+.1}dB",
                    u, summary.mean_u_minus_two_ray_db
                ),
                format!(
                    "Mean diff. [FSPL, analytical two-ray]:={:+.1}dB",
                    summary.mean_fspl_minus_two_ray_db
                ),
            ],
        }
    }

    /// Finite min/max over every series; `None` when nothing is plottable.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|series| series.points.iter().map(|&(_, y)| y))
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}

impl FigureModel {
    pub fn from_result(result: &WorkflowResult) -> Self {
        let scenario = &result.scenario;
        let x_range = match (result.distances.first(), result.distances.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (scenario.min_distance, scenario.max_distance),
        };

        Self {
            title: format!(
                "Models comparison for: ht={}m, hr={}m, Γ={} and u={} simplified model",
                scenario.tx_height, scenario.rx_height, scenario.reflection, scenario.u_factor
            ),
            x_label: "Distance (m)".to_string(),
            y_label: "Normalized Path Loss (dB)".to_string(),
            x_range,
            panels: result
                .comparisons
                .iter()
                .map(|comparison| {
                    PanelModel::from_comparison(
                        comparison,
                        &result.distances,
                        scenario.reflection,
                        scenario.u_factor,
                    )
                })
                .collect(),
        }
    }

    /// (rows, columns) of the subplot grid; two columns once there is more than one panel.
    pub fn grid(&self) -> (usize, usize) {
        let cols = if self.panels.len() > 1 { 2 } else { 1 };
        let rows = self.panels.len().div_ceil(cols).max(1);
        (rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;

    fn reference_figure() -> FigureModel {
        let mut cfg = WorkflowConfig::default();
        cfg.scenario.samples = 32;
        FigureModel::from_result(&Runner::new(cfg).execute().unwrap())
    }

    #[test]
    fn figure_has_one_panel_per_band_set() {
        let figure = reference_figure();
        assert_eq!(figure.panels.len(), 4);
        assert_eq!(figure.grid(), (2, 2));
        assert_eq!(figure.x_range, (1.0, 25.0));
        assert_eq!(
            figure.title,
            "Models comparison for: ht=6m, hr=4m, Γ=-0.9 and u=1.6 simplified model"
        );
    }

    #[test]
    fn panel_carries_titles_series_and_annotations() {
        let figure = reference_figure();
        let panel = &figure.panels[1];
        assert_eq!(panel.title, "Bands=(800, 900, 2100)MHz");
        assert_eq!(panel.series.len(), 3);
        assert_eq!(panel.series[1].label, "u=1.6");
        assert!(panel.series.iter().all(|s| s.points.len() == 32));
        assert!(panel.annotations[0].contains("% of values (u=1.6 model)"));
        assert!(panel.annotations[2].starts_with("Mean diff. [FSPL, analytical two-ray]:="));
    }

    #[test]
    fn y_bounds_skip_non_finite_values() {
        let panel = PanelModel {
            title: String::new(),
            series: vec![SeriesModel {
                label: String::new(),
                points: vec![(1.0, f64::NEG_INFINITY), (2.0, -3.0), (3.0, 0.0), (4.0, f64::NAN)],
            }],
            annotations: Vec::new(),
        };
        assert_eq!(panel.y_bounds(), Some((-3.0, 0.0)));
    }

    #[test]
    fn single_panel_uses_single_column() {
        let mut figure = reference_figure();
        figure.panels.truncate(1);
        assert_eq!(figure.grid(), (1, 1));
        figure.panels.truncate(0);
        assert_eq!(figure.grid(), (1, 1));
    }
}
