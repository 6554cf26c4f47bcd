//! PNG rendering of a report

use super::SimulationReport;
use crate::{LabyrinthError, Result};
use plotters::prelude::*;
use std::path::Path;

fn render_err<E: std::fmt::Display>(e: E) -> LabyrinthError {
    LabyrinthError::Render(e.to_string())
}

/// Draw the averaged series (blue) and its fitted line (red) to `path`
pub fn render_png<P: AsRef<Path>>(report: &SimulationReport, path: P) -> Result<()> {
    let series = &report.mean_per_iteration;
    let fit_line = report.fit_line();

    let y_max = series
        .iter()
        .chain(fit_line.iter())
        .cloned()
        .fold(1.0_f64, f64::max);
    let y_min = fit_line.iter().cloned().fold(0.0_f64, f64::min);

    let root = BitMapBackend::new(path.as_ref(), (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..report.max_iter as f64, y_min..y_max * 1.1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Average # of Unvisited Rooms")
        .x_label_formatter(&|x| format!("{}", *x as i64))
        .draw()
        .map_err(render_err)?;

    let mean_points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64, y))
        .collect();
    let fit_points: Vec<(f64, f64)> = fit_line
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64, y))
        .collect();

    chart
        .draw_series(LineSeries::new(mean_points, &BLUE))
        .map_err(render_err)?
        .label(report.series_legend())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(fit_points, &RED))
        .map_err(render_err)?
        .label(report.fit_legend())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
