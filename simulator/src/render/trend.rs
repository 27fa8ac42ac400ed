use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;
use wificore::telemetry::InterferenceTrend;

/// Line chart of the interfering-hotspot count per optimizer iteration.
pub fn render_trend(trend: &InterferenceTrend, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    if trend.is_empty() {
        root.draw(&Text::new(
            "No iterations recorded",
            (400, 300),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let max_count = trend.counts().iter().copied().max().unwrap_or(0).max(1);
    let max_iteration = (trend.len() - 1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Interference Reduction Over Iterations", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_iteration as f64, 0f64..max_count as f64 * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Number of Interfering Hotspots")
        .draw()?;

    let points: Vec<(f64, f64)> = trend
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64, c as f64))
        .collect();

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
