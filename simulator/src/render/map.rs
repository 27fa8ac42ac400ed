use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;
use wificore::interference::InterferenceReport;
use wificore::model::Hotspot;

fn channel_color(channel: u8) -> RGBColor {
    match channel {
        1 => BLUE,
        2 => GREEN,
        3 => MAGENTA,
        4 => RGBColor(255, 165, 0),
        5 => CYAN,
        _ => BLACK,
    }
}

/// Scatter map of hotspot positions colored by channel, with red segments
/// between interfering pairs and a red outline on involved hotspots.
pub fn render_map(
    hotspots: &[Hotspot],
    report: &InterferenceReport,
    area_size: f64,
    num_channels: u8,
    path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(path, (900, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Wi-Fi Hotspot Locations and Interference", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..area_size, 0f64..area_size)?;

    chart
        .configure_mesh()
        .x_desc("X (meters)")
        .y_desc("Y (meters)")
        .draw()?;

    // Interference segments underneath the markers.
    chart.draw_series(report.pairs.iter().map(|&(i, j)| {
        PathElement::new(
            vec![
                (hotspots[i].x, hotspots[i].y),
                (hotspots[j].x, hotspots[j].y),
            ],
            RED.stroke_width(1),
        )
    }))?;

    for channel in 1..=num_channels {
        let color = channel_color(channel);
        chart
            .draw_series(
                hotspots
                    .iter()
                    .filter(move |h| h.channel == channel)
                    .map(|h| Circle::new((h.x, h.y), 4, color.filled())),
            )?
            .label(format!("Channel {channel}"))
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart.draw_series(
        report
            .involved
            .iter()
            .map(|&idx| Circle::new((hotspots[idx].x, hotspots[idx].y), 6, RED.stroke_width(2))),
    )?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
