use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontStyle;

use crate::color::class_color;
use crate::data::model::DebrisDataset;
use crate::data::stats::{leo_share, AltitudeHistogram, BIN_HI_KM, BIN_LO_KM, LEO_CEILING_KM};
use crate::report::group_thousands;

// ---------------------------------------------------------------------------
// Stacked altitude histogram (PNG)
// ---------------------------------------------------------------------------

/// Output raster size: a 12x7 in figure at 300 dpi.
const PLOT_WIDTH: u32 = 3600;
const PLOT_HEIGHT: u32 = 2100;

/// Reference orbit marked with a dashed vertical line.
const ISS_ALTITUDE_KM: f64 = 400.0;

const DARK_RED: RGBColor = RGBColor(0x8B, 0x00, 0x00);
const GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Render the stacked altitude histogram and write it to `output_path`.
///
/// X axis is logarithmic over the 200–40000 km bin range, Y axis linear.
/// Classes are stacked bottom-up in the fixed stacking order; the LEO
/// band is shaded behind the bars and annotated with the LEO share.
pub fn render_distribution(dataset: &DebrisDataset, output_path: &Path) -> Result<()> {
    let histogram = AltitudeHistogram::from_dataset(dataset);
    let leo_pct = leo_share(dataset);

    let y_max = histogram.max_stacked().max(1) as f64 * 1.05;

    let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).context("filling plot background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Space Debris Altitude Distribution",
            ("serif", 50).into_font().style(FontStyle::Bold),
        )
        .margin(30)
        .x_label_area_size(110)
        .y_label_area_size(150)
        .build_cartesian_2d((BIN_LO_KM..BIN_HI_KM).log_scale(), 0.0..y_max)
        .context("building chart axes")?;

    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc("Number of Objects")
        .x_label_formatter(&|x: &f64| group_thousands(x.round() as u64))
        .y_label_formatter(&|y: &f64| group_thousands(y.round() as u64))
        .label_style(("serif", 42))
        .axis_desc_style(("serif", 46))
        .bold_line_style(&BLACK.mix(0.15))
        .light_line_style(&BLACK.mix(0.06))
        .draw()
        .context("drawing chart mesh")?;

    // LEO band, behind the bars
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(BIN_LO_KM, 0.0), (LEO_CEILING_KM, y_max)],
            RED.mix(0.1).filled(),
        )))
        .context("shading the LEO band")?;

    // Stacked bars, one series per class in stacking order
    let mut stack_base = vec![0u32; histogram.edges.len() - 1];
    for (class, bins) in &histogram.counts {
        if !dataset.objects.iter().any(|o| o.class == *class) {
            continue;
        }
        let color = class_color(*class);

        let bars: Vec<_> = histogram
            .edges
            .windows(2)
            .zip(bins.iter())
            .zip(stack_base.iter())
            .filter(|((_, &count), _)| count > 0)
            .map(|((edge, &count), &base)| {
                Rectangle::new(
                    [(edge[0], base as f64), (edge[1], (base + count) as f64)],
                    color.mix(0.8).filled(),
                )
            })
            .collect();

        chart
            .draw_series(bars)
            .with_context(|| format!("drawing bars for {class}"))?
            .label(class.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 14), (x + 28, y + 14)], color.mix(0.8).filled())
            });

        for (base, &count) in stack_base.iter_mut().zip(bins.iter()) {
            *base += count;
        }
    }

    // ISS reference line
    chart
        .draw_series(DashedLineSeries::new(
            [(ISS_ALTITUDE_KM, 0.0), (ISS_ALTITUDE_KM, y_max)],
            16,
            10,
            DARK_RED.mix(0.6).stroke_width(4),
        ))
        .context("drawing the ISS reference line")?
        .label("ISS Orbit (400 km)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 28, y)], DARK_RED.stroke_width(4))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.95))
        .border_style(&GRAY)
        .label_font(("serif", 38))
        .draw()
        .context("drawing the legend")?;

    draw_leo_annotation(&root, leo_pct)?;

    root.present()
        .with_context(|| format!("writing {}", output_path.display()))?;
    log::info!("wrote {}", output_path.display());
    Ok(())
}

/// Boxed annotation in the upper-left of the plot area stating the LEO
/// region and the share of objects inside it.
fn draw_leo_annotation(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    leo_pct: f64,
) -> Result<()> {
    let lines = [
        format!("LEO Region ({:.0}-{:.0} km)", BIN_LO_KM, LEO_CEILING_KM),
        format!("{leo_pct:.1}% of all objects"),
    ];
    let style = ("serif", 38).into_font().color(&BLACK);

    let mut text_w = 0;
    for line in &lines {
        let (w, _) = root
            .estimate_text_size(line, &style)
            .context("measuring annotation text")?;
        text_w = text_w.max(w);
    }

    let (pad, line_h) = (24_i32, 52_i32);
    let (box_x, box_y) = (240_i32, 170_i32);
    let corner = (
        box_x + text_w as i32 + 2 * pad,
        box_y + lines.len() as i32 * line_h + 2 * pad,
    );

    root.draw(&Rectangle::new(
        [(box_x, box_y), corner],
        WHITE.mix(0.9).filled(),
    ))
    .context("drawing annotation background")?;
    root.draw(&Rectangle::new(
        [(box_x, box_y), corner],
        GRAY.stroke_width(2),
    ))
    .context("drawing annotation border")?;

    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (box_x + pad, box_y + pad + i as i32 * line_h),
            style.clone(),
        ))
        .context("drawing annotation text")?;
    }
    Ok(())
}
