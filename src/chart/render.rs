use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use super::spec::{ChartSpec, SeriesColor};
use super::{ChartError, ChartFormat};

/// 계열 색상을 plotters 색으로 바꾼다.
pub fn series_rgb(color: SeriesColor) -> RGBColor {
    match color {
        SeriesColor::HeatPump => RGBColor(31, 119, 180),
        SeriesColor::Furnace => RGBColor(214, 39, 40),
        SeriesColor::Solar => RGBColor(44, 160, 44),
    }
}

/// y축 눈금 소수 자릿수. 축 폭이 좁을수록 자릿수를 늘린다.
fn label_precision(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    (2 - span.log10().floor() as i32).clamp(0, 6) as usize
}

fn backend_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// 차트를 PNG 또는 SVG 파일로 저장한다.
pub fn render_to_file(
    spec: &ChartSpec,
    path: &Path,
    format: ChartFormat,
    size: (u32, u32),
) -> Result<(), ChartError> {
    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_chart(root, spec)?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_chart(root, spec)?;
        }
    }
    info!(path = %path.display(), title = %spec.title, "차트 저장");
    Ok(())
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<(), ChartError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(backend_err)?;
    let ((x0, x1), (y0, y1)) = spec.bounds();
    let prec = label_precision(y1 - y0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.prec$}"))
        .draw()
        .map_err(backend_err)?;

    for series in &spec.series {
        let color = series_rgb(series.color);
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(backend_err)?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));
        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|&p| Circle::new(p, 4, color.filled())),
            )
            .map_err(backend_err)?;
    }

    for line in &spec.reference_lines {
        let color = series_rgb(line.color);
        chart
            .draw_series(DashedLineSeries::new(
                [(x0, line.y), (x1, line.y)],
                8,
                5,
                color.stroke_width(2),
            ))
            .map_err(backend_err)?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));
    }

    if spec.series.len() + spec.reference_lines.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(backend_err)?;
    }

    root.present().map_err(backend_err)?;
    Ok(())
}
