use tracing::warn;

use super::ChartError;
use crate::heat_pump::dataset::COL_COP;
use crate::heat_pump::{PricedTable, PricingUnit};

pub const X_LABEL_OUTDOOR_C: &str = "Outdoor Temperature (°C)";
pub const EFFICIENCY_TITLE: &str = "Heat Pump Efficiency vs Outdoor Temperature";
pub const EFFICIENCY_Y_LABEL: &str = "Coefficient of Performance (COP)";

/// 계열 색상. 실제 색은 그리는 쪽에서 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    HeatPump,
    Furnace,
    Solar,
}

/// 선+마커로 그리는 데이터 계열.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

/// 전체 x 범위에 걸친 수평 점선.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub color: SeriesColor,
    pub y: f64,
}

/// 백엔드와 무관한 차트 내용.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartSpec {
    /// 여백을 포함한 축 범위. 데이터가 한 점뿐이어도 폭이 0이 되지 않게 한다.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let xs = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
        let ys = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .chain(self.reference_lines.iter().map(|l| l.y));
        (padded(min_max(xs)), padded(min_max(ys)))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn padded(range: Option<(f64, f64)>) -> (f64, f64) {
    let (lo, hi) = range.unwrap_or((0.0, 1.0));
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { lo.abs().max(1.0) * 0.1 };
    (lo - pad, hi + pad)
}

fn finite_points(points: impl Iterator<Item = (f64, f64)>, what: &str) -> Vec<(f64, f64)> {
    let mut dropped = 0usize;
    let kept: Vec<(f64, f64)> = points
        .filter(|(x, y)| {
            let ok = x.is_finite() && y.is_finite();
            if !ok {
                dropped += 1;
            }
            ok
        })
        .collect();
    if dropped > 0 {
        warn!(series = what, dropped, "유한하지 않은 점은 그리지 않음");
    }
    kept
}

/// COP 대 외기 온도 차트. 빈 COP 셀은 그 지점만 빠지고, 모든 행에 COP가 없으면 실패한다.
pub fn efficiency_chart(table: &PricedTable) -> Result<ChartSpec, ChartError> {
    let has_cop = table
        .rows
        .iter()
        .any(|r| r.source.coefficient_of_performance.is_some());
    if !table.is_empty() && !has_cop {
        return Err(ChartError::MissingColumn(COL_COP));
    }
    let raw = table.rows.iter().map(|r| {
        (
            r.outdoor_air_temp_c,
            r.source.coefficient_of_performance.unwrap_or(f64::NAN),
        )
    });
    Ok(ChartSpec {
        title: EFFICIENCY_TITLE.to_string(),
        x_label: X_LABEL_OUTDOOR_C.to_string(),
        y_label: EFFICIENCY_Y_LABEL.to_string(),
        series: vec![Series {
            label: "COP".to_string(),
            color: SeriesColor::HeatPump,
            points: finite_points(raw, COL_COP),
        }],
        reference_lines: Vec::new(),
    })
}

/// 히트펌프 대 가스로 단가 차트. 단위와 라벨은 테이블의 `PricingUnit`을 따른다.
pub fn price_comparison_chart(
    table: &PricedTable,
    show_solar_reference: bool,
) -> Result<ChartSpec, ChartError> {
    let furnace_price = table.furnace_price().ok_or(ChartError::EmptyDataset)?;
    let unit: PricingUnit = table.unit;
    let units = unit.label();

    let points = finite_points(
        table
            .rows
            .iter()
            .map(|r| (r.outdoor_air_temp_c, r.heat_pump_price)),
        unit.heat_pump_column(),
    );

    let mut reference_lines = vec![ReferenceLine {
        label: format!("Gas Furnace ({units})"),
        color: SeriesColor::Furnace,
        y: furnace_price,
    }];
    if show_solar_reference {
        reference_lines.push(ReferenceLine {
            label: format!("Heat Pump powered by solar ({units})"),
            color: SeriesColor::Solar,
            y: 0.0,
        });
    }

    Ok(ChartSpec {
        title: format!("{units} vs Outdoor Temperature"),
        x_label: X_LABEL_OUTDOOR_C.to_string(),
        y_label: units.to_string(),
        series: vec![Series {
            label: format!("Heat Pump ({units})"),
            color: SeriesColor::HeatPump,
            points,
        }],
        reference_lines,
    })
}
