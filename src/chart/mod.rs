//! 차트 구성과 이미지 출력.
//!
//! `spec`은 테이블에서 그릴 내용(계열, 기준선, 라벨)을 만들고 `render`는 그것을
//! 파일로 그린다. GUI 뷰어도 같은 `ChartSpec`을 사용한다.

pub mod render;
pub mod spec;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::heat_pump::PricedTable;

pub use render::render_to_file;
pub use spec::{
    efficiency_chart, price_comparison_chart, ChartSpec, ReferenceLine, Series, SeriesColor,
};

/// 차트 생성 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ChartError {
    /// 차트에 필요한 열 누락
    #[error("차트에 필요한 열이 없음: {0}")]
    MissingColumn(&'static str),
    /// 행이 하나도 없음
    #[error("데이터가 비어 있음")]
    EmptyDataset,
    /// 그리기 백엔드 오류
    #[error("차트 그리기 오류: {0}")]
    Backend(String),
    /// 출력 디렉터리 생성 실패
    #[error("출력 디렉터리를 만들 수 없음: {0}")]
    Io(#[from] std::io::Error),
}

/// 저장 이미지 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// 그릴 차트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    Efficiency,
    Price,
    All,
}

/// 차트 출력 옵션.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub format: ChartFormat,
    pub size: (u32, u32),
    pub show_solar_reference: bool,
}

/// 효율 차트를 `<out_dir>/efficiency.<ext>`로 저장한다.
pub fn plot_cop_vs_outdoor_temp(
    table: &PricedTable,
    out_dir: &Path,
    opts: &RenderOptions,
) -> Result<PathBuf, ChartError> {
    let spec = efficiency_chart(table)?;
    let path = out_dir.join(format!("efficiency.{}", opts.format.extension()));
    render_to_file(&spec, &path, opts.format, opts.size)?;
    Ok(path)
}

/// 단가 비교 차트를 `<out_dir>/price_<unit>.<ext>`로 저장한다.
pub fn plot_price_comparison(
    table: &PricedTable,
    out_dir: &Path,
    opts: &RenderOptions,
) -> Result<PathBuf, ChartError> {
    let spec = price_comparison_chart(table, opts.show_solar_reference)?;
    let path = out_dir.join(format!(
        "price_{}.{}",
        table.unit.slug(),
        opts.format.extension()
    ));
    render_to_file(&spec, &path, opts.format, opts.size)?;
    Ok(path)
}

/// 요청한 차트를 모두 저장하고 저장 경로를 돌려준다.
pub fn plot(
    table: &PricedTable,
    kind: ChartKind,
    out_dir: &Path,
    opts: &RenderOptions,
) -> Result<Vec<PathBuf>, ChartError> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    if matches!(kind, ChartKind::Efficiency | ChartKind::All) {
        written.push(plot_cop_vs_outdoor_temp(table, out_dir, opts)?);
    }
    if matches!(kind, ChartKind::Price | ChartKind::All) {
        written.push(plot_price_comparison(table, out_dir, opts)?);
    }
    Ok(written)
}
