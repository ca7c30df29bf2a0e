//! 히트펌프 성능 CSV 읽기.
//!
//! 필수 열은 `OutdoorAirTempF`, `PowerInputkW`, `HeatOutputMBH`이고
//! `CoefficientOfPerformance`는 효율 차트에서만 쓰이므로 없어도 된다.
//! 그 밖의 열은 무시한다.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;
use tracing::debug;

pub const COL_OUTDOOR_AIR_TEMP_F: &str = "OutdoorAirTempF";
pub const COL_POWER_INPUT_KW: &str = "PowerInputkW";
pub const COL_HEAT_OUTPUT_MBH: &str = "HeatOutputMBH";
pub const COL_COP: &str = "CoefficientOfPerformance";

/// 데이터 로드 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum LoadError {
    /// 파일이 없거나 읽을 수 없음
    #[error("파일을 읽을 수 없음: {path}: {source}")]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 필수 열 누락
    #[error("필수 열이 없음: {0}")]
    MissingColumn(String),
    /// 숫자로 해석할 수 없는 셀
    #[error("{row}행 {column} 값이 숫자가 아님: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    /// 열출력이 0인 행 (Reject 정책일 때만)
    #[error("{row}행 HeatOutputMBH가 0이라 단가를 계산할 수 없음")]
    DivisionByZeroHeatOutput { row: usize },
    /// CSV 구조 오류
    #[error("CSV 파싱 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// 외기 온도 한 지점의 성능 측정값 (CSV 한 행).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceRecord {
    /// 외기 온도 [°F]
    pub outdoor_air_temp_f: f64,
    /// 전력 입력 [kW]
    pub power_input_kw: f64,
    /// 열출력 [MBH]
    pub heat_output_mbh: f64,
    /// 성적계수. 열이 없거나 셀이 비어 있으면 `None`.
    pub coefficient_of_performance: Option<f64>,
}

struct ColumnIndex {
    temp_f: usize,
    power_kw: usize,
    heat_mbh: usize,
    cop: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));
        Ok(Self {
            temp_f: require(COL_OUTDOOR_AIR_TEMP_F)?,
            power_kw: require(COL_POWER_INPUT_KW)?,
            heat_mbh: require(COL_HEAT_OUTPUT_MBH)?,
            cop: find(COL_COP),
        })
    }
}

/// CSV 파일을 열어 성능 레코드를 읽는다.
pub fn read_performance_csv(path: &Path) -> Result<Vec<PerformanceRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::FileNotReadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_performance_csv(file)
}

/// 임의의 입력 스트림에서 성능 레코드를 읽는다. 행 번호는 헤더 다음 행을 1로 센다.
pub fn parse_performance_csv<R: Read>(reader: R) -> Result<Vec<PerformanceRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let rec = result?;
        let cop = match columns.cop {
            Some(idx) => optional_cell(&rec, idx, row, COL_COP)?,
            None => None,
        };
        records.push(PerformanceRecord {
            outdoor_air_temp_f: cell(&rec, columns.temp_f, row, COL_OUTDOOR_AIR_TEMP_F)?,
            power_input_kw: cell(&rec, columns.power_kw, row, COL_POWER_INPUT_KW)?,
            heat_output_mbh: cell(&rec, columns.heat_mbh, row, COL_HEAT_OUTPUT_MBH)?,
            coefficient_of_performance: cop,
        });
    }
    debug!(rows = records.len(), has_cop = columns.cop.is_some(), "성능 CSV 읽음");
    Ok(records)
}

fn cell(
    rec: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    optional_cell(rec, idx, row, column)?.ok_or_else(|| LoadError::InvalidNumber {
        row,
        column,
        value: String::new(),
    })
}

fn optional_cell(
    rec: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, LoadError> {
    let raw = rec.get(idx).unwrap_or("");
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| LoadError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "Model,OutdoorAirTempF,PowerInputkW,HeatOutputMBH\nX1,47,1.2,12.5\n";
        let rows = parse_performance_csv(csv.as_bytes()).expect("parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].outdoor_air_temp_f, 47.0);
        assert_eq!(rows[0].coefficient_of_performance, None);
    }

    #[test]
    fn blank_required_cell_is_invalid() {
        let csv = "OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n47,,12.5\n";
        let err = parse_performance_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidNumber {
                row: 1,
                column: COL_POWER_INPUT_KW,
                ..
            }
        ));
    }
}
