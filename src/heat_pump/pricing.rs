//! 성능 레코드에 온도(°C)와 유효열 단가 열을 덧붙인다.
//!
//! MBtu 기준과 SI(GJ) 기준 두 가지 로더가 있으며 결과 테이블에는
//! 어느 기준으로 계산했는지 `PricingUnit` 태그가 붙는다.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::cost_model::CostModel;
use super::dataset::{self, LoadError, PerformanceRecord};
use crate::units::{fahrenheit_to_celsius, kw_to_gj_per_hour, mbh_to_kw};

/// 단가 표시 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum PricingUnit {
    #[default]
    #[serde(rename = "mbtu")]
    #[value(name = "mbtu")]
    MBtu,
    #[serde(rename = "gj")]
    #[value(name = "gj")]
    GJ,
}

impl PricingUnit {
    /// 축/범례에 쓰는 단가 단위 문자열.
    pub fn label(&self) -> &'static str {
        match self {
            PricingUnit::MBtu => "$/MBtu",
            PricingUnit::GJ => "$/GJ",
        }
    }

    pub fn heat_pump_column(&self) -> &'static str {
        match self {
            PricingUnit::MBtu => "HeatPumpPricePerMBtu",
            PricingUnit::GJ => "HeatPumpPricePerGJ",
        }
    }

    pub fn furnace_column(&self) -> &'static str {
        match self {
            PricingUnit::MBtu => "FurnacePricePerMBtu",
            PricingUnit::GJ => "FurnacePricePerGJ",
        }
    }

    /// 파일 이름 등에 쓰는 짧은 이름.
    pub fn slug(&self) -> &'static str {
        match self {
            PricingUnit::MBtu => "mbtu",
            PricingUnit::GJ => "gj",
        }
    }
}

impl fmt::Display for PricingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 열출력 0 행 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroHeatOutputPolicy {
    /// 나눗셈 결과(inf/NaN)를 그대로 둔다.
    #[default]
    Propagate,
    /// `LoadError::DivisionByZeroHeatOutput`로 실패한다.
    Reject,
}

/// SI 로더에서만 계산되는 중간 열.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiBreakdown {
    /// HeatOutputkW
    pub heat_output_kw: f64,
    /// HeatPumpPricePerHour [$/h]
    pub heat_pump_price_per_hour: f64,
    /// HeatPumpGJPerHour [GJ/h]
    pub heat_pump_gj_per_hour: f64,
}

/// 파생 열이 붙은 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedRow {
    pub source: PerformanceRecord,
    /// OutdoorAirTempC
    pub outdoor_air_temp_c: f64,
    /// 히트펌프 유효열 단가 (테이블 단위 기준)
    pub heat_pump_price: f64,
    /// 가스로 유효열 단가 (테이블 단위 기준, 모든 행 동일)
    pub furnace_price: f64,
    /// `heat_pump_price / furnace_price`. 테이블 단위의 두 열을 그대로 나눈 값이다.
    pub price_ratio: f64,
    /// 히트펌프/가스로 비용비. 단위 기준과 무관하게 GJ 기준으로 계산한다.
    pub cost_ratio: f64,
    pub si: Option<SiBreakdown>,
}

impl PricedRow {
    /// 히트펌프가 가스로보다 싼 지점인지.
    pub fn heat_pump_is_cheaper(&self) -> bool {
        self.cost_ratio.is_finite() && self.cost_ratio < 1.0
    }
}

/// 로더 결과. 생성 후에는 읽기 전용으로만 쓴다.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedTable {
    pub unit: PricingUnit,
    pub rows: Vec<PricedRow>,
}

impl PricedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 첫 행의 가스로 단가. 모든 행이 같은 값을 가진다.
    pub fn furnace_price(&self) -> Option<f64> {
        self.rows.first().map(|r| r.furnace_price)
    }

    /// 히트펌프가 더 싼 가장 낮은 외기 온도 [°C].
    pub fn coldest_break_even_c(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter(|r| r.heat_pump_is_cheaper())
            .map(|r| r.outdoor_air_temp_c)
            .fold(None, |acc: Option<f64>, t| {
                Some(acc.map_or(t, |a| a.min(t)))
            })
    }
}

/// MBtu 기준으로 CSV를 읽어 단가 열을 계산한다.
pub fn load_heat_pump_data(
    path: &Path,
    model: &CostModel,
    policy: ZeroHeatOutputPolicy,
) -> Result<PricedTable, LoadError> {
    load_priced_table(path, PricingUnit::MBtu, model, policy)
}

/// SI(GJ) 기준으로 CSV를 읽어 단가 열을 계산한다.
pub fn load_heat_pump_data_si(
    path: &Path,
    model: &CostModel,
    policy: ZeroHeatOutputPolicy,
) -> Result<PricedTable, LoadError> {
    load_priced_table(path, PricingUnit::GJ, model, policy)
}

/// 지정한 단위 기준으로 CSV를 읽어 단가 열을 계산한다.
pub fn load_priced_table(
    path: &Path,
    unit: PricingUnit,
    model: &CostModel,
    policy: ZeroHeatOutputPolicy,
) -> Result<PricedTable, LoadError> {
    let records = dataset::read_performance_csv(path)?;
    let table = price_records(&records, unit, model, policy)?;
    info!(path = %path.display(), rows = table.len(), unit = %unit, "성능 데이터 로드");
    Ok(table)
}

/// 이미 읽은 레코드에 파생 열을 붙인다.
pub fn price_records(
    records: &[PerformanceRecord],
    unit: PricingUnit,
    model: &CostModel,
    policy: ZeroHeatOutputPolicy,
) -> Result<PricedTable, LoadError> {
    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let row_no = i + 1;
        if rec.heat_output_mbh == 0.0 {
            match policy {
                ZeroHeatOutputPolicy::Reject => {
                    return Err(LoadError::DivisionByZeroHeatOutput { row: row_no })
                }
                ZeroHeatOutputPolicy::Propagate => {
                    warn!(row = row_no, "HeatOutputMBH가 0이라 단가가 유한하지 않음")
                }
            }
        }
        let row = match unit {
            PricingUnit::MBtu => price_row_mbtu(rec, model),
            PricingUnit::GJ => price_row_si(rec, model),
        };
        rows.push(row);
    }
    Ok(PricedTable { unit, rows })
}

fn price_row_mbtu(rec: &PerformanceRecord, model: &CostModel) -> PricedRow {
    let si = si_breakdown(rec, model);
    let heat_pump_price = model.electricity_cost_per_hour(rec.power_input_kw) / rec.heat_output_mbh;
    let furnace_price = model.furnace_price_per_mbtu();
    PricedRow {
        source: *rec,
        outdoor_air_temp_c: fahrenheit_to_celsius(rec.outdoor_air_temp_f),
        heat_pump_price,
        furnace_price,
        price_ratio: heat_pump_price / furnace_price,
        cost_ratio: cost_ratio(&si, model),
        si: None,
    }
}

fn price_row_si(rec: &PerformanceRecord, model: &CostModel) -> PricedRow {
    let si = si_breakdown(rec, model);
    let heat_pump_price = si.heat_pump_price_per_hour / si.heat_pump_gj_per_hour;
    let furnace_price = model.furnace_price_per_gj();
    PricedRow {
        source: *rec,
        outdoor_air_temp_c: fahrenheit_to_celsius(rec.outdoor_air_temp_f),
        heat_pump_price,
        furnace_price,
        price_ratio: heat_pump_price / furnace_price,
        cost_ratio: cost_ratio(&si, model),
        si: Some(si),
    }
}

fn si_breakdown(rec: &PerformanceRecord, model: &CostModel) -> SiBreakdown {
    let heat_output_kw = mbh_to_kw(rec.heat_output_mbh);
    SiBreakdown {
        heat_output_kw,
        heat_pump_price_per_hour: model.electricity_cost_per_hour(rec.power_input_kw),
        heat_pump_gj_per_hour: kw_to_gj_per_hour(heat_output_kw),
    }
}

fn cost_ratio(si: &SiBreakdown, model: &CostModel) -> f64 {
    (si.heat_pump_price_per_hour / si.heat_pump_gj_per_hour) / model.furnace_price_per_gj()
}
