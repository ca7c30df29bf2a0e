use serde::{Deserialize, Serialize};

use crate::units::GJ_PER_MBTU;

/// 기본 전기 요금 [$/kWh]
pub const DEFAULT_ELECTRICITY_RATE_PER_KWH: f64 = 0.0879;
/// 기본 가스 요금 [$/GJ]
pub const DEFAULT_GAS_RATE_PER_GJ: f64 = 4.59;
/// 기본 가스로 AFUE (0~1)
pub const DEFAULT_FURNACE_AFUE: f64 = 0.961;

/// 요금/효율 가정. 로더에 인자로 전달되며 계산 중 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// 전기 요금 [$/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 가스 요금 [$/GJ, 연료 기준]
    pub gas_rate_per_gj: f64,
    /// 가스로 연간 효율 AFUE (0~1)
    pub furnace_afue: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            electricity_rate_per_kwh: DEFAULT_ELECTRICITY_RATE_PER_KWH,
            gas_rate_per_gj: DEFAULT_GAS_RATE_PER_GJ,
            furnace_afue: DEFAULT_FURNACE_AFUE,
        }
    }
}

impl CostModel {
    /// 가스로 유효열 단가 [$/MBtu].
    pub fn furnace_price_per_mbtu(&self) -> f64 {
        (self.gas_rate_per_gj / GJ_PER_MBTU) / self.furnace_afue
    }

    /// 가스로 유효열 단가 [$/GJ]. GJ/MBtu 환산 없이 연료 단가를 효율로만 나눈다.
    pub fn furnace_price_per_gj(&self) -> f64 {
        self.gas_rate_per_gj / self.furnace_afue
    }

    /// 전력 입력 [kW]으로 한 시간 운전한 비용 [$/h].
    pub fn electricity_cost_per_hour(&self, power_input_kw: f64) -> f64 {
        power_input_kw * self.electricity_rate_per_kwh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_furnace_prices() {
        let m = CostModel::default();
        assert!((m.furnace_price_per_mbtu() - 4.5270).abs() < 1e-4);
        assert!((m.furnace_price_per_gj() - 4.7763).abs() < 1e-4);
    }
}
