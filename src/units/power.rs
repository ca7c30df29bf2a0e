use serde::{Deserialize, Serialize};

/// 1 MBH(천 BTU/h)에 해당하는 kW.
pub const KW_PER_MBH: f64 = 0.29307107;

/// 열출력(일률) 단위. 내부 기준은 kW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    BtuPerHour,
    /// 천 BTU/h
    Mbh,
}

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::BtuPerHour => value * KW_PER_MBH / 1000.0,
        PowerUnit::Mbh => mbh_to_kw(value),
    }
}

fn from_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::BtuPerHour => value / KW_PER_MBH * 1000.0,
        PowerUnit::Mbh => value / KW_PER_MBH,
    }
}

/// MBH를 kW로 변환한다.
pub fn mbh_to_kw(mbh: f64) -> f64 {
    mbh * KW_PER_MBH
}

/// 일률을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_kilowatt(to_kilowatt(value, from), to)
}
