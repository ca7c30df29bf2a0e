use serde::{Deserialize, Serialize};

/// 1 MBtu에 해당하는 GJ. 가스 요금 기준의 MBtu(10^6 BTU)이다.
pub const GJ_PER_MBTU: f64 = 1.055056;
/// 1 GJ에 해당하는 kJ.
pub const KJ_PER_GJ: f64 = 1.0e6;
/// 1시간의 초.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// 에너지 단위. 내부 기준은 킬로줄(kJ)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Kilojoule,
    Gigajoule,
    KilowattHour,
    Btu,
    /// 10^6 BTU, `GJ_PER_MBTU` 기준
    MBtu,
}

fn to_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::Gigajoule => value * KJ_PER_GJ,
        EnergyUnit::KilowattHour => value * SECONDS_PER_HOUR,
        EnergyUnit::Btu => value * GJ_PER_MBTU,
        EnergyUnit::MBtu => value * GJ_PER_MBTU * KJ_PER_GJ,
    }
}

fn from_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::Gigajoule => value / KJ_PER_GJ,
        EnergyUnit::KilowattHour => value / SECONDS_PER_HOUR,
        EnergyUnit::Btu => value / GJ_PER_MBTU,
        EnergyUnit::MBtu => value / (GJ_PER_MBTU * KJ_PER_GJ),
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_kilojoule(to_kilojoule(value, from), to)
}

/// GJ을 MBtu로 변환한다.
pub fn gj_to_mbtu(gj: f64) -> f64 {
    gj / GJ_PER_MBTU
}

/// MBtu를 GJ로 변환한다.
pub fn mbtu_to_gj(mbtu: f64) -> f64 {
    mbtu * GJ_PER_MBTU
}

/// 연속 출력(kW)을 한 시간 동안 공급했을 때의 에너지(GJ).
pub fn kw_to_gj_per_hour(kw: f64) -> f64 {
    kw * SECONDS_PER_HOUR / KJ_PER_GJ
}
