use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 {kind:?} 단위: {unit} (사용 가능: {hint})")]
    UnknownUnit {
        kind: QuantityKind,
        unit: String,
        hint: &'static str,
    },
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `F`, `C`, `GJ`, `MBtu`, `kW`, `MBH` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
    }
}

fn unknown(kind: QuantityKind, s: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
        hint: kind.unit_hint(),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(unknown(QuantityKind::Temperature, s)),
    }
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "gj" | "gigajoule" => Ok(EnergyUnit::Gigajoule),
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "btu" => Ok(EnergyUnit::Btu),
        "mbtu" | "mmbtu" => Ok(EnergyUnit::MBtu),
        _ => Err(unknown(QuantityKind::Energy, s)),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "btu/h" | "btuh" | "btu/hr" => Ok(PowerUnit::BtuPerHour),
        "mbh" => Ok(PowerUnit::Mbh),
        _ => Err(unknown(QuantityKind::Power, s)),
    }
}
