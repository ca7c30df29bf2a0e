//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod power;
pub mod temperature;

pub use energy::{
    convert_energy, gj_to_mbtu, kw_to_gj_per_hour, mbtu_to_gj, EnergyUnit, GJ_PER_MBTU,
    KJ_PER_GJ, SECONDS_PER_HOUR,
};
pub use power::{convert_power, mbh_to_kw, PowerUnit, KW_PER_MBH};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, fahrenheit_to_celsius, TemperatureUnit,
};
