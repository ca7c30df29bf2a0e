use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

/// 화씨 온도를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// 섭씨 온도를 화씨로 변환한다. `fahrenheit_to_celsius`의 역함수.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TemperatureUnit::Rankine => fahrenheit_to_celsius(value - 459.67),
    }
}

fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(value_c),
        TemperatureUnit::Rankine => celsius_to_fahrenheit(value_c) + 459.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 내부 기준은 섭씨.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 1e-12);
        assert!((celsius_to_fahrenheit(-40.0) + 40.0).abs() < 1e-12);
    }

    #[test]
    fn rankine_zero_is_absolute_zero() {
        let k = convert_temperature(0.0, TemperatureUnit::Rankine, TemperatureUnit::Kelvin);
        assert!(k.abs() < 1e-9, "got {k}");
    }
}
