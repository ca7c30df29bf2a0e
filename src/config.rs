use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::{ChartFormat, RenderOptions};
use crate::heat_pump::{CostModel, PricingUnit, ZeroHeatOutputPolicy};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "heat_pump_pricing.toml";

/// 차트 출력 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    pub format: ChartFormat,
    /// 0 $ 기준선(태양광 구동 히트펌프) 표시 여부
    pub show_solar_reference: bool,
    pub output_dir: PathBuf,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            format: ChartFormat::Png,
            show_solar_reference: true,
            output_dir: PathBuf::from("charts"),
        }
    }
}

impl ChartSettings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            size: (self.width, self.height),
            show_solar_reference: self.show_solar_reference,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 성능 CSV 경로. 명령행 인자가 우선한다.
    pub data_file: Option<PathBuf>,
    pub pricing_unit: PricingUnit,
    pub zero_heat_output: ZeroHeatOutputPolicy,
    pub cost_model: CostModel,
    pub chart: ChartSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값 범위 오류
    #[error("잘못된 설정 값: {0}")]
    Invalid(String),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 반환한다. 파일을 새로 만들지는 않는다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 지정한 경로(없으면 기본 파일)에 저장한다.
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// AFUE와 차트 크기 범위를 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let afue = self.cost_model.furnace_afue;
        if !(afue > 0.0 && afue <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "furnace_afue는 0 초과 1 이하여야 함: {afue}"
            )));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(ConfigError::Invalid("차트 크기는 0보다 커야 함".into()));
        }
        Ok(())
    }
}
