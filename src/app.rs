use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::chart::{self, ChartError};
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::heat_pump::{load_priced_table, LoadError, PricedTable};
use crate::ui_cli::{self, Command, DataArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 데이터 로드 오류
    #[error("데이터 로드 오류: {0}")]
    Load(#[from] LoadError),
    /// 차트 오류
    #[error("차트 오류: {0}")]
    Chart(#[from] ChartError),
    /// CSV 경로가 인자에도 설정에도 없음
    #[error("성능 CSV 경로가 필요함 (인자 또는 설정 파일의 data_file)")]
    NoDataFile,
}

/// 명령 하나를 실행한다.
pub fn run(config: &mut Config, command: Command) -> Result<(), AppError> {
    match command {
        Command::Plot(args) => {
            let table = load_table(config, &args.data)?;
            if let Some(dir) = args.out_dir {
                config.chart.output_dir = dir;
            }
            if let Some(format) = args.format {
                config.chart.format = format;
            }
            if args.no_solar {
                config.chart.show_solar_reference = false;
            }
            let opts = config.chart.render_options();
            let written = chart::plot(&table, args.chart, &config.chart.output_dir, &opts)?;
            let mut out = io::stdout().lock();
            for path in written {
                writeln!(out, "저장: {}", path.display())?;
            }
        }
        Command::Table(args) => {
            let table = load_table(config, &args)?;
            let mut out = io::stdout().lock();
            ui_cli::print_table(&mut out, &table)?;
        }
        Command::Convert(args) => {
            let result = conversion::convert(args.kind, args.value, &args.from, &args.to)?;
            ui_cli::print_conversion(&mut io::stdout().lock(), &args, result)?;
        }
    }
    Ok(())
}

fn load_table(config: &mut Config, args: &DataArgs) -> Result<PricedTable, AppError> {
    args.apply_to(config);
    config.validate()?;
    let path: PathBuf = config.data_file.clone().ok_or(AppError::NoDataFile)?;
    info!(
        electricity = config.cost_model.electricity_rate_per_kwh,
        gas = config.cost_model.gas_rate_per_gj,
        afue = config.cost_model.furnace_afue,
        "요금 가정"
    );
    let table = load_priced_table(
        &path,
        config.pricing_unit,
        &config.cost_model,
        config.zero_heat_output,
    )?;
    Ok(table)
}
