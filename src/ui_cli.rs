use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::chart::{ChartFormat, ChartKind};
use crate::config::Config;
use crate::heat_pump::{PricedTable, PricingUnit};
use crate::quantity::QuantityKind;

/// 명령행 인자.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "히트펌프 대 가스로 운전비 비교 도구",
    long_about = None
)]
pub struct Cli {
    /// 설정 파일 경로 (기본: heat_pump_pricing.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 효율/단가 차트를 이미지로 저장한다
    Plot(PlotArgs),
    /// 파생 열이 붙은 테이블을 출력한다
    Table(DataArgs),
    /// 단위를 변환한다
    Convert(ConvertArgs),
}

/// 데이터 로드와 요금 가정 관련 인자.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// 성능 CSV 경로 (없으면 설정 파일의 data_file)
    #[arg(value_hint = ValueHint::FilePath)]
    pub csv: Option<PathBuf>,

    /// 단가 기준 단위
    #[arg(long, value_enum)]
    pub units: Option<PricingUnit>,

    /// 전기 요금 [$/kWh]
    #[arg(long)]
    pub electricity_rate: Option<f64>,

    /// 가스 요금 [$/GJ]
    #[arg(long)]
    pub gas_rate: Option<f64>,

    /// 가스로 AFUE (0~1)
    #[arg(long)]
    pub afue: Option<f64>,
}

impl DataArgs {
    /// 명령행 값을 설정 위에 덮어쓴다.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(csv) = &self.csv {
            cfg.data_file = Some(csv.clone());
        }
        if let Some(units) = self.units {
            cfg.pricing_unit = units;
        }
        if let Some(rate) = self.electricity_rate {
            cfg.cost_model.electricity_rate_per_kwh = rate;
        }
        if let Some(rate) = self.gas_rate {
            cfg.cost_model.gas_rate_per_gj = rate;
        }
        if let Some(afue) = self.afue {
            cfg.cost_model.furnace_afue = afue;
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// 그릴 차트
    #[arg(long, value_enum, default_value_t = ChartKind::All)]
    pub chart: ChartKind,

    /// 이미지 저장 디렉터리
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// 이미지 형식
    #[arg(long, value_enum)]
    pub format: Option<ChartFormat>,

    /// 태양광 0 $ 기준선을 숨긴다
    #[arg(long)]
    pub no_solar: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(value_enum)]
    pub kind: QuantityKind,
    #[arg(allow_hyphen_values = true)]
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// 파생 테이블과 손익분기 요약을 출력한다.
pub fn print_table(out: &mut impl Write, table: &PricedTable) -> io::Result<()> {
    let unit = table.unit;
    write!(
        out,
        "{:>8} {:>8} {:>8} {:>8} {:>6}",
        "TempF", "TempC", "PowerkW", "HeatMBH", "COP"
    )?;
    if unit == PricingUnit::GJ {
        write!(out, " {:>9} {:>9} {:>9}", "HeatkW", "$/h", "GJ/h")?;
    }
    writeln!(
        out,
        " {:>22} {:>22} {:>9} {:>8}",
        unit.heat_pump_column(),
        unit.furnace_column(),
        "Ratio",
        "GJRatio"
    )?;

    for row in &table.rows {
        let cop = row
            .source
            .coefficient_of_performance
            .map(|c| format!("{c:.2}"))
            .unwrap_or_else(|| "-".into());
        write!(
            out,
            "{:>8.1} {:>8.2} {:>8.3} {:>8.2} {:>6}",
            row.source.outdoor_air_temp_f,
            row.outdoor_air_temp_c,
            row.source.power_input_kw,
            row.source.heat_output_mbh,
            cop
        )?;
        if let Some(si) = row.si {
            write!(
                out,
                " {:>9.3} {:>9.4} {:>9.5}",
                si.heat_output_kw, si.heat_pump_price_per_hour, si.heat_pump_gj_per_hour
            )?;
        }
        writeln!(
            out,
            " {:>22.4} {:>22.4} {:>9.5} {:>8.3}",
            row.heat_pump_price, row.furnace_price, row.price_ratio, row.cost_ratio
        )?;
    }

    let cheaper = table.rows.iter().filter(|r| r.heat_pump_is_cheaper()).count();
    writeln!(out)?;
    writeln!(
        out,
        "히트펌프가 더 싼 지점: {cheaper}/{} (GJRatio < 1, GJ 기준 비용비)",
        table.len()
    )?;
    match table.coldest_break_even_c() {
        Some(t) => writeln!(out, "히트펌프가 더 싼 최저 외기 온도: {t:.1} °C")?,
        None => writeln!(out, "모든 지점에서 가스로가 더 싸거나 같음")?,
    }
    Ok(())
}

/// 변환 결과를 출력한다.
pub fn print_conversion(out: &mut impl Write, args: &ConvertArgs, result: f64) -> io::Result<()> {
    writeln!(
        out,
        "{} {} = {} {}",
        args.value,
        args.from.trim(),
        result,
        args.to.trim()
    )
}
