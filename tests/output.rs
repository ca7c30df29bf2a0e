//! 출력 경로 테스트: 테이블 출력, 차트 파일 저장, 명령행 덮어쓰기.
use std::fs;
use std::path::{Path, PathBuf};

use heat_pump_pricing::chart::{self, ChartFormat, ChartKind, RenderOptions};
use heat_pump_pricing::config::Config;
use heat_pump_pricing::heat_pump::{
    load_heat_pump_data, load_heat_pump_data_si, parse_performance_csv, price_records, CostModel,
    PricedTable, PricingUnit, ZeroHeatOutputPolicy,
};
use heat_pump_pricing::ui_cli::{print_table, DataArgs};
use tempfile::TempDir;

fn sample_csv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/copdata_sample.csv")
}

fn table_text(table: &PricedTable) -> String {
    let mut buf = Vec::new();
    print_table(&mut buf, table).expect("write");
    String::from_utf8(buf).expect("utf8")
}

#[test]
fn mbtu_table_prints_mbtu_columns_and_summary() {
    let table = load_heat_pump_data(
        &sample_csv(),
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("load");
    let text = table_text(&table);
    let header = text.lines().next().expect("header");
    for col in ["TempF", "TempC", "COP", "HeatPumpPricePerMBtu", "FurnacePricePerMBtu", "Ratio", "GJRatio"] {
        assert!(header.contains(col), "header missing {col}: {header}");
    }
    assert!(!header.contains("HeatkW"));
    // 헤더 + 6행 + 빈 줄 + 요약 두 줄
    assert_eq!(text.lines().count(), 1 + 6 + 1 + 2);
    assert!(text.contains("히트펌프가 더 싼 지점: 0/6"));
    assert!(text.contains("모든 지점에서 가스로가 더 싸거나 같음"));
}

#[test]
fn gj_table_prints_si_breakdown_columns() {
    let table = load_heat_pump_data_si(
        &sample_csv(),
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("load");
    let text = table_text(&table);
    let header = text.lines().next().expect("header");
    for col in ["HeatkW", "$/h", "GJ/h", "HeatPumpPricePerGJ", "FurnacePricePerGJ"] {
        assert!(header.contains(col), "header missing {col}: {header}");
    }
    assert!(!header.contains("PerMBtu"));
    // 첫 행 가스로 단가 4.7763
    assert!(text.lines().nth(1).expect("row").contains("4.7763"));
}

#[test]
fn ratio_column_is_the_quotient_of_the_price_columns() {
    let table = load_heat_pump_data(
        &sample_csv(),
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("load");
    let text = table_text(&table);
    let row = &table.rows[0];
    let first = text.lines().nth(1).expect("row");
    let expected = format!("{:.5}", row.heat_pump_price / row.furnace_price);
    assert!(first.contains(&expected), "{expected} not in {first}");
}

#[test]
fn summary_reports_coldest_cheaper_temperature() {
    let records = parse_performance_csv(
        "OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n32,2.40,26.8\n50,0.5,34.1\n62,0.5,34.1\n"
            .as_bytes(),
    )
    .expect("parse");
    let table = price_records(
        &records,
        PricingUnit::GJ,
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("price");
    let text = table_text(&table);
    assert!(text.contains("히트펌프가 더 싼 지점: 2/3"));
    assert!(text.contains("히트펌프가 더 싼 최저 외기 온도: 10.0 °C"));
}

#[test]
fn plot_all_writes_both_svg_files() {
    let table = load_heat_pump_data(
        &sample_csv(),
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("load");
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("charts");
    let opts = RenderOptions {
        format: ChartFormat::Svg,
        size: (640, 400),
        show_solar_reference: true,
    };
    let written = chart::plot(&table, ChartKind::All, &dir, &opts).expect("plot");
    assert_eq!(
        written,
        vec![dir.join("efficiency.svg"), dir.join("price_mbtu.svg")]
    );
    for path in &written {
        let body = fs::read_to_string(path).expect("read svg");
        assert!(body.contains("<svg"), "{} is not svg", path.display());
    }
    let price = fs::read_to_string(&written[1]).expect("read svg");
    assert!(price.contains("Gas Furnace ($/MBtu)"));
}

#[test]
fn plot_price_only_uses_unit_slug() {
    let table = load_heat_pump_data_si(
        &sample_csv(),
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("load");
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().to_path_buf();
    let opts = RenderOptions {
        format: ChartFormat::Svg,
        size: (640, 400),
        show_solar_reference: false,
    };
    let written = chart::plot(&table, ChartKind::Price, &dir, &opts).expect("plot");
    assert_eq!(written, vec![dir.join("price_gj.svg")]);
    assert!(!dir.join("efficiency.svg").exists());
}

#[test]
fn plot_failure_on_missing_cop_leaves_no_efficiency_file() {
    let records =
        parse_performance_csv("OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n32,1.0,8.0\n".as_bytes())
            .expect("parse");
    let table = price_records(
        &records,
        PricingUnit::MBtu,
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("price");
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().to_path_buf();
    let opts = RenderOptions {
        format: ChartFormat::Svg,
        size: (320, 200),
        show_solar_reference: true,
    };
    assert!(chart::plot(&table, ChartKind::Efficiency, &dir, &opts).is_err());
    assert!(!dir.join("efficiency.svg").exists());
}

#[test]
fn data_args_override_only_given_fields() {
    let mut cfg = Config::default();
    let args = DataArgs {
        units: Some(PricingUnit::GJ),
        gas_rate: Some(6.0),
        ..DataArgs::default()
    };
    args.apply_to(&mut cfg);

    let defaults = Config::default();
    assert_eq!(cfg.pricing_unit, PricingUnit::GJ);
    assert_eq!(cfg.cost_model.gas_rate_per_gj, 6.0);
    assert_eq!(cfg.data_file, defaults.data_file);
    assert_eq!(
        cfg.cost_model.electricity_rate_per_kwh,
        defaults.cost_model.electricity_rate_per_kwh
    );
    assert_eq!(cfg.cost_model.furnace_afue, defaults.cost_model.furnace_afue);
    assert_eq!(cfg.chart, defaults.chart);
}

#[test]
fn data_args_csv_replaces_configured_file() {
    let mut cfg = Config {
        data_file: Some(PathBuf::from("old.csv")),
        ..Config::default()
    };
    let args = DataArgs {
        csv: Some(PathBuf::from("new.csv")),
        electricity_rate: Some(0.12),
        afue: Some(0.9),
        ..DataArgs::default()
    };
    args.apply_to(&mut cfg);
    assert_eq!(cfg.data_file, Some(PathBuf::from("new.csv")));
    assert_eq!(cfg.cost_model.electricity_rate_per_kwh, 0.12);
    assert_eq!(cfg.cost_model.furnace_afue, 0.9);
    assert_eq!(cfg.pricing_unit, PricingUnit::MBtu);
}
