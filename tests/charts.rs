//! 차트 구성(계열, 라벨, 기준선) 테스트. 실제 이미지 출력은 다루지 않는다.
use heat_pump_pricing::chart::{
    efficiency_chart, price_comparison_chart, ChartError, SeriesColor,
};
use heat_pump_pricing::heat_pump::{
    parse_performance_csv, price_records, CostModel, PricedTable, PricingUnit,
    ZeroHeatOutputPolicy,
};

const WITH_COP: &str = "\
OutdoorAirTempF,PowerInputkW,HeatOutputMBH,CoefficientOfPerformance
5,2.25,18.9,2.46
32,2.40,26.8,3.27
47,2.28,31.5,4.05
";

fn priced(csv: &str, unit: PricingUnit) -> PricedTable {
    let records = parse_performance_csv(csv.as_bytes()).expect("parse");
    price_records(
        &records,
        unit,
        &CostModel::default(),
        ZeroHeatOutputPolicy::Propagate,
    )
    .expect("price")
}

#[test]
fn efficiency_chart_plots_cop_against_celsius() {
    let table = priced(WITH_COP, PricingUnit::MBtu);
    let spec = efficiency_chart(&table).expect("spec");
    assert_eq!(spec.title, "Heat Pump Efficiency vs Outdoor Temperature");
    assert_eq!(spec.x_label, "Outdoor Temperature (°C)");
    assert_eq!(spec.y_label, "Coefficient of Performance (COP)");
    assert!(spec.reference_lines.is_empty());
    let pts = &spec.series[0].points;
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[1], (0.0, 3.27));
}

#[test]
fn efficiency_chart_requires_cop() {
    let table = priced(
        "OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n32,1.0,8.0\n",
        PricingUnit::MBtu,
    );
    let err = efficiency_chart(&table).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn("CoefficientOfPerformance")));
}

#[test]
fn blank_cop_cell_only_drops_that_point() {
    let table = priced(
        "OutdoorAirTempF,PowerInputkW,HeatOutputMBH,CoefficientOfPerformance\n\
         5,2.25,18.9,2.46\n\
         32,2.40,26.8,\n\
         47,2.28,31.5,4.05\n",
        PricingUnit::MBtu,
    );
    assert_eq!(table.rows[1].source.coefficient_of_performance, None);
    let spec = efficiency_chart(&table).expect("spec");
    let pts = &spec.series[0].points;
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[0].1, 2.46);
    assert_eq!(pts[1].1, 4.05);
}

#[test]
fn all_blank_cop_cells_count_as_missing_column() {
    let table = priced(
        "OutdoorAirTempF,PowerInputkW,HeatOutputMBH,CoefficientOfPerformance\n32,1.0,8.0,\n47,0.9,10.0,\n",
        PricingUnit::MBtu,
    );
    let err = efficiency_chart(&table).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn("CoefficientOfPerformance")));
}

#[test]
fn price_chart_uses_mbtu_labels_for_mbtu_table() {
    let table = priced(WITH_COP, PricingUnit::MBtu);
    let spec = price_comparison_chart(&table, false).expect("spec");
    assert_eq!(spec.title, "$/MBtu vs Outdoor Temperature");
    assert_eq!(spec.y_label, "$/MBtu");
    assert_eq!(spec.series[0].label, "Heat Pump ($/MBtu)");
    assert_eq!(spec.reference_lines.len(), 1);
    assert_eq!(spec.reference_lines[0].label, "Gas Furnace ($/MBtu)");
    assert_eq!(spec.reference_lines[0].y, table.rows[0].furnace_price);
    let ys: Vec<f64> = spec.series[0].points.iter().map(|p| p.1).collect();
    let expected: Vec<f64> = table.rows.iter().map(|r| r.heat_pump_price).collect();
    assert_eq!(ys, expected);
}

#[test]
fn price_chart_uses_gj_labels_for_gj_table() {
    let table = priced(WITH_COP, PricingUnit::GJ);
    let spec = price_comparison_chart(&table, true).expect("spec");
    assert_eq!(spec.title, "$/GJ vs Outdoor Temperature");
    assert_eq!(spec.series[0].label, "Heat Pump ($/GJ)");
    assert_eq!(spec.reference_lines[0].label, "Gas Furnace ($/GJ)");
    assert!((spec.reference_lines[0].y - 4.59 / 0.961).abs() < 1e-12);
}

#[test]
fn solar_reference_line_sits_at_zero() {
    let table = priced(WITH_COP, PricingUnit::GJ);
    let spec = price_comparison_chart(&table, true).expect("spec");
    let solar = spec
        .reference_lines
        .iter()
        .find(|l| l.color == SeriesColor::Solar)
        .expect("solar line");
    assert_eq!(solar.y, 0.0);
    assert_eq!(solar.label, "Heat Pump powered by solar ($/GJ)");
    let ((_, _), (y0, _)) = spec.bounds();
    assert!(y0 < 0.0);
}

#[test]
fn price_chart_rejects_empty_table() {
    let table = priced("OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n", PricingUnit::MBtu);
    assert!(table.is_empty());
    let err = price_comparison_chart(&table, true).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn non_finite_prices_are_left_out_of_the_series() {
    let table = priced(
        "OutdoorAirTempF,PowerInputkW,HeatOutputMBH\n32,1.0,8.0\n40,1.0,0\n47,0.9,10.0\n",
        PricingUnit::MBtu,
    );
    let spec = price_comparison_chart(&table, false).expect("spec");
    assert_eq!(spec.series[0].points.len(), 2);
    assert!(spec.series[0].points.iter().all(|p| p.1.is_finite()));
}
