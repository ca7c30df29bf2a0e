#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 차트 뷰어 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};
use heat_pump_pricing::{
    chart::{self, ChartSpec, SeriesColor},
    config::{self, Config},
    heat_pump::{self, PricedTable, PricingUnit},
    logging,
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path, path::PathBuf};

fn main() -> Result<(), eframe::Error> {
    logging::init();

    // 첫 번째 인자가 있으면 CSV 경로로 사용한다.
    let cli_csv = env::args().nth(1).map(PathBuf::from);

    let mut app_cfg = config::load_or_default(None).unwrap_or_else(|e| {
        tracing::warn!("설정 로드 실패, 기본값 사용: {e}");
        Config::default()
    });
    if cli_csv.is_some() {
        app_cfg.data_file = cli_csv;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Heat Pump Pricing",
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Efficiency,
    Price,
}

struct GuiApp {
    config: Config,
    tab: Tab,
    table: Option<PricedTable>,
    status: Option<String>,
    /// 요금/단위가 바뀌어 다시 계산해야 함
    dirty: bool,
}

impl GuiApp {
    fn new(config: Config) -> Self {
        let mut app = Self {
            config,
            tab: Tab::Price,
            table: None,
            status: None,
            dirty: true,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        self.dirty = false;
        let Some(path) = self.config.data_file.clone() else {
            self.table = None;
            self.status = Some("CSV 파일을 선택하세요.".into());
            return;
        };
        if let Err(e) = self.config.validate() {
            self.status = Some(e.to_string());
            return;
        }
        match heat_pump::load_priced_table(
            &path,
            self.config.pricing_unit,
            &self.config.cost_model,
            self.config.zero_heat_output,
        ) {
            Ok(table) => {
                self.status = Some(format!("{} ({}행)", path.display(), table.len()));
                self.table = Some(table);
            }
            Err(e) => {
                self.status = Some(format!("로드 실패: {e}"));
                self.table = None;
            }
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("데이터");
        if ui.button("CSV 열기…").clicked() {
            if let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                self.config.data_file = Some(path);
                self.dirty = true;
            }
        }
        if let Some(status) = &self.status {
            ui.label(status);
        }
        ui.separator();

        ui.heading("단가 기준");
        ui.horizontal(|ui| {
            for unit in [PricingUnit::MBtu, PricingUnit::GJ] {
                if ui
                    .selectable_value(&mut self.config.pricing_unit, unit, unit.label())
                    .changed()
                {
                    self.dirty = true;
                }
            }
        });
        ui.separator();

        ui.heading("요금 가정");
        let model = &mut self.config.cost_model;
        let mut changed = false;
        egui::Grid::new("cost_model").num_columns(2).show(ui, |ui| {
            ui.label("전기 [$/kWh]");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut model.electricity_rate_per_kwh)
                        .speed(0.001)
                        .clamp_range(0.0..=10.0),
                )
                .changed();
            ui.end_row();
            ui.label("가스 [$/GJ]");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut model.gas_rate_per_gj)
                        .speed(0.05)
                        .clamp_range(0.0..=1000.0),
                )
                .changed();
            ui.end_row();
            ui.label("AFUE");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut model.furnace_afue)
                        .speed(0.001)
                        .clamp_range(0.01..=1.0),
                )
                .changed();
            ui.end_row();
        });
        self.dirty |= changed;
        ui.checkbox(
            &mut self.config.chart.show_solar_reference,
            "태양광 0 $ 기준선",
        );
        ui.separator();

        if ui.button("설정 저장").clicked() {
            self.status = Some(match self.config.save(None) {
                Ok(()) => format!("{} 저장됨", config::DEFAULT_CONFIG_FILE),
                Err(e) => e.to_string(),
            });
        }
        if ui.button("이미지로 저장").clicked() {
            self.export_images();
        }
    }

    fn export_images(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        let opts = self.config.chart.render_options();
        self.status = Some(
            match chart::plot(table, chart::ChartKind::All, &self.config.chart.output_dir, &opts) {
                Ok(paths) => format!("{}개 이미지 저장", paths.len()),
                Err(e) => e.to_string(),
            },
        );
    }

    fn chart_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Efficiency, "효율 (COP)");
            ui.selectable_value(&mut self.tab, Tab::Price, "단가 비교");
        });
        ui.separator();

        let Some(table) = &self.table else {
            ui.label("표시할 데이터가 없습니다.");
            return;
        };
        let spec = match self.tab {
            Tab::Efficiency => chart::efficiency_chart(table),
            Tab::Price => {
                chart::price_comparison_chart(table, self.config.chart.show_solar_reference)
            }
        };
        match spec {
            Ok(spec) => show_spec(ui, &spec),
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        }
    }
}

fn series_color(color: SeriesColor) -> egui::Color32 {
    let c = chart::render::series_rgb(color);
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

fn show_spec(ui: &mut egui::Ui, spec: &ChartSpec) {
    ui.heading(&spec.title);
    Plot::new(spec.title.as_str())
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let color = series_color(series.color);
                let pts: Vec<[f64; 2]> = series.points.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(PlotPoints::from(pts.clone()))
                        .color(color)
                        .width(2.0)
                        .name(&series.label),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(pts))
                        .color(color)
                        .radius(3.5)
                        .name(&series.label),
                );
            }
            for line in &spec.reference_lines {
                plot_ui.hline(
                    HLine::new(line.y)
                        .color(series_color(line.color))
                        .style(LineStyle::dashed_loose())
                        .width(1.5)
                        .name(&line.label),
                );
            }
        });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.dirty {
            self.reload();
        }
        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| self.side_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.chart_panel(ui));
    }
}
