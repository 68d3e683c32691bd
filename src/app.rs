use eframe::egui;

use crate::color::ColorMap;
use crate::error::RenderError;
use crate::figure::Figure;
use crate::render::Renderer;
use crate::ui::panels;

pub const WINDOW_TITLE: &str = "Rusty Iris – Dataset Overview";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisApp {
    figure: Figure,
    colors: ColorMap,
}

impl IrisApp {
    pub fn new(figure: Figure) -> Self {
        let colors = ColorMap::new(&figure.species());
        Self { figure, colors }
    }
}

impl eframe::App for IrisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary + legend ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.figure, &self.colors);
        });

        // ---- Central panel: the four charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::figure_grid(ui, &self.figure, &self.colors);
        });
    }
}

// ---------------------------------------------------------------------------
// Native window renderer
// ---------------------------------------------------------------------------

/// Opens a native window showing the figure and blocks until it is closed.
#[derive(Debug, Default)]
pub struct WindowRenderer;

impl WindowRenderer {
    fn options() -> eframe::NativeOptions {
        // 15:12, the proportions of the classic figure
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size([1250.0, 1000.0])
                .with_min_inner_size([750.0, 600.0]),
            ..Default::default()
        }
    }
}

impl Renderer for WindowRenderer {
    fn render(&mut self, figure: Figure) -> Result<(), RenderError> {
        figure.validate()?;
        log::info!("Opening figure window with {} panels", figure.panels.len());

        eframe::run_native(
            WINDOW_TITLE,
            Self::options(),
            Box::new(move |_cc| Ok(Box::new(IrisApp::new(figure)))),
        )
        .map_err(|e| RenderError::Backend(e.to_string()))
    }
}
