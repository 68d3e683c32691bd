use crate::error::RenderError;
use crate::figure::Figure;

/// Turns a built [`Figure`] into a visible or recorded artifact.
pub trait Renderer {
    fn render(&mut self, figure: Figure) -> Result<(), RenderError>;
}

/// Headless renderer used by tests and environments without a display.
///
/// It still validates the figure so tests catch a malformed layout before
/// a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub calls: usize,
    pub last_panel_count: usize,
    pub last_titles: Vec<&'static str>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, figure: Figure) -> Result<(), RenderError> {
        self.calls += 1;
        figure.validate()?;
        self.last_panel_count = figure.panels.len();
        self.last_titles = figure.panels.iter().map(|p| p.title).collect();
        Ok(())
    }
}
