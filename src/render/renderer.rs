use crate::error::Result;
use crate::geometry::ConnectiveStructure;

use super::Style;

/// Drawing backend for connective structures.
///
/// A renderer is a session: callers pass it explicitly, open panels with
/// [`begin_panel`](Renderer::begin_panel) and draw into the current one.
pub trait Renderer {
    /// Starts a new panel; later draws go into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot create the panel.
    fn begin_panel(&mut self, title: &str) -> Result<()>;

    /// Draws a structure into the current panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the structure is invalid or the backend fails.
    fn render(&mut self, structure: &ConnectiveStructure, style: &Style) -> Result<()>;
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub structure: ConnectiveStructure,
    pub style: Style,
}

/// A titled group of draw calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub title: String,
    pub draws: Vec<DrawCall>,
}

impl Panel {
    /// Returns the labels of the draws in this panel, in draw order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.draws.iter().filter_map(|d| d.style.label()).collect()
    }
}

/// In-memory renderer that keeps every panel and draw call.
///
/// Draws issued before any panel is opened land in an untitled panel.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    panels: Vec<Panel>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded panels.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Consumes the renderer, returning the recorded panels.
    #[must_use]
    pub fn into_panels(self) -> Vec<Panel> {
        self.panels
    }

    /// Total number of draw calls over all panels.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.panels.iter().map(|p| p.draws.len()).sum()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_panel(&mut self, title: &str) -> Result<()> {
        self.panels.push(Panel {
            title: title.to_owned(),
            draws: Vec::new(),
        });
        Ok(())
    }

    fn render(&mut self, structure: &ConnectiveStructure, style: &Style) -> Result<()> {
        structure.validate()?;
        if self.panels.is_empty() {
            self.panels.push(Panel::default());
        }
        let draw = DrawCall {
            structure: structure.clone(),
            style: style.clone(),
        };
        if let Some(panel) = self.panels.last_mut() {
            panel.draws.push(draw);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{RenderError, RetractionSimError};
    use crate::math::Point2;
    use crate::render::{render_validation, Color};

    /// Backend that fails once a draw budget is used up.
    struct LimitedRenderer {
        remaining: usize,
    }

    impl Renderer for LimitedRenderer {
        fn begin_panel(&mut self, _title: &str) -> Result<()> {
            Ok(())
        }

        fn render(&mut self, _structure: &ConnectiveStructure, _style: &Style) -> Result<()> {
            if self.remaining == 0 {
                return Err(RenderError::Backend("draw budget exhausted".to_owned()).into());
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    fn segment() -> ConnectiveStructure {
        ConnectiveStructure::from_points(&[Point2::origin(), Point2::new(1.0, 0.0)], false)
    }

    #[test]
    fn draws_go_into_current_panel() {
        let mut r = RecordingRenderer::new();
        r.begin_panel("left").unwrap();
        r.render(&segment(), &Style::wireframe(Color::Black)).unwrap();
        r.begin_panel("right").unwrap();
        r.render(&segment(), &Style::wireframe(Color::Red).with_label("a")).unwrap();
        r.render(&segment(), &Style::filled(Color::Blue)).unwrap();

        assert_eq!(r.panels().len(), 2);
        assert_eq!(r.panels()[0].draws.len(), 1);
        assert_eq!(r.panels()[1].title, "right");
        assert_eq!(r.panels()[1].labels(), vec!["a"]);
        assert_eq!(r.draw_count(), 3);
    }

    #[test]
    fn draw_without_panel_opens_untitled_one() {
        let mut r = RecordingRenderer::new();
        r.render(&segment(), &Style::wireframe(Color::Teal)).unwrap();
        assert_eq!(r.panels().len(), 1);
        assert!(r.panels()[0].title.is_empty());
    }

    #[test]
    fn invalid_structure_is_refused() {
        let mut r = RecordingRenderer::new();
        let mut bad = segment();
        bad.segments.push([0, 7]);
        assert!(r.render(&bad, &Style::wireframe(Color::Black)).is_err());
        assert_eq!(r.draw_count(), 0);
    }

    #[test]
    fn backend_error_stops_the_layout() {
        let mut r = LimitedRenderer { remaining: 1 };
        let err = render_validation(&mut r, &segment(), &segment()).unwrap_err();
        assert!(matches!(err, RetractionSimError::Render(RenderError::Backend(_))));
        assert_eq!(r.remaining, 0);
    }
}
