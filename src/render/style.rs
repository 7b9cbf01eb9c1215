use crate::error::{ensure_positive, ParameterError, Result};

/// Draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Blue,
    Teal,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Returns the color as 8-bit RGB.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Red => (255, 0, 0),
            Self::Blue => (0, 0, 255),
            Self::Teal => (0, 128, 128),
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// How a structure is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Segments only.
    Wireframe,
    /// Closed outlines filled.
    Filled,
}

/// Appearance of a rendered structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    color: Color,
    mode: FillMode,
    opacity: f64,
    line_width: f64,
    label: Option<String>,
}

impl Style {
    /// Creates an opaque style with unit line width and no label.
    #[must_use]
    pub fn new(color: Color, mode: FillMode) -> Self {
        Self {
            color,
            mode,
            opacity: 1.0,
            line_width: 1.0,
            label: None,
        }
    }

    /// Shorthand for a wireframe style.
    #[must_use]
    pub fn wireframe(color: Color) -> Self {
        Self::new(color, FillMode::Wireframe)
    }

    /// Shorthand for a filled style.
    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self::new(color, FillMode::Filled)
    }

    /// Sets the opacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `opacity` is outside `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ParameterError::OutOfRange {
                parameter: "opacity",
                value: opacity,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        self.opacity = opacity;
        Ok(self)
    }

    /// Sets the line width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn with_line_width(mut self, width: f64) -> Result<Self> {
        self.line_width = ensure_positive("line_width", width)?;
        Ok(self)
    }

    /// Sets the legend label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn mode(&self) -> FillMode {
        self.mode
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
