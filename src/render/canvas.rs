//! The rendering collaborator contract.
//!
//! Measurement and drawing are two distinct operations so layout logic
//! can be exercised against synthetic heights without font metrics.

/// The three faces the documents use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Oblique,
}

/// Face, size and line gap for one text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font face
    pub face: FontFace,
    /// Font size in points
    pub size: f64,
    /// Extra gap between wrapped lines, in points
    pub line_gap: f64,
}

impl TextStyle {
    /// Style with no extra line gap
    #[must_use]
    pub const fn new(face: FontFace, size: f64) -> Self {
        Self {
            face,
            size,
            line_gap: 0.0,
        }
    }

    /// Style with an extra gap between wrapped lines
    #[must_use]
    pub const fn with_line_gap(face: FontFace, size: f64, line_gap: f64) -> Self {
        Self {
            face,
            size,
            line_gap,
        }
    }
}

/// A paginated drawing surface with separate measure and draw operations
pub trait Canvas {
    /// Height the text would occupy when wrapped to `width`, without drawing
    fn measure(&self, text: &str, style: TextStyle, width: f64) -> f64;

    /// Draw wrapped text with its top-left corner at `(x, y)`; y grows
    /// downward from the top edge of the page
    fn draw(&mut self, text: &str, style: TextStyle, x: f64, y: f64, width: f64);

    /// Start a new page; subsequent draws land on it
    fn new_page(&mut self);
}
