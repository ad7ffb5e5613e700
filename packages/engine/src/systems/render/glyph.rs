/// Rendered bounding box of a glyph, as reported by the host's text metrics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Distance from the alignment point to the left edge
    pub left: f64,
    pub right: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl GlyphMetrics {
    pub fn new(left: f64, right: f64, ascent: f64, descent: f64) -> Self {
        Self { left, right, ascent, descent }
    }

    pub fn width(&self) -> f64 {
        self.left + self.right
    }

    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }

    /// Draw offset that centers the glyph on the origin: `(-w/2, +h/2)`.
    ///
    /// Some hosts report NaN/undefined metrics; any non-finite dimension
    /// falls back to `(0, 0)`.
    pub fn centering_offset(&self) -> (f64, f64) {
        let (w, h) = (self.width(), self.height());
        if w.is_finite() && h.is_finite() {
            (-w / 2.0, h / 2.0)
        } else {
            (0.0, 0.0)
        }
    }
}
