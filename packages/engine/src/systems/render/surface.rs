use super::glyph::GlyphMetrics;

/// 2D drawing context the renderer draws through.
///
/// Mirrors the subset of the canvas 2D API the renderer needs. Fallible
/// calls report host errors as strings.
pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, style: &str);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), String>;
    fn rotate(&mut self, angle: f64) -> Result<(), String>;
    fn measure_glyph(&mut self, glyph: &str) -> Result<GlyphMetrics, String>;
    fn fill_glyph(&mut self, glyph: &str, x: f64, y: f64) -> Result<(), String>;
}

/// Scoped transform: `save()` on creation, `restore()` on drop, including
/// early returns through `?`.
pub struct SavedTransform<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SavedTransform<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> std::ops::Deref for SavedTransform<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> std::ops::DerefMut for SavedTransform<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SavedTransform<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
