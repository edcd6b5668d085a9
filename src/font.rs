//! Font loading and text rendering using ab_glyph

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::graphics::{Canvas, Color};

// Bundled so text never depends on what the host has installed.
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Cannot read font {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("Invalid font data in {0}")]
    Invalid(String),
}

pub struct FontRenderer {
    font: FontArc,
    source: Option<PathBuf>,
}

impl FontRenderer {
    /// The font compiled into the binary.
    pub fn embedded() -> Result<Self, FontError> {
        let font = FontArc::try_from_slice(FONT_DATA)
            .map_err(|_| FontError::Invalid("embedded DejaVuSans.ttf".to_string()))?;
        Ok(Self { font, source: None })
    }

    pub fn load(path: &Path) -> Result<Self, FontError> {
        let origin = path.display().to_string();
        let data = std::fs::read(path).map_err(|e| FontError::Io(origin.clone(), e))?;
        let font = FontArc::try_from_vec(data).map_err(|_| FontError::Invalid(origin))?;
        Ok(Self {
            font,
            source: Some(path.to_path_buf()),
        })
    }

    /// Uses the override when it loads, the embedded font otherwise.
    pub fn with_override(preferred: Option<&Path>) -> Result<Self, FontError> {
        if let Some(path) = preferred {
            match Self::load(path) {
                Ok(font) => return Ok(font),
                Err(err) => log::warn!("{}; using embedded font", err),
            }
        }
        Self::embedded()
    }

    /// `None` for the embedded font.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Vertical distance between consecutive baselines at `size` pixels.
    pub fn line_height(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        scaled.height() + scaled.line_gap()
    }

    /// Draws `text` with its top-left corner at `(x, y)`. `\n` starts a new line.
    pub fn draw_text(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Color,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let line_height = self.line_height(size);
        let mut baseline = y as f32 + scaled.ascent();

        for line in text.split('\n') {
            let mut caret = x as f32;
            let mut previous = None;
            for ch in line.chars() {
                let mut glyph = scaled.scaled_glyph(ch);
                if let Some(prev) = previous {
                    caret += scaled.kern(prev, glyph.id);
                }
                glyph.position = point(caret, baseline);
                caret += scaled.h_advance(glyph.id);
                previous = Some(glyph.id);

                if let Some(outlined) = self.font.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|gx, gy, coverage| {
                        let px = bounds.min.x as i32 + gx as i32;
                        let py = bounds.min.y as i32 + gy as i32;
                        canvas.blend_pixel(px, py, color, coverage);
                    });
                }
            }
            baseline += line_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink_rows(canvas: &Canvas, height: i32) -> Vec<i32> {
        (0..height)
            .filter(|&y| (0..200).any(|x| canvas.pixel(x, y) != Some([0, 0, 0, 255])))
            .collect()
    }

    #[test]
    fn embedded_font_loads() {
        let font = FontRenderer::embedded().unwrap();
        assert!(font.source().is_none());
        assert!(font.line_height(20.0) > 20.0);
    }

    #[test]
    fn missing_override_falls_back_to_embedded() {
        let font = FontRenderer::with_override(Some(Path::new("no/such/font.ttf"))).unwrap();
        assert!(font.source().is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FontRenderer::load(Path::new("no/such/font.ttf")).err().unwrap();
        assert!(matches!(err, FontError::Io(..)));
    }

    #[test]
    fn garbage_is_invalid_font() {
        let name = format!("agent_grid_not_a_font_{}.ttf", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"definitely not a font").unwrap();
        let result = FontRenderer::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(FontError::Invalid(_))));
    }

    #[test]
    fn text_starts_below_origin() {
        let font = FontRenderer::embedded().unwrap();
        let mut buffer = vec![0u8; 200 * 60 * 4];
        let mut canvas = Canvas::new(&mut buffer, 200, 60);
        canvas.clear([0, 0, 0, 255]);
        font.draw_text(&mut canvas, "Hi", 10, 20, 20.0, [255, 255, 255, 255]);

        let rows = ink_rows(&canvas, 60);
        assert!(!rows.is_empty());
        assert!(rows[0] >= 20);
        assert!(*rows.last().unwrap() < 20 + 20);
    }

    #[test]
    fn newline_advances_by_line_height() {
        let font = FontRenderer::embedded().unwrap();
        let line_height = font.line_height(20.0);
        let height = 120;

        let mut one = vec![0u8; 200 * height as usize * 4];
        let mut canvas = Canvas::new(&mut one, 200, height as u32);
        canvas.clear([0, 0, 0, 255]);
        font.draw_text(&mut canvas, "H", 0, 0, 20.0, [255, 255, 255, 255]);
        let first = ink_rows(&canvas, height);

        let mut two = vec![0u8; 200 * height as usize * 4];
        let mut canvas = Canvas::new(&mut two, 200, height as u32);
        canvas.clear([0, 0, 0, 255]);
        font.draw_text(&mut canvas, "\nH", 0, 0, 20.0, [255, 255, 255, 255]);
        let second = ink_rows(&canvas, height);

        let shift = second[0] - first[0];
        assert!((shift as f32 - line_height).abs() <= 1.0, "shift {} vs {}", shift, line_height);
    }
}
