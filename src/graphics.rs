use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::AppState;
use crate::font::FontRenderer;
use crate::grid::GRID_SIZE;
use crate::layout::Layout;

/// RGBA, matching the `pixels` frame layout.
pub type Color = [u8; 4];

pub const BACKGROUND: Color = [0, 0, 0, 255];
pub const CELL_EMPTY: Color = [80, 80, 80, 255];
pub const CELL_ACTIVE: Color = [0, 228, 48, 255];
pub const CELL_SELECTED: Color = [253, 249, 0, 255];
pub const SIDEBAR_PANEL: Color = [245, 245, 245, 255];
pub const TEXT: Color = [0, 0, 0, 255];
pub const TEXT_MUTED: Color = [130, 130, 130, 255];
pub const FPS_GOOD: Color = [0, 158, 47, 255];
pub const FPS_SLOW: Color = [255, 161, 0, 255];
pub const FPS_BAD: Color = [230, 41, 55, 255];

pub const SIDEBAR_PADDING: i32 = 10;
pub const TITLE: &str = "Cell Info";
pub const TITLE_Y: i32 = 20;
pub const TITLE_SIZE: f32 = 22.0;
pub const DETAIL_Y: i32 = 60;
pub const DETAIL_SIZE: f32 = 20.0;
pub const FPS_SIZE: f32 = 20.0;
pub const FPS_X: i32 = 10;
pub const FPS_BOTTOM_MARGIN: i32 = 30;

/// Drawing primitives over an RGBA frame. Everything is clipped to the frame.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self { frame, width, height }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x, y)?;
        let mut color = [0; 4];
        color.copy_from_slice(&self.frame[index..index + 4]);
        Some(color)
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fills `w` x `h` pixels starting at `(x, y)`. Negative origins are allowed.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize * 4;
        for row in y0 as usize..y1 as usize {
            let start = row * stride + x0 as usize * 4;
            let end = row * stride + x1 as usize * 4;
            for pixel in self.frame[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    /// Blends `color` over the existing pixel with `coverage` in `0.0..=1.0`.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = &mut self.frame[index..index + 4];
        for channel in 0..3 {
            let blended = dst[channel] as f32 * (1.0 - alpha) + color[channel] as f32 * alpha;
            dst[channel] = blended.round() as u8;
        }
        dst[3] = 255;
    }
}

/// Selected beats active beats empty.
pub fn cell_color(app: &AppState, x: usize, y: usize) -> Color {
    if app.is_selected(x, y) {
        CELL_SELECTED
    } else if app.grid().bitmask(x, y) != 0 {
        CELL_ACTIVE
    } else {
        CELL_EMPTY
    }
}

pub fn fps_color(fps: u32, target_fps: u32) -> Color {
    if fps >= target_fps {
        FPS_GOOD
    } else if fps * 2 >= target_fps {
        FPS_SLOW
    } else {
        FPS_BAD
    }
}

/// Draws one complete frame: background, grid, sidebar, then the FPS counter.
pub fn draw_frame(
    canvas: &mut Canvas,
    app: &AppState,
    layout: &Layout,
    font: &FontRenderer,
    fps: u32,
    target_fps: u32,
) {
    canvas.clear(BACKGROUND);
    draw_grid(canvas, app, layout);
    draw_sidebar(canvas, app, layout, font);

    font.draw_text(
        canvas,
        &format!("{} FPS", fps),
        FPS_X,
        layout.screen_height - FPS_BOTTOM_MARGIN,
        FPS_SIZE,
        fps_color(fps, target_fps),
    );
}

fn draw_grid(canvas: &mut Canvas, app: &AppState, layout: &Layout) {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let (px, py, w, h) = layout.cell_rect(x, y);
            canvas.fill_rect(px, py, w, h, cell_color(app, x, y));
        }
    }
}

fn draw_sidebar(canvas: &mut Canvas, app: &AppState, layout: &Layout, font: &FontRenderer) {
    let left = layout.sidebar_x();
    canvas.fill_rect(left, 0, layout.sidebar_width, layout.screen_height, SIDEBAR_PANEL);

    let text_x = left + SIDEBAR_PADDING;
    font.draw_text(canvas, TITLE, text_x, TITLE_Y, TITLE_SIZE, TEXT);

    let color = if app.selection().is_some() { TEXT } else { TEXT_MUTED };
    font.draw_text(canvas, &app.sidebar_text(), text_x, DETAIL_Y, DETAIL_SIZE, color);
}

/// Owns the window surface and a frame buffer sized to the window.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let width = width.max(1);
        let height = height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self { pixels, width, height })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimised windows report 0x0; keep the last buffer until restored.
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        log::debug!("Resizing frame to {}x{}", width, height);

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
            return;
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("Failed to resize buffer: {}", err);
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn render(
        &mut self,
        app: &AppState,
        layout: &Layout,
        font: &FontRenderer,
        fps: u32,
        target_fps: u32,
    ) {
        let (width, height) = (self.width, self.height);
        let mut canvas = Canvas::new(self.pixels.frame_mut(), width, height);
        draw_frame(&mut canvas, app, layout, font, fps, target_fps);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
