use std::path::Path;
use std::time::Instant;

use winit::{
    dpi::LogicalSize,
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use agent_grid::app::AppState;
use agent_grid::config::{ViewerConfig, CONFIG_FILE};
use agent_grid::font::FontRenderer;
use agent_grid::frame_clock::FrameClock;
use agent_grid::graphics::GraphicsRenderer;
use agent_grid::input::InputHandler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ViewerConfig::load_or_default(Path::new(CONFIG_FILE));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut graphics = GraphicsRenderer::new(&window, size.width, size.height)?;
    log::info!("Window {}x{} at {} FPS", size.width, size.height, config.target_fps);

    let font = FontRenderer::with_override(config.font_path.as_deref())?;
    match font.source() {
        Some(path) => log::info!("Using font {}", path.display()),
        None => log::info!("Using embedded font"),
    }

    let mut app = AppState::new();
    for (x, y, bitmask) in app.grid().active_cells() {
        log::debug!("Seeded cell ({}, {}) bitmask {:#b}", x, y, bitmask);
    }
    let mut input = InputHandler::new();
    let mut clock = FrameClock::new(Instant::now());
    let frame_interval = config.frame_interval();
    let target_fps = config.target_fps;
    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init)
            | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                let now = Instant::now();
                next_frame += frame_interval;
                // Fell behind (stall, drag-resize): pace from now instead of bursting.
                if next_frame < now {
                    next_frame = now + frame_interval;
                }
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!("Close requested, exiting");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    graphics.resize(new_inner_size.width, new_inner_size.height);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.handle_cursor_moved(position.x, position.y);
                }
                WindowEvent::CursorLeft { .. } => {
                    input.handle_cursor_left();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.handle_mouse_input(state, button);
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (width, height) = graphics.size();
                let layout = app.update(width as i32, height as i32, input.take_click());
                let fps = clock.tick(Instant::now());

                graphics.render(&app, &layout, &font, fps, target_fps);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }

        *control_flow = ControlFlow::WaitUntil(next_frame);
    });
}
