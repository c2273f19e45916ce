//! Frame loops
//!
//! Both loops run the same per-frame sequence: view update, view uniforms,
//! scene render. The windowed loop reads input from GLFW and wall-clock
//! time; the headless loop feeds zero input at a fixed step so its output
//! is reproducible.

use std::path::Path;

use tabletop_engine::core::{AppConfig, ConfigError};
use tabletop_engine::foundation::time::Timer;
use tabletop_engine::render::{FrameEvent, RecordingBackend};
use tabletop_engine::scene::SceneComposer;
use tabletop_engine::view::{Commands, FrameControl, ViewController};
use thiserror::Error;

use crate::window::{InputEvent, Window, WindowError};

/// Fixed step used by the headless loop
const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Seconds between FPS log lines in the windowed loop
const FPS_LOG_INTERVAL: f32 = 5.0;

/// Host application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration loaded but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Window or input setup failed
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Frame dump could not be serialized
    #[error("Could not serialize frame dump: {0}")]
    Dump(#[from] ron::Error),

    /// Frame dump could not be written
    #[error("Could not write frame dump: {0}")]
    Io(#[from] std::io::Error),
}

/// Scene, view and the backend they both record into
struct Session {
    backend: RecordingBackend,
    scene: SceneComposer<RecordingBackend, RecordingBackend>,
    view: ViewController,
    aspect: f32,
}

impl Session {
    fn new(config: &AppConfig) -> Self {
        let backend = RecordingBackend::new();
        let mut scene = SceneComposer::new(backend.clone(), backend.clone());
        scene.prepare(&config.assets.texture_dir);

        Self {
            backend,
            scene,
            view: ViewController::new(config.view.clone()),
            aspect: config.window.aspect_ratio(),
        }
    }

    /// Run one frame and return its recorded commands
    fn frame(&mut self, held: Commands, dt: f32) -> (FrameControl, Vec<FrameEvent>) {
        let mut sink = self.backend.clone();
        let control = self.view.update(held, dt);
        self.view.prepare_view(&mut sink, self.aspect);
        self.scene.render(&mut sink);
        (control, self.backend.take_events())
    }

    fn shutdown(&mut self) {
        self.scene.release();
    }
}

/// Width over height, or `None` for a minimized framebuffer
#[allow(clippy::cast_precision_loss)]
fn aspect_of(width: u32, height: u32) -> Option<f32> {
    (width > 0 && height > 0).then(|| width as f32 / height as f32)
}

/// Open a window and run until it is closed
pub fn run_windowed(config: &AppConfig) -> Result<(), AppError> {
    let mut window = Window::new(&config.window)?;
    let mut session = Session::new(config);
    let (width, height) = window.framebuffer_size();
    if let Some(aspect) = aspect_of(width, height) {
        session.aspect = aspect;
    }
    let mut timer = Timer::new();
    let mut next_fps_log = FPS_LOG_INTERVAL;

    log::info!("Entering main loop");
    while !window.should_close() {
        timer.update();

        for event in window.poll_events() {
            match event {
                InputEvent::CursorMoved(x, y) => session.view.on_cursor_moved(x, y),
                InputEvent::Scrolled(dy) => session.view.on_scroll(dy),
                InputEvent::Resized(width, height) => {
                    if let Some(aspect) = aspect_of(width, height) {
                        session.aspect = aspect;
                    }
                }
            }
        }

        let (control, _) = session.frame(window.held_commands(), timer.delta_time());
        if control == FrameControl::CloseRequested {
            window.set_should_close(true);
        }

        if timer.total_time() >= next_fps_log {
            log::info!(
                "{} frames, {:.1} fps, {} draws/frame",
                timer.frame_count(),
                timer.average_fps(),
                session.scene.stats().draw_calls
            );
            next_fps_log += FPS_LOG_INTERVAL;
        }
    }

    session.shutdown();
    log::info!("Window closed after {} frames", timer.frame_count());
    Ok(())
}

/// Run `frames` frames with no input, then optionally dump the last one
pub fn run_headless(config: &AppConfig, frames: u32) -> Result<(), AppError> {
    let mut session = Session::new(config);
    let mut timer = Timer::new();
    let mut last_frame = Vec::new();

    for _ in 0..frames {
        timer.advance(HEADLESS_DT);
        let (_, events) = session.frame(Commands::empty(), timer.delta_time());
        last_frame = events;
    }

    let stats = session.scene.stats();
    log::info!(
        "Headless run: {} frames, {} draws and {} fallback surfaces in the last frame, {} commands recorded",
        timer.frame_count(),
        stats.draw_calls,
        stats.fallback_surfaces,
        last_frame.len()
    );

    if let Some(path) = &config.frame_dump {
        write_frame_dump(path, &last_frame)?;
    }

    session.shutdown();
    Ok(())
}

fn write_frame_dump(path: &Path, events: &[FrameEvent]) -> Result<(), AppError> {
    let contents = ron::ser::to_string_pretty(events, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, contents)?;
    log::info!("Wrote {} frame events to {:?}", events.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_run_dumps_last_frame() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("frame.ron");

        let mut config = AppConfig::default();
        config.assets.texture_dir = dir.path().join("no-textures-here");
        config.frame_dump = Some(dump.clone());

        run_headless(&config, 3).unwrap();

        let contents = std::fs::read_to_string(&dump).unwrap();
        let events: Vec<FrameEvent> = ron::from_str(&contents).unwrap();
        let draws = events
            .iter()
            .filter(|event| matches!(event, FrameEvent::Draw(_)))
            .count();
        assert_eq!(draws, 10);
        assert!(matches!(events.first(), Some(FrameEvent::Uniform { name, .. }) if name == "view"));
    }

    #[test]
    fn test_aspect_skips_empty_framebuffer() {
        assert_eq!(aspect_of(1000, 800), Some(1.25));
        assert_eq!(aspect_of(0, 800), None);
        assert_eq!(aspect_of(1000, 0), None);
    }

    #[test]
    fn test_headless_without_dump_path_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.assets.texture_dir = dir.path().to_path_buf();

        run_headless(&config, 1).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
