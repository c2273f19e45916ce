//! Window management using GLFW
//!
//! The window is created without a client API: it supplies input and a
//! framebuffer size, while the GPU context belongs to whichever backend is
//! plugged in behind the engine's collaborator traits.

use tabletop_engine::core::WindowConfig;
use tabletop_engine::view::Commands;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Keys sampled every frame and the command each one holds
const KEY_BINDINGS: [(glfw::Key, Commands); 9] = [
    (glfw::Key::W, Commands::FORWARD),
    (glfw::Key::S, Commands::BACKWARD),
    (glfw::Key::A, Commands::LEFT),
    (glfw::Key::D, Commands::RIGHT),
    (glfw::Key::Q, Commands::UP),
    (glfw::Key::E, Commands::DOWN),
    (glfw::Key::O, Commands::ORTHOGRAPHIC),
    (glfw::Key::P, Commands::PERSPECTIVE),
    (glfw::Key::Escape, Commands::QUIT),
];

/// Pointer, scroll and resize input gathered from one poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to window coordinates
    CursorMoved(f64, f64),
    /// Vertical scroll in notches
    Scrolled(f64),
    /// Framebuffer resized, in pixels
    Resized(u32, u32),
}

/// GLFW window wrapper with proper resource management
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Open a window and capture the cursor for mouse-look
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|err| WindowError::InitializationFailed(format!("{err:?}")))?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.set_cursor_mode(glfw::CursorMode::Disabled);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        log::info!("Window created: {}x{} '{}'", config.width, config.height, config.title);
        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Whether the user or the app asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request the window to close at the end of the frame
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Poll GLFW and return the pointer, scroll and resize events
    #[allow(clippy::cast_sign_loss)]
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::CursorPos(x, y) => Some(InputEvent::CursorMoved(x, y)),
                glfw::WindowEvent::Scroll(_, y) => Some(InputEvent::Scrolled(y)),
                glfw::WindowEvent::FramebufferSize(width, height) if width > 0 && height > 0 => {
                    Some(InputEvent::Resized(width as u32, height as u32))
                }
                _ => None,
            })
            .collect()
    }

    /// Sample every bound key into the commands held this frame
    pub fn held_commands(&self) -> Commands {
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| self.window.get_key(*key) == glfw::Action::Press)
            .fold(Commands::empty(), |held, (_, command)| held | *command)
    }

    /// Framebuffer size in pixels
    #[allow(clippy::cast_sign_loss)]
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }
}
