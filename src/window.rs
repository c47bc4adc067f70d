//! Window lifecycle and the raylib capability surface.
//!
//! Everything the engine needs from raylib goes through this module: opening
//! and closing the window, polling close and resize events, frame
//! boundaries, and the asset decode/upload primitives the resource cache
//! builds on. The rest of the crate never touches `raylib::ffi` directly.
//!
//! [`Window`] implements [`RaylibDraw`], so states issue draw calls on
//! `engine.window` between the frame boundaries the engine manages.

use std::ffi::CString;
use std::path::Path;

use raylib::ffi;
use raylib::prelude::*;

use crate::config::Config;

/// Side length of the generated placeholder image.
const MISSING_SIZE: i32 = 256;
/// Checker cell size of the generated placeholder image.
const MISSING_CHECK: i32 = 32;

const CLOSED: &str = "window already closed";

/// The application window and the raylib handles behind it.
///
/// One window exists per engine. The handle is dropped, which closes the
/// window, when the outermost run finishes; the struct itself stays behind
/// so an engine that was never run still closes its window on drop.
pub struct Window {
    rl: Option<RaylibHandle>,
    thread: RaylibThread,
}

impl Window {
    /// Open the window described by `cfg` and apply frame rate and log
    /// verbosity. Geometry is assumed valid; `Config::validate` runs first.
    pub(crate) fn open(cfg: &Config) -> Self {
        unsafe {
            ffi::SetTraceLogLevel(cfg.log_level as i32);
        }

        let mut builder = raylib::init();
        builder.size(cfg.width, cfg.height).title(&cfg.title);
        if cfg.window_mode & ConfigFlags::FLAG_FULLSCREEN_MODE as u32 != 0 {
            builder.fullscreen();
        }
        if cfg.window_mode & ConfigFlags::FLAG_WINDOW_RESIZABLE as u32 != 0 {
            builder.resizable();
        }
        let (mut rl, thread) = builder.build();

        // Remaining mode flags are applied to the live window, the same
        // mechanism used for runtime toggles like the vsync hint.
        let handled = ConfigFlags::FLAG_FULLSCREEN_MODE as u32
            | ConfigFlags::FLAG_WINDOW_RESIZABLE as u32;
        let rest = cfg.window_mode & !handled;
        if rest != 0 {
            unsafe {
                ffi::SetWindowState(rest);
            }
        }

        rl.set_target_fps(cfg.target_fps);

        Self {
            rl: Some(rl),
            thread,
        }
    }

    fn rl(&self) -> &RaylibHandle {
        self.rl.as_ref().expect(CLOSED)
    }

    fn rl_mut(&mut self) -> &mut RaylibHandle {
        self.rl.as_mut().expect(CLOSED)
    }

    /// Borrow the underlying raylib handle, e.g. for input polling.
    pub fn handle(&self) -> &RaylibHandle {
        self.rl()
    }

    /// Mutably borrow the underlying raylib handle.
    pub fn handle_mut(&mut self) -> &mut RaylibHandle {
        self.rl_mut()
    }

    /// Current framebuffer width in pixels.
    pub fn screen_width(&self) -> i32 {
        self.rl().get_screen_width()
    }

    /// Current framebuffer height in pixels.
    pub fn screen_height(&self) -> i32 {
        self.rl().get_screen_height()
    }

    /// True when the host asked the window to close this frame.
    pub(crate) fn poll_close_requested(&self) -> bool {
        self.rl().window_should_close()
    }

    /// True when the window size changed since the last frame.
    pub(crate) fn poll_resized(&self) -> bool {
        self.rl().is_window_resized()
    }

    pub(crate) fn begin_frame(&mut self) {
        unsafe {
            ffi::BeginDrawing();
        }
    }

    /// Ends the frame. Raylib swaps buffers, polls events and waits out the
    /// target frame rate here.
    pub(crate) fn end_frame(&mut self) {
        unsafe {
            ffi::EndDrawing();
        }
    }

    /// Upload a decoded image to the GPU.
    pub(crate) fn load_texture_from_image(
        &mut self,
        image: &Image,
    ) -> std::result::Result<Texture2D, String> {
        let rl = self.rl.as_mut().expect(CLOSED);
        rl.load_texture_from_image(&self.thread, image)
            .map_err(|e| e.to_string())
    }

    /// Load a font file from disk, including its GPU glyph atlas.
    pub(crate) fn load_font(&mut self, path: &Path) -> std::result::Result<Font, String> {
        let rl = self.rl.as_mut().expect(CLOSED);
        rl.load_font(&self.thread, &path.to_string_lossy())
            .map_err(|e| e.to_string())
    }

    /// Generate the checkerboard image substituted for missing resources.
    pub(crate) fn make_missing_image(&self) -> Image {
        let mut image = Image::gen_image_checked(
            MISSING_SIZE,
            MISSING_SIZE,
            MISSING_CHECK,
            MISSING_CHECK,
            Color::MAGENTA,
            Color::BLACK,
        );
        let text = CString::new("missing resource").expect("static text is nul-free");
        unsafe {
            ffi::ImageDrawText(
                &mut *image,
                text.as_ptr(),
                16,
                MISSING_SIZE / 2 - 10,
                20,
                Color::RAYWHITE.into(),
            );
        }
        image
    }

    /// Raylib's built-in font, used as the fallback for missing font
    /// lookups. Raylib refuses to unload its own default font, so owning
    /// the wrapper is harmless.
    pub(crate) fn default_font(&self) -> Font {
        unsafe { Font::from_raw(ffi::GetFontDefault()) }
    }

    /// Close the window. Dropping the handle shuts raylib down.
    pub(crate) fn close(&mut self) {
        self.rl.take();
    }
}

// Draw calls are only meaningful between begin_frame and end_frame.
impl RaylibDraw for Window {}
