//! The engine: window lifecycle, state stack and the main loop.

use std::rc::Rc;

use log::warn;
use raylib::prelude::{Color, RaylibDraw};

use crate::config::Config;
use crate::error::Result;
use crate::resources::Resources;
use crate::stack::Stack;
use crate::state::State;
use crate::window::Window;

/// Directory loaded at startup when [`Config::load_assets`] is set.
const ASSETS_DIR: &str = "assets";

/// The core driver of the framework.
///
/// Owns the configuration, the resource cache, the window and the state
/// stack. One engine exists per process; construct it once with
/// [`Engine::new`], hand it a root state via [`Engine::run`] and it returns
/// when that state's run ends, with the window closed and the cache empty.
///
/// States may call [`Engine::run`] from their own `update` or `draw`, which
/// nests another loop on the call stack. The stack length always equals the
/// current nesting depth, and teardown happens exactly once, in the
/// outermost run, no matter how deep the nesting went.
pub struct Engine {
    pub cfg: Config,
    // Declared before `window` so cached GPU handles drop while the GL
    // context is still alive if the engine is dropped without running.
    pub resources: Resources,
    pub window: Window,

    states: Stack<Rc<dyn State>>,

    quit: bool,
    quit_all: bool,
}

impl Engine {
    /// Create the engine: validate geometry, open the window, build the
    /// resource cache and optionally bulk-load the `assets` directory.
    ///
    /// Geometry errors are fatal and happen before any window work. Asset
    /// loading failures are logged and the engine starts anyway.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;

        let mut window = Window::open(&cfg);
        let mut resources = Resources::new(&mut window);

        if cfg.load_assets {
            if let Err(err) = resources.load_dir(&mut window, ASSETS_DIR) {
                warn!("error when loading the {ASSETS_DIR} directory: {err}");
            }
        }

        Ok(Self {
            cfg,
            resources,
            window,
            states: Stack::new(),
            quit: false,
            quit_all: false,
        })
    }

    /// Place `state` on the stack and pass control to it until it quits.
    ///
    /// The sequence is: push, `enter`, then loop over poll/resize/update/
    /// draw until a quit flag breaks it, then `exit` and pop. A state-local
    /// quit ([`Engine::quit_state`]) finishes the current iteration's
    /// remaining callbacks first; an app-wide quit ([`Engine::quit_app`]) or
    /// a host close request unwinds before the next callback, through every
    /// nesting level.
    ///
    /// When the run that emptied the stack returns, the resource cache has
    /// been cleared and the window closed; the engine must not be run again
    /// after that.
    pub fn run(&mut self, state: Rc<dyn State>) {
        self.states.push(Rc::clone(&state));
        let outermost = self.states.len() == 1;

        state.enter(self);

        loop {
            if self.window.poll_close_requested() {
                self.quit_app();
            } else if self.quit {
                break;
            }

            if self.window.poll_resized() {
                self.dispatch_resize();
            }

            state.update(self);

            if self.quit_all {
                break;
            }

            self.window.clear_background(Color::WHITE);
            self.window.begin_frame();
            state.draw(self);
            self.window.end_frame();

            if self.quit {
                break;
            }
        }

        state.exit(self);
        self.states.pop();

        // An inner state quitting must not force the outer run to quit too.
        if !self.quit_all {
            self.quit = false;
        }

        if outermost {
            self.resources.clear();
            self.window.close();
        }
    }

    /// Exit the current state, returning control to the state below it, or
    /// to the caller of the outermost run.
    pub fn quit_state(&mut self) {
        self.quit = true;
    }

    /// Exit every state on the stack and tear the engine down.
    pub fn quit_app(&mut self) {
        self.quit_all = true;
        self.quit_state();
    }

    /// Invoke `resize` on every stacked state, top to bottom. The loop
    /// calls this whenever the host reports a size change; it is public so
    /// applications can force a layout pass.
    pub fn dispatch_resize(&mut self) {
        let stacked: Vec<Rc<dyn State>> = self.states.iter_top_down().cloned().collect();
        for state in stacked {
            state.resize(self);
        }
    }

    /// Current run nesting depth.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Whether a state-local quit is pending.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Whether an app-wide quit is pending.
    pub fn quit_all_requested(&self) -> bool {
        self.quit_all
    }
}
