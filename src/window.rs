use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use raw_window_handle::{HasRawDisplayHandle, HasRawWindowHandle};

use std::ffi::CString;
use std::num::NonZeroU32;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, ModifiersState, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use gl_wrapper::renderer::set_viewport;

use crate::error::AppError;

/// Requested OpenGL version, core profile.
pub const GL_VERSION: (u8, u8) = (4, 1);

pub struct WindowConfig<'a> {
    pub width: u32,
    pub height: u32,
    pub title: &'a str,
    pub visible: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

impl LoopState {
    pub fn request_close(&mut self) {
        *self = LoopState::Closing;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}

/// What the key callback gets to see of a keyboard event.
#[derive(Debug, Copy, Clone)]
pub struct KeyInput {
    pub key: Option<VirtualKeyCode>,
    pub scancode: u32,
    pub state: ElementState,
    pub modifiers: ModifiersState,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportPolicy {
    /// Viewport follows the framebuffer.
    Passthrough,
    Fixed { width: u32, height: u32 },
}

impl ViewportPolicy {
    pub fn resolve(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ViewportPolicy::Passthrough => (width, height),
            ViewportPolicy::Fixed { width, height } => (width, height),
        }
    }

    /// Resize callback applying this policy to the GL viewport.
    pub fn callback(self) -> impl FnMut(u32, u32) {
        move |width, height| {
            let (w, h) = self.resolve(width, height);
            set_viewport(w, h);
        }
    }
}

/// Key callback closing the window when `quit` is pressed.
pub fn quit_on(quit: VirtualKeyCode) -> impl FnMut(&KeyInput, &mut LoopState) {
    move |input, state| {
        if input.key == Some(quit) && input.state == ElementState::Pressed {
            state.request_close();
        }
    }
}

type ResizeCallback = Box<dyn FnMut(u32, u32)>;
type KeyCallback = Box<dyn FnMut(&KeyInput, &mut LoopState)>;

pub struct GlWindow {
    pub context: PossiblyCurrentContext,
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
    modifiers: ModifiersState,
    on_resize: Option<ResizeCallback>,
    on_key: Option<KeyCallback>,
}

impl GlWindow {
    /// Opens a window with a current 4.1 core context and loads the gl
    /// function pointers.
    pub fn new(event_loop: &EventLoop<()>, config: &WindowConfig) -> Result<Self, AppError> {
        let width = NonZeroU32::new(config.width)
            .ok_or(AppError::InvalidSize(config.width, config.height))?;
        let height = NonZeroU32::new(config.height)
            .ok_or(AppError::InvalidSize(config.width, config.height))?;

        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(config.width, config.height)))
            .with_title(config.title)
            .with_visible(config.visible);
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = open_display(event_loop, window_builder, template)?;

        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                GL_VERSION.0,
                GL_VERSION.1,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(window.raw_window_handle()));

        let surface = create_surface(&window, &gl_config, width, height)?;

        let context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        if !gl::ClearColor::is_loaded() {
            return Err(AppError::Loader);
        }

        log::debug!(
            "Created {}x{} window with an OpenGL {}.{} core context",
            config.width,
            config.height,
            GL_VERSION.0,
            GL_VERSION.1
        );

        Ok(Self {
            context,
            surface,
            window,
            modifiers: ModifiersState::empty(),
            on_resize: None,
            on_key: None,
        })
    }

    pub fn set_resize_callback(&mut self, callback: impl FnMut(u32, u32) + 'static) {
        self.on_resize = Some(Box::new(callback));
    }

    pub fn set_key_callback(&mut self, callback: impl FnMut(&KeyInput, &mut LoopState) + 'static) {
        self.on_key = Some(Box::new(callback));
    }

    pub fn swap_buffers(&self) -> Result<(), AppError> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }

    /// Polls events and calls `draw` once per iteration, swapping after
    /// each frame, until the loop state turns to closing.
    pub fn run<F>(&mut self, event_loop: &mut EventLoop<()>, mut draw: F) -> Result<(), AppError>
    where
        F: FnMut() -> Result<(), AppError>,
    {
        let mut state = LoopState::Running;
        let mut failure = None;

        event_loop.run_return(|event, _window_target, control_flow| {
            control_flow.set_poll();

            match event {
                Event::WindowEvent { event, .. } => self.dispatch(&event, &mut state),
                Event::MainEventsCleared if state.is_running() => {
                    if let Err(e) = draw().and_then(|_| self.swap_buffers()) {
                        failure = Some(e);
                        state.request_close();
                    }
                }
                _ => (),
            }

            if !state.is_running() {
                control_flow.set_exit();
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn dispatch(&mut self, event: &WindowEvent, state: &mut LoopState) {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = *modifiers,
            WindowEvent::KeyboardInput { input, .. } => {
                let input = KeyInput {
                    key: input.virtual_keycode,
                    scancode: input.scancode,
                    state: input.state,
                    modifiers: self.modifiers,
                };

                if let Some(on_key) = &mut self.on_key {
                    on_key(&input, state);
                }
            }
            WindowEvent::CloseRequested => state.request_close(),
            _ => (),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        let Some((w, h)) = nonzero_size(width, height) else {
            return;
        };

        self.surface.resize(&self.context, w, h);

        if let Some(on_resize) = &mut self.on_resize {
            on_resize(width, height);
        }
    }
}

/// Minimized windows report a zero size, those events are dropped.
fn nonzero_size(width: u32, height: u32) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(width)?, NonZeroU32::new(height)?))
}

/// WGL needs the native window before the display exists.
#[cfg(windows)]
fn open_display(
    event_loop: &EventLoop<()>,
    builder: WindowBuilder,
    template: ConfigTemplateBuilder,
) -> Result<(Window, Config), AppError> {
    let window = builder
        .build(event_loop)
        .map_err(|e| AppError::Window(e.to_string()))?;
    let handle = window.raw_window_handle();

    let display = unsafe {
        Display::new(
            event_loop.raw_display_handle(),
            DisplayApiPreference::EglThenWgl(Some(handle)),
        )?
    };
    let configs = unsafe { display.find_configs(template.compatible_with_native_window(handle).build())? };
    let config = pick_config(configs)?;

    Ok((window, config))
}

/// Picks a config first, then builds the window with the config's visual.
#[cfg(not(windows))]
fn open_display(
    event_loop: &EventLoop<()>,
    builder: WindowBuilder,
    template: ConfigTemplateBuilder,
) -> Result<(Window, Config), AppError> {
    let display = unsafe { Display::new(event_loop.raw_display_handle(), display_preference())? };
    let configs = unsafe { display.find_configs(template.build())? };
    let config = pick_config(configs)?;

    let window = glutin_winit::finalize_window(event_loop, builder, &config)
        .map_err(|e| AppError::Window(e.to_string()))?;

    Ok((window, config))
}

#[cfg(target_os = "macos")]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::EglThenGlx(Box::new(winit::platform::unix::register_xlib_error_hook))
}

/// Takes the first config; the display may filter every candidate out.
fn pick_config<C>(mut configs: impl Iterator<Item = C>) -> Result<C, AppError> {
    configs
        .next()
        .ok_or_else(|| AppError::Window("no OpenGL config matches the requested attributes".into()))
}

fn create_surface(
    window: &Window,
    config: &Config,
    width: NonZeroU32,
    height: NonZeroU32,
) -> Result<Surface<WindowSurface>, AppError> {
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        window.raw_window_handle(),
        width,
        height,
    );

    let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: VirtualKeyCode, state: ElementState) -> KeyInput {
        KeyInput {
            key: Some(key),
            scancode: 0,
            state,
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn quit_key_press_closes() {
        let mut on_key = quit_on(VirtualKeyCode::Q);
        let mut state = LoopState::Running;

        on_key(&key(VirtualKeyCode::Q, ElementState::Pressed), &mut state);

        assert_eq!(state, LoopState::Closing);
    }

    #[test]
    fn quit_key_release_is_ignored() {
        let mut on_key = quit_on(VirtualKeyCode::Q);
        let mut state = LoopState::Running;

        on_key(&key(VirtualKeyCode::Q, ElementState::Released), &mut state);
        on_key(&key(VirtualKeyCode::W, ElementState::Pressed), &mut state);

        assert!(state.is_running());
    }

    #[test]
    fn closing_is_terminal() {
        let mut on_key = quit_on(VirtualKeyCode::Q);
        let mut state = LoopState::Running;

        on_key(&key(VirtualKeyCode::Q, ElementState::Pressed), &mut state);
        on_key(&key(VirtualKeyCode::Q, ElementState::Released), &mut state);

        assert_eq!(state, LoopState::Closing);
    }

    #[test]
    fn zero_sized_resize_is_dropped() {
        assert_eq!(nonzero_size(0, 400), None);
        assert_eq!(nonzero_size(600, 0), None);
        assert_eq!(nonzero_size(0, 0), None);
    }

    #[test]
    fn nonzero_resize_passes_through() {
        for (w, h) in [(1, 1), (600, 400), (1920, 1080)] {
            let (nw, nh) = nonzero_size(w, h).unwrap();

            assert_eq!((nw.get(), nh.get()), (w, h));
        }
    }

    #[test]
    fn empty_config_list_is_an_error() {
        let err = pick_config(std::iter::empty::<u32>()).unwrap_err();

        assert!(matches!(err, AppError::Window(_)));
    }

    #[test]
    fn first_config_wins() {
        assert_eq!(pick_config([3, 1, 2].into_iter()).unwrap(), 3);
    }

    #[test]
    fn passthrough_follows_every_resize() {
        let policy = ViewportPolicy::Passthrough;

        for size in [(600, 400), (1, 1), (1920, 1080)] {
            assert_eq!(policy.resolve(size.0, size.1), size);
        }
    }

    #[test]
    fn fixed_ignores_resize() {
        let policy = ViewportPolicy::Fixed {
            width: 600,
            height: 600,
        };

        assert_eq!(policy.resolve(1920, 1080), (600, 600));
        assert_eq!(policy.resolve(10, 10), (600, 600));
    }
}
