// The mounted component handed to the host page. Owns the canvas element, the
// requestAnimationFrame loop and the window resize subscription; all of it is
// released on unmount (or when the JS handle is freed).

use crate::canvas_helpers;
use crate::config::FieldConfig;
use crate::driver::{DriverState, FrameDriver};
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::utils::{self, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

struct Mounted {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: ParticleField,
    driver: FrameDriver,
    frame_handle: Option<i32>,
}

// The frame closure reschedules itself, so it has to be reachable from inside itself
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    state: Rc<RefCell<Mounted>>,
    frame_callback: FrameCallback,
    resize_callback: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Creates the canvas, sizes and seeds the field, subscribes to `resize`
    /// and starts the frame loop.
    pub fn mount(options: JsValue) -> Result<ParticleBackground, JsValue> {
        let config = FieldConfig::from_js(options)?;
        Ok(ParticleBackground::mount_with(config)?)
    }

    /// Stops the loop, unsubscribes from `resize` and removes the canvas. Idempotent.
    pub fn unmount(&mut self) {
        self.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().driver.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.store().len()
    }

    pub fn width(&self) -> u32 {
        self.state.borrow().field.surface().width
    }

    pub fn height(&self) -> u32 {
        self.state.borrow().field.surface().height
    }
}

impl ParticleBackground {
    pub fn mount_with(config: FieldConfig) -> Result<ParticleBackground, FieldError> {
        utils::set_panic_hook();
        let mut field = ParticleField::new(config)?;

        let window = canvas_helpers::window()?;
        let document = canvas_helpers::document(&window)?;
        let canvas = canvas_helpers::create_canvas(&document, field.config())?;
        let mut context = match canvas_helpers::context_2d(&canvas) {
            Ok(context) => context,
            Err(err) => {
                canvas.remove();
                return Err(err);
            }
        };
        if let Err(err) = field.resize(&window, &mut context) {
            canvas.remove();
            return Err(err);
        }

        let state = Rc::new(RefCell::new(Mounted {
            window: window.clone(),
            canvas,
            context,
            field,
            driver: FrameDriver::new(),
            frame_handle: None,
        }));

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let state = state.clone();
            let callback = frame_callback.clone();
            *frame_callback.borrow_mut() = Some(Closure::wrap(
                Box::new(move || on_frame(&state, &callback)) as Box<dyn FnMut()>
            ));
        }

        let resize_callback = {
            let state = state.clone();
            Closure::wrap(Box::new(move || on_resize(&state)) as Box<dyn FnMut()>)
        };

        // From here on Drop cleans up whatever was set up
        let mut background = ParticleBackground {
            state,
            frame_callback,
            resize_callback: None,
        };
        window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())?;
        background.resize_callback = Some(resize_callback);
        background.start()?;

        {
            let mounted = background.state.borrow();
            log::info!(
                "particle background mounted: {}x{}, {} particles",
                mounted.field.surface().width,
                mounted.field.surface().height,
                mounted.field.store().len()
            );
        }
        Ok(background)
    }

    fn start(&mut self) -> Result<(), FieldError> {
        let mut mounted = self.state.borrow_mut();
        mounted.driver.start()?;
        mounted.frame_handle = request_frame(&mounted.window, &self.frame_callback)?;
        Ok(())
    }

    fn teardown(&mut self) {
        let mut mounted = match self.state.try_borrow_mut() {
            Ok(mounted) => mounted,
            Err(_) => {
                // Still drop the frame closure so its self-reference does not outlive the handle
                if let Ok(mut callback) = self.frame_callback.try_borrow_mut() {
                    callback.take();
                }
                log::error!("particle background torn down while in use");
                return;
            }
        };
        if mounted.driver.state() == DriverState::Stopped && self.resize_callback.is_none() {
            return;
        }
        mounted.driver.stop();

        if let Some(handle) = mounted.frame_handle.take() {
            if let Err(err) = mounted.window.cancel_animation_frame(handle) {
                log::warn!("failed to cancel animation frame: {}", FieldError::from(err));
            }
        }
        if let Some(callback) = self.resize_callback.take() {
            if let Err(err) = mounted
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove resize listener: {}", FieldError::from(err));
            }
        }
        mounted.canvas.remove();
        mounted.field.clear();
        let frames = mounted.driver.frames();
        drop(mounted);

        // Breaks the frame closure's reference to itself
        self.frame_callback.borrow_mut().take();
        log::info!("particle background unmounted after {} frames", frames);
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Mounts a background, logging and swallowing any failure so the host page keeps working.
#[wasm_bindgen]
pub fn mount_background(options: JsValue) -> Option<ParticleBackground> {
    let mounted = FieldConfig::from_js(options).and_then(ParticleBackground::mount_with);
    match mounted {
        Ok(background) => Some(background),
        Err(err) => {
            log::warn!("particle background disabled: {}", err);
            None
        }
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<Option<i32>, FieldError> {
    match callback.borrow().as_ref() {
        Some(closure) => Ok(Some(window.request_animation_frame(closure.as_ref().unchecked_ref())?)),
        None => Ok(None),
    }
}

fn on_frame(state: &Rc<RefCell<Mounted>>, callback: &FrameCallback) {
    let mut mounted = state.borrow_mut();
    mounted.frame_handle = None;

    let Mounted {
        field,
        driver,
        context,
        ..
    } = &mut *mounted;
    match driver.frame(field, context) {
        Ok(true) => {}
        Ok(false) => return,
        Err(err) => {
            log::error!("particle background stopped: {}", err);
            driver.stop();
            return;
        }
    }

    match request_frame(&mounted.window, callback) {
        Ok(handle) => mounted.frame_handle = handle,
        Err(err) => {
            log::error!("failed to schedule next frame: {}", err);
            mounted.driver.stop();
        }
    }
}

fn on_resize(state: &Rc<RefCell<Mounted>>) {
    let mut mounted = state.borrow_mut();
    if mounted.driver.state() == DriverState::Stopped {
        return;
    }
    let _timer = Timer::new("ParticleBackground::resize");
    let Mounted {
        window,
        context,
        field,
        ..
    } = &mut *mounted;
    match field.resize(&*window, context) {
        Ok(true) => log::debug!(
            "resized to {}x{}, reseeded {} particles",
            field.surface().width,
            field.surface().height,
            field.store().len()
        ),
        Ok(false) => {}
        Err(err) => log::warn!("resize failed: {}", err),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn teardown_while_borrowed_releases_the_frame_closure() {
        let config = FieldConfig {
            canvas_id: "borrowed-canvas".to_owned(),
            seed: Some(8),
            ..FieldConfig::default()
        };
        let mut background = ParticleBackground::mount_with(config).unwrap();
        assert!(background.frame_callback.borrow().is_some());

        let state = background.state.clone();
        {
            let _in_use = state.borrow();
            background.teardown();
        }
        assert!(background.frame_callback.borrow().is_none());

        // a later teardown still finishes the job
        background.unmount();
        assert!(!background.is_running());
        assert_eq!(background.particle_count(), 0);
    }
}
