// Browser side of the particle background: sizes the canvas to the window,
// wires the window listeners into the renderer and drives it with
// requestAnimationFrame until `unmount` is called.

use crate::config::FieldConfig;
use crate::error::SetupError;
use crate::frame_loop::CancelToken;
use crate::renderer::Renderer;
use crate::Timer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

// The frame callback has to request itself, so it lives behind a shared slot
// it can reach from the inside. `unmount` empties the slot to break the cycle.
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    renderer: Rc<RefCell<Renderer>>,
    token: CancelToken,
    frame_handle: Rc<Cell<Option<i32>>>,
    frame_slot: FrameSlot,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_mouse_out: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    mounted: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Attach to the canvas with the given id and start animating.
    pub fn mount(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount_with_config(canvas_id, FieldConfig::default())
    }

    #[wasm_bindgen(js_name = mountWithCount)]
    pub fn mount_with_count(canvas_id: &str, count: u32) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount_with_config(canvas_id, FieldConfig::with_count(count as usize))
    }

    /// Stop the frame loop and remove the window listeners. Calling it twice is a no-op.
    pub fn unmount(&mut self) -> Result<(), JsValue> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;

        self.token.cancel();
        if let Some(handle) = self.frame_handle.take() {
            self.window.cancel_animation_frame(handle)?;
        }
        self.frame_slot.borrow_mut().take();

        self.window
            .remove_event_listener_with_callback("mousemove", self.on_mouse_move.as_ref().unchecked_ref())?;
        self.window
            .remove_event_listener_with_callback("mouseout", self.on_mouse_out.as_ref().unchecked_ref())?;
        self.window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;

        log::info!("particle background unmounted");
        Ok(())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted && !self.token.is_cancelled()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.renderer.borrow().field.len() as u32
    }
}

impl ParticleBackground {
    pub fn mount_with_config(canvas_id: &str, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SetupError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SetupError::NotACanvas(canvas_id.to_owned()))?;
        ParticleBackground::mount_on(window, canvas, config)
    }

    pub fn mount_on(window: Window, canvas: HtmlCanvasElement, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
        let _timer = Timer::new("ParticleBackground::mount");
        let context = canvas
            .get_context("2d")?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        let (width, height) = fit_to_window(&window, &canvas)?;
        let count = config.count;
        let renderer = Rc::new(RefCell::new(Renderer::new(
            config,
            width,
            height,
            StdRng::from_entropy(),
        )));

        let on_mouse_move = {
            let renderer = renderer.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                renderer
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_mouse_out = {
            let renderer = renderer.clone();
            Closure::wrap(Box::new(move || {
                renderer.borrow_mut().pointer_left();
            }) as Box<dyn FnMut()>)
        };
        let on_resize = {
            let renderer = renderer.clone();
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || match fit_to_window(&window, &canvas) {
                Ok((width, height)) => {
                    log::debug!("canvas resized to {}x{}", width, height);
                    renderer.borrow_mut().resize(width, height);
                }
                Err(err) => log::warn!("could not read window size: {:?}", err),
            }) as Box<dyn FnMut()>)
        };

        window.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("mouseout", on_mouse_out.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let token = CancelToken::new();
        let frame_handle = Rc::new(Cell::new(None));
        let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
        {
            let renderer = renderer.clone();
            let window = window.clone();
            let token = token.clone();
            let frame_handle = frame_handle.clone();
            let next = frame_slot.clone();
            let mut context = context;
            *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let keep_going = token.run_frame(|| {
                    if let Err(err) = renderer.borrow_mut().frame(&mut context) {
                        log::error!("frame failed: {:?}", err);
                    }
                });
                if !keep_going {
                    frame_handle.set(None);
                    return;
                }
                match request_frame(&window, &next) {
                    Ok(handle) => frame_handle.set(Some(handle)),
                    Err(err) => {
                        log::error!("could not schedule next frame: {:?}", err);
                        frame_handle.set(None);
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        frame_handle.set(Some(request_frame(&window, &frame_slot)?));

        log::info!("particle background mounted: {} particles on {}x{}", count, width, height);
        Ok(ParticleBackground {
            window,
            renderer,
            token,
            frame_handle,
            frame_slot,
            on_mouse_move,
            on_mouse_out,
            on_resize,
            mounted: true,
        })
    }
}

// Freeing the handle from JS must not leave listeners pointing at dropped closures.
impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let Err(err) = self.unmount() {
            log::warn!("unmount during drop failed: {:?}", err);
        }
    }
}

fn request_frame(window: &Window, slot: &FrameSlot) -> Result<i32, JsValue> {
    let slot = slot.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback already released"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

// Match the canvas to the viewport and return the size actually applied.
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0).max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((canvas.width() as f64, canvas.height() as f64))
}
