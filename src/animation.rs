// Browser wiring for a FrameDriver: a requestAnimationFrame callback that
// reschedules itself before ticking, and a window resize listener.

use crate::error::RenderError;
use crate::frame_driver::FrameDriver;
use crate::host;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct AnimationLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    frame_callback: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
}

impl AnimationLoop {
    pub fn start(window: Window, driver: FrameDriver) -> Result<AnimationLoop, RenderError> {
        let driver = Rc::new(RefCell::new(driver));
        let running = Rc::new(Cell::new(true));

        let on_resize = {
            let driver = driver.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || match host::inner_size(&window) {
                Ok((width, height)) => driver.borrow_mut().resize(width, height),
                Err(err) => console::error_1(&format!("resize failed: {}", err).into()),
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        // The callback has to reach itself to request the next frame, so it
        // lives in a shared slot that is filled after creation.
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let next_frame = frame_callback.clone();
            let running = running.clone();
            let window = window.clone();
            *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                if !running.get() {
                    return;
                }
                if let Err(err) = request_frame(&window, &next_frame) {
                    console::error_1(&format!("failed to schedule frame: {}", err).into());
                    running.set(false);
                    return;
                }
                if let Err(err) = driver.borrow_mut().tick(timestamp) {
                    console::error_1(&format!("frame failed, stopping: {}", err).into());
                    running.set(false);
                }
            }) as Box<dyn FnMut(f64)>));
        }
        request_frame(&window, &frame_callback)?;

        Ok(AnimationLoop {
            window,
            running,
            frame_callback,
            on_resize,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    // Any frame already requested still fires, but returns without ticking
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            let err = RenderError::from(err);
            console::error_1(&format!("failed to remove resize listener: {}", err).into());
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        // A frame may still be pending in the browser, so the callback is leaked
        // instead of freed. Taking it out of the slot breaks its self reference.
        if let Some(callback) = self.frame_callback.borrow_mut().take() {
            callback.forget();
        }
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, RenderError> {
    let callback = callback.borrow();
    let callback = callback
        .as_ref()
        .ok_or(RenderError::ResourceCreation("frame callback"))?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
