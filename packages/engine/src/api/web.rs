//! Browser bootstrap (wasm32 only)
//!
//! Wires one `SimulationCore` to a canvas: resize watcher, mouse and touch
//! listeners, and a self-rescheduling `requestAnimationFrame` loop. All
//! callbacks share the core through `Rc<RefCell<_>>` on the single JS
//! thread; closures are leaked for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent, Window,
};

use crate::core::Vec2;
use crate::domain::config::SimulationConfig;
use crate::simulation::SimulationCore;
use crate::systems::input::{InputEvent, TouchPoint};

use super::layout::{canvas_size_for_container, RELAYOUT_INTERVAL_MS};

type Shared = Rc<RefCell<SimulationCore>>;

/// Start the toy on `canvas_selector`, sized to `container_selector`,
/// with the default tunables.
#[wasm_bindgen]
pub fn start(canvas_selector: &str, container_selector: &str) -> Result<(), JsValue> {
    run(canvas_selector, container_selector, SimulationConfig::default())
}

/// Same as `start`, with a JSON config (camelCase keys, all optional)
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(
    canvas_selector: &str,
    container_selector: &str,
    config_json: &str,
) -> Result<(), JsValue> {
    let config = SimulationConfig::from_json(config_json).map_err(|e| {
        console_warn!("letterfall: bad config: {}", e);
        JsValue::from_str(&e)
    })?;
    run(canvas_selector, container_selector, config)
}

fn run(canvas_selector: &str, container_selector: &str, config: SimulationConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .query_selector(canvas_selector)?
        .ok_or("canvas not found")?
        .dyn_into()?;
    let container: HtmlElement = document
        .query_selector(container_selector)?
        .ok_or("canvas container not found")?
        .dyn_into()?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context not supported")?
        .dyn_into()?;

    let now = now_ms(&window) / 1000.0;
    let core = SimulationCore::with_config(canvas.width(), canvas.height(), config, now)
        .map_err(|e| JsValue::from_str(&e))?;
    let shared: Shared = Rc::new(RefCell::new(core));

    install_resize_watcher(&window, &canvas, &container, &shared)?;
    install_pointer_listener(&canvas, &shared)?;
    install_touch_listeners(&canvas, &shared)?;
    start_frame_loop(&window, context, shared)?;

    console_log!("letterfall: started on {}", canvas_selector);
    Ok(())
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn now_seconds() -> f64 {
    web_sys::window().map(|w| now_ms(&w)).unwrap_or_else(js_sys::Date::now) / 1000.0
}

fn apply_layout(canvas: &HtmlCanvasElement, container: &HtmlElement, shared: &Shared) {
    let size = canvas_size_for_container(container.offset_width(), container.offset_height());
    if canvas.width() != size.width || canvas.height() != size.height {
        canvas.set_width(size.width);
        canvas.set_height(size.height);
    }
    shared.borrow_mut().resize(size.width, size.height);
}

/// Size now, on window resize, and periodically
fn install_resize_watcher(
    window: &Window,
    canvas: &HtmlCanvasElement,
    container: &HtmlElement,
    shared: &Shared,
) -> Result<(), JsValue> {
    apply_layout(canvas, container, shared);

    let on_resize = {
        let canvas = canvas.clone();
        let container = container.clone();
        let shared = shared.clone();
        Closure::wrap(Box::new(move || {
            apply_layout(&canvas, &container, &shared);
        }) as Box<dyn FnMut()>)
    };

    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_resize.as_ref().unchecked_ref(),
        RELAYOUT_INTERVAL_MS,
    )?;
    on_resize.forget();
    Ok(())
}

fn install_pointer_listener(canvas: &HtmlCanvasElement, shared: &Shared) -> Result<(), JsValue> {
    let shared = shared.clone();
    let on_move = Closure::wrap(Box::new(move |ev: MouseEvent| {
        let event = InputEvent::Pointer {
            offset: Vec2::new(ev.offset_x() as f32, ev.offset_y() as f32),
            movement: Vec2::new(ev.movement_x() as f32, ev.movement_y() as f32),
        };
        shared.borrow_mut().handle_input(event, now_seconds());
    }) as Box<dyn FnMut(MouseEvent)>);

    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

fn touch_points(ev: &TouchEvent) -> Vec<TouchPoint> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint::new(t.identifier(), t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn install_touch_listeners(canvas: &HtmlCanvasElement, shared: &Shared) -> Result<(), JsValue> {
    let on_start = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |ev: TouchEvent| {
            let event = InputEvent::TouchStart {
                touches: touch_points(&ev),
            };
            shared.borrow_mut().handle_input(event, now_seconds());
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    let on_move = {
        let shared = shared.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |ev: TouchEvent| {
            let event = InputEvent::TouchMove {
                touches: touch_points(&ev),
                canvas_offset: Vec2::new(canvas.offset_left() as f32, canvas.offset_top() as f32),
            };
            shared.borrow_mut().handle_input(event, now_seconds());
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    canvas.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref())?;
    canvas.add_event_listener_with_callback("touchmove", on_move.as_ref().unchecked_ref())?;
    on_start.forget();
    on_move.forget();
    Ok(())
}

/// `f` holds the frame closure so it can re-request itself each refresh.
fn start_frame_loop(window: &Window, context: CanvasRenderingContext2d, shared: Shared) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let mut surface = context.clone();
        shared.borrow_mut().run_frame(timestamp, &mut surface);

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                console_warn!("letterfall: requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = g.borrow();
    let callback = first.as_ref().ok_or("frame callback missing")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
