use crate::core::parallax::PointerOffset;
use crate::core::scene::Scene;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

/// Listeners that call `preventDefault` must opt out of passive mode.
fn add_non_passive_listener(
    target: &web::EventTarget,
    event: &str,
    closure: &Closure<dyn FnMut(web::Event)>,
) {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("[input] failed to add {} listener: {:?}", event, e);
    }
}

fn wire_wheel(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        if let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() {
            scene.borrow_mut().zoom.on_wheel(wheel.delta_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    add_non_passive_listener(&w.canvas, "wheel", &closure);
    closure.forget();
}

fn wire_touchstart(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(touch) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some((_, y)) = input::first_touch_client(touch) {
            scene.borrow_mut().zoom.on_touch_start(y);
        }
    }) as Box<dyn FnMut(_)>);
    add_non_passive_listener(&w.canvas, "touchstart", &closure);
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(touch) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some((x, y)) = input::first_touch_client(touch) else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = input::viewport_size(&window);
        let mut s = scene.borrow_mut();
        s.zoom.on_touch_move(y);
        if let Some(offset) = PointerOffset::from_touch(x, y, vw, vh) {
            s.pointer = offset;
        }
    }) as Box<dyn FnMut(_)>);
    add_non_passive_listener(&w.canvas, "touchmove", &closure);
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev) {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = input::viewport_size(&window);
        if let Some(offset) =
            PointerOffset::from_pointer(ev.client_x() as f32, ev.client_y() as f32, vw, vh)
        {
            scene.borrow_mut().pointer = offset;
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let canvas = w.canvas.clone();
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_canvas_size(&canvas, &mut scene.borrow_mut());
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize the backing store and camera aspect to the canvas' displayed size.
/// The GPU surface follows on the next frame.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, scene: &mut Scene) {
    if dom::sync_canvas_backing_size(canvas).is_none() {
        log::warn!("[resize] zero-area canvas; keeping previous size");
        return;
    }
    let (css_w, css_h) = dom::css_size(canvas);
    if !scene.set_viewport(css_w, css_h) {
        log::warn!("[resize] ignoring degenerate size {}x{}", css_w, css_h);
    }
}
