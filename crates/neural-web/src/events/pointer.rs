use super::Listener;
use crate::input;
use neural_core::NeuralNetwork;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the network's pointer in sync with mouse and touch input on `canvas`.
/// Leaving the canvas or lifting the finger clears the pointer.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    network: &Rc<RefCell<NeuralNetwork>>,
) -> Vec<Listener> {
    let target: &web::EventTarget = canvas.as_ref();
    vec![
        wire_mousemove(target, canvas, network),
        clear_on(target, "mouseleave", network),
        wire_touchmove(target, canvas, network),
        clear_on(target, "touchend", network),
    ]
}

fn wire_mousemove(
    target: &web::EventTarget,
    canvas: &web::HtmlCanvasElement,
    network: &Rc<RefCell<NeuralNetwork>>,
) -> Listener {
    let canvas = canvas.clone();
    let network = network.clone();
    Listener::attach(target, "mousemove", false, move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            network
                .borrow_mut()
                .set_pointer(input::mouse_canvas_px(ev, &canvas));
        }
    })
}

fn wire_touchmove(
    target: &web::EventTarget,
    canvas: &web::HtmlCanvasElement,
    network: &Rc<RefCell<NeuralNetwork>>,
) -> Listener {
    let canvas = canvas.clone();
    let network = network.clone();
    Listener::attach(target, "touchmove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(pos) = input::touch_canvas_px(ev, &canvas) {
            network.borrow_mut().set_pointer(Some(pos));
        }
    })
}

fn clear_on(
    target: &web::EventTarget,
    kind: &'static str,
    network: &Rc<RefCell<NeuralNetwork>>,
) -> Listener {
    let network = network.clone();
    Listener::attach(target, kind, false, move |_| {
        network.borrow_mut().set_pointer(None);
    })
}
