use super::Listener;
use crate::dom;
use neural_core::NeuralNetwork;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-derive the canvas size from layout on every window resize and rebuild
/// the network for it.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    network: &Rc<RefCell<NeuralNetwork>>,
) -> Listener {
    let canvas = canvas.clone();
    let network = network.clone();
    Listener::attach(window.as_ref(), "resize", false, move |_| {
        let (w, h) = dom::sync_canvas_size(&canvas);
        network.borrow_mut().resize(w, h, dom::now_ms());
    })
}
