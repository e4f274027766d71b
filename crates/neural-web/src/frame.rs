use crate::canvas::CanvasSurface;
use neural_core::NeuralNetwork;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop for one network.
///
/// The tick closure re-arms itself only while `alive` is set, and checks the
/// flag again on entry, so a callback the browser already queued before
/// [`FrameLoop::cancel`] returns without touching the network. The closure
/// holds a weak handle to its own slot; dropping the loop frees it.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    _tick: TickSlot,
}

impl FrameLoop {
    pub fn start(network: Rc<RefCell<NeuralNetwork>>, mut surface: CanvasSurface) -> Self {
        let alive = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let alive_tick = alive.clone();
        let raf_tick = raf_id.clone();
        let slot = Rc::downgrade(&tick);
        let network_tick = network.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            raf_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            let frame = network_tick.borrow_mut().tick(timestamp, &mut surface);
            if frame.reschedule() && alive_tick.get() {
                if let Some(slot) = slot.upgrade() {
                    request(&slot, &raf_tick);
                }
            } else {
                log::debug!("[frame] loop halted");
            }
        }) as Box<dyn FnMut(f64)>));

        network.borrow_mut().start();
        request(&tick, &raf_id);
        Self {
            alive,
            raf_id,
            _tick: tick,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(tick: &TickSlot, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}
