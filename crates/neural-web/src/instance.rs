use crate::canvas::CanvasSurface;
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::FrameLoop;
use anyhow::{anyhow, Result};
use neural_core::{NetworkConfig, NeuralNetwork, Profile};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One animated canvas: the network, its frame loop and its DOM listeners.
pub struct Instance {
    network: Rc<RefCell<NeuralNetwork>>,
    frames: FrameLoop,
    listeners: Vec<Listener>,
}

impl Instance {
    pub fn create(
        canvas: &web::HtmlCanvasElement,
        config: NetworkConfig,
        profile: Profile,
    ) -> Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let ctx = dom::context_2d(canvas)?;
        let network = Rc::new(RefCell::new(NeuralNetwork::new(
            config,
            profile,
            rand::random(),
        )?));

        let (w, h) = dom::sync_canvas_size(canvas);
        network.borrow_mut().resize(w, h, dom::now_ms());
        {
            let n = network.borrow();
            log::info!(
                "[network] {}x{} profile={:?} nodes={} labels={}",
                w,
                h,
                profile,
                n.nodes().len(),
                n.labels().len()
            );
        }

        let mut listeners = events::wire_pointer_handlers(canvas, &network);
        listeners.push(events::wire_resize(&window, canvas, &network));
        let frames = FrameLoop::start(network.clone(), CanvasSurface::new(ctx));

        Ok(Self {
            network,
            frames,
            listeners,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.frames.is_alive()
    }

    /// Cancel the pending frame, detach listeners and retire the network.
    pub fn destroy(&self) {
        if !self.frames.is_alive() {
            return;
        }
        self.frames.cancel();
        for l in &self.listeners {
            l.detach();
        }
        self.network.borrow_mut().destroy();
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        self.destroy();
    }
}
