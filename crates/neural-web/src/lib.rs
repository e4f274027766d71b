#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::instance::Instance;
use anyhow::Context;
use neural_core::{NetworkConfig, Profile};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod instance;

thread_local! {
    // Instances created from page markup, torn down on beforeunload.
    static PAGE: RefCell<Vec<Instance>> = const { RefCell::new(Vec::new()) };
}

fn detect_profile() -> Profile {
    Profile::detect(dom::viewport_width(), dom::has_touch())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-web starting");

    if let Err(e) = init_page() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init_page() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let (window, document) = dom::window_and_document().context("page bootstrap")?;
    let profile = detect_profile();
    let mut created = Vec::new();

    match dom::canvas_by_id(&document, HERO_CANVAS_ID) {
        Ok(canvas) => match Instance::create(&canvas, NetworkConfig::default(), profile) {
            Ok(i) => created.push(i),
            Err(e) => log::error!("[page] hero canvas: {:?}", e),
        },
        Err(e) => log::debug!("[page] {}", e),
    }

    // Secondary canvases are decoration only; reduced devices skip them.
    if profile == Profile::Full {
        let secondary = NetworkConfig {
            show_labels: false,
            node_density: SECONDARY_NODE_DENSITY,
            max_nodes: SECONDARY_MAX_NODES,
            min_nodes: SECONDARY_MIN_NODES,
            ..NetworkConfig::default()
        };
        for canvas in dom::canvases_by_selector(&document, SECONDARY_CANVAS_SELECTOR)? {
            match Instance::create(&canvas, secondary.clone(), profile) {
                Ok(i) => created.push(i),
                Err(e) => log::error!("[page] secondary canvas: {:?}", e),
            }
        }
    }

    log::info!("[page] {} network canvas(es) running", created.len());
    PAGE.with(|p| p.borrow_mut().extend(created));
    wire_unload(&window);
    Ok(())
}

fn wire_unload(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move || {
        PAGE.with(|p| {
            for instance in p.borrow().iter() {
                instance.destroy();
            }
        });
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Network animation on a caller-supplied canvas. `options` is an optional
/// object with any of `showLabels`, `nodeDensity`, `maxNodes`, `minNodes`,
/// `labelCount`, `maxConnectionDistance` and `physics`.
#[wasm_bindgen]
pub struct NeuralCanvas {
    inner: Instance,
}

#[wasm_bindgen]
impl NeuralCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, options: JsValue) -> Result<NeuralCanvas, JsValue> {
        let config: NetworkConfig = if options.is_undefined() || options.is_null() {
            NetworkConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("invalid options: {}", e)))?
        };
        Instance::create(&canvas, config, detect_profile())
            .map(|inner| NeuralCanvas { inner })
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// Stop the animation and detach all listeners. Safe to call twice.
    pub fn destroy(&self) {
        self.inner.destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> bool {
        self.inner.is_alive()
    }
}
