#![cfg(target_arch = "wasm32")]
use crate::core::params::SceneParams;
use crate::core::scene::Scene;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let (css_w, _) = dom::css_size(&canvas);
    let params = SceneParams::for_viewport_width(css_w as f64);
    log::info!(
        "[init] generating {} points (background={}, arms={}, core={})",
        params.total_points(),
        params.background_count,
        params.arm_count,
        params.core_count
    );
    let mut rng = StdRng::from_entropy();
    let mut scene = Scene::new(params, &mut rng);

    // Maintain canvas internal pixel size and camera aspect before the first frame
    events::apply_canvas_size(&canvas, &mut scene);

    let gpu = frame::init_gpu(&canvas, &scene).await;
    if gpu.is_none() {
        log::warn!("[init] running without a renderer");
    }
    let scene = Rc::new(RefCell::new(scene));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        started: Instant::now(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
