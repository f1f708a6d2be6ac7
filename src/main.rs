//! Quad Pack entry point
//!
//! Headless demo run: builds a seeded world, exercises every model
//! operation once, and logs what each frame would draw.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use quad_pack::Settings;
use quad_pack::renderer::DrawList;
use quad_pack::sim::{Model, WorldRng};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .or(settings.seed)
        .unwrap_or_else(seed_from_clock);

    log::info!("quad-pack starting with seed {seed}");

    let mut model = match Model::new(settings.split_criteria, WorldRng::from_seed(seed)) {
        Ok(model) => model,
        Err(err) => {
            log::error!("bad settings: {err}");
            std::process::exit(1);
        }
    };
    if !settings.show_quadtree {
        model.toggle_quadtree_overlay();
    }

    if let Err(err) = model.initialize(settings.initial_circles) {
        log::error!("initial placement failed: {err}");
        std::process::exit(1);
    }
    log_frame(&model, "initial build");

    if let Err(err) = model.add_circles(20) {
        log::error!("adding circles failed: {err}");
        std::process::exit(1);
    }
    log_frame(&model, "after add");

    model.remove_circles(10);
    log_frame(&model, "after remove");

    model.set_split_criteria(settings.split_criteria + 2);
    model.toggle_quadtree_overlay();
    model.update(0.0);
    log_frame(&model, "final");
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

fn log_frame(model: &Model, label: &str) {
    let mut frame = DrawList::new();
    model.render(&mut frame);
    log::info!(
        "{label}: {} circles, {} leaf cells, criteria {}, {} draw commands",
        model.circles().len(),
        model.quadtree().leaves().count(),
        model.split_criteria(),
        frame.commands().len(),
    );
}
