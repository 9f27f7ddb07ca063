//! FocusMap viewer
//!
//! Draws the room with macroquad and forwards clicks and key presses to it:
//! - Click a wall or the floor: pick a new texture
//! - I: pick an icon to drop on the back wall
//! - Click an icon: focus it (click again to release)
//! - Arrows / Delete: move or remove the focused icon

mod viewer;

use clap::Parser;
use focusmap::storage::KeyValueStore;
use focusmap::{Room, RoomConfig, VERSION};
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use std::path::PathBuf;
use viewer::{collect_events, draw_overlay, draw_room, RoomShape, SceneRenderer, TextureCache};

/// How far the side walls and floor reach toward the camera
const ROOM_DEPTH: f32 = 4.0;

#[derive(Parser, Debug)]
#[command(name = "focusmap", version, about = "Decorate the walls of a 3D room")]
struct Cli {
    /// Room config file (RON); defaults are used if it doesn't exist
    #[arg(long, default_value = "focusmap.ron")]
    config: PathBuf,

    /// Directory for saved state (overrides the config's data_dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for icon placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Print the effective config as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("FocusMap v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Pick the persistence backend
#[cfg(not(target_arch = "wasm32"))]
fn open_store(data_dir: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    use focusmap::storage::FileStore;

    let store = match data_dir {
        Some(dir) => FileStore::with_base_dir(dir),
        None => FileStore::in_data_dir(),
    };
    tracing::info!("saving state in {}", store.base_dir().display());
    Box::new(store)
}

/// Pick the persistence backend (WASM: nothing survives a reload)
#[cfg(target_arch = "wasm32")]
fn open_store(_data_dir: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    tracing::info!("no filesystem, state is kept in memory");
    Box::new(focusmap::storage::MemoryStore::new())
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).init();

    let config = RoomConfig::load_or_default(&cli.config);
    if cli.print_config {
        match config.to_ron_string() {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::error!("failed to serialize config: {}", e),
        }
        return;
    }

    let store = open_store(cli.data_dir.clone().or_else(|| config.data_dir.clone()));

    // Use macroquad's clock for the default seed (SystemTime::now() panics in WASM)
    let seed = cli
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    tracing::debug!("placement seed {}", seed);

    let shape = RoomShape::new(&config.wall, ROOM_DEPTH);
    let mut room: Room<SceneRenderer> = Room::new(
        config,
        store,
        SceneRenderer::new(),
        Box::new(StdRng::seed_from_u64(seed)),
    );
    let textures = TextureCache::load(room.catalog()).await;

    let camera = Camera3D {
        position: vec3(0.0, 0.6, ROOM_DEPTH + 4.0),
        target: vec3(0.0, 0.0, 0.0),
        up: Vec3::Y,
        ..Default::default()
    };

    tracing::info!("=== FocusMap v{} ===", VERSION);

    loop {
        for event in collect_events(&room, &shape, &camera) {
            room.handle(event);
        }

        clear_background(Color::new(0.05, 0.05, 0.07, 1.0));

        set_camera(&camera);
        draw_room(room.renderer(), &shape, &textures, room.icons().focus_state().focused());

        set_default_camera();
        draw_overlay(room.renderer(), room.icons().len());

        next_frame().await;
    }
}
