use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use iso_core::{GridSize, IsoConfig, IsoError, Origin, Tile, TileMap, TileSize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Relative odds of each terrain variant in a randomized world.
const TERRAIN_WEIGHTS: [(Tile, u32); 8] = [
    (Tile::Grass, 10),
    (Tile::Stone, 3),
    (Tile::StoneEdgeNorth, 1),
    (Tile::StoneEdgeEast, 1),
    (Tile::StoneEdgeSouth, 1),
    (Tile::StoneEdgeWest, 1),
    (Tile::Tree, 2),
    (Tile::Flowers, 2),
];

#[derive(Debug, Clone, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    /// Overrides the height computed from the grid.
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorldSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub origin_x: i32,
    pub origin_y: i32,
    /// Tile used for every cell when `randomize` is off.
    pub fill: Tile,
    pub randomize: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebugSettings {
    /// Draw the picker's coarse rectangle and apexes under the pointer.
    pub overlay: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub window: WindowSettings,
    pub world: WorldSettings,
    pub debug: DebugSettings,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("window.title", "Isometric Engine")?
        .set_default("world.grid_width", 10_i64)?
        .set_default("world.grid_height", 10_i64)?
        .set_default("world.tile_width", 80.0_f64)?
        .set_default("world.tile_height", 40.0_f64)?
        .set_default("world.origin_x", 5_i64)?
        .set_default("world.origin_y", 1_i64)?
        .set_default("world.fill", "blank")?
        .set_default("world.randomize", false)?
        .set_default("debug.overlay", false)
}

impl Settings {
    /// Layers built-in defaults, the TOML file at `path` (if present) and
    /// `ISO_*` environment variables, e.g. `ISO_WORLD__GRID_WIDTH=16`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        info!("Attempting to load configuration from {}", path);

        let settings = defaults()?
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("ISO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize::<Settings>());

        match settings {
            Ok(settings) => {
                info!("Successfully loaded configuration: {:?}", settings);
                Ok(settings)
            }
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    pub fn iso_config(&self) -> Result<IsoConfig, IsoError> {
        let w = &self.world;
        IsoConfig::new(
            GridSize::new(w.grid_width, w.grid_height),
            TileSize::new(w.tile_width, w.tile_height),
            Origin::new(w.origin_x, w.origin_y),
        )
    }

    pub fn build_world(&self, config: &IsoConfig) -> Result<TileMap, IsoError> {
        let size = config.grid_size();
        if !self.world.randomize {
            return TileMap::new(size, self.world.fill);
        }
        match self.world.seed {
            Some(seed) => TileMap::new_rand(size, &TERRAIN_WEIGHTS, &mut StdRng::seed_from_u64(seed)),
            None => TileMap::new_rand(size, &TERRAIN_WEIGHTS, &mut rand::rng()),
        }
    }
}
