use iso_core::{GridPoint, GridSize, IsoConfig, Origin, ScreenPoint, Tile, TileMap, TileSize};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    // 10x10 world, 63x32 px tiles, anchored 5 tiles right and 1 tile down
    let config = match IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(5, 1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to configure grid: {}", e);
            return;
        }
    };
    println!("{}", config);

    let weights = [(Tile::Grass, 6), (Tile::Stone, 2), (Tile::Tree, 1), (Tile::Flowers, 1)];
    let mut map = TileMap::new_rand(config.grid_size(), &weights, &mut StdRng::seed_from_u64(3)).unwrap();
    map.set(GridPoint::new(0, 0), Tile::StoneEdgeNorth).unwrap();
    println!("\n{}", map);

    println!("Tile centers:");
    for cell in [GridPoint::new(0, 0), GridPoint::new(9, 0), GridPoint::new(0, 9), GridPoint::new(9, 9)] {
        println!("  {} -> {}", cell, config.project(cell));
    }

    println!("\nPointer resolution:");
    let pointers = [
        ScreenPoint::new(346.5, 48.0),
        ScreenPoint::new(445.0, 99.0),
        ScreenPoint::new(445.0, 125.0),
        ScreenPoint::new(500.0, 125.0),
        ScreenPoint::new(500.0, 99.0),
        ScreenPoint::new(315.0, 16.0),
        ScreenPoint::new(0.0, 0.0),
    ];
    for pointer in pointers {
        let t = iso_core::trace(pointer, &config);
        let tile = config
            .pick(pointer)
            .map(|cell| map.get(cell).map(|t| t.to_string()).unwrap_or_else(|e| e.to_string()));
        println!(
            "  {} -> coarse {} {:<22} cell {} tile {}",
            pointer,
            t.coarse,
            t.region.to_string(),
            t.cell,
            tile.as_deref().unwrap_or("<none>")
        );
        println!(
            "      dAB: {:9.2} dBC: {:9.2} dCD: {:9.2} dDA: {:9.2}",
            t.crosses[0], t.crosses[1], t.crosses[2], t.crosses[3]
        );
    }
}
