use iso_core::{
    GridPoint, IsoConfig, PointerSource, ScreenPoint, Tile, TileCanvas, TileMap, TileSize, diamond, render_frame,
};
use macroquad::prelude::*;
use tracing::{debug, error, info, trace};

use crate::settings::{DebugSettings, WindowSettings};

const GRASS: Color = Color::new(0.42, 0.68, 0.31, 1.0);
const STONE: Color = Color::new(0.58, 0.58, 0.60, 1.0);
const STONE_EDGE: Color = Color::new(0.33, 0.33, 0.36, 1.0);
const TREE: Color = Color::new(0.13, 0.35, 0.16, 1.0);
const FLOWER: Color = Color::new(0.93, 0.45, 0.62, 1.0);
const OUTLINE: Color = Color::new(0.25, 0.25, 0.25, 0.6);
const SELECTION: Color = RED;

// Function to configure the macroquad window
pub fn window_conf(window: &WindowSettings, config: &IsoConfig) -> Conf {
    let (width, height) = config.viewport_size();
    Conf {
        window_title: window.title.clone(),
        window_width: width.ceil() as i32,
        window_height: window.height.unwrap_or(height).ceil() as i32,
        high_dpi: true,
        ..Default::default()
    }
}

/// Reads the pointer from macroquad's input state.
struct MouseInput;

impl PointerSource for MouseInput {
    fn pointer_position(&self) -> ScreenPoint {
        let (x, y) = mouse_position();
        ScreenPoint::new(x, y)
    }
}

/// Draws tiles as flat diamonds with macroquad shape calls.
struct ShapeCanvas {
    tile: TileSize,
}

impl ShapeCanvas {
    /// Apexes around `at`: top, right, bottom, left.
    fn apexes(&self, at: ScreenPoint) -> [Vec2; 4] {
        let half_w = self.tile.width / 2.0;
        let half_h = self.tile.height / 2.0;
        [
            vec2(at.x, at.y - half_h),
            vec2(at.x + half_w, at.y),
            vec2(at.x, at.y + half_h),
            vec2(at.x - half_w, at.y),
        ]
    }

    fn fill(&self, [top, right, bottom, left]: [Vec2; 4], color: Color) {
        draw_triangle(top, right, bottom, color);
        draw_triangle(top, bottom, left, color);
    }

    fn edge(&self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        draw_line(from.x, from.y, to.x, to.y, thickness, color);
    }

    fn outline(&self, apexes: [Vec2; 4], thickness: f32, color: Color) {
        for i in 0..4 {
            self.edge(apexes[i], apexes[(i + 1) % 4], thickness, color);
        }
    }
}

impl TileCanvas for ShapeCanvas {
    fn draw_tile(&mut self, tile: Tile, _cell: GridPoint, at: ScreenPoint) {
        let apexes = self.apexes(at);
        let [top, right, bottom, left] = apexes;
        let r = self.tile.height / 6.0;

        match tile {
            Tile::Blank => {}
            Tile::Grass => self.fill(apexes, GRASS),
            Tile::Stone => self.fill(apexes, STONE),
            Tile::StoneEdgeNorth => {
                self.fill(apexes, STONE);
                self.edge(left, top, 3.0, STONE_EDGE);
            }
            Tile::StoneEdgeEast => {
                self.fill(apexes, STONE);
                self.edge(top, right, 3.0, STONE_EDGE);
            }
            Tile::StoneEdgeSouth => {
                self.fill(apexes, STONE);
                self.edge(right, bottom, 3.0, STONE_EDGE);
            }
            Tile::StoneEdgeWest => {
                self.fill(apexes, STONE);
                self.edge(bottom, left, 3.0, STONE_EDGE);
            }
            Tile::Tree => {
                self.fill(apexes, GRASS);
                draw_circle(at.x, at.y - r, r * 1.5, TREE);
            }
            Tile::Flowers => {
                self.fill(apexes, GRASS);
                for (dx, dy) in [(-1.5, 0.0), (1.5, 0.0), (0.0, -0.8), (0.0, 0.8)] {
                    draw_circle(at.x + dx * r, at.y + dy * r, r / 2.0, FLOWER);
                }
            }
            Tile::Selected => {
                self.outline(apexes, 2.5, SELECTION);
                return;
            }
        }
        self.outline(apexes, 1.0, OUTLINE);
    }
}

/// Marks the picker's working: the coarse rectangle, its edge midpoints A-D,
/// and the diamond the pointer resolved to (even outside the grid).
fn draw_pick_overlay(config: &IsoConfig, pointer: ScreenPoint) {
    let t = iso_core::trace(pointer, config);
    let tile = config.tile_size();

    draw_rectangle_lines(
        t.coarse.x as f32 * tile.width,
        t.coarse.y as f32 * tile.height,
        tile.width,
        tile.height,
        1.0,
        BLUE,
    );
    for apex in t.apexes {
        draw_circle_lines(apex.x, apex.y, 4.0, 1.0, BLUE);
    }

    let resolved = diamond(t.cell, config);
    for i in 0..4 {
        let (from, to) = (resolved[i], resolved[(i + 1) % 4]);
        draw_line(from.x, from.y, to.x, to.y, 1.0, ORANGE);
    }
    trace!(
        d_ab = t.crosses[0],
        d_bc = t.crosses[1],
        d_cd = t.crosses[2],
        d_da = t.crosses[3],
        region = %t.region,
        "pick overlay"
    );
}

/// Applies a click to the cell under the pointer: left cycles the terrain, right clears it.
fn apply_edit(world: &mut TileMap, config: &IsoConfig, pointer: ScreenPoint) {
    let left = is_mouse_button_pressed(MouseButton::Left);
    let right = is_mouse_button_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }
    let Some(cell) = config.pick(pointer) else {
        return;
    };

    let result = world.get(cell).and_then(|current| {
        let next = if left { current.next_terrain() } else { Tile::Blank };
        world.set(cell, next).map(|_| (current, next))
    });
    match result {
        Ok((from, to)) => debug!(%cell, %from, %to, "Tile edited"),
        Err(e) => error!("Failed to edit tile at {}: {}", cell, e),
    }
}

pub async fn run_render_loop(mut world: TileMap, config: IsoConfig, debug_settings: DebugSettings) {
    info!(%config, overlay = debug_settings.overlay, "Render loop starting...");

    let input = MouseInput;
    let mut canvas = ShapeCanvas { tile: config.tile_size() };
    let mut hovered: Option<GridPoint> = None;

    loop {
        // Edits land between frames, before anything is drawn
        apply_edit(&mut world, &config, input.pointer_position());

        clear_background(WHITE);

        let picked = render_frame(&world, &config, &input, &mut canvas);
        if picked != hovered {
            debug!(from = ?hovered, to = ?picked, "Hovered cell changed");
            hovered = picked;
        }

        if debug_settings.overlay {
            draw_pick_overlay(&config, input.pointer_position());
        }

        next_frame().await
    }
}
