//! Default procedural terrain source.
//!
//! Produces a low-relief heightfield with a handful of tower obstacles, a
//! render mesh, and a navigation grid. Deliberately simple: the coordinator
//! only depends on the `WorldData` contract, and any other `TerrainSource`
//! can replace this one.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dronesim_core::sources::TerrainSource;
use dronesim_core::world::{Aabb, HeightField, NavGrid, RenderMesh, WorldData};

/// Grid cells per side of the generated terrain.
const TERRAIN_EXTENT: usize = 32;

/// Meters per terrain cell: 32 cells x 8 m spans the default ±128 m world.
const TERRAIN_CELL_SIZE: f32 = 8.0;

/// Maximum ground undulation (m). Kept well below cruise altitude so level
/// flight never clips the ground.
const MAX_RELIEF: f32 = 3.0;

/// Number of box obstacles scattered over the field.
const OBSTACLE_COUNT: usize = 6;

/// Obstacle height range (m).
const OBSTACLE_MIN_HEIGHT: f32 = 8.0;
const OBSTACLE_MAX_HEIGHT: f32 = 15.0;

/// Obstacle half-width (m).
const OBSTACLE_HALF_WIDTH: f32 = 2.0;

/// Obstacles are pushed at least this far from the origin on both axes.
const SPAWN_CLEARANCE: f32 = 16.0;

/// Seeded procedural generator. Same seed, same world.
pub struct ProceduralTerrain {
    rng: ChaCha8Rng,
}

impl ProceduralTerrain {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn build_heightfield(&mut self) -> HeightField {
        let mut field = HeightField::flat(TERRAIN_EXTENT, TERRAIN_CELL_SIZE);
        for height in &mut field.heights {
            *height = self.rng.gen_range(0.0..MAX_RELIEF);
        }
        field
    }

    fn build_mesh(field: &HeightField) -> RenderMesh {
        let extent = field.extent;
        let half = extent as f32 * field.cell_size * 0.5;
        let mut mesh = RenderMesh::default();

        // One vertex per cell corner sample, two triangles per cell.
        for row in 0..extent {
            for col in 0..extent {
                let x = col as f32 * field.cell_size - half;
                let z = row as f32 * field.cell_size - half;
                mesh.vertices.push([x, field.heights[row * extent + col], z]);
            }
        }
        for row in 0..extent - 1 {
            for col in 0..extent - 1 {
                let i = (row * extent + col) as u32;
                let right = i + 1;
                let below = i + extent as u32;
                let diag = below + 1;
                mesh.indices.extend_from_slice(&[i, below, right]);
                mesh.indices.extend_from_slice(&[right, below, diag]);
            }
        }
        mesh
    }

    fn build_obstacles(&mut self, field: &HeightField) -> Vec<Aabb> {
        let half = field.extent as f32 * field.cell_size * 0.5;
        let margin = OBSTACLE_HALF_WIDTH * 2.0;
        (0..OBSTACLE_COUNT)
            .map(|_| {
                let mut x = self.rng.gen_range(-(half - margin)..half - margin);
                let mut z = self.rng.gen_range(-(half - margin)..half - margin);
                // Keep the player spawn corridor at the origin clear.
                if x.abs() < SPAWN_CLEARANCE && z.abs() < SPAWN_CLEARANCE {
                    x += SPAWN_CLEARANCE.copysign(x);
                    z += SPAWN_CLEARANCE.copysign(z);
                }
                let height = self.rng.gen_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
                Aabb::new(
                    Vec3::new(x - OBSTACLE_HALF_WIDTH, 0.0, z - OBSTACLE_HALF_WIDTH),
                    Vec3::new(x + OBSTACLE_HALF_WIDTH, height, z + OBSTACLE_HALF_WIDTH),
                )
            })
            .collect()
    }

    fn build_nav_grid(field: &HeightField, obstacles: &[Aabb]) -> NavGrid {
        let extent = field.extent;
        let half = extent as f32 * field.cell_size * 0.5;
        let mut cells = vec![true; extent * extent];

        // Cells whose center lies inside an obstacle footprint are blocked.
        for row in 0..extent {
            for col in 0..extent {
                let x = (col as f32 + 0.5) * field.cell_size - half;
                let z = (row as f32 + 0.5) * field.cell_size - half;
                let blocked = obstacles.iter().any(|o| {
                    x >= o.min.x && x <= o.max.x && z >= o.min.z && z <= o.max.z
                });
                if blocked {
                    cells[row * extent + col] = false;
                }
            }
        }

        NavGrid {
            extent,
            cell_size: field.cell_size,
            cells,
        }
    }
}

impl TerrainSource for ProceduralTerrain {
    fn generate(&mut self) -> WorldData {
        let terrain_collider = self.build_heightfield();
        let terrain_mesh = Self::build_mesh(&terrain_collider);
        let obstacles = self.build_obstacles(&terrain_collider);
        let nav_grid = Self::build_nav_grid(&terrain_collider, &obstacles);

        WorldData {
            terrain_mesh,
            terrain_collider,
            obstacles,
            nav_grid,
        }
    }
}
