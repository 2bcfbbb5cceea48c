//! Static world data produced by a terrain source and consumed read-only by
//! the physics integrator, AI, and renderer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Triangle mesh for rendering the terrain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Axis-aligned box used for static obstacle collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Closest point inside the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Regular-grid terrain heightfield, sampled at cell resolution.
///
/// The grid is centered on the origin and spans `extent` cells per side,
/// each `cell_size` meters across. Heights are stored row-major by Z.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    pub extent: usize,
    pub cell_size: f32,
    pub heights: Vec<f32>,
}

impl HeightField {
    /// A flat field at height zero.
    pub fn flat(extent: usize, cell_size: f32) -> Self {
        Self {
            extent,
            cell_size,
            heights: vec![0.0; extent * extent],
        }
    }

    /// Terrain height at world position (x, z). Coordinates outside the
    /// field clamp to the border cells.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        if self.extent == 0 {
            return 0.0;
        }
        let half = self.extent as f32 * self.cell_size * 0.5;
        let col = (((x + half) / self.cell_size) as isize).clamp(0, self.extent as isize - 1);
        let row = (((z + half) / self.cell_size) as isize).clamp(0, self.extent as isize - 1);
        self.heights[row as usize * self.extent + col as usize]
    }
}

/// Navigation grid for AI pathfinding: true = traversable cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavGrid {
    pub extent: usize,
    pub cell_size: f32,
    pub cells: Vec<bool>,
}

/// The static game world bundle, generated once at setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldData {
    /// Mesh for rendering the terrain.
    pub terrain_mesh: RenderMesh,
    /// Heightfield the physics integrator collides drones against.
    pub terrain_collider: HeightField,
    /// Static obstacle volumes.
    pub obstacles: Vec<Aabb>,
    /// Grid for AI pathfinding.
    pub nav_grid: NavGrid,
}
