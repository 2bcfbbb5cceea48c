//! The body registry and Euler integration step.

use glam::{Quat, Vec3};
use log::warn;

use dronesim_core::config::PhysicsConfig;
use dronesim_core::types::{BodyHandle, CollisionEvent, DroneState, MoveIntent};
use dronesim_core::world::{Aabb, HeightField};

use crate::collision;

/// How a body is moved by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BodyKind {
    /// Velocity and orientation are set directly each frame.
    Kinematic,
    /// Moved by accumulated forces; torque is accumulated but not integrated
    /// in this scheme, so dynamic bodies do not rotate.
    Dynamic { mass: f32 },
}

#[derive(Debug)]
struct Body {
    handle: BodyHandle,
    kind: BodyKind,
    /// Bounding-sphere radius for collision checks.
    radius: f32,
    position: Vec3,
    orientation: Quat,
    velocity: Vec3,
    force_accum: Vec3,
    torque_accum: Vec3,
}

impl Body {
    fn new(handle: BodyHandle, kind: BodyKind, radius: f32) -> Self {
        Self {
            handle,
            kind,
            radius,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            force_accum: Vec3::ZERO,
            torque_accum: Vec3::ZERO,
        }
    }
}

/// The simulated world: every movable body plus the registered static
/// geometry. Single-owner; mutated only between frames.
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    terrain: Option<HeightField>,
    obstacles: Vec<Aabb>,
    world_boundary: f32,
    next_handle: u32,
}

impl PhysicsWorld {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            terrain: None,
            obstacles: Vec::new(),
            world_boundary: config.world_boundary,
            next_handle: 0,
        }
    }

    /// Register the immovable terrain collider. Replaces any previous one.
    pub fn add_static_terrain(&mut self, terrain: HeightField) {
        self.terrain = Some(terrain);
    }

    /// Register an immovable obstacle volume.
    pub fn add_static_obstacle(&mut self, obstacle: Aabb) {
        self.obstacles.push(obstacle);
    }

    /// Allocate a kinematic body at the origin with identity orientation and
    /// zero velocity. Handles are unique and never reused.
    pub fn add_kinematic_body(&mut self, radius: f32) -> BodyHandle {
        self.allocate(BodyKind::Kinematic, radius)
    }

    /// Allocate a dynamic body. Masses at or below zero fall back to 1 kg.
    pub fn add_dynamic_body(&mut self, radius: f32, mass: f32) -> BodyHandle {
        let mass = if mass > 0.0 { mass } else { 1.0 };
        self.allocate(BodyKind::Dynamic { mass }, radius)
    }

    fn allocate(&mut self, kind: BodyKind, radius: f32) -> BodyHandle {
        self.next_handle += 1;
        let handle = BodyHandle(self.next_handle);
        self.bodies.push(Body::new(handle, kind, radius));
        handle
    }

    /// Place a body directly. Used at spawn time so agent state and body
    /// state start out agreeing; not part of the per-frame flow.
    pub fn set_transform(&mut self, handle: BodyHandle, position: Vec3, orientation: Quat) {
        let Some(index) = self.body_index(handle) else {
            report_unknown(handle, "set_transform");
            return;
        };
        let body = &mut self.bodies[index];
        body.position = position;
        body.orientation = orientation;
    }

    /// Apply a move intent to a body.
    ///
    /// Kinematic intents overwrite a kinematic body's velocity and
    /// orientation. Dynamic intents accumulate force and torque on a dynamic
    /// body until the next `step`; repeated submissions sum. A mismatched
    /// intent/body pairing is a no-op.
    pub fn submit_move_intent(&mut self, handle: BodyHandle, intent: MoveIntent) {
        let Some(index) = self.body_index(handle) else {
            report_unknown(handle, "submit_move_intent");
            return;
        };
        let body = &mut self.bodies[index];
        match (intent, body.kind) {
            (
                MoveIntent::Kinematic {
                    velocity,
                    orientation,
                },
                BodyKind::Kinematic,
            ) => {
                body.velocity = velocity;
                body.orientation = orientation;
            }
            (MoveIntent::Dynamic { force, torque }, BodyKind::Dynamic { .. }) => {
                body.force_accum += force;
                body.torque_accum += torque;
            }
            _ => {}
        }
    }

    /// Advance the world by `dt` seconds and report every overlap found at
    /// the new positions.
    ///
    /// Dynamic bodies integrate accumulated force into velocity; all bodies
    /// integrate velocity into position; X and Z clamp to the world boundary
    /// and Y to the ground plane; accumulators are cleared.
    pub fn step(&mut self, dt: f32) -> Vec<CollisionEvent> {
        for body in &mut self.bodies {
            if let BodyKind::Dynamic { mass } = body.kind {
                let acceleration = body.force_accum / mass;
                body.velocity += acceleration * dt;
            }

            let mut position = body.position + body.velocity * dt;
            position.x = position.x.clamp(-self.world_boundary, self.world_boundary);
            position.z = position.z.clamp(-self.world_boundary, self.world_boundary);
            position.y = position.y.max(0.0);
            body.position = position;

            body.force_accum = Vec3::ZERO;
            body.torque_accum = Vec3::ZERO;
        }

        self.detect_collisions()
    }

    /// Project a body's transform into a drone state. The id and status
    /// fields are placeholders; the caller owns both and must overwrite them.
    pub fn get_state(&self, handle: BodyHandle) -> Option<DroneState> {
        let body = self.bodies.iter().find(|b| b.handle == handle);
        if body.is_none() {
            report_unknown(handle, "get_state");
        }
        body.map(|body| DroneState {
            id: body.handle.0,
            position: body.position,
            orientation: body.orientation,
            status: Default::default(),
        })
    }

    /// Number of movable bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn body_index(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.iter().position(|b| b.handle == handle)
    }

    /// Sphere tests between every non-static pair, then each body against
    /// the obstacle volumes and the terrain heightfield. Static contacts
    /// carry `BodyHandle::STATIC` as the second handle.
    fn detect_collisions(&self) -> Vec<CollisionEvent> {
        let mut events = Vec::new();

        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                if let Some(contact) =
                    collision::sphere_sphere(a.position, a.radius, b.position, b.radius)
                {
                    events.push(CollisionEvent {
                        body_a: a.handle,
                        body_b: b.handle,
                        contact,
                    });
                }
            }

            for obstacle in &self.obstacles {
                if let Some(contact) = collision::sphere_aabb(a.position, a.radius, obstacle) {
                    events.push(CollisionEvent {
                        body_a: a.handle,
                        body_b: BodyHandle::STATIC,
                        contact,
                    });
                }
            }

            if let Some(terrain) = &self.terrain {
                if let Some(contact) = collision::sphere_heightfield(a.position, a.radius, terrain)
                {
                    events.push(CollisionEvent {
                        body_a: a.handle,
                        body_b: BodyHandle::STATIC,
                        contact,
                    });
                }
            }
        }

        events
    }
}

/// Unknown handles indicate a caller bug, not a runtime condition to recover
/// from: the operation becomes a no-op, logged so the defect is not masked.
fn report_unknown(handle: BodyHandle, operation: &str) {
    warn!("{operation}: unknown body handle {}", handle.0);
}
