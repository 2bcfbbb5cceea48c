//! Tick coordinator: the frame driver.
//!
//! Setup runs once (terrain, player, AI spawns); `tick` then drives every
//! frame in a fixed order: ingest input, compute per-agent controls, run
//! flight dynamics, step physics, react to collisions, merge states back,
//! and advance the debug layer. Single-threaded and synchronous: each tick
//! fully completes before returning.

use glam::{Quat, Vec3};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dronesim_autopilot::AutopilotPhase;
use dronesim_core::config::SimConfig;
use dronesim_core::constants::{COLLISION_MARKER_DURATION, DRONE_COLLISION_RADIUS, PLAYER_SPAWN};
use dronesim_core::sources::{RenderDataSource, TerrainSource, WorldDataSource};
use dronesim_core::state::{CameraView, SimSnapshot};
use dronesim_core::types::{CameraViewMode, CollisionEvent, DroneState, DroneStatus};
use dronesim_core::world::WorldData;
use dronesim_physics::PhysicsWorld;

use crate::agent::DroneAgent;
use crate::debug_draw::{Color, DebugDraw};
use crate::flight;
use crate::input::{InputSnapshot, PlayerInputAdapter};
use crate::spawner;

/// Id of the player-controlled drone.
pub const PLAYER_DRONE_ID: u32 = 0;

/// The tick coordinator. Owns the agents, the physics world, the debug draw
/// sink, and all camera/meta state.
pub struct Orchestrator {
    config: SimConfig,
    physics: PhysicsWorld,
    debug_draw: DebugDraw,
    rng: ChaCha8Rng,
    agents: Vec<DroneAgent>,
    world_data: Option<WorldData>,
    player_input: PlayerInputAdapter,

    debug_draw_enabled: bool,
    camera_attached_id: u32,
    camera_view_mode: CameraViewMode,
    camera_tilt: f32,

    tick_count: u64,
    elapsed_secs: f32,
}

impl Orchestrator {
    pub fn new(config: SimConfig) -> Self {
        let physics = PhysicsWorld::new(config.physics);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            physics,
            debug_draw: DebugDraw::new(),
            rng,
            agents: Vec::new(),
            world_data: None,
            player_input: PlayerInputAdapter::default(),
            debug_draw_enabled: false,
            camera_attached_id: PLAYER_DRONE_ID,
            camera_view_mode: CameraViewMode::default(),
            camera_tilt: 0.0,
            tick_count: 0,
            elapsed_secs: 0.0,
        }
    }

    /// Initialize the world: generate terrain, register its collision
    /// geometry, create the player agent, and spawn the AI drones. Invoked
    /// once by the host before the first tick.
    pub fn setup(&mut self, terrain: &mut dyn TerrainSource) {
        let world_data = terrain.generate();
        self.physics
            .add_static_terrain(world_data.terrain_collider.clone());
        for obstacle in &world_data.obstacles {
            self.physics.add_static_obstacle(*obstacle);
        }

        let player_state = DroneState {
            id: PLAYER_DRONE_ID,
            position: Vec3::from(PLAYER_SPAWN),
            orientation: Quat::IDENTITY,
            status: DroneStatus::Active,
        };
        let player_body = self.physics.add_kinematic_body(DRONE_COLLISION_RADIUS);
        self.physics
            .set_transform(player_body, player_state.position, player_state.orientation);
        self.agents
            .push(DroneAgent::new(player_body, player_state, None));

        let ai_agents = spawner::spawn_ai_drones(
            self.config.ai_drone_count,
            &mut self.physics,
            &mut self.rng,
            &self.config.spawner,
            &self.config.autopilot,
        );
        self.agents.extend(ai_agents);

        info!(
            "world set up: {} obstacles, {} drones",
            world_data.obstacles.len(),
            self.agents.len()
        );
        self.world_data = Some(world_data);
    }

    /// Execute one simulation tick.
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot) {
        // 1. Ingest the raw input snapshot.
        self.player_input.update(input);

        // 2. Meta input: debug toggle, camera controls.
        self.handle_meta_input(dt);

        // 3. Per-agent control -> flight dynamics -> intent submission.
        self.update_agent_controls(dt);

        // 4. Step physics once for the whole world.
        let events = self.physics.step(dt);

        // 5. Collision reaction before the merge, so a crashed agent keeps
        //    its last good state.
        for event in &events {
            self.handle_collision(event);
        }

        // 6. Merge updated physics state back into the surviving agents.
        self.merge_physics_states();

        // 7. Advance the debug layer's shape lifetimes.
        self.debug_draw.tick(dt);

        self.tick_count += 1;
        self.elapsed_secs += dt;
    }

    fn handle_meta_input(&mut self, dt: f32) {
        if self.player_input.toggle_debug_pressed() {
            self.debug_draw_enabled = !self.debug_draw_enabled;
        }
        if self.player_input.switch_camera_pressed() {
            self.camera_view_mode = match self.camera_view_mode {
                CameraViewMode::OverTheShoulder => CameraViewMode::FirstPerson,
                CameraViewMode::FirstPerson => CameraViewMode::OverTheShoulder,
            };
        }

        self.camera_tilt += self.player_input.camera_tilt_input() * self.config.camera_tilt_speed * dt;
        self.camera_tilt = self
            .camera_tilt
            .clamp(self.config.min_camera_tilt, self.config.max_camera_tilt);

        if self.player_input.switch_drone_pressed() {
            self.cycle_camera_drone();
        }
    }

    /// Advance the camera to the next active drone in id order, wrapping.
    /// Crashed drones are skipped; the player is eligible. If the currently
    /// attached drone has crashed, the camera falls back to the first active
    /// one.
    fn cycle_camera_drone(&mut self) {
        let active: Vec<u32> = self
            .agents
            .iter()
            .filter(|a| a.is_active())
            .map(|a| a.state.id)
            .collect();
        if active.is_empty() {
            return;
        }
        let next = match active.iter().position(|&id| id == self.camera_attached_id) {
            Some(index) => (index + 1) % active.len(),
            None => 0,
        };
        self.camera_attached_id = active[next];
    }

    fn update_agent_controls(&mut self, dt: f32) {
        for agent in &mut self.agents {
            if !agent.is_active() {
                continue;
            }

            let inputs = if agent.state.id == PLAYER_DRONE_ID {
                self.player_input.flight_controls()
            } else if let Some(autopilot) = agent.autopilot.as_mut() {
                let mut update = autopilot.control_update(&agent.state);
                // The autopilot's own arrival verdict is the single source
                // of truth for retargeting.
                if update.phase == AutopilotPhase::Arrived {
                    let boundary = self.config.spawner.world_boundary;
                    let target = Vec3::new(
                        self.rng.gen_range(-boundary..=boundary),
                        self.config.autopilot.flight_altitude,
                        self.rng.gen_range(-boundary..=boundary),
                    );
                    debug!("drone {} arrived, retargeting to {target}", agent.state.id);
                    autopilot.set_target(target);
                    update = autopilot.control_update(&agent.state);
                }
                self.debug_draw.draw_path(
                    &[agent.state.position, autopilot.target()],
                    Color::CYAN,
                    0.0,
                );
                update.inputs
            } else {
                // AI agent without an autopilot cannot fly; leave it idle.
                Default::default()
            };

            let intent = flight::generate_move_intent(
                &agent.state,
                &inputs,
                &mut agent.forward_speed,
                &self.config.flight,
                dt,
            );
            self.physics.submit_move_intent(agent.body, intent);
        }
    }

    /// Any collision is fatal for the involved drones. Already-crashed
    /// bodies keep reporting contacts; those are ignored so the marker is
    /// drawn once, at the crash.
    fn handle_collision(&mut self, event: &CollisionEvent) {
        let mut any_crashed = false;
        for agent in &mut self.agents {
            if agent.body == event.body_a || agent.body == event.body_b {
                if agent.is_active() {
                    info!("drone {} crashed at {}", agent.state.id, event.contact);
                    agent.mark_crashed();
                    any_crashed = true;
                }
            }
        }
        if any_crashed {
            self.debug_draw
                .draw_point(event.contact, 1.0, Color::RED, COLLISION_MARKER_DURATION);
        }
    }

    /// Pull updated transforms from the integrator. Only position and
    /// orientation are taken; id and status are coordinator-owned.
    fn merge_physics_states(&mut self) {
        for agent in &mut self.agents {
            if !agent.is_active() {
                continue;
            }
            if let Some(new_state) = self.physics.get_state(agent.body) {
                agent.state.position = new_state.position;
                agent.state.orientation = new_state.orientation;
            }
        }
    }

    /// Build the complete render-facing snapshot for this tick.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            tick: self.tick_count,
            elapsed_secs: self.elapsed_secs,
            drones: self.drone_states(),
            player_drone_id: PLAYER_DRONE_ID,
            camera: CameraView {
                attached_drone_id: self.camera_attached_id,
                mode: self.camera_view_mode,
                tilt: self.camera_tilt,
            },
            hud_text: self.hud_text(),
            debug_draw_enabled: self.debug_draw_enabled,
        }
    }

    /// The debug shape sink, for the renderer.
    pub fn debug_draw(&self) -> &DebugDraw {
        &self.debug_draw
    }

    /// Read-only agent access, mainly for tests.
    pub fn agents(&self) -> &[DroneAgent] {
        &self.agents
    }
}

impl RenderDataSource for Orchestrator {
    fn drone_states(&self) -> Vec<DroneState> {
        self.agents.iter().map(|a| a.state).collect()
    }

    fn player_drone_id(&self) -> u32 {
        PLAYER_DRONE_ID
    }

    fn camera_drone_id(&self) -> u32 {
        self.camera_attached_id
    }

    fn camera_view_mode(&self) -> CameraViewMode {
        self.camera_view_mode
    }

    fn camera_tilt(&self) -> f32 {
        self.camera_tilt
    }

    fn hud_text(&self) -> String {
        match self.agents.iter().find(|a| a.state.id == PLAYER_DRONE_ID) {
            Some(player) => format!(
                "Player Drone | Pos: ({:.2}, {:.2}, {:.2}) | Speed: {:.1} m/s",
                player.state.position.x,
                player.state.position.y,
                player.state.position.z,
                player.forward_speed,
            ),
            None => "No Player Drone".to_string(),
        }
    }

    fn debug_draw_enabled(&self) -> bool {
        self.debug_draw_enabled
    }
}

impl WorldDataSource for Orchestrator {
    fn world_data(&self) -> Option<&WorldData> {
        self.world_data.as_ref()
    }
}
