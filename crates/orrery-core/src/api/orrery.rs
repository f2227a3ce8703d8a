use glam::Mat4;

use crate::api::config::OrreryConfig;
use crate::api::error::OrreryError;
use crate::api::types::BodyId;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::TextureTable;
use crate::bodies::catalog;
use crate::bodies::hierarchy::BodyHierarchy;
use crate::bodies::table::{OrbitalParameterTable, PhaseOffsets};
use crate::core::time::SimClock;
use crate::input::queue::{keys, InputEvent, InputQueue, KeyState};
use crate::renderer::camera::{FlyCamera, Movement};
use crate::renderer::instance::{DrawBuffer, DrawInstance};
use crate::renderer::traits::{DrawTiming, FrameData, Renderer};
use crate::scene::composer::{BodyDraw, SceneComposer};
use crate::scene::rings::{ringed_bodies, OrbitRingComposer, RingDraw};

/// Matrices for one composed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub projection: Mat4,
    pub view: Mat4,
    pub skybox_view: Mat4,
    pub bodies: Vec<BodyDraw>,
    pub rings: Vec<RingDraw>,
    pub elapsed: f32,
}

impl Frame {
    /// Borrow this frame as renderer input.
    pub fn data<'a>(&'a self, textures: &'a TextureTable) -> FrameData<'a> {
        FrameData {
            projection: self.projection,
            view: self.view,
            skybox_view: self.skybox_view,
            bodies: &self.bodies,
            rings: &self.rings,
            textures,
            elapsed: self.elapsed,
        }
    }
}

/// The running orrery: fixed bodies, a clock, a camera, and the frame builder.
pub struct Orrery {
    config: OrreryConfig,
    table: OrbitalParameterTable,
    phases: PhaseOffsets,
    hierarchy: BodyHierarchy,
    /// Bodies that get an orbit ring, fixed with the hierarchy.
    ringed: Vec<BodyId>,
    camera: FlyCamera,
    clock: SimClock,
    keys: KeyState,
    textures: TextureTable,
    aspect: f32,
    quit_requested: bool,
    frame_counter: u32,
}

impl Orrery {
    /// Build the default solar system.
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        Self::with_table(config, catalog::solar_system()?)
    }

    pub fn with_table(config: OrreryConfig, table: OrbitalParameterTable) -> Result<Self, OrreryError> {
        let phases = PhaseOffsets::generate(&table, config.seed, config.max_phase)?;
        let hierarchy = BodyHierarchy::from_table(&table);
        let ringed = ringed_bodies(&hierarchy);
        let camera = FlyCamera::new(&config.camera);
        let clock = SimClock::new(config.time_scale);

        log::info!(
            "orrery: {} bodies, {} roots, reference distance {}, seed {:#x}",
            table.len(),
            hierarchy.roots().len(),
            table.reference_distance(),
            config.seed
        );

        Ok(Self {
            config,
            table,
            phases,
            hierarchy,
            ringed,
            camera,
            clock,
            keys: KeyState::default(),
            textures: TextureTable::new(),
            aspect: 1.0,
            quit_requested: false,
            frame_counter: 0,
        })
    }

    /// Apply pending input, move the camera and advance the clock.
    /// `dt` is the host frame delta in seconds. The caller drains `input`.
    pub fn tick(&mut self, dt: f32, input: &InputQueue) {
        for event in input.iter() {
            self.keys.apply(event);
            match *event {
                InputEvent::KeyDown { key_code: keys::ESCAPE } => {
                    if !self.quit_requested {
                        log::info!("orrery: quit requested");
                    }
                    self.quit_requested = true;
                }
                InputEvent::PointerMove { dx, dy } => self.camera.process_pointer(dx, dy),
                InputEvent::Scroll { dy } => self.camera.process_scroll(dy),
                _ => {}
            }
        }

        // Camera moves in real time even when the simulation is paused.
        let move_dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        for (key, direction) in [
            (keys::W, Movement::Forward),
            (keys::S, Movement::Backward),
            (keys::A, Movement::Left),
            (keys::D, Movement::Right),
        ] {
            if self.keys.is_held(key) {
                self.camera.process_movement(direction, move_dt);
            }
        }

        self.clock.advance(dt);
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Viewport change. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Parse a manifest and rebuild the texture table from it.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), OrreryError> {
        let manifest = AssetManifest::from_json(json)?;
        self.textures = TextureTable::from_manifest(&manifest, &self.table);
        log::info!(
            "orrery: manifest loaded, {} body textures, skybox {}",
            self.textures.len(),
            if manifest.skybox.is_some() { "present" } else { "missing" }
        );
        Ok(())
    }

    /// Compose all body and ring matrices at the current time.
    pub fn compose(&self) -> Frame {
        let view = self.camera.view_matrix();
        let t = self.clock.elapsed_f32();
        let bodies = SceneComposer::new(&self.table, &self.phases, &self.hierarchy).compose(view, t);
        let rings = OrbitRingComposer::new(&self.table, &self.ringed).compose(view);
        Frame {
            projection: self.camera.projection_matrix(self.aspect),
            view,
            skybox_view: self.camera.skybox_view(),
            bodies,
            rings,
            elapsed: t,
        }
    }

    /// Compose and hand the frame to a renderer.
    pub fn render_into<R: Renderer>(&self, renderer: &mut R) -> DrawTiming {
        let frame = self.compose();
        renderer.draw(&frame.data(&self.textures))
    }

    /// Flatten a frame into draw instances: bodies first, then rings.
    pub fn fill_draw_buffer(&self, frame: &Frame, buffer: &mut DrawBuffer) {
        buffer.clear();
        for draw in &frame.bodies {
            buffer.push(DrawInstance::body(draw.body.0, draw.model_view, self.textures.get(draw.body)));
        }
        buffer.begin_rings();
        for ring in &frame.rings {
            buffer.push(DrawInstance::ring(ring.ring, ring.model_view));
        }
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn table(&self) -> &OrbitalParameterTable {
        &self.table
    }

    pub fn phases(&self) -> &PhaseOffsets {
        &self.phases
    }

    pub fn hierarchy(&self) -> &BodyHierarchy {
        &self.hierarchy
    }

    pub fn ringed_bodies(&self) -> &[BodyId] {
        &self.ringed
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimClock {
        &mut self.clock
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed_f32()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Set once Escape is pressed; the host closes the window.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
