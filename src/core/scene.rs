use super::camera::Camera;
use super::cloud::{self, PointCloud};
use super::constellation::{build_constellations, Constellation};
use super::params::SceneParams;
use super::parallax::{PointerOffset, SceneTilt};
use super::schedule::{progress, visibility, LayerVisibility};
use super::zoom::ZoomController;
use crate::constants::GALAXY_SPIN_PER_FRAME;
use glam::Mat4;
use rand::Rng;

/// Everything the renderer needs for one frame, derived by `Scene::advance`.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub time_sec: f32,
    pub depth: f32,
    pub visibility: LayerVisibility,
    pub view_proj: Mat4,
    /// Scene tilt, applied to every layer.
    pub scene_model: Mat4,
    /// Scene tilt followed by the galaxy spin, for arms and core.
    pub galaxy_model: Mat4,
    pub aspect: f32,
}

/// All generated content plus the small amount of live input state.
pub struct Scene {
    pub params: SceneParams,
    pub background: PointCloud,
    pub arms: PointCloud,
    pub core: PointCloud,
    pub constellations: Vec<Constellation>,
    pub zoom: ZoomController,
    pub pointer: PointerOffset,
    pub tilt: SceneTilt,
    pub galaxy_rotation: f32,
    pub camera: Camera,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(params: SceneParams, rng: &mut R) -> Self {
        let background = cloud::background_stars(rng, params.background_count);
        let constellations = build_constellations(rng);
        let arms = cloud::galaxy_arms(rng, params.arm_count);
        let core = cloud::galaxy_core(rng, params.core_count);
        let zoom = ZoomController::default();
        let mut camera = Camera::default();
        camera.set_depth(zoom.current());
        Self {
            params,
            background,
            arms,
            core,
            constellations,
            zoom,
            pointer: PointerOffset::default(),
            tilt: SceneTilt::default(),
            galaxy_rotation: 0.0,
            camera,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        self.camera.set_viewport(width, height)
    }

    /// Advance one display frame: ease the camera, morph constellations,
    /// spin the galaxy and tilt toward the pointer.
    pub fn advance(&mut self, time_sec: f32) -> FrameParams {
        let depth = self.zoom.step();
        self.camera.set_depth(depth);

        let vis = visibility(progress(depth), time_sec);
        for c in &mut self.constellations {
            c.morph(vis.morph);
        }

        self.galaxy_rotation = (self.galaxy_rotation + GALAXY_SPIN_PER_FRAME) % std::f32::consts::TAU;
        self.tilt.step_toward(self.pointer);

        let scene_model = Mat4::from_rotation_x(self.tilt.x) * Mat4::from_rotation_y(self.tilt.y);
        let galaxy_model = scene_model * Mat4::from_rotation_z(self.galaxy_rotation);
        FrameParams {
            time_sec,
            depth,
            visibility: vis,
            view_proj: self.camera.view_proj(),
            scene_model,
            galaxy_model,
            aspect: self.camera.aspect,
        }
    }
}
