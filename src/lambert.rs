//! Material following the Lambertian reflectance model
use std::f64::consts;

use crate::{
    generator::{self, GeneratorHandle, MersenneTwisterGenerator},
    sampler::SphereSampler,
    utils::{local_to_world, scale_rgb, SafeCast},
    DirectionSample, Material, RgbaD, RgbaF, Vec2d, Vec3d,
};

/// Material following the Lambertian reflectance model: light is scattered
/// equally in all directions above the surface.
///
/// Sampling importance-samples the cosine term, so the single diffuse lobe is
/// always taken and absorption never occurs.
pub struct Lambertian {
    name: String,
    kd: RgbaF,
    alpha: f32,
    generator: GeneratorHandle,
}

impl Lambertian {
    /// Creates a material with its own wall-clock seeded Mersenne-Twister
    /// generator
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_generator(name, generator::shared(MersenneTwisterGenerator::new()))
    }

    /// Creates a material drawing from the given generator handle. Several
    /// materials may share one handle.
    #[must_use]
    pub fn with_generator(name: &str, generator: GeneratorHandle) -> Self {
        Self {
            name: name.to_owned(),
            kd: RgbaF::new(0.9, 0.9, 0.9, 1.0),
            alpha: 1.0,
            generator,
        }
    }

    #[must_use]
    pub fn diffuse_color(&self) -> RgbaF {
        self.kd
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_diffuse_color(&mut self, color: RgbaF) {
        self.kd = color;
        self.alpha = color.w;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.kd.w = alpha;
    }
}

impl Material for Lambertian {
    fn name(&self) -> &str {
        &self.name
    }

    fn material_type(&self) -> &'static str {
        "Lambertian"
    }

    fn display_info(&self) {
        log::info!("======== MATERIAL INFO ========");
        log::info!(" Type           : {}", self.material_type());
        log::info!(" Name           : {}", self.name);
        log::info!(" Kd             : {}", self.kd);
        log::info!(" Opacity        : {}", self.alpha);
    }

    fn evaluate(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d, _uv: Vec2d) -> RgbaD {
        if w_i.dot(normal) <= 0.0 || w_o.dot(normal) <= 0.0 {
            return RgbaD::new(0.0, 0.0, 0.0, f64::from(self.alpha));
        }
        scale_rgb(self.kd.safe_cast(), consts::FRAC_1_PI)
    }

    fn sample(
        &self,
        _w_i: Vec3d,
        normal: Vec3d,
        tangent: Vec3d,
        bitangent: Vec3d,
    ) -> Option<DirectionSample> {
        let mut generator = self.generator.borrow_mut();
        let sample = SphereSampler::CosineWeighted.get_dir(&mut *generator);
        Some(DirectionSample {
            dir: local_to_world(sample.dir, tangent, bitangent, normal),
            pdf: sample.pdf,
        })
    }

    fn pdf(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d) -> f64 {
        SphereSampler::CosineWeighted.pdf(w_i, w_o, normal)
    }
}
