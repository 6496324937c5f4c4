//! Material combining a Lambertian lobe with a Blinn-Phong specular lobe
use std::f64::consts;

use crate::{
    generator::{self, GeneratorHandle, MersenneTwisterGenerator},
    sampler::SphereSampler,
    utils::{local_to_world, world_to_local, SafeCast, VecExt},
    DirectionSample, Material, RgbD, RgbaD, RgbaF, Vec2d, Vec3d,
};

/// Material combining a Lambertian diffuse lobe with a Blinn-Phong specular
/// lobe.
///
/// Sampling stochastically selects one of the lobes by its normalized
/// luminance; the residual probability mass is absorption. The specular lobe
/// importance-samples the microfacet normal distribution `cos^ns theta` and
/// reflects the incident direction about the drawn half-vector.
pub struct BlinnPhong {
    name: String,
    kd: RgbaF,
    ks: RgbaF,
    ns: f32,
    alpha: f32,
    generator: GeneratorHandle,
}

impl BlinnPhong {
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
            kd: RgbaF::new(0.7, 0.7, 0.7, 1.0),
            ks: RgbaF::new(0.3, 0.3, 0.3, 1.0),
            ns: 64.0,
            alpha: 1.0,
            generator,
        }
    }

    #[must_use]
    pub fn diffuse_color(&self) -> RgbaF {
        self.kd
    }

    #[must_use]
    pub fn specular_color(&self) -> RgbaF {
        self.ks
    }

    /// Returns the shininess exponent. Higher values mean a tighter specular
    /// lobe; this is not a roughness.
    #[must_use]
    pub fn shininess(&self) -> f32 {
        self.ns
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_diffuse_color(&mut self, color: RgbaF) {
        self.kd = color;
        self.alpha = color.w;
    }

    pub fn set_specular_color(&mut self, color: RgbaF) {
        self.ks = color;
    }

    /// Sets the shininess exponent, which must be positive
    pub fn set_shininess(&mut self, ns: f32) {
        debug_assert!(ns > 0.0);
        self.ns = ns;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.kd.w = alpha;
    }

    fn specular_sampler(&self) -> SphereSampler {
        SphereSampler::BlinnPhong {
            shininess: f64::from(self.ns),
        }
    }

    /// Normalized luminance of the diffuse and specular lobes. The weights
    /// sum to at most 1; the remainder is the absorption probability.
    #[must_use]
    pub fn lobe_weights(&self) -> (f64, f64) {
        let d_luminance = self.kd.safe_cast().luminance();
        let s_luminance = self.ks.safe_cast().luminance();
        let norm = (d_luminance + s_luminance).max(1.0);
        (d_luminance / norm, s_luminance / norm)
    }
}

impl Material for BlinnPhong {
    fn name(&self) -> &str {
        &self.name
    }

    fn material_type(&self) -> &'static str {
        "BlinnPhong"
    }

    fn display_info(&self) {
        log::info!("======== MATERIAL INFO ========");
        log::info!(" Type           : {}", self.material_type());
        log::info!(" Name           : {}", self.name);
        log::info!(" Kd             : {}", self.kd);
        log::info!(" Ks             : {}", self.ks);
        log::info!(" Ns             : {}", self.ns);
        log::info!(" Opacity        : {}", self.alpha);
    }

    fn evaluate(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d, _uv: Vec2d) -> RgbaD {
        if w_i.dot(normal) <= 0.0 || w_o.dot(normal) <= 0.0 {
            return RgbaD::new(0.0, 0.0, 0.0, f64::from(self.alpha));
        }

        let diffuse = self.kd.safe_cast().truncate() * consts::FRAC_1_PI;

        let ns = f64::from(self.ns);
        let specular = match (w_i + w_o).try_normalize() {
            Some(halfway) => {
                let cos_theta = normal.dot(halfway).max(0.0);
                let intensity = (ns + 2.0) * 0.5 * consts::FRAC_1_PI * cos_theta.powf(ns);
                self.ks.safe_cast().truncate() * intensity
            }
            None => RgbD::ZERO,
        };

        let bsdf = diffuse + specular;
        RgbaD::new(bsdf.x, bsdf.y, bsdf.z, f64::from(self.alpha))
    }

    fn sample(
        &self,
        w_i: Vec3d,
        normal: Vec3d,
        tangent: Vec3d,
        bitangent: Vec3d,
    ) -> Option<DirectionSample> {
        let (d_weight, s_weight) = self.lobe_weights();
        let mut generator = self.generator.borrow_mut();
        let lobe = generator.get_1d();

        if lobe < d_weight {
            let sample = SphereSampler::CosineWeighted.get_dir(&mut *generator);
            Some(DirectionSample {
                dir: local_to_world(sample.dir, tangent, bitangent, normal),
                pdf: sample.pdf,
            })
        } else if lobe < d_weight + s_weight {
            // draw a microfacet normal in the canonical frame and mirror the
            // incident direction about it
            let facet = self.specular_sampler().get_dir(&mut *generator);
            let local_in = world_to_local(w_i, tangent, bitangent, normal);
            let local_out = SphereSampler::reflect(local_in, facet.dir);
            Some(DirectionSample {
                dir: local_to_world(local_out, tangent, bitangent, normal),
                pdf: facet.pdf,
            })
        } else {
            // absorption: the path ends here
            None
        }
    }

    fn pdf(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d) -> f64 {
        let (d_weight, s_weight) = self.lobe_weights();
        let diffuse = SphereSampler::CosineWeighted.pdf(w_i, w_o, normal);
        let specular = self.specular_sampler().pdf(w_i, w_o, normal);
        (d_weight * diffuse + s_weight * specular).clamp(0.0, 1.0)
    }
}
