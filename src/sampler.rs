//! Hemisphere sampling strategies for importance sampling
//!
//! All drawing happens in the canonical frame: the surface is the xy-plane
//! and the normal is the z-axis, so every sampled direction satisfies
//! `dir.z >= 0.0`. [`SphereSampler::pdf`] on the other hand accepts
//! world-space vectors and normalizes them internally, since that is what
//! callers computing importance-sampling weights have at hand.
use std::f64::consts;

use crate::{
    generator::UniformGenerator,
    utils::{self, FloatExt},
    DirectionSample, PointSample, Vec2d, Vec3d,
};

// prevents zero-probability draws at the edge of the unit square, which
// would otherwise blow up a later division by the pdf
const EPS_VARIATE: f64 = 1e-6;

/// The closed set of hemisphere sampling strategies.
///
/// Every variant maps a 2d uniform variate to a direction above the canonical
/// hemisphere plus the density of that draw, and can evaluate its density for
/// arbitrary directions independently of sampling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SphereSampler {
    /// Constant density `1 / 2pi` over the hemisphere
    Uniform,

    /// Density proportional to `cos theta`, matching the shape of the
    /// Lambertian lobe
    CosineWeighted,

    /// Density proportional to `cos^shininess theta`, drawing microfacet
    /// normals for the Blinn-Phong specular lobe. The sampled direction is a
    /// half-vector, not an outgoing direction; use [`SphereSampler::reflect`]
    /// to turn it into one. `shininess` must be positive; higher values give
    /// a tighter lobe.
    BlinnPhong { shininess: f64 },
}

impl SphereSampler {
    /// Draws a direction above the canonical hemisphere together with its
    /// density
    pub fn get_dir(&self, generator: &mut dyn UniformGenerator) -> DirectionSample {
        let u = generator.get_2d();
        let (cos_theta, pdf) = self.warp(u.x);
        let sin_theta = (1.0 - cos_theta.sq()).max(0.0).sqrt();
        let phi = 2.0 * consts::PI * u.y;
        let (sin_phi, cos_phi) = phi.sin_cos();
        DirectionSample {
            dir: Vec3d {
                x: sin_theta * cos_phi,
                y: sin_theta * sin_phi,
                z: cos_theta,
            },
            pdf,
        }
    }

    /// Draws a hemisphere point in spherical coordinates `(cos theta, phi)`
    /// together with its density
    pub fn get_point(&self, generator: &mut dyn UniformGenerator) -> PointSample {
        let u = generator.get_2d();
        let (cos_theta, pdf) = self.warp(u.x);
        PointSample {
            point: Vec2d::new(cos_theta, 2.0 * consts::PI * u.y),
            pdf,
        }
    }

    /// Evaluates this variant's density for a pair of world-space directions
    /// relative to a world-space normal.
    ///
    /// The Uniform and CosineWeighted densities depend on `w_o` and `normal`
    /// only. The Blinn-Phong density is evaluated at the half-vector between
    /// `w_i` and `w_o`, because that variant samples microfacet normals.
    /// Directions below the hemisphere have zero density, never a negative
    /// one.
    #[must_use]
    pub fn pdf(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d) -> f64 {
        debug_assert!(normal.length_squared() > 0.0);
        match *self {
            Self::Uniform => 0.5 * consts::FRAC_1_PI,
            Self::CosineWeighted => {
                let cos_theta = w_o.normalize().dot(normal.normalize()).max(0.0);
                cos_theta * consts::FRAC_1_PI
            }
            Self::BlinnPhong { shininess } => {
                debug_assert!(shininess > 0.0);
                let Some(halfway) = (w_i + w_o).try_normalize() else {
                    return 0.0;
                };
                let cos_theta = normal.normalize().dot(halfway).max(0.0);
                (shininess + 2.0) * cos_theta.powf(shininess) * 0.5 * consts::FRAC_1_PI
            }
        }
    }

    /// Mirror reflection of `in_dir` about the (microfacet) normal `m`, used
    /// to convert a sampled half-vector into an outgoing direction
    #[must_use]
    pub fn reflect(in_dir: Vec3d, m: Vec3d) -> Vec3d {
        utils::reflect(in_dir, m)
    }

    // maps the first variate to (cos theta, pdf) for this variant
    fn warp(&self, u0: f64) -> (f64, f64) {
        match *self {
            Self::Uniform => (u0, 0.5 * consts::FRAC_1_PI),
            Self::CosineWeighted => {
                let u0 = u0.clamp(EPS_VARIATE, 1.0);
                let cos_theta = u0.sqrt();
                (cos_theta, cos_theta * consts::FRAC_1_PI)
            }
            Self::BlinnPhong { shininess } => {
                debug_assert!(shininess > 0.0);
                let tail = (1.0 - u0).clamp(EPS_VARIATE, 1.0);
                let cos_theta = tail.powf(1.0 / (shininess + 2.0));
                let pdf =
                    (shininess + 2.0) * cos_theta.powf(shininess) * 0.5 * consts::FRAC_1_PI;
                (cos_theta, pdf)
            }
        }
    }
}
