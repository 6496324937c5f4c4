/// used for colors without alpha
pub type RgbD = glam::f64::DVec3;

/// used for RGBA colors in lighting math
pub type RgbaD = glam::f64::DVec4;
/// used for RGBA reflectance parameters as stored on materials
pub type RgbaF = glam::f32::Vec4;

/// used for direction vectors
pub type Vec3d = glam::f64::DVec3;
/// used for uv coordinates and 2d random variates
pub type Vec2d = glam::f64::DVec2;

/// A direction drawn from a sampling distribution, together with the value of
/// that distribution at the drawn direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionSample {
    /// The sampled direction. In the canonical frame the surface is the
    /// xy-plane and the z-axis is the normal, so `dir.z >= 0.0`.
    pub dir: Vec3d,

    /// The probability density of having drawn `dir`
    pub pdf: f64,
}

/// A point on the hemisphere in spherical coordinates `(cos theta, phi)`,
/// together with the density of having drawn it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointSample {
    /// `x` holds `cos theta`, `y` holds `phi`
    pub point: Vec2d,

    /// The probability density of having drawn `point`
    pub pdf: f64,
}

/// Surface scattering behaviour of a material.
///
/// Unlike the samplers, materials work on world-space vectors: the caller
/// provides the geometric normal and a `(tangent, bitangent)` pair spanning
/// the surface, and sampled directions are returned in world space.
///
/// Lobe selection draws from the generator owned by the material, so `sample`
/// is stochastic; `evaluate` and `pdf` are pure.
pub trait Material {
    /// Returns the name given to this material instance by the asset pipeline
    fn name(&self) -> &str;

    /// Returns the static type tag of the material variant
    fn material_type(&self) -> &'static str;

    /// Logs the material parameters. Useful when debugging scene imports.
    fn display_info(&self);

    /// Computes the BSDF value for a pair of directions.
    ///
    /// # Arguments
    /// * `w_i` - incident direction, world space
    /// * `w_o` - outgoing direction, world space
    /// * `normal` - geometric normal, world space
    /// * `uv` - surface coordinates; reserved for texture-driven parameter
    ///   lookup and currently unused
    ///
    /// Returns black when either direction lies below the surface.
    fn evaluate(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d, uv: Vec2d) -> RgbaD;

    /// Samples an outgoing direction for the given incident direction.
    ///
    /// One uniform variate selects a lobe by its normalized luminance; the
    /// residual probability mass is absorption, reported as `None`. This is
    /// the terminate-the-path signal, not an error.
    ///
    /// `tangent` and `bitangent` must span the surface at the shading point
    /// so that `(tangent, bitangent, normal)` forms an orthonormal frame.
    fn sample(
        &self,
        w_i: Vec3d,
        normal: Vec3d,
        tangent: Vec3d,
        bitangent: Vec3d,
    ) -> Option<DirectionSample>;

    /// Returns the probability of `sample` having produced `w_o` given `w_i`.
    ///
    /// The result is the luminance-weighted mixture of the lobe densities,
    /// clamped to `[0, 1]`. The clamp treats the value as a lobe-selection
    /// probability rather than a density in inverse steradians; consumers
    /// computing multiple-importance-sampling weights should be aware that
    /// this is not a normalized density.
    fn pdf(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d) -> f64;
}
