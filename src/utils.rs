use crate::{RgbD, RgbaD, RgbaF, Vec3d};

pub trait FloatExt {
    fn sq(self) -> Self;
}

impl FloatExt for f64 {
    fn sq(self) -> Self {
        self * self
    }
}

impl FloatExt for f32 {
    fn sq(self) -> Self {
        self * self
    }
}

pub trait SafeCast<Target> {
    fn safe_cast(self) -> Target;
}

impl SafeCast<RgbaD> for RgbaF {
    fn safe_cast(self) -> RgbaD {
        RgbaD {
            x: self.x as f64,
            y: self.y as f64,
            z: self.z as f64,
            w: self.w as f64,
        }
    }
}

pub trait VecExt {
    type Scalar;
    #[must_use]
    fn luminance(self) -> Self::Scalar;
}

impl VecExt for RgbD {
    type Scalar = f64;

    /// Returns the perceived brightness of the color
    fn luminance(self) -> Self::Scalar {
        let lfac = Self::new(0.2126, 0.7152, 0.0722);
        self.dot(lfac)
    }
}

impl VecExt for RgbaD {
    type Scalar = f64;

    /// Returns the perceived brightness of the color, ignoring alpha
    fn luminance(self) -> Self::Scalar {
        self.truncate().luminance()
    }
}

/// Scales the rgb channels of a color, leaving alpha untouched
#[must_use]
pub fn scale_rgb(color: RgbaD, factor: f64) -> RgbaD {
    RgbaD::new(
        color.x * factor,
        color.y * factor,
        color.z * factor,
        color.w,
    )
}

/// Mirror reflection of `in_dir` about `normal`. Both vectors must live in
/// the same frame; the result lives there too.
#[must_use]
pub fn reflect(in_dir: Vec3d, normal: Vec3d) -> Vec3d {
    normal * (2.0 * normal.dot(in_dir)) - in_dir
}

/// Expresses a canonical-frame direction in the world frame spanned by the
/// orthonormal `(tangent, bitangent, normal)` basis
#[must_use]
pub fn local_to_world(dir: Vec3d, tangent: Vec3d, bitangent: Vec3d, normal: Vec3d) -> Vec3d {
    tangent * dir.x + bitangent * dir.y + normal * dir.z
}

/// Expresses a world-frame direction in the canonical frame spanned by the
/// orthonormal `(tangent, bitangent, normal)` basis
#[must_use]
pub fn world_to_local(dir: Vec3d, tangent: Vec3d, bitangent: Vec3d, normal: Vec3d) -> Vec3d {
    Vec3d::new(dir.dot(tangent), dir.dot(bitangent), dir.dot(normal))
}

/// Builds an arbitrary but stable orthonormal `(tangent, bitangent)` pair for
/// a unit normal, for callers that only carry a normal
#[must_use]
pub fn coordinate_system(normal: Vec3d) -> (Vec3d, Vec3d) {
    let mut tangent = Vec3d::new(0.0, 0.0, 1.0);
    if normal.dot(tangent).abs() > 0.9999 {
        tangent = Vec3d::new(0.0, 1.0, 0.0);
    }
    let bitangent = normal.cross(tangent).normalize();
    let tangent = bitangent.cross(normal).normalize();
    (tangent, bitangent)
}
