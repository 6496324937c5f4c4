//! Material that displays a flat color without any lighting computation
use crate::{
    utils::SafeCast, DirectionSample, Material, RgbaD, RgbaF, Vec2d, Vec3d,
};

/// Material that displays a flat color without any lighting computation.
///
/// It never scatters: `sample` is always absorption and the sampling density
/// is zero everywhere.
pub struct Plain {
    name: String,
    kd: RgbaF,
    alpha: f32,
}

impl Plain {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kd: RgbaF::new(0.9, 0.9, 0.9, 1.0),
            alpha: 1.0,
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

impl Material for Plain {
    fn name(&self) -> &str {
        &self.name
    }

    fn material_type(&self) -> &'static str {
        "Plain"
    }

    fn display_info(&self) {
        log::info!("======== MATERIAL INFO ========");
        log::info!(" Type           : {}", self.material_type());
        log::info!(" Name           : {}", self.name);
        log::info!(" Kd             : {}", self.kd);
        log::info!(" Opacity        : {}", self.alpha);
    }

    fn evaluate(&self, _w_i: Vec3d, _w_o: Vec3d, _normal: Vec3d, _uv: Vec2d) -> RgbaD {
        self.kd.safe_cast()
    }

    fn sample(
        &self,
        _w_i: Vec3d,
        _normal: Vec3d,
        _tangent: Vec3d,
        _bitangent: Vec3d,
    ) -> Option<DirectionSample> {
        None
    }

    fn pdf(&self, _w_i: Vec3d, _w_o: Vec3d, _normal: Vec3d) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Plain;
    use crate::{Material, RgbaF, Vec2d, Vec3d};

    #[test]
    fn flat_color() {
        let mut material = Plain::new("flat");
        material.set_diffuse_color(RgbaF::new(0.2, 0.4, 0.6, 0.5));
        let color = material.evaluate(Vec3d::Z, Vec3d::Z, Vec3d::Z, Vec2d::ZERO);
        assert_eq!(color.x, 0.2_f32 as f64);
        assert_eq!(color.w, 0.5_f32 as f64);
        assert_eq!(material.alpha(), 0.5);
    }

    #[test]
    fn never_scatters() {
        let material = Plain::new("flat");
        assert!(material
            .sample(Vec3d::Z, Vec3d::Z, Vec3d::X, Vec3d::Y)
            .is_none());
        assert_eq!(material.pdf(Vec3d::Z, Vec3d::Z, Vec3d::Z), 0.0);
    }

    #[test]
    fn alpha_stays_in_sync() {
        let mut material = Plain::new("flat");
        material.set_alpha(0.25);
        assert_eq!(material.diffuse_color().w, 0.25);
    }
}
