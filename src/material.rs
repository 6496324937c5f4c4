//! The closed set of material models supported by the asset pipeline
#[cfg(feature = "blinn-phong")]
use crate::blinn_phong::BlinnPhong;
#[cfg(feature = "lambert")]
use crate::lambert::Lambertian;
use crate::{plain::Plain, DirectionSample, Material, RgbaD, Vec2d, Vec3d};

/// Tagged union over every material variant.
///
/// Scene loaders store these by value; rendering code goes through the
/// [`Material`] interface, which the union forwards to the active variant.
pub enum MaterialModel {
    Plain(Plain),
    #[cfg(feature = "lambert")]
    Lambertian(Lambertian),
    #[cfg(feature = "blinn-phong")]
    BlinnPhong(BlinnPhong),
}

impl MaterialModel {
    fn inner(&self) -> &dyn Material {
        match self {
            Self::Plain(material) => material,
            #[cfg(feature = "lambert")]
            Self::Lambertian(material) => material,
            #[cfg(feature = "blinn-phong")]
            Self::BlinnPhong(material) => material,
        }
    }
}

impl Material for MaterialModel {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn material_type(&self) -> &'static str {
        self.inner().material_type()
    }

    fn display_info(&self) {
        self.inner().display_info();
    }

    fn evaluate(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d, uv: Vec2d) -> RgbaD {
        self.inner().evaluate(w_i, w_o, normal, uv)
    }

    fn sample(
        &self,
        w_i: Vec3d,
        normal: Vec3d,
        tangent: Vec3d,
        bitangent: Vec3d,
    ) -> Option<DirectionSample> {
        self.inner().sample(w_i, normal, tangent, bitangent)
    }

    fn pdf(&self, w_i: Vec3d, w_o: Vec3d, normal: Vec3d) -> f64 {
        self.inner().pdf(w_i, w_o, normal)
    }
}

impl From<Plain> for MaterialModel {
    fn from(material: Plain) -> Self {
        Self::Plain(material)
    }
}

#[cfg(feature = "lambert")]
impl From<Lambertian> for MaterialModel {
    fn from(material: Lambertian) -> Self {
        Self::Lambertian(material)
    }
}

#[cfg(feature = "blinn-phong")]
impl From<BlinnPhong> for MaterialModel {
    fn from(material: BlinnPhong) -> Self {
        Self::BlinnPhong(material)
    }
}

#[cfg(test)]
mod tests {
    use super::MaterialModel;
    use crate::{plain::Plain, Material, Vec2d, Vec3d};

    #[test]
    fn dispatches_to_variant() {
        let model = MaterialModel::from(Plain::new("wall"));
        assert_eq!(model.name(), "wall");
        assert_eq!(model.material_type(), "Plain");
        assert_eq!(model.pdf(Vec3d::Z, Vec3d::Z, Vec3d::Z), 0.0);
        assert!(model
            .sample(Vec3d::Z, Vec3d::Z, Vec3d::X, Vec3d::Y)
            .is_none());
        let color = model.evaluate(Vec3d::Z, Vec3d::Z, Vec3d::Z, Vec2d::ZERO);
        assert!(color.w > 0.0);
    }

    #[cfg(all(feature = "lambert", feature = "blinn-phong"))]
    #[test]
    fn variant_tags() {
        use crate::{blinn_phong::BlinnPhong, lambert::Lambertian};
        let models = [
            MaterialModel::from(Plain::new("a")),
            MaterialModel::from(Lambertian::new("b")),
            MaterialModel::from(BlinnPhong::new("c")),
        ];
        let tags: Vec<_> = models.iter().map(|m| m.material_type()).collect();
        assert_eq!(tags, ["Plain", "Lambertian", "BlinnPhong"]);
    }
}
