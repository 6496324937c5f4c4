pub trait ApproxEqual: Copy {
    fn equals_approx(self, other: Self, eps: Self, eps_rel: Self) -> bool;
    fn equals_approx_abs(self, other: Self, eps: Self) -> bool;
}

macro_rules! assert_eq_approx {
    ($lhs:expr, $rhs:expr, $eps_abs:expr, $eps_rel:expr) => {
        assert!(
            $crate::test_utils::ApproxEqual::equals_approx($lhs, $rhs, $eps_abs, $eps_rel),
            r#"assert_eq_approx failed:
    {}: {:?}
    {}: {:?}
    {} (maximum absolute error): {:?}
    {} (maximum relative error): {:?}"#,
            stringify!($lhs),
            $lhs,
            stringify!($rhs),
            $rhs,
            stringify!($eps_abs),
            $eps_abs,
            stringify!($eps_rel),
            $eps_rel,
        );
    };

    ($lhs:expr, $rhs:expr, $eps_abs: expr, $eps_rel:expr, $($arg:tt)+) => {
        assert!($crate::test_utils::ApproxEqual::equals_approx($lhs, $rhs, $eps_abs, $eps_rel), $($arg)*);
    }
}

macro_rules! assert_eq_approx_abs {
    ($lhs:expr, $rhs:expr, $eps_abs:expr) => {
        assert!(
            $crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
            r#"assert_eq_approx_abs failed:
    {}: {:?}
    {}: {:?}
    {} (maximum absolute error): {:?}"#,
            stringify!($lhs),
            $lhs,
            stringify!($rhs),
            $rhs,
            stringify!($eps_abs),
            $eps_abs,
        )
    };

    ($lhs:expr, $rhs:expr, $eps_abs:expr, $($arg:tt)+) => {
        assert!($crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
        $($arg)*);
    };
}

pub(crate) use assert_eq_approx;
pub(crate) use assert_eq_approx_abs;

use std::f64::consts;

use crate::{RgbaD, Vec3d};

impl ApproxEqual for f64 {
    fn equals_approx(self, other: Self, eps: Self, eps_rel: Self) -> bool {
        #[allow(clippy::float_cmp)]
        if self == other || (self - other).abs() <= eps {
            true
        } else {
            let diff = (self - other).abs();
            let max = self.abs().max(other.abs());
            diff <= max * eps_rel
        }
    }

    fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
        #[allow(clippy::float_cmp)]
        if self == other {
            true
        } else {
            (self - other).abs() <= eps
        }
    }
}

impl ApproxEqual for Vec3d {
    fn equals_approx(self, other: Self, eps_abs: Self, eps_rel: Self) -> bool {
        self.x.equals_approx(other.x, eps_abs.x, eps_rel.x)
            && self.y.equals_approx(other.y, eps_abs.y, eps_rel.y)
            && self.z.equals_approx(other.z, eps_abs.z, eps_rel.z)
    }

    fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
        self.x.equals_approx_abs(other.x, eps.x)
            && self.y.equals_approx_abs(other.y, eps.y)
            && self.z.equals_approx_abs(other.z, eps.z)
    }
}

impl ApproxEqual for RgbaD {
    fn equals_approx(self, other: Self, eps_abs: Self, eps_rel: Self) -> bool {
        self.x.equals_approx(other.x, eps_abs.x, eps_rel.x)
            && self.y.equals_approx(other.y, eps_abs.y, eps_rel.y)
            && self.z.equals_approx(other.z, eps_abs.z, eps_rel.z)
            && self.w.equals_approx(other.w, eps_abs.w, eps_rel.w)
    }

    fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
        self.x.equals_approx_abs(other.x, eps.x)
            && self.y.equals_approx_abs(other.y, eps.y)
            && self.z.equals_approx_abs(other.z, eps.z)
            && self.w.equals_approx_abs(other.w, eps.w)
    }
}

pub trait SamplerExt {
    fn vec3d(&mut self) -> Vec3d;
}

impl SamplerExt for fastrand::Rng {
    fn vec3d(&mut self) -> Vec3d {
        Vec3d::new(self.f64(), self.f64(), self.f64())
    }
}

/** sample a direction with density 1 / 4pi */
pub fn spherical_sample(rd: &mut fastrand::Rng) -> Vec3d {
    #[allow(clippy::suboptimal_flops)]
    let cos_theta = 2.0 * rd.f64() - 1.0;
    direction_from(cos_theta, rd.f64())
}

/** sample a direction with density 1 / 2pi, restricted to z >= 0 */
pub fn hemisphere_sample(rd: &mut fastrand::Rng) -> Vec3d {
    direction_from(rd.f64(), rd.f64())
}

fn direction_from(cos_theta: f64, v: f64) -> Vec3d {
    #[allow(clippy::suboptimal_flops)]
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = v * 2.0 * consts::PI;
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3d::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Averages `num_samples` evaluations of `draw`
pub fn sample_mean(num_samples: usize, mut draw: impl FnMut() -> f64) -> f64 {
    let mut sum = 0.0;
    for _ in 0..num_samples {
        sum += draw();
    }
    sum / num_samples as f64
}

/// Monte-Carlo estimate of the integral of `integrand` over the hemisphere,
/// using uniform hemisphere sampling
pub fn integrate_hemisphere(
    rd: &mut fastrand::Rng,
    num_samples: usize,
    integrand: impl Fn(Vec3d) -> f64,
) -> f64 {
    let mut sum = 0.0;
    for _ in 0..num_samples {
        let dir = hemisphere_sample(rd);
        sum += integrand(dir);
    }
    2.0 * consts::PI * sum / num_samples as f64
}
