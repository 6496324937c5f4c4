#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::suboptimal_flops)]
#![deny(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::double_must_use)]
#![deny(clippy::use_self)]
#![deny(clippy::unreadable_literal)]
#![deny(clippy::explicit_iter_loop)]
// these are lints to enable later
#![allow(clippy::cast_lossless)]

//! Importance sampling and BSDF evaluation for physically based rendering.
//!
//! This crate is the sampling core of a rendering engine: a small set of
//! hemisphere samplers and material models with `evaluate`, `sample` and
//! `pdf` operations, meant to be consumed by a path tracer or any other Monte
//! Carlo lighting integrator. The surrounding engine concerns (scene graph,
//! asset import, shading pipeline) live elsewhere and only exchange colors
//! and direction/pdf pairs with this crate.
//!
//! # Design Decisions
//!
//! Sampling happens in a canonical local space: the surface is the xy-plane
//! and the z-vector is the normal. The [`SphereSampler`] variants draw
//! directions in that frame; the material models transform between the
//! canonical frame and world space using the `(tangent, bitangent, normal)`
//! basis supplied by the caller.
//!
//! Lighting math is done in [f64], while material parameters are stored as
//! [f32] for a minimal memory footprint. Colors are RGBA; when a single
//! scalar is needed, the RGB channels are reduced with the fixed luminance
//! weights `(0.2126, 0.7152, 0.0722)`.
//!
//! Randomness is injected explicitly. Samplers take a [`UniformGenerator`]
//! per call and materials own a [`generator::GeneratorHandle`], so there is
//! no process-wide random state: rendering code decides which engine to use,
//! tests inject the deterministic [`generator::FakeGenerator`], and parallel
//! renderers hand each worker its own generator instance.
//!
//! Absorption is data, not an error: [`Material::sample`] returns [`None`]
//! when the stochastic lobe selection terminates the path. Evaluating a
//! direction below the surface yields black. Nothing on the sampling path
//! panics or allocates.
//!
//! This crate is built on [glam] for a simple but fast vector math library at
//! the core.
//!
//! # References
//! * James F. Blinn. Models of light reflection for computer synthesized
//!   pictures. *SIGGRAPH Comput. Graph., 11(2):192–198,* 1977.
//! * Eric Veach. *Robust monte carlo methods for light transport simulation.*
//!   PhD thesis, Stanford University, 1997.
//! * Matt Pharr, Wenzel Jakob, and Greg Humphreys. *Physically Based
//!   Rendering: From Theory to Implementation.* <https://pbr-book.org/>
//! * Jason Lawrence. Importance sampling of the Phong reflectance model.
//!   Course notes, University of Virginia.

mod core;

pub use crate::core::{DirectionSample, Material, PointSample, RgbD, RgbaD, RgbaF, Vec2d, Vec3d};

#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod utils;

pub mod generator;
pub mod material;
pub mod sampler;

pub use generator::UniformGenerator;
pub use material::MaterialModel;
pub use sampler::SphereSampler;

#[cfg(feature = "blinn-phong")]
pub mod blinn_phong;
#[cfg(feature = "lambert")]
pub mod lambert;
pub mod plain;

pub use utils::coordinate_system;
