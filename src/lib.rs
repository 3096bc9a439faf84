//! Octree partitioning of static polygonal level geometry.
//!
//! Faces (convex polygons with a material) go in once; out comes an immutable
//! [`Octree`] that can be walked for drawing, handing per-material vertex and
//! index buffers to a renderer, and queried for the nearest point where a line
//! segment hits a surface.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for batch collision queries

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bounding_box;
pub mod errors;
pub mod face;
pub mod float_types;
pub mod material;
pub mod octree;
pub mod plane;
pub mod ray;
pub mod triangle;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bounding_box::BoundingBox;
pub use errors::ValidationError;
pub use face::Face;
pub use float_types::Real;
pub use material::MaterialId;
pub use octree::{Octree, OctreeConfig, RenderBatch, RenderSink};
pub use plane::Plane;
pub use ray::{LineSegment, Ray};
pub use triangle::Triangle;
pub use vertex::Vertex;
