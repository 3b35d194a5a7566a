//! Lux Core - triangle mesh ingestion.
//!
//! This crate provides:
//!
//! - **Mesh**: an indexed triangle list with optional per-vertex normals,
//!   the form in which the renderer consumes imported geometry
//! - **OBJ import**: a thin Wavefront OBJ adapter producing a `Mesh`
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_obj;
//!
//! let mesh = load_obj("models/teddy.obj")?;
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use mesh::{Mesh, MeshTriangle};
pub use obj::{load_obj, load_obj_from_str, LoadError, LoadResult};
