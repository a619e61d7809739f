//! Geometric index and matcher: enumerate catalog star triples whose
//! pairwise arcs all fit within the field of view, canonicalize each as a
//! sorted triplet of angles, and match observed triples against the index
//! under measurement noise.

pub mod index;
pub mod matcher;

pub use index::{arc, Triangle, TriangleIndex};
pub use matcher::{match_triangle, MatchedTriangle};
