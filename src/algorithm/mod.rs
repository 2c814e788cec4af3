/// Pixel-exact comparison of composed images
pub mod equality;
/// Best-neighbor graph construction from edge scores
pub mod graph;
/// Grid reconstruction by walking the neighbor graph
pub mod reconstruct;
/// Directional edge scoring between tile pairs
pub mod scoring;

pub use equality::images_equal;
pub use graph::build_graph;
pub use reconstruct::{ReconstructedOrder, Strategy, reconstruct, reconstruct_with};
