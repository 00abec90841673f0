pub mod circle;
pub mod edge;
pub mod triangle;

pub use circle::Circle;
pub use edge::Edge;
pub use triangle::Triangle;
