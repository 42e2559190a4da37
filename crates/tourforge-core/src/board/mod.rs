//! Board geometry: cells, board extents, rectangular sub-boards and knight moves.

mod coord;
mod region;
mod shape;


pub use coord::{is_knight_move, Coord, KNIGHT_STEPS};
pub use region::Region;
pub use shape::BoardShape;
