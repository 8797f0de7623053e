pub mod resolution;
pub mod split_point;
