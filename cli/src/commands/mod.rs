pub mod check;
pub mod download;
pub mod render;
