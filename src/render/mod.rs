//! CPU rasterization of header strips and logo text.
pub mod composite;
pub mod raster;
pub mod text;
