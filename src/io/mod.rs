//! I/O module for writing and reading muscle assets

pub mod json;
pub mod vtu;

pub use json::{read_json_asset, write_json_asset};
pub use vtu::{write_asset_vtu, DEFAULT_VTK_VERSION};
