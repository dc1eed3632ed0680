//! I/O layer: decoding inputs into RGBA rasters (`reader`), listing candidate
//! files in a directory (`scan`), and PNG output (`writers`).
pub mod reader;
pub use reader::open_raster;

pub mod scan;
pub use scan::{ScanResult, has_supported_extension, iterate_images};

pub mod writers;
