#![doc = r#"
bgstrip — turn near-white image backgrounds transparent.

Each pixel whose red, green and blue channels are all strictly greater than a
threshold (200 by default) is replaced by fully transparent white; every other
pixel is kept exactly as decoded, alpha included. Results are written as RGBA
PNGs with the input's base name. The crate powers the `bgstrip` CLI and can be
embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
bgstrip = "0.1"
```

Quick start: one file
---------------------
```rust,no_run
use std::path::Path;

fn main() -> bgstrip::Result<()> {
    let stats = bgstrip::strip_file_to_path(
        Path::new("public/image/logo.jpg"),
        Path::new("public/image/logo.png"),
        200,
    )?;
    println!("cleared {} of {} pixels", stats.cleared, stats.total_pixels());
    Ok(())
}
```

In-memory
---------
```rust
use bgstrip::{strip_background, TRANSPARENT_WHITE};
use image::{Rgba, RgbaImage};

let img = RgbaImage::from_raw(2, 1, vec![255, 255, 255, 255, 10, 10, 10, 255]).unwrap();
let out = strip_background(&img, 200);
assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
assert_eq!(*out.get_pixel(1, 0), Rgba([10, 10, 10, 255]));
```

Batch helpers
-------------
```rust,no_run
use bgstrip::{process_directory_with, StripConfig};

fn main() -> bgstrip::Result<()> {
    let config = StripConfig::default(); // public/image, threshold 200, png/jpg/jpeg

    let report = process_directory_with(&config, |input, outcome| match outcome {
        Ok(output) => println!("Processed: {} -> {}", input.display(), output.display()),
        Err(failure) => println!("{failure}"),
    })?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
Library functions return `bgstrip::Result<T>`. Per-file batch results are
`Result<PathBuf, ProcessingFailure>`, where `ProcessingFailure` carries the
input path and the underlying `bgstrip::Error`.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — `StripConfig` and the per-pixel stripper.
- [`io`] — decoding, directory scanning, PNG output.
- [`types`] — `PixelClass`, `StripStats`, `ExtensionSet`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_THRESHOLD, StripConfig};
pub use error::{Error, ProcessingFailure, Result};
pub use types::{ExtensionSet, PixelClass, StripStats};

// Transform
pub use crate::core::processing::strip::{
    TRANSPARENT_WHITE, classify, strip_background, strip_background_in_place,
};

// I/O helpers
pub use io::reader::open_raster;
pub use io::writers::png::{encode_png, write_png};

// High-level API re-exports
pub use api::{
    BatchReport, FileOutcome, derive_output_path, process_directory, process_directory_with,
    resolve_output_collisions, strip_file, strip_file_to_path,
};
