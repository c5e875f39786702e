//! Procedural asset generators for Displexity
//!
//! Generates the project's fixed set of binary assets:
//!
//! - [`icons`]: 32-bit ICO icons computed pixel-by-pixel from geometric predicates
//! - [`raster`]: canvas-drawn icons packaged by the `image` crate (feature `raster`)
//! - [`audio`]: sine-wave effects and loops in the DISH/DISLL containers
//! - [`link`]: copies `.disll` files into the runtime discovery directory
//!
//! Each binary in this crate is a single-pass batch job; the library holds the
//! generation logic so the binaries and `xtask` share it.
//!
//! # Example
//! ```no_run
//! use disp_gen::audio::{effect, SAMPLE_RATE};
//! use disp_gen::icons::{build_icon_file, IconKind};
//!
//! let ico = build_icon_file(IconKind::Compiler, &[32])?;
//! std::fs::write("disp.ico", ico)?;
//!
//! let samples = effect(0.1, 440.0, SAMPLE_RATE);
//! assert_eq!(samples.len(), 4410);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod audio;
pub mod config;
pub mod icons;
pub mod link;
pub mod output;
#[cfg(feature = "raster")]
pub mod raster;

/// Install the fmt subscriber used by every binary
///
/// Reads directives from `RUST_LOG` (e.g. `disp_gen=debug`) on top of a
/// global `info` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();
}
