// THEORY:
// The `PixelSource` is the decode boundary. The engine never decodes image
// formats itself; it consumes an already-decoded RGBA grid. The capability to
// produce that grid is injected, which keeps the scan/filter/map core pure and
// independently testable: tests hand it synthetic buffers, the page hands it
// decoded artwork, and neither side knows about the other.
//
// Key architectural principles:
// 1.  **Suspension only here**: Decoding is the single asynchronous step in an
//     image's lifecycle. Everything downstream of a resolved buffer runs to
//     completion synchronously.
// 2.  **Blocking work off the runtime**: Format decode is CPU-bound, so the
//     file-backed source runs it under `spawn_blocking` rather than stalling
//     the async executor.
// 3.  **Bounded scan input**: The scan is O(width * height), so multi-megapixel
//     rasters are downscaled here, before analysis, to bound latency. The page
//     displays a separately optimized asset; the analysis copy only needs
//     enough resolution to place overlay boxes.
// 4.  **Typed failure, degraded handling**: Decode failures are ordinary typed
//     errors. The session layer catches them and renders the image without
//     hotspots; nothing here can take the page down.

use crate::core_modules::pixel_buffer::{BufferShape, PixelBuffer};
use std::future::Future;
use std::path::PathBuf;

/// Decoded rasters above this pixel count are downscaled before analysis.
const MAX_ANALYSIS_PIXELS: u64 = 4_000_000;

/// Ways the decode boundary can fail to produce a buffer.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to read image resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image resource: {0}")]
    Image(#[from] image::ImageError),
    #[error("decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Shape(#[from] BufferShape),
}

/// Capability to decode one image resource into an RGBA grid.
pub trait PixelSource: Send + Sync {
    /// Stable identifier for this resource, carried into analytics events.
    fn id(&self) -> &str;

    /// Decodes the resource into a buffer in natural pixel space.
    fn decode(&self) -> impl Future<Output = Result<PixelBuffer, DecodeError>> + Send;
}

/// A `PixelSource` that reads and decodes an image file from disk.
pub struct FilePixelSource {
    path: PathBuf,
    id: String,
}

impl FilePixelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, id }
    }
}

impl PixelSource for FilePixelSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn decode(&self) -> Result<PixelBuffer, DecodeError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let decoded =
            tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
        buffer_from_decoded(decoded)
    }
}

/// Converts a decoded image into the engine's buffer form, downscaling
/// oversized rasters first.
fn buffer_from_decoded(decoded: image::DynamicImage) -> Result<PixelBuffer, DecodeError> {
    let pixels = decoded.width() as u64 * decoded.height() as u64;
    let decoded = if pixels > MAX_ANALYSIS_PIXELS {
        let shrink = (MAX_ANALYSIS_PIXELS as f64 / pixels as f64).sqrt();
        let target_width = (decoded.width() as f64 * shrink).round().max(1.0) as u32;
        let target_height = (decoded.height() as f64 * shrink).round().max(1.0) as u32;
        log::debug!(
            "downscaling {}x{} raster to {}x{} for analysis",
            decoded.width(),
            decoded.height(),
            target_width,
            target_height
        );
        decoded.thumbnail(target_width, target_height)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}
