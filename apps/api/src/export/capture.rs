//! Rasterizing a rendered surface.

use async_trait::async_trait;
use image::ImageFormat;
use tokio::process::Command;
use tracing::{debug, error};

use super::surface::Surface;
use super::ExportError;

/// CSS width of a Letter page at 96 dpi.
pub const VIEWPORT_WIDTH_PX: u32 = 816;

/// A captured surface as tightly packed 8-bit RGB.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidRaster(format!(
                "empty raster {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(ExportError::InvalidRaster(format!(
                "expected {expected} bytes of RGB, got {}",
                rgb.len()
            )));
        }
        Ok(Self { width, height, rgb })
    }

    /// Decodes a PNG into RGB, dropping any alpha channel.
    pub fn from_png(bytes: &[u8]) -> Result<Self, ExportError> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| ExportError::Capture(format!("PNG decode failed: {e}")))?
            .to_rgb8();
        let (width, height) = decoded.dimensions();
        Self::new(width, height, decoded.into_raw())
    }
}

/// Turns a rendered surface into a fixed-resolution raster.
#[async_trait]
pub trait SurfaceCapture: Send + Sync {
    async fn capture(&self, surface: &Surface) -> Result<Raster, ExportError>;
}

/// Captures by shelling out to an HTML rasterizer with a wkhtmltoimage-compatible CLI.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    program: String,
    scale: u32,
}

impl CommandCapture {
    pub fn new(program: impl Into<String>, scale: u32) -> Self {
        Self {
            program: program.into(),
            scale: scale.max(1),
        }
    }

    fn args(&self, input: &str, output: &str) -> Vec<String> {
        vec![
            "--quiet".to_string(),
            "--format".to_string(),
            "png".to_string(),
            "--width".to_string(),
            (VIEWPORT_WIDTH_PX * self.scale).to_string(),
            "--zoom".to_string(),
            self.scale.to_string(),
            input.to_string(),
            output.to_string(),
        ]
    }
}

#[async_trait]
impl SurfaceCapture for CommandCapture {
    async fn capture(&self, surface: &Surface) -> Result<Raster, ExportError> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("surface.html");
        let output = dir.path().join("surface.png");
        tokio::fs::write(&input, surface.html.as_bytes()).await?;

        let args = self.args(&input.to_string_lossy(), &output.to_string_lossy());
        debug!(program = %self.program, ?args, "running rasterizer");
        let result = Command::new(&self.program).args(&args).output().await?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            error!(surface = %surface.id, status = %result.status, %stderr, "rasterizer failed");
            return Err(ExportError::Capture(format!(
                "{} exited with {}",
                self.program, result.status
            )));
        }

        let png = tokio::fs::read(&output).await?;
        tokio::task::spawn_blocking(move || Raster::from_png(&png))
            .await
            .map_err(|e| ExportError::Capture(e.to_string()))?
    }
}
