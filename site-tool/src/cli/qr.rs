use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use tracing::info;

const QUIET_ZONE_MODULES: u32 = 4;

#[derive(Debug, Clone, Parser)]
pub struct QrCommand {
    /// Address the poster should point at, e.g. http://10.2.36.243
    url: String,
    /// Output PNG path
    #[arg(short, long, default_value = "qrcode.png")]
    output: PathBuf,
    /// Pixels per QR module
    #[arg(short, long, default_value_t = 10)]
    scale: u32,
}

impl QrCommand {
    pub fn run(self) -> Result<()> {
        ensure!(self.scale >= 1, "scale must be at least 1");

        let code = QrCode::with_error_correction_level(self.url.as_bytes(), EcLevel::H)
            .context("failed to encode url as a qr code")?;

        let image = render(&code, self.scale);
        image
            .save(&self.output)
            .with_context(|| format!("failed to write '{}'", self.output.display()))?;

        info!(
            "wrote {}x{} qr poster for {} to '{}'",
            image.width(),
            image.height(),
            self.url,
            self.output.display()
        );

        Ok(())
    }
}

/// Black modules on white, with the standard four-module quiet zone.
fn render(code: &QrCode, scale: u32) -> GrayImage {
    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE_MODULES) * scale;
    let mut image = GrayImage::from_pixel(side, side, Luma([255]));

    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color == Color::Dark {
            let x0 = (index as u32 % modules + QUIET_ZONE_MODULES) * scale;
            let y0 = (index as u32 / modules + QUIET_ZONE_MODULES) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(x0 + dx, y0 + dy, Luma([0]));
                }
            }
        }
    }

    image
}
