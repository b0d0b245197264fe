// Save the current screen as a PNG.
// Visual: nothing on screen; a file like `ellipse-000.png` appears in the snapshot dir.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let p = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(p >> 16) as u8, (p >> 8) as u8, p as u8])
    })
}

/// First `ellipse-NNN.png` in `dir` at or after index `start` that doesn't exist yet.
/// Returns the path and its index, so a restarted session never overwrites old shots.
pub fn next_free_path(dir: &Path, start: u32) -> (PathBuf, u32) {
    let mut n = start;
    loop {
        let path = dir.join(format!("ellipse-{n:03}.png"));
        if !path.exists() || n == u32::MAX {
            return (path, n);
        }
        n += 1;
    }
}

pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb).save(path)?;
    log::info!("snapshot written to {}", path.display());
    Ok(())
}
