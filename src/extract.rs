use std::path::Path;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use anyhow::{bail, Context, Result};
use rand::Rng;

use crate::answers::LogoAsset;

/// The fixed brand palette the mock extractor draws from.
///
/// Stand-in for real perceptual color extraction: the result has no
/// relationship to the pixel content of the uploaded logo.
pub const BRAND_PALETTE: [&str; 5] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#f59e0b", // yellow
    "#ef4444", // red
    "#8b5cf6", // purple
];

/// Pick 3-5 colors uniformly, with replacement, from the fixed palette.
/// Repeated invocations may disagree; that is expected.
pub fn extract_colors<R: Rng>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(3..=5);
    (0..count)
        .map(|_| BRAND_PALETTE[rng.gen_range(0..BRAND_PALETTE.len())].to_string())
        .collect()
}

/// Validate and decode a logo file.
///
/// The declared media type (file extension) must name an image format;
/// anything else is rejected before the file is read. Decoding only
/// establishes that the file is a real image and measures it.
pub fn load_logo(path: &Path) -> Result<LogoAsset> {
    if image::ImageFormat::from_path(path).is_err() {
        bail!(
            "{} is not an image file. Please choose an image (PNG, JPEG, WebP, BMP, TIFF, GIF)",
            path.display()
        );
    }

    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!("unsupported or corrupt image: {}", path.display())
        }
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LogoAsset {
        path: path.to_path_buf(),
        file_name,
        width: img.width(),
        height: img.height(),
    })
}

/// Completion of a background logo load.
///
/// `generation` echoes the request's sequence number. A completion whose
/// generation no longer matches the session's current one must be dropped:
/// the user removed or replaced the logo while the read was in flight.
#[derive(Debug)]
pub struct LogoLoaded {
    pub generation: u64,
    pub result: Result<LogoAsset>,
}

/// Read and decode the logo off the UI thread, reporting on `tx`.
/// Fire-and-forget; the receiver decides whether the result still applies.
pub fn spawn_logo_load(path: PathBuf, generation: u64, tx: Sender<LogoLoaded>) {
    std::thread::spawn(move || {
        let result = load_logo(&path);
        let _ = tx.send(LogoLoaded { generation, result });
    });
}
