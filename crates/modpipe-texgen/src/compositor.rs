//! Batch compositor over (template, ore, stone) combinations.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, RgbaImage};
use tracing::{debug, info};

use crate::error::{TexGenError, TexGenResult};
use crate::palette::{load_ore_colors, parse_hex_color};

/// Input and output locations for one compositing run.
#[derive(Debug, Clone)]
pub struct CompositorConfig {
    /// Path of the ore color CSV
    pub colors: PathBuf,
    /// Directory of template mask PNGs
    pub templates_dir: PathBuf,
    /// Directory of stone base textures
    pub stones_dir: PathBuf,
    /// Directory receiving composited PNGs
    pub output_dir: PathBuf,
}

/// One decoded input image with its naming stem.
struct NamedImage {
    stem: String,
    path: PathBuf,
    image: RgbaImage,
}

/// Composite every (template, ore, stone) combination and return the
/// written output paths.
///
/// Each input image is decoded once and reused across the triple loop.
/// Output files are named `{template}_{ore}_{stone}.png` and always
/// overwritten; every run recomputes every combination.
pub fn composite_all(config: &CompositorConfig) -> TexGenResult<Vec<PathBuf>> {
    let colors = load_ore_colors(&config.colors)?;
    let templates = load_images(&list_templates(&config.templates_dir)?)?;
    let stones = load_images(&list_stones(&config.stones_dir)?)?;
    fs::create_dir_all(&config.output_dir)?;

    info!(
        templates = templates.len(),
        ores = colors.len(),
        stones = stones.len(),
        "compositing"
    );

    let mut written = Vec::new();
    for template in &templates {
        for (ore, hex) in &colors {
            let color = parse_hex_color(hex)?;
            for stone in &stones {
                if template.image.dimensions() != stone.image.dimensions() {
                    return Err(TexGenError::SizeMismatch {
                        template: template.path.clone(),
                        stone: stone.path.clone(),
                    });
                }

                // Solid ore-color layer masked by the template's alpha
                let (width, height) = stone.image.dimensions();
                let mut layer = RgbaImage::from_pixel(width, height, color);
                for (layer_pixel, template_pixel) in
                    layer.pixels_mut().zip(template.image.pixels())
                {
                    layer_pixel.0[3] = template_pixel.0[3];
                }

                let mut output = stone.image.clone();
                imageops::overlay(&mut output, &layer, 0, 0);

                let name = format!("{}_{}_{}.png", template.stem, ore, stone.stem);
                let path = config.output_dir.join(name);
                output.save(&path)?;
                debug!(path = %path.display(), "wrote composite");
                written.push(path);
            }
        }
    }

    Ok(written)
}

/// Template masks: files whose name contains `.png`, sorted by name.
fn list_templates(dir: &Path) -> TexGenResult<Vec<PathBuf>> {
    list_files(dir, |name| name.contains(".png"))
}

/// Stone textures: every file in the directory, sorted by name.
fn list_stones(dir: &Path) -> TexGenResult<Vec<PathBuf>> {
    list_files(dir, |_| true)
}

fn list_files(dir: &Path, keep: impl Fn(&str) -> bool) -> TexGenResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if keep(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn load_images(paths: &[PathBuf]) -> TexGenResult<Vec<NamedImage>> {
    paths
        .iter()
        .map(|path| {
            let image = image::open(path)?.to_rgba8();
            Ok(NamedImage {
                stem: file_stem(path),
                path: path.clone(),
                image,
            })
        })
        .collect()
}

/// File name up to the first `.`, for output naming.
fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}
