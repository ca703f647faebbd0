//! Ore color table loaded from CSV.

use std::collections::BTreeMap;
use std::path::Path;

use image::Rgba;
use tracing::debug;

use crate::error::{TexGenError, TexGenResult};

/// Column holding the ore name.
const NAME_COLUMN: &str = "Name";
/// Column holding the ore tint as a hex string.
const COLOR_COLUMN: &str = "Ore Hex Color";

/// Load the ore -> hex-color mapping from a CSV file.
///
/// Column positions are resolved from the header. Rows whose field count
/// differs from the header's are skipped without error; the hex strings
/// themselves are validated later, at composite time.
pub fn load_ore_colors(path: &Path) -> TexGenResult<BTreeMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let name_index = column_index(&headers, NAME_COLUMN)?;
    let color_index = column_index(&headers, COLOR_COLUMN)?;
    let width = headers.len();

    let mut colors = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != width {
            debug!(fields = record.len(), expected = width, "skipping short row");
            continue;
        }
        colors.insert(record[name_index].to_string(), record[color_index].to_string());
    }

    Ok(colors)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> TexGenResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TexGenError::MissingColumn(name.to_string()))
}

/// Parse a `RRGGBB` hex string (leading `#` optional) into an opaque
/// RGBA pixel.
pub fn parse_hex_color(hex: &str) -> TexGenResult<Rgba<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TexGenError::InvalidHexColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| TexGenError::InvalidHexColor(hex.to_string()))
    };

    Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}
