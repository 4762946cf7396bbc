//! Encoded polyline decoding
//!
//! GraphHopper returns paths in the Google polyline format with 5 decimal
//! places of precision.

use anyhow::Result;

/// Default precision for GraphHopper / Google polylines
pub const GRAPHHOPPER_PRECISION: u32 = 5;

/// Decode one zig-zag varint starting at `*pos`
fn decode_value(bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let mut shift = 0;
    let mut result = 0i64;
    loop {
        let Some(&raw) = bytes.get(*pos) else {
            anyhow::bail!("Invalid polyline encoding: truncated at byte {}", *pos);
        };
        if !(63..=126).contains(&raw) {
            anyhow::bail!("Invalid polyline encoding: byte {:#x} at {}", raw, *pos);
        }
        if shift > 60 {
            anyhow::bail!("Invalid polyline encoding: value too long at {}", *pos);
        }
        let chunk = (raw - 63) as i64;
        *pos += 1;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}

/// Decode a polyline into `[lat, lng]` pairs
pub fn decode(encoded: &str, precision: u32) -> Result<Vec<[f64; 2]>> {
    let factor = 10_f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while pos < bytes.len() {
        lat = lat
            .checked_add(decode_value(bytes, &mut pos)?)
            .ok_or_else(|| anyhow::anyhow!("Invalid polyline encoding: latitude overflow at {}", pos))?;
        lng = lng
            .checked_add(decode_value(bytes, &mut pos)?)
            .ok_or_else(|| anyhow::anyhow!("Invalid polyline encoding: longitude overflow at {}", pos))?;
        points.push([lat as f64 / factor, lng as f64 / factor]);
    }

    Ok(points)
}
