use std::{fs, path::Path};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::Serialize;
use serde_json::Serializer;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum JsonStyle {
    // What the front end ships
    #[default]
    Compact,
    Pretty,
}

pub fn encode_json<T: Serialize>(data: &T, style: JsonStyle) -> Result<Vec<u8>> {
    let mut data_bytes = vec![];
    match style {
        JsonStyle::Compact => serde_json::to_writer(&mut data_bytes, data)?,
        JsonStyle::Pretty => {
            let formatter = PrettyCompactFormatter::new();
            let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
            data.serialize(&mut ser)?;
        }
    }
    Ok(data_bytes)
}

pub fn save_json<T: Serialize>(path: &Path, data: &T, style: JsonStyle) -> Result<()> {
    info!("Saving {}", path.display());
    let data_bytes = encode_json(data, style)?;
    create_parent_dir(path)?;
    fs::write(path, &data_bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn create_parent_dir(path: &Path) -> Result<()> {
    let parent = path.parent().context("invalid parent directory")?;
    fs::create_dir_all(parent)
        .with_context(|| format!("creating directory {}", parent.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        version: u8,
        pixels: Vec<u8>,
    }

    #[test]
    fn compact_has_no_whitespace() {
        let sample = Sample {
            version: 1,
            pixels: vec![1, 2],
        };
        let bytes = encode_json(&sample, JsonStyle::Compact).unwrap();
        assert_eq!(bytes, br#"{"version":1,"pixels":[1,2]}"#);
    }

    #[test]
    fn pretty_round_trips_to_same_value() {
        let sample = Sample {
            version: 1,
            pixels: vec![3, 4, 5],
        };
        let pretty = encode_json(&sample, JsonStyle::Pretty).unwrap();
        let compact = encode_json(&sample, JsonStyle::Compact).unwrap();
        let a: serde_json::Value = serde_json::from_slice(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_slice(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pretty_keeps_short_values_on_one_line() {
        let sample = Sample {
            version: 1,
            pixels: vec![3, 4, 5],
        };
        let pretty = encode_json(&sample, JsonStyle::Pretty).unwrap();
        assert_eq!(pretty, br#"{ "version": 1, "pixels": [ 3, 4, 5 ] }"#);
    }

    #[test]
    fn pretty_wraps_long_arrays() {
        let sample = Sample {
            version: 1,
            pixels: vec![7; 256],
        };
        let pretty = encode_json(&sample, JsonStyle::Pretty).unwrap();
        assert!(pretty.contains(&b'\n'));
    }
}
