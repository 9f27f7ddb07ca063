//! Build script to generate the asset manifest
//!
//! Scans assets/walls/ and assets/icons/ and writes a manifest listing the
//! PNG files in each, since WASM can't enumerate directories at runtime.

use std::fs;
use std::path::Path;

/// Asset folders, in manifest order: (section name, directory)
const SECTIONS: &[(&str, &str)] = &[("walls", "assets/walls"), ("icons", "assets/icons")];

fn main() {
    for (_, dir) in SECTIONS {
        println!("cargo:rerun-if-changed={}", dir);
    }

    let mut manifest = String::new();

    for (section, dir) in SECTIONS {
        let dir = Path::new(dir);
        if !dir.exists() {
            continue;
        }

        let mut names: Vec<String> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.extension()
                        .map(|ext| ext.to_ascii_lowercase() == "png")
                        .unwrap_or(false)
                })
                .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
                .collect(),
            Err(_) => continue,
        };

        names.sort();

        if !names.is_empty() {
            // Section header: [walls] / [icons]
            manifest.push_str(&format!("[{}]\n", section));
            for name in names {
                manifest.push_str(&format!("{}\n", name));
            }
            manifest.push('\n');
        }
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let manifest_path = Path::new(&out_dir).join("asset_manifest.txt");
    fs::write(&manifest_path, manifest).expect("failed to write asset manifest");
}
