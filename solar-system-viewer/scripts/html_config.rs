//! Trunk post-build hook: make the generated script and wasm references
//! relative so the viewer can be served from any sub-path.

use std::env;
use std::fs;
use std::path::PathBuf;

const HTML_OUTPUT: &str = "SolarSystem.html";
const BUNDLE_FILES: [&str; 2] = ["solar-system-viewer.js", "solar-system-viewer_bg.wasm"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let staging_dir = env::var("TRUNK_STAGING_DIR")?;
    let staged_html_path = PathBuf::from(staging_dir).join(HTML_OUTPUT);

    let mut html = fs::read_to_string(&staged_html_path)?;
    for file in BUNDLE_FILES {
        html = html.replace(&format!("/{file}"), &format!("./{file}"));
    }

    fs::write(staged_html_path, html)?;
    Ok(())
}
