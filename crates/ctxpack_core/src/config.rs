use log::{debug, warn};
use std::{fs, path::Path};

use crate::constants::MANIFEST_FILE;

/// Reads the project manifest, substituting an empty JSON object when the
/// file is missing or unreadable. Never fails; the aggregated report always
/// carries a manifest section.
pub fn read_manifest(root: &Path) -> String {
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        warn!("{} not found.", MANIFEST_FILE);
        return "{}".to_string();
    }

    match fs::read_to_string(&manifest_path) {
        Ok(content) => {
            debug!("Read manifest from {}", manifest_path.display());
            content
        }
        Err(e) => {
            warn!("Error reading {}: {}", MANIFEST_FILE, e);
            "{}".to_string()
        }
    }
}
