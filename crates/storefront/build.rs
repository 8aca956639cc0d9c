//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so the layout can link an immutable,
//! content-addressed copy of it.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Length of the hex fingerprint embedded in the stylesheet file name.
const FINGERPRINT_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_dir = Path::new(&manifest_dir).join("static/css");
    let css_path = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            // Without a stylesheet the layout falls back to the plain path.
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let fingerprint: String = digest.chars().take(FINGERPRINT_LEN).collect();

    println!("cargo:rustc-env=CSS_HASH={fingerprint}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{fingerprint}.css")))
        .expect("Failed to copy CSS to derived directory");
}
