// Copies the static site (page, styles, sprite sheets) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }
    let out_dir = Path::new("dist");
    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=could not create dist/: {e}");
        return;
    }
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
