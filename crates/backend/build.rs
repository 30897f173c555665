use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Place the workspace config.toml next to the built binary, where
/// `load_config` looks first.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let source = manifest_dir.join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml at {}, the embedded defaults apply", source.display());
        return;
    }

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let out_dir = env::var("OUT_DIR").unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_default();
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=cannot locate target/{} directory", profile);
        return;
    };

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=failed to copy config.toml: {}", e);
    }
}
