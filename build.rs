//! Code generation for launcher artifacts.
//!
//! In build mode none of the injection variables are set and the generated
//! constants describe a plain generator binary. When the builder recompiles
//! this crate it sets them, and the resulting binary starts in run mode with
//! the shortcut target baked in.
//!
//! The variable names must stay in sync with `src/builder/codegen.rs`.

use std::{env, fs, path::PathBuf};

const INJECTED: &[(&str, &str)] = &[
    ("SHORTCUT_LAUNCHER_MODE", "MODE"),
    ("SHORTCUT_LAUNCHER_TARGET_OS", "TARGET_OS"),
    ("SHORTCUT_LAUNCHER_URL", "URL"),
    ("SHORTCUT_LAUNCHER_ICON", "ICON"),
    ("SHORTCUT_LAUNCHER_COMMAND", "COMMAND"),
];

const RESOURCE_VAR: &str = "SHORTCUT_LAUNCHER_RESOURCE";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for (var, _) in INJECTED {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-env-changed={RESOURCE_VAR}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let mut generated = String::from("// @generated by build.rs\n");
    for (var, constant) in INJECTED {
        let value = env::var(var).unwrap_or_default();
        // Debug formatting of a str is a valid Rust string literal.
        generated.push_str(&format!("pub const {constant}: &str = {value:?};\n"));
    }

    fs::write(out_dir.join("embedded_config.rs"), generated)
        .expect("failed to write embedded_config.rs");

    embed_icon_resource();
}

#[cfg(windows)]
fn embed_icon_resource() {
    let Ok(resource) = env::var(RESOURCE_VAR) else {
        return;
    };
    if resource.is_empty() || env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }
    println!("cargo:rerun-if-changed={resource}");

    let mut res = winresource::WindowsResource::new();
    res.set_resource_file(&resource);
    res.compile()
        .expect("Failed to compile the launcher icon resource. Ensure the icon is a valid ICO file.");
}

#[cfg(not(windows))]
fn embed_icon_resource() {
    if env::var(RESOURCE_VAR).is_ok_and(|r| !r.is_empty()) {
        println!("cargo:warning=icon resources are only embedded when building on Windows");
    }
}
