use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for graphic that reads its config from `config_dir`
/// and ignores log filters from the environment
pub fn graphic(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphic");
    cmd.env("GRAPHIC_CONFIG_DIR", config_dir)
        .env_remove("GRAPHIC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `config.toml` into `config_dir`
#[allow(dead_code)]
pub fn write_config(config_dir: &Path, contents: &str) {
    fs::write(config_dir.join("config.toml"), contents).unwrap();
}

#[allow(dead_code)]
/// The A/B/C graph: A->B (4), A->C (1), C->B (1)
pub const DETOUR_EDGES: [&str; 6] = ["--edge", "A:B:4", "--edge", "A:C:1", "--edge", "C:B:1"];
