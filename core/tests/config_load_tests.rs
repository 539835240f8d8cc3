//! Layered configuration loading against a scratch home and working
//! directory.
//!
//! `load_default` reads env vars and the process working directory, both
//! process-global, so this file keeps everything in a single test.

use geest_core::api::load_default;

#[test]
fn layered_load_order_and_env_overrides() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    std::env::set_var("HOME", home.path());
    std::env::set_current_dir(work.path()).unwrap();
    std::env::remove_var("GEEST_VIEWER_PROGRAM");
    std::env::remove_var("GEEST_OVERPASS_URL");

    // Nothing on disk: defaults, with the log directory filled in under
    // the home data dir.
    let cfg = load_default().unwrap();
    assert_eq!(cfg.viewer.program, "./app.py");
    assert_eq!(cfg.pipeline.steps.len(), 3);
    assert_eq!(
        cfg.overpass.base_url,
        "https://overpass-api.de/api/interpreter"
    );
    assert!(home.path().join(".geest").join("logs").is_dir());
    assert!(cfg.logging.directory.unwrap().contains(".geest"));

    // A geest.toml in the working directory replaces the defaults.
    std::fs::write(
        work.path().join("geest.toml"),
        "[viewer]\nprogram = \"./local.py\"\n",
    )
    .unwrap();
    let cfg = load_default().unwrap();
    assert_eq!(cfg.viewer.program, "./local.py");

    // ~/.geest/config.toml wins over the local file.
    std::fs::write(
        home.path().join(".geest").join("config.toml"),
        "[viewer]\nprogram = \"./home.py\"\n",
    )
    .unwrap();
    let cfg = load_default().unwrap();
    assert_eq!(cfg.viewer.program, "./home.py");

    // Env overrides win over any file.
    std::env::set_var("GEEST_VIEWER_PROGRAM", "./env.py");
    std::env::set_var("GEEST_OVERPASS_URL", "http://localhost:9999/api");
    let cfg = load_default().unwrap();
    assert_eq!(cfg.viewer.program, "./env.py");
    assert_eq!(cfg.overpass.base_url, "http://localhost:9999/api");

    // Blank override values are ignored.
    std::env::set_var("GEEST_VIEWER_PROGRAM", "   ");
    let cfg = load_default().unwrap();
    assert_eq!(cfg.viewer.program, "./home.py");

    std::env::remove_var("GEEST_VIEWER_PROGRAM");
    std::env::remove_var("GEEST_OVERPASS_URL");
}
