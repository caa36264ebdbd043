// SPDX-License-Identifier: MPL-2.0
use iced_shout::config::{self, StyleOverrides};
use iced_shout::style::BannerStyle;
use tempfile::tempdir;

#[test]
fn overrides_round_trip_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("shout.toml");

    let overrides = StyleOverrides {
        expanded_height: Some(72.0),
        top_inset: Some(32.0),
        subtitle_max_lines: Some(2),
        background_opacity: Some(0.6),
        drag_enabled: Some(false),
    };
    config::save_to_path(&overrides, &path).expect("Failed to write overrides");

    let loaded = config::load_from_path(&path).expect("Failed to load overrides");
    assert_eq!(loaded, overrides);

    let style = BannerStyle::default().with_overrides(&loaded);
    assert_eq!(style.metrics.expanded_height, 72.0);
    assert_eq!(style.metrics.top_inset, 32.0);
    assert_eq!(style.metrics.subtitle_max_lines, 2);
    assert_eq!(style.background.a, 0.6);
    assert!(!style.drag_enabled);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn an_empty_file_yields_default_overrides() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").expect("Failed to write empty file");

    let loaded = config::load_from_path(&path).expect("Failed to load overrides");
    assert_eq!(loaded, StyleOverrides::default());
}
