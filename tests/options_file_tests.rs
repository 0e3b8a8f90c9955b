// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for loading option bags from disk

use display_names::{DisplayNamesOptions, DisplayNamesResolver, EmbeddedProvider, OptionsFormat};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_json_options() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    fs::write(&path, r#"{"type": "currency", "fallback": "none"}"#).expect("write options");

    let options = DisplayNamesOptions::from_path(&path).expect("json options should load");
    assert_eq!(
        options,
        DisplayNamesOptions::new("currency").with_fallback("none")
    );
}

#[test]
fn test_load_yaml_options_and_build() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.yaml");
    fs::write(&path, "type: region\nstyle: long\n").expect("write options");

    let options = DisplayNamesOptions::from_path(&path).expect("yaml options should load");
    let resolver =
        DisplayNamesResolver::new(&EmbeddedProvider, &["en"], &options, &icu_locid::locale!("en"))
            .expect("options from file are valid");
    assert_eq!(
        resolver.of("GB").expect("valid region").as_deref(),
        Some("United Kingdom")
    );
}

#[test]
fn test_snapshot_written_and_reloaded() {
    let resolver = DisplayNamesResolver::new(
        &EmbeddedProvider,
        &["de"],
        &DisplayNamesOptions::new("script").with_style("long"),
        &icu_locid::locale!("en"),
    )
    .expect("valid construction");
    let snapshot = resolver.resolved_options();

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("snapshot.yml");
    fs::write(&path, OptionsFormat::Yaml.serialize(&snapshot).expect("serialize"))
        .expect("write snapshot");

    // A snapshot carries `locale`, which is not a construction option.
    let err = DisplayNamesOptions::from_path(&path).expect_err("locale is not an option");
    assert!(format!("{:#}", err).contains("parsing"));

    let reloaded = DisplayNamesOptions::from(&snapshot);
    let again = DisplayNamesResolver::new(
        &EmbeddedProvider,
        &[snapshot.locale.as_str()],
        &reloaded,
        &icu_locid::locale!("en"),
    )
    .expect("snapshot options are valid");
    assert_eq!(again.resolved_options(), snapshot);
}

#[test]
fn test_missing_and_unsupported_files() {
    let dir = TempDir::new().expect("temp dir");

    let missing = DisplayNamesOptions::from_path(&dir.path().join("absent.json"))
        .expect_err("missing file");
    assert!(format!("{:#}", missing).contains("reading"));

    let toml = dir.path().join("names.toml");
    fs::write(&toml, "type = \"region\"\n").expect("write options");
    let unsupported = DisplayNamesOptions::from_path(&toml).expect_err("unsupported extension");
    assert!(unsupported.to_string().contains("unsupported options file"));
}
