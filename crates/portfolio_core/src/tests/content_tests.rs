use super::*;
use std::io::Write;

const MINIMAL: &str = r#"
footer = "built with egui"

[profile]
name = "Grace Hopper"
headline = "Compiler pioneer"
summary = "Wrote the first compiler."
location = "Arlington, VA"
email = "grace@example.com"
phone = "+1 555 0100"
linkedin = "https://linkedin.com/in/grace"
github = "https://github.com/grace"

[[projects]]
title = "A-0"
description = "Early compiler"
tools = ["UNIVAC"]
link = "https://example.com/a0"
"#;

#[test]
fn builtin_content_is_valid() {
    let content = PortfolioContent::builtin();
    content.validate().expect("builtin content validates");
    assert_eq!(content.education.len(), 3);
    assert_eq!(content.skills.len(), 4);
    assert_eq!(content.projects.len(), 3);
    assert_eq!(content.certifications.len(), 4);
    assert_eq!(content.activities.len(), 4);
}

#[test]
fn contact_uris_are_derived_from_profile() {
    let profile = PortfolioContent::builtin().profile;
    assert_eq!(profile.mailto(), "mailto:sushantpatil6217@gmail.com");
    assert_eq!(profile.tel(), "tel:+919975806217");
}

#[test]
fn toml_with_omitted_lists_defaults_them_to_empty() {
    let content = PortfolioContent::from_toml_str(MINIMAL).expect("parse");
    assert_eq!(content.profile.name, "Grace Hopper");
    assert!(content.education.is_empty());
    assert_eq!(content.projects[0].link.as_deref(), Some("https://example.com/a0"));
    assert_eq!(content.footer, "built with egui");
}

#[test]
fn invalid_link_is_rejected() {
    let raw = MINIMAL.replace("https://github.com/grace", "not a url");
    let err = PortfolioContent::from_toml_str(&raw).expect_err("invalid");
    assert!(err.to_string().contains("profile.github"), "{err}");
}

#[test]
fn empty_name_is_rejected() {
    let raw = MINIMAL.replace("Grace Hopper", " ");
    assert!(matches!(
        PortfolioContent::from_toml_str(&raw),
        Err(ContentError::Invalid(_))
    ));
}

#[test]
fn load_reads_file_and_reports_missing_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(MINIMAL.as_bytes()).expect("write");
    let content = PortfolioContent::load(file.path()).expect("load");
    assert_eq!(content.profile.email, "grace@example.com");

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        PortfolioContent::load(&missing),
        Err(ContentError::Io { .. })
    ));
}

#[test]
fn builtin_round_trips_through_toml() {
    let builtin = PortfolioContent::builtin();
    let raw = toml::to_string(&builtin).expect("serialize");
    assert_eq!(PortfolioContent::from_toml_str(&raw).expect("parse"), builtin);
}
