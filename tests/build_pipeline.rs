//! End-to-end builds against files on disk

use std::fs;

use folio::{BuildConfig, ContentWarning, Error, Portfolio};

#[test]
fn build_writes_page_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site/index.html");
    let report = folio::build(&BuildConfig {
        output: out.clone(),
        year: Some(2026),
        ..Default::default()
    })
    .expect("build");

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(report.bytes, written.len());
    assert_eq!(report.digest, folio::site::digest(&written));
    assert_eq!((report.skills, report.projects, report.experience, report.socials), (4, 4, 0, 6));
    assert!(report.warnings.is_empty());
}

#[test]
fn same_content_same_digest() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = |name: &str| BuildConfig {
        output: dir.path().join(name),
        year: Some(2026),
        ..Default::default()
    };
    let a = folio::build(&cfg("a.html")).unwrap();
    let b = folio::build(&cfg("b.html")).unwrap();
    assert_eq!(a.digest, b.digest);
}

#[test]
fn json_content_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("portfolio.json");
    let mut p = Portfolio::sample();
    p.owner.name = "Ana Lima".into();
    fs::write(&content, p.to_json_string().unwrap()).unwrap();

    let out = dir.path().join("index.html");
    folio::build(&BuildConfig {
        content: Some(content),
        output: out.clone(),
        year: Some(2026),
        ..Default::default()
    })
    .unwrap();
    assert!(fs::read_to_string(out).unwrap().contains(r#"id="heroName">Ana Lima</h1>"#));
}

#[test]
fn missing_container_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let skeleton = dir.path().join("skeleton.html");
    let html = folio::Skeleton::builtin()
        .into_html()
        .replace(r#"id="projectsGrid""#, r#"id="grid""#);
    fs::write(&skeleton, html).unwrap();

    let out = dir.path().join("index.html");
    let err = folio::build(&BuildConfig {
        skeleton: Some(skeleton),
        output: out.clone(),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, Error::MissingContainer(id) if id == "projectsGrid"));
    assert!(!out.exists());
}

#[test]
fn strict_build_rejects_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("portfolio.toml");
    let mut p = Portfolio::sample();
    p.projects[0].category = "ML".into();
    fs::write(&content, p.to_toml_string().unwrap()).unwrap();

    let out = dir.path().join("index.html");
    let cfg = BuildConfig {
        content: Some(content),
        skeleton: None,
        output: out.clone(),
        year: Some(2026),
        strict: true,
    };
    match folio::build(&cfg) {
        Err(Error::ContentWarnings(w)) => {
            assert_eq!(w.len(), 1);
            assert!(matches!(&w[0], ContentWarning::UnfilteredCategory { category, .. } if category == "ML"));
        }
        other => panic!("expected content warnings, got {:?}", other.map(|r| r.digest)),
    }
    assert!(!out.exists());

    // Non-strict builds go ahead and report the warning
    let report = folio::build(&BuildConfig { strict: false, ..cfg }).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert!(out.exists());
}

#[test]
fn unreadable_content_is_a_config_error() {
    let err = folio::build(&BuildConfig {
        content: Some("does/not/exist.toml".into()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}
