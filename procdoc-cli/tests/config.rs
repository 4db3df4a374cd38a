use assert_cmd::cargo::cargo_bin_cmd;
use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("procdoc-export")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn explicit_config_relabels_toc_and_default_name() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[export]
default_project_name = "Ausschreibung"

[docx.labels]
toc_title = "Inhaltsverzeichnis"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("procdoc");
    cmd.current_dir(dir.path())
        .arg(fixture_path("tender.md"))
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--extra-date")
        .arg("2025-02-14")
        .arg("--config")
        .arg(&config_path);

    cmd.assert().success();

    let docx = dir.path().join("Ausschreibung_2025-02-14.docx");
    let mut archive = zip::ZipArchive::new(File::open(&docx).unwrap()).unwrap();
    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut document)
        .unwrap();
    assert!(document.contains("Inhaltsverzeichnis"));
    assert!(document.contains("Ausschreibung"));
}

#[test]
fn working_directory_config_sets_default_format() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("procdoc.toml"),
        "[export]\nformat = \"text\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("procdoc");
    cmd.current_dir(dir.path()).arg(fixture_path("tender.md"));

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("Project Overview"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[export]\ninclude_toc = \"maybe\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("procdoc");
    cmd.current_dir(dir.path())
        .arg(fixture_path("tender.md"))
        .arg("--to")
        .arg("text")
        .arg("--config")
        .arg(&config_path);

    cmd.assert().failure();
}
