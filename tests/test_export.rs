use loon_rules::{export_rules, fetch_readme, Category, Entry, LoonError, LoonExporter, Settings};
use std::fs;
use std::path::PathBuf;

const README: &str = include_str!("fixtures/README.md");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/README.md")
}

fn read_entries(path: &std::path::Path) -> Vec<Entry> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_export_from_url() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/luestr/ShuntRules/main/README.md")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body(README)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");

    let summary = LoonExporter::builder()
        .url(format!("{}/luestr/ShuntRules/main/README.md", server.url()))
        .output(&output)
        .run()
        .unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.file_name(), "loon-rules.json");

    let entries = read_entries(&output);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Advertising", "Apple", "Netflix", "BiliBili", "Café Réseau"]
    );
    assert_eq!(entries[2].url, "https://example.com/Loon/Netflix.list");
}

#[test]
fn test_export_output_is_pretty_and_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");

    LoonExporter::builder()
        .file(fixture_path())
        .output(&output)
        .run()
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("[\n  {\n    \"name\": \"Advertising\",\n"));
    assert!(content.contains("\"Café Réseau\""));
    assert!(content.ends_with("}\n]\n"));
    assert!(!content.ends_with("\n\n"));
}

#[test]
fn test_export_reports_categories() {
    let dir = tempfile::tempdir().unwrap();
    let summary = LoonExporter::builder()
        .file(fixture_path())
        .output(dir.path().join("loon-rules.json"))
        .run()
        .unwrap();

    assert_eq!(
        summary.categories,
        vec![
            (Category::Advertising, 1),
            (Category::Apple, 1),
            (Category::China, 1),
            (Category::Global, 1),
            (Category::Other, 1),
        ]
    );
}

#[test]
fn test_export_without_matches_writes_empty_array() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/README.md")
        .with_status(200)
        .with_body("# Nothing here\n\n| 1 | plain cell |\n")
        .create();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");

    let summary = LoonExporter::builder()
        .url(format!("{}/README.md", server.url()))
        .output(&output)
        .run()
        .unwrap();

    assert_eq!(summary.count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
}

#[test]
fn test_http_error_leaves_output_untouched() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/README.md")
        .with_status(500)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");
    fs::write(&output, "previous\n").unwrap();

    let result = LoonExporter::builder()
        .url(format!("{}/README.md", server.url()))
        .output(&output)
        .run();

    assert!(matches!(result, Err(LoonError::FetchError { .. })));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_connection_error_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");

    let result = LoonExporter::builder()
        .url("http://127.0.0.1:1/README.md")
        .output(&output)
        .run();

    assert!(matches!(result, Err(LoonError::FetchError { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_local_readme() {
    let dir = tempfile::tempdir().unwrap();
    let result = LoonExporter::builder()
        .file(dir.path().join("README.md"))
        .output(dir.path().join("loon-rules.json"))
        .run();

    assert!(matches!(result, Err(LoonError::ReadError { .. })));
}

#[test]
fn test_export_rules_prefers_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("rules.json");
    let settings = Settings {
        source_url: "http://127.0.0.1:1/README.md".to_string(),
        source_file: Some(fixture_path()),
        output_path: Some(output.clone()),
        timeout_secs: None,
    };

    let summary = export_rules(&settings).unwrap();
    assert_eq!(summary.count, 5);
    assert_eq!(summary.file_name(), "rules.json");
    assert_eq!(read_entries(&output).len(), 5);
}

#[test]
fn test_invalid_utf8_body_leaves_output_untouched() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/README.md")
        .with_status(200)
        .with_body(&b"| 1 | [[Loon] Caf\xe9](https://example.com/a.list) |\n"[..])
        .create();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");
    fs::write(&output, "previous\n").unwrap();

    let result = LoonExporter::builder()
        .url(format!("{}/README.md", server.url()))
        .output(&output)
        .run();

    assert!(matches!(result, Err(LoonError::DecodeError { .. })));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_utf8_body_with_latin1_charset_header() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/README.md")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=iso-8859-1")
        .with_body("| 1 | [[Loon] Café](https://example.com/cafe.list) |\n")
        .create();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("loon-rules.json");

    LoonExporter::builder()
        .url(format!("{}/README.md", server.url()))
        .output(&output)
        .run()
        .unwrap();

    assert_eq!(
        read_entries(&output),
        vec![Entry::new("Café", "https://example.com/cafe.list")]
    );
}

#[test]
fn test_fetch_readme() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/README.md")
        .with_status(200)
        .with_body(README)
        .create();

    let readme = fetch_readme(&format!("{}/README.md", server.url())).unwrap();
    assert_eq!(readme, README);

    let result = fetch_readme("http://127.0.0.1:1/README.md");
    assert!(matches!(result, Err(LoonError::FetchError { .. })));
}
