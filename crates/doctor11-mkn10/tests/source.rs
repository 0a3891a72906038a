use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use doctor11_mkn10::{fetch, load, load_file, CatalogSource, DataLoadError};

/// Serve a single canned HTTP response on a loopback port.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}/mkn10.json")
}

#[test]
fn loads_local_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(r#"{ "I63": { "d": "Mozkový infarkt" } }"#.as_bytes())
        .unwrap();

    let catalog = load(&CatalogSource::File {
        path: file.path().to_path_buf(),
    })
    .unwrap();
    assert_eq!(catalog.describe("i63"), Some("Mozkový infarkt"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DataLoadError::Read { .. }));
}

#[test]
fn malformed_file_is_a_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"I63\": ").unwrap();

    let err = load(&CatalogSource::File {
        path: file.path().to_path_buf(),
    })
    .unwrap_err();
    assert!(matches!(err, DataLoadError::Malformed(_)));
}

#[test]
fn bundled_dataset_parses() {
    let catalog = load(&CatalogSource::Bundled).unwrap();
    assert_eq!(catalog.describe("I63"), Some("Mozkový infarkt"));
    assert_eq!(catalog.describe("r10"), Some("Bolest břicha a pánve"));
    assert_eq!(catalog.all_codes().first(), Some(&"E10"));
}

#[test]
fn bundled_is_the_default_source() {
    assert_eq!(CatalogSource::default(), CatalogSource::Bundled);
    let source: CatalogSource = serde_json::from_str(r#"{ "type": "bundled" }"#).unwrap();
    assert_eq!(source, CatalogSource::Bundled);
}

#[test]
fn bundled_copy_matches_data_directory() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/diagnosis_children.json");
    assert_eq!(load_file(&path).unwrap(), load(&CatalogSource::Bundled).unwrap());
}

#[test]
fn fetches_remote_dataset() {
    let url = serve_once("200 OK", r#"{ "R10": { "d": "Bolest břicha a pánve" } }"#);
    let catalog = fetch(&url, Duration::from_secs(5)).unwrap();
    assert_eq!(catalog.all_codes(), ["R10"]);
}

#[test]
fn remote_error_status_is_a_fetch_error() {
    let url = serve_once("500 Internal Server Error", "{}");
    let err = fetch(&url, Duration::from_secs(5)).unwrap_err();
    assert!(matches!(err, DataLoadError::Fetch { .. }));
}

#[test]
fn remote_failure_degrades_to_empty_catalog() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = load(&CatalogSource::Remote {
        url: format!("http://{addr}/mkn10.json"),
        timeout_secs: 2,
    })
    .unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.describe("I63"), None);
}

#[test]
fn remote_source_defaults_timeout() {
    let source: CatalogSource =
        serde_json::from_str(r#"{ "type": "remote", "url": "https://example.org/mkn10.json" }"#)
            .unwrap();
    assert_eq!(
        source,
        CatalogSource::Remote {
            url: "https://example.org/mkn10.json".to_string(),
            timeout_secs: 10,
        }
    );
}
