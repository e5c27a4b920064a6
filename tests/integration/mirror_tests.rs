//! Integration tests for the mirror engine
//!
//! These tests use wiremock to create mock HTTP servers and temporary
//! directories to test the full mirror cycle end-to-end.

use site_mirror::config::Config;
use site_mirror::crawler::{mirror_site, Crawler};
use site_mirror::state::{PageOutcome, VisitedSet};
use site_mirror::MirrorError;
use std::path::Path;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

/// Lists every regular file under `dir`, relative to it, sorted
fn files_under(dir: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }

    let mut files = Vec::new();
    if dir.exists() {
        walk(dir, dir, &mut files);
    }
    files.sort();
    files
}

/// Returns a localhost port with nothing listening on it
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[tokio::test]
async fn test_mirror_same_origin_links_only() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;

    // Different host string, so not same-origin even though it is reachable
    let other_port = Url::parse(&other.uri()).unwrap().port().unwrap();
    let cross_origin = format!("http://localhost:{}/x", other_port);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r#"<html><body>
            <a href="/about">About</a>
            <a href="{}/blog/post">Post</a>
            <a href="{}">Elsewhere</a>
            </body></html>"#,
            site.uri(),
            cross_origin
        )))
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html("<p>about</p>".to_string()))
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .respond_with(html("<p>post</p>".to_string()))
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .respond_with(html("<p>other</p>".to_string()))
        .expect(0)
        .mount(&other)
        .await;

    let out = TempDir::new().unwrap();
    let report = mirror_site(&format!("{}/", site.uri()), out.path(), &Config::default())
        .await
        .expect("mirror failed");

    assert_eq!(
        files_under(out.path()),
        vec!["about", "blog/post", "index.html"]
    );
    assert_eq!(
        std::fs::read_to_string(out.path().join("blog").join("post")).unwrap(),
        "<p>post</p>"
    );
    assert_eq!(report.pages_saved, 3);
    assert!(report.is_clean());
    assert!(other.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_self_referential_page_terminates() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r#"<a href="/">home</a><a href="{}/">home again</a><a href="/loop">loop</a>"#,
            site.uri()
        )))
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(html(r#"<a href="/">back</a><a href="/loop">me</a>"#.to_string()))
        .expect(1)
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let report = mirror_site(&format!("{}/", site.uri()), out.path(), &Config::default())
        .await
        .expect("mirror failed");

    assert_eq!(files_under(out.path()), vec!["index.html", "loop"]);
    assert_eq!(report.pages_saved, 2);
    assert_eq!(report.duplicates_skipped, 4);
}

#[tokio::test]
async fn test_root_connection_refused_writes_nothing() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("mirror");
    let url = format!("http://127.0.0.1:{}/", closed_port());

    let result = mirror_site(&url, &target, &Config::default()).await;

    assert!(matches!(result, Err(MirrorError::Transport { .. })));
    assert!(files_under(&target).is_empty());
}

#[tokio::test]
async fn test_root_not_found_is_failure() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let result = mirror_site(&format!("{}/", site.uri()), out.path(), &Config::default()).await;

    match result {
        Err(MirrorError::HttpStatus { url, status }) => {
            assert_eq!(url, format!("{}/", site.uri()));
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(files_under(out.path()).is_empty());
}

#[tokio::test]
async fn test_failed_child_does_not_stop_siblings() {
    let site = MockServer::start().await;
    // Same host, different port: still same-origin, and nothing listens there
    let dead_link = format!("http://127.0.0.1:{}/gone", closed_port());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r#"<a href="/missing">missing</a>
            <a href="{}">dead</a>
            <a href="/broken">broken</a>
            <a href="/ok/">ok</a>"#,
            dead_link
        )))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"<a href="/never">x</a>"#))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/never"))
        .respond_with(html("never".to_string()))
        .expect(0)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok/"))
        .respond_with(html(r#"<a href="/ok/deeper">deeper</a>"#.to_string()))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok/deeper"))
        .respond_with(html("deep".to_string()))
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let report = mirror_site(&format!("{}/", site.uri()), out.path(), &Config::default())
        .await
        .expect("non-root failures must not fail the run");

    assert_eq!(
        files_under(out.path()),
        vec!["index.html", "ok/deeper", "ok/index.html"]
    );

    let counts = report.failures_by_outcome();
    assert_eq!(report.failures.len(), 3);
    assert_eq!(counts.get(&PageOutcome::HttpStatus), Some(&2));
    assert_eq!(counts.get(&PageOutcome::Unreachable), Some(&1));
    assert!(report.failures.iter().any(|f| f.url == dead_link));
}

#[tokio::test]
async fn test_file_blocking_directory_is_filesystem_failure() {
    let site = MockServer::start().await;

    // /page is stored as the file `page`, so /page/child has no directory to go in
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/page">page</a>
            <a href="/page/child">child</a>
            <a href="/other">other</a>"#
                .to_string(),
        ))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(html("page".to_string()))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/child"))
        .respond_with(html(r#"<a href="/unreached">x</a>"#.to_string()))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/unreached"))
        .respond_with(html("x".to_string()))
        .expect(0)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/other"))
        .respond_with(html("other".to_string()))
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let report = mirror_site(&format!("{}/", site.uri()), out.path(), &Config::default())
        .await
        .expect("a storage failure below the root must not fail the run");

    assert_eq!(files_under(out.path()), vec!["index.html", "other", "page"]);
    assert_eq!(report.pages_saved, 3);

    let counts = report.failures_by_outcome();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(counts.get(&PageOutcome::Filesystem), Some(&1));
    assert!(report.failures[0].url.ends_with("/page/child"));
}

#[tokio::test]
async fn test_shared_visited_set_makes_second_run_noop() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<p>root</p>".to_string()))
        .expect(1)
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let root = Url::parse(&format!("{}/", site.uri())).unwrap();
    let mut visited = VisitedSet::new();

    let mut first = Crawler::new(&Config::default(), out.path()).unwrap();
    first.mirror(&root, &mut visited).await.unwrap();

    let mut second = Crawler::new(&Config::default(), out.path()).unwrap();
    second.mirror(&root, &mut visited).await.unwrap();

    assert_eq!(first.report().pages_saved, 1);
    assert_eq!(second.report().pages_saved, 0);
    assert_eq!(second.report().duplicates_skipped, 1);
}

#[tokio::test]
async fn test_output_directory_creation_failure() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html("<p>root</p>".to_string()))
        .expect(0)
        .mount(&site)
        .await;

    let out = TempDir::new().unwrap();
    let blocker = out.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = mirror_site(
        &format!("{}/", site.uri()),
        &blocker.join("mirror"),
        &Config::default(),
    )
    .await;

    assert!(matches!(result, Err(MirrorError::Storage(_))));
}

#[tokio::test]
async fn test_custom_index_file() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/docs/">docs</a>"#.to_string()))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html("docs".to_string()))
        .mount(&site)
        .await;

    let mut config = Config::default();
    config.output.index_file = "default.htm".to_string();

    let out = TempDir::new().unwrap();
    mirror_site(&format!("{}/", site.uri()), out.path(), &config)
        .await
        .expect("mirror failed");

    assert_eq!(
        files_under(out.path()),
        vec!["default.htm", "docs/default.htm"]
    );
}

#[tokio::test]
async fn test_invalid_root_url() {
    let out = TempDir::new().unwrap();
    let result = mirror_site("not a url", out.path(), &Config::default()).await;
    assert!(matches!(result, Err(MirrorError::UrlParse(_))));
}
