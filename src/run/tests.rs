use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use tempfile::NamedTempFile;

use super::*;
use crate::capability::Capabilities;
use crate::error_handling::{ConfigError, FetchFailure};
use crate::fetch::{FetchResult, Requester};
use crate::parse::{DefaultExtractor, Extractor};

/// In-memory requester: serves known URLs, reports everything else as 404.
///
/// Tracks hits per URL and the highest number of concurrent requests seen.
#[derive(Default)]
struct StubRequester {
    pages: HashMap<String, Vec<u8>>,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    hits: Mutex<HashMap<String, usize>>,
}

impl StubRequester {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                .collect(),
            ..Default::default()
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

impl Requester for StubRequester {
    fn get<'a>(&'a self, url: &'a str, _verify_ssl: bool) -> BoxFuture<'a, FetchResult> {
        async move {
            *self.hits.lock().unwrap().entry(url.to_string()).or_default() += 1;
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            match self.pages.get(url) {
                Some(body) => FetchResult::Fetched {
                    url: url.to_string(),
                    body: body.clone(),
                },
                None => FetchResult::Absent(FetchFailure::NotFound),
            }
        }
        .boxed()
    }
}

/// Default extractor, except that scripts containing `boom` make it panic.
struct FragileExtractor;

impl Extractor for FragileExtractor {
    fn extract_scripts(&self, html: &[u8]) -> Vec<String> {
        DefaultExtractor.extract_scripts(html)
    }

    fn extract_urls_from_js(&self, js: &[u8]) -> Vec<String> {
        if String::from_utf8_lossy(js).contains("boom") {
            panic!("cannot handle this script");
        }
        DefaultExtractor.extract_urls_from_js(js)
    }

    fn clean(&self, paths: &HashSet<String>) -> Vec<String> {
        DefaultExtractor.clean(paths)
    }
}

const LOGIN_PAGE: &str = r#"<html><head><script src="/app.js"></script></head></html>"#;
const LOGIN_JS: &str =
    r#"fetch("/api/login"); fetch("/api/login"); fetch("/api/logout");"#;

fn pipeline(requester: Arc<StubRequester>, workers: usize) -> Pipeline {
    let capabilities = Capabilities {
        requester,
        extractor: Arc::new(DefaultExtractor),
    };
    Pipeline::new(capabilities, workers, false)
}

#[tokio::test]
async fn test_single_target_end_to_end() {
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", LOGIN_PAGE),
        ("https://example.com/app.js", LOGIN_JS),
    ]));
    let outcome = pipeline(requester, 10)
        .process_target("https://example.com")
        .await;

    assert_eq!(
        outcome,
        TargetOutcome {
            target: "https://example.com".to_string(),
            page_fetched: true,
            scripts_found: 1,
            scripts_fetched: 1,
            paths: vec!["/api/login".to_string(), "/api/logout".to_string()],
        }
    );
}

#[tokio::test]
async fn test_absent_page_yields_empty_result() {
    let requester = Arc::new(StubRequester::new(&[]));
    let pipeline = pipeline(requester, 10);
    let outcome = pipeline.process_target("https://down.example").await;

    assert!(!outcome.page_fetched);
    assert_eq!(outcome.scripts_found, 0);
    assert!(outcome.paths.is_empty());
    assert_eq!(pipeline.stats().get_failure_count(FetchFailure::NotFound), 1);
}

#[tokio::test]
async fn test_absent_script_contributes_nothing() {
    let page = r#"<script src="/missing.js"></script><script src="/ok.js"></script>"#;
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", page),
        ("https://example.com/ok.js", r#"get("/api/ok")"#),
    ]));
    let pipeline = pipeline(requester, 10);
    let outcome = pipeline.process_target("https://example.com").await;

    assert_eq!(outcome.scripts_found, 2);
    assert_eq!(outcome.scripts_fetched, 1);
    assert_eq!(outcome.paths, vec!["/api/ok"]);
    assert_eq!(pipeline.stats().total_failures(), 1);
}

#[tokio::test]
async fn test_panicking_script_task_is_contained() {
    let page = r#"<script src="/bad.js"></script><script src="/good.js"></script>"#;
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", page),
        ("https://example.com/bad.js", r#"boom("/api/never")"#),
        ("https://example.com/good.js", r#"get("/api/good")"#),
    ]));
    let pipeline = Pipeline::new(
        Capabilities {
            requester,
            extractor: Arc::new(FragileExtractor),
        },
        2,
        false,
    );
    let outcome = pipeline.process_target("https://example.com").await;

    assert_eq!(outcome.paths, vec!["/api/good"]);
    assert_eq!(outcome.scripts_fetched, 1);
    assert_eq!(pipeline.stats().task_failures(), 1);
}

#[tokio::test]
async fn test_inline_scripts_are_scanned() {
    let page = r#"<script>const api = "/api/inline";</script><script src="/app.js"></script>"#;
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", page),
        ("https://example.com/app.js", r#"fetch("/api/external")"#),
    ]));
    let outcome = pipeline(requester, 10)
        .process_target("https://example.com")
        .await;

    assert_eq!(outcome.paths, vec!["/api/external", "/api/inline"]);
}

#[tokio::test]
async fn test_scripts_resolved_against_target_and_fetched_once() {
    let page = r#"
        <script src="js/a.js"></script>
        <script src="/shop/js/a.js"></script>
        <script src="https://cdn.example.net/b.js"></script>
        <script src="javascript:void(0)"></script>
    "#;
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com/shop/", page),
        ("https://example.com/shop/js/a.js", r#"x("/api/a")"#),
        ("https://cdn.example.net/b.js", r#"x("/api/b")"#),
    ]));
    let outcome = pipeline(Arc::clone(&requester), 10)
        .process_target("https://example.com/shop/")
        .await;

    assert_eq!(outcome.scripts_found, 2);
    assert_eq!(outcome.paths, vec!["/api/a", "/api/b"]);
    assert_eq!(requester.hits("https://example.com/shop/js/a.js"), 1);
}

#[tokio::test]
async fn test_worker_pool_bounds_concurrency_and_loses_nothing() {
    const SCRIPTS: usize = 24;
    const WORKERS: usize = 3;

    let page: String = (0..SCRIPTS)
        .map(|i| format!(r#"<script src="/s{i}.js"></script>"#))
        .collect();
    let scripts: Vec<(String, String)> = (0..SCRIPTS)
        .map(|i| {
            (
                format!("https://example.com/s{i}.js"),
                format!(r#"a("/api/own/{i}"); b("/api/shared"); c("/api/own/{i}");"#),
            )
        })
        .collect();
    let mut pages: Vec<(&str, &str)> = vec![("https://example.com", page.as_str())];
    pages.extend(scripts.iter().map(|(u, b)| (u.as_str(), b.as_str())));

    let requester =
        Arc::new(StubRequester::new(&pages).with_delay(Duration::from_millis(10)));
    let outcome = pipeline(Arc::clone(&requester), WORKERS)
        .process_target("https://example.com")
        .await;

    assert_eq!(outcome.scripts_fetched, SCRIPTS);
    // Each script contributes one own path; all share one more
    assert_eq!(outcome.paths.len(), SCRIPTS + 1);
    assert!(requester.max_in_flight.load(Ordering::SeqCst) <= WORKERS);
}

fn registry_with(requester: Arc<StubRequester>) -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::with_builtins();
    registry.register_requester("test", "StubRequester", move |_| {
        Ok(Arc::clone(&requester) as Arc<dyn Requester>)
    });
    registry
}

fn stub_config() -> Config {
    Config {
        custom_module: Some("test".to_string()),
        request_name: Some("StubRequester".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_discovery_batch_survives_failed_target() {
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", LOGIN_PAGE),
        ("https://example.com/app.js", LOGIN_JS),
    ]));
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "https://example.com\nhttps://unreachable.example").unwrap();

    let config = Config {
        file: Some(file.path().to_path_buf()),
        ..stub_config()
    };
    let report = run_discovery_with(config, &registry_with(requester))
        .await
        .expect("a failed target must not fail the run");

    assert_eq!(report.targets.len(), 2);
    assert!(report.targets[0].page_fetched);
    assert!(!report.targets[1].page_fetched);
    assert!(report.targets[1].paths.is_empty());
    assert_eq!(report.paths, vec!["/api/login", "/api/logout"]);
}

#[tokio::test]
async fn test_run_discovery_merges_targets() {
    let requester = Arc::new(StubRequester::new(&[
        ("https://a.example", r#"<script src="/a.js"></script>"#),
        ("https://a.example/a.js", r#"x("/api/shared"); y("/api/a");"#),
        ("https://b.example", r#"<script src="/b.js"></script>"#),
        ("https://b.example/b.js", r#"x("/api/shared"); y("/api/b");"#),
    ]));
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "https://a.example\n# comment\nb.example").unwrap();

    let config = Config {
        file: Some(file.path().to_path_buf()),
        ..stub_config()
    };
    let report = run_discovery_with(config, &registry_with(requester))
        .await
        .expect("run should succeed");

    assert_eq!(report.targets[1].target, "https://b.example");
    assert_eq!(report.paths, vec!["/api/a", "/api/b", "/api/shared"]);
}

#[tokio::test]
async fn test_run_discovery_rejects_invalid_config() {
    let err = run_discovery(Config::default())
        .await
        .expect_err("missing input must be fatal");
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::MissingInput)
    );

    let err = run_discovery(Config {
        url: Some("https://example.com".to_string()),
        workers: 0,
        ..Default::default()
    })
    .await
    .expect_err("zero workers must be fatal");
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::InvalidWorkers(0))
    );
}

#[tokio::test]
async fn test_run_discovery_custom_parser_failure_falls_back() {
    let requester = Arc::new(StubRequester::new(&[
        ("https://example.com", LOGIN_PAGE),
        ("https://example.com/app.js", LOGIN_JS),
    ]));
    let config = Config {
        url: Some("https://example.com".to_string()),
        parsed_name: Some("NoSuchExtractor".to_string()),
        ..stub_config()
    };
    let report = run_discovery_with(config, &registry_with(requester))
        .await
        .expect("fallback must not fail the run");
    assert_eq!(report.paths, vec!["/api/login", "/api/logout"]);
}
