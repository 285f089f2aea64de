//! Tests for SearchController, SearchState and the fallback filter.

use super::*;
use async_trait::async_trait;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ===== Test Helpers =====

fn person(name: &str) -> Person {
    Person::new(name, format!("{name} headline"), None, vec![])
}

fn dataset(names: &[&str]) -> Arc<StaticDataset> {
    Arc::new(StaticDataset::new(names.iter().map(|n| person(n)).collect()))
}

fn controller(names: &[&str]) -> SearchController {
    SearchController::new(dataset(names))
}

/// Backend that answers every search with a fixed outcome and counts calls.
struct ScriptedBackend {
    outcome: fn() -> Result<ResultSet, TransportError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(outcome: fn() -> Result<ResultSet, TransportError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PeopleSearch for ScriptedBackend {
    async fn search(&self, query: &str) -> Result<ResultSet, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        (self.outcome)()
    }
}

fn two_remote_people() -> Result<ResultSet, TransportError> {
    Ok(vec![person("Maria Gomez"), person("Maria Silva")])
}

fn server_error() -> Result<ResultSet, TransportError> {
    Err(TransportError::Status { status: 500 })
}

fn malformed() -> Result<ResultSet, TransportError> {
    Err(TransportError::MalformedLine {
        line_number: 1,
        message: "expected value".to_string(),
    })
}

fn remote_empty() -> Result<ResultSet, TransportError> {
    Ok(vec![])
}

// ===== fallback_filter Tests =====

#[test]
fn fallback_filter_is_case_insensitive() {
    let people = vec![person("Anna"), person("Bob"), person("JOANNA")];
    let names: Vec<String> = fallback_filter(&people, "AN")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Anna", "JOANNA"]);
}

#[test]
fn fallback_filter_no_match_is_empty() {
    let people = vec![person("Anna"), person("Bob")];
    assert!(fallback_filter(&people, "zzznotreal").is_empty());
}

#[test]
fn fallback_filter_does_not_trim_query() {
    let people = vec![person("Anna Souza"), person("Annabel")];
    let names: Vec<String> = fallback_filter(&people, "a s")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Anna Souza"]);
}

proptest! {
    #[test]
    fn fallback_filter_returns_ordered_subset_of_matches(
        names in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..12),
        query in "[a-zA-Z]{0,3}",
    ) {
        let people: Vec<Person> = names.iter().map(|n| person(n)).collect();
        let filtered = fallback_filter(&people, &query);
        let expected: Vec<Person> = people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn blank_queries_never_start_a_search(query in "[ \t]{0,8}") {
        let mut c = controller(&["Anna"]);
        prop_assert!(c.begin(&query).is_none());
        prop_assert_eq!(c.state(), &SearchState::EmptyInputError);
        prop_assert!(!c.is_loading());
    }

    #[test]
    fn resolve_always_leaves_loading(query in "[a-z]{1,6}", fail in any::<bool>()) {
        let mut c = controller(&["anna", "bob", "carla"]);
        let pending = c.begin(&query).expect("non-blank query");
        prop_assert!(c.is_loading());
        let outcome = if fail { server_error() } else { Ok(vec![person("Remote")]) };
        c.resolve(pending, outcome);
        prop_assert!(!c.is_loading());
    }
}

// ===== begin Tests =====

#[test]
fn new_controller_is_idle_with_idle_prompt() {
    let c = controller(&["Anna"]);
    assert_eq!(c.state(), &SearchState::Idle);
    assert!(!c.is_loading());
    assert_eq!(c.presentation(), Presentation::IdlePrompt);
    assert_eq!(c.last_query(), "");
}

#[test]
fn begin_blank_query_sets_empty_input_error() {
    let mut c = controller(&["Anna"]);
    assert!(c.begin("   ").is_none());
    assert_eq!(c.state(), &SearchState::EmptyInputError);
    assert_eq!(c.presentation(), Presentation::ValidationError);
}

#[test]
fn begin_blank_query_does_not_touch_last_query() {
    let mut c = controller(&["Anna"]);
    let pending = c.begin("Anna").expect("committed");
    c.resolve(pending, server_error());
    let _ = c.begin("");
    assert_eq!(c.last_query(), "Anna");
}

#[test]
fn begin_blank_query_clears_no_results() {
    let mut c = controller(&["Anna"]);
    let pending = c.begin("zzz").expect("committed");
    c.resolve(pending, server_error());
    assert_eq!(c.state(), &SearchState::NoResults);

    let _ = c.begin("");
    assert_eq!(c.state(), &SearchState::EmptyInputError);
}

#[test]
fn begin_valid_query_enters_loading_and_snapshots_query() {
    let mut c = controller(&["Anna"]);
    let pending = c.begin("  Maria ").expect("committed");
    assert_eq!(pending.query(), "  Maria ");
    assert_eq!(c.state(), &SearchState::Loading);
    assert_eq!(c.presentation(), Presentation::Loading);
    assert_eq!(c.last_query(), "  Maria ");
}

#[test]
fn begin_clears_empty_input_error() {
    let mut c = controller(&["Anna"]);
    let _ = c.begin("");
    let _pending = c.begin("Anna").expect("committed");
    assert_eq!(c.state(), &SearchState::Loading);
}

// ===== resolve Tests =====

#[test]
fn resolve_ok_replaces_results_wholesale() {
    let mut c = controller(&["Anna"]);
    let first = c.begin("x").expect("committed");
    c.resolve(first, Ok(vec![person("Old One"), person("Old Two")]));

    let second = c.begin("y").expect("committed");
    c.resolve(second, Ok(vec![person("New")]));

    let names: Vec<&str> = c.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["New"]);
}

#[test]
fn resolve_err_uses_only_fallback_data() {
    let mut c = controller(&["Anna", "Hannah", "Bob"]);
    let first = c.begin("x").expect("committed");
    c.resolve(first, Ok(vec![person("Remote Anna")]));

    let second = c.begin("an").expect("committed");
    c.resolve(second, server_error());

    let names: Vec<&str> = c.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Hannah"]);
}

#[test]
fn resolve_err_without_match_sets_no_results() {
    let mut c = controller(&["Anna", "Bob"]);
    let pending = c.begin("Zzznotreal").expect("committed");
    c.resolve(pending, server_error());

    assert_eq!(c.state(), &SearchState::NoResults);
    assert!(c.results().is_empty());
    match c.presentation() {
        Presentation::NoResults {
            last_query,
            suggestions,
        } => {
            assert_eq!(last_query, "Zzznotreal");
            assert_eq!(suggestions.len(), 2);
        }
        other => panic!("expected NoResults, got {other:?}"),
    }
}

#[test]
fn resolve_ok_with_empty_remote_set_shows_idle_prompt() {
    let mut c = controller(&["Anna"]);
    let pending = c.begin("Anna").expect("committed");
    c.resolve(pending, Ok(vec![]));

    assert_eq!(c.state(), &SearchState::Success(vec![]));
    assert_eq!(c.presentation(), Presentation::IdlePrompt);
}

#[test]
fn resolve_filters_by_submitted_query_not_latest_input() {
    let mut c = controller(&["Anna", "Bob"]);
    let pending = c.begin("bo").expect("committed");
    c.resolve(pending, server_error());

    let names: Vec<&str> = c.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob"]);
}

#[test]
fn overlapping_searches_last_resolution_wins() {
    let mut c = controller(&["Anna"]);
    let first = c.begin("first").expect("committed");
    let second = c.begin("second").expect("committed");
    assert_eq!(c.last_query(), "second");

    c.resolve(second, Ok(vec![person("From Second")]));
    c.resolve(first, Ok(vec![person("From First")]));

    assert_eq!(c.results()[0].name, "From First");
    assert!(!c.is_loading());
}

// ===== submit_search Tests =====

#[tokio::test]
async fn submit_blank_query_never_calls_backend() {
    let backend = ScriptedBackend::new(two_remote_people);
    let mut c = controller(&["Anna"]);

    c.submit_search("", &backend).await;
    c.submit_search(" \t ", &backend).await;

    assert_eq!(backend.calls(), 0);
    assert_eq!(c.state(), &SearchState::EmptyInputError);
}

#[tokio::test]
async fn submit_sends_raw_query_to_backend() {
    let backend = ScriptedBackend::new(two_remote_people);
    let mut c = controller(&["Anna"]);

    c.submit_search(" Maria ", &backend).await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(*backend.queries.lock().unwrap(), vec![" Maria ".to_string()]);
}

#[tokio::test]
async fn submit_remote_success_keeps_line_order() {
    let backend = ScriptedBackend::new(two_remote_people);
    let mut c = controller(&["Anna"]);

    c.submit_search("Maria", &backend).await;

    let names: Vec<&str> = c.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Maria Gomez", "Maria Silva"]);
    assert!(!c.is_loading());
}

#[tokio::test]
async fn submit_malformed_remote_falls_back() {
    let backend = ScriptedBackend::new(malformed);
    let mut c = controller(&["Anna", "Mariana"]);

    c.submit_search("maria", &backend).await;

    let names: Vec<&str> = c.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Mariana"]);
}

#[tokio::test]
async fn submit_remote_empty_does_not_fall_back() {
    let backend = ScriptedBackend::new(remote_empty);
    let mut c = controller(&["Anna"]);

    c.submit_search("Anna", &backend).await;

    assert_eq!(c.state(), &SearchState::Success(vec![]));
}

#[tokio::test]
async fn submit_works_through_trait_object() {
    let backend: Arc<dyn PeopleSearch> = Arc::new(ScriptedBackend::new(server_error));
    let mut c = controller(&["Anna"]);

    c.submit_search("an", backend.as_ref()).await;

    assert_eq!(c.results().len(), 1);
}
