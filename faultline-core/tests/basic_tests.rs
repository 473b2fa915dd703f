//! Basic tests for faultline-core

use faultline_core::*;
use std::sync::Arc;
use std::thread;

static LOOKALIKE_NOT_FOUND: Sentinel = Sentinel::new("not_found", "not found");

#[test]
fn test_sentinel_identity() {
    let canonical = Failure::sentinel(&NOT_FOUND);
    assert!(classify(&canonical, &NOT_FOUND));

    // Same text, different class
    assert!(!classify(&Failure::value("not found"), &NOT_FOUND));
    assert!(!classify(&Failure::sentinel(&LOOKALIKE_NOT_FOUND), &NOT_FOUND));
    assert!(!classify(&canonical, &LOOKALIKE_NOT_FOUND));
}

#[test]
fn test_message_derivation() {
    let failure = wrap("fetch failed", wrap("db save failed", Failure::value("disk full")));
    assert_eq!(message(&failure), "fetch failed: db save failed: disk full");
}

#[test]
fn test_non_matching_classification() {
    let failure = wrap("x", Failure::custom(500, "boom"));
    assert!(!classify(&failure, &NOT_FOUND));
    assert!(extract(&failure).is_some());
}

#[test]
fn test_extract_misses_other_terminals() {
    assert!(extract(&wrap("a", Failure::value("HTTP 404: Not Found"))).is_none());
    assert!(extract(&wrap("a", Failure::sentinel(&NOT_FOUND))).is_none());
}

#[test]
fn test_unwrap_steps_one_layer() {
    let inner = Failure::custom(404, "Not Found");
    let outer = wrap("fetch failed", inner.clone());

    let cause = unwrap(&outer).unwrap();
    assert_eq!(cause.message(), inner.message());
    assert!(unwrap(cause).is_none());
}

#[test]
fn test_classification_does_not_mutate() {
    let failure = wrap("outer", wrap("inner", Failure::sentinel(&TIMED_OUT)));
    let before = message(&failure);

    let first = (classify(&failure, &TIMED_OUT), extract(&failure));
    let second = (classify(&failure, &TIMED_OUT), extract(&failure));

    assert_eq!(first, second);
    assert_eq!(message(&failure), before);
}

#[test]
fn test_wrapping_leaves_cause_untouched() {
    let cause = Failure::value("disk full");
    let wrapped = wrap("db save failed", cause.clone());
    assert_eq!(cause.message(), "disk full");
    assert_eq!(cause.depth(), 0);
    assert_eq!(wrapped.depth(), 1);
}

#[test]
fn test_renaming_context_keeps_classification() {
    for context in ["fetch failed", "retrieve failed", ""] {
        let failure = wrap(context, Failure::sentinel(&NOT_FOUND));
        assert!(classify(&failure, &NOT_FOUND));
    }
}

#[test]
fn test_std_source_walk_matches_depth() {
    let failure = wrap("a", wrap("b", wrap("c", Failure::custom(503, "down"))));

    let mut layers = 1;
    let mut current: &dyn std::error::Error = &failure;
    while let Some(next) = current.source() {
        layers += 1;
        current = next;
    }

    assert_eq!(layers, failure.depth() + 1);
    assert_eq!(current.to_string(), "HTTP 503: down");
}

#[test]
fn test_failure_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Failure>();
    assert_send_sync::<Sentinel>();
}

#[test]
fn test_concurrent_classification() {
    let failure = Arc::new(wrap(
        "fetch failed",
        wrap("query", Failure::sentinel(&UNAVAILABLE)),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let failure = Arc::clone(&failure);
            thread::spawn(move || {
                (
                    classify(&failure, &UNAVAILABLE),
                    classify(&failure, &NOT_FOUND),
                    message(&failure),
                )
            })
        })
        .collect();

    for handle in handles {
        let (hit, miss, text) = handle.join().unwrap();
        assert!(hit);
        assert!(!miss);
        assert_eq!(text, "fetch failed: query: service unavailable");
    }
}

#[test]
fn test_registry_lookup_feeds_classification() {
    for sentinel in registry() {
        let failure = wrap("ctx", Failure::sentinel(lookup(sentinel.name()).unwrap()));
        assert!(classify(&failure, sentinel));
    }
}

#[test]
fn test_context_trait_layers() {
    fn read_config() -> Result<String> {
        Err(Failure::value("config file not found"))
    }

    fn load_app() -> Result<String> {
        read_config().context("loadApp failed")
    }

    let err = load_app().unwrap_err();
    assert_eq!(err.message(), "loadApp failed: config file not found");
    assert_eq!(err.root().kind(), FailureKind::Value);
}
