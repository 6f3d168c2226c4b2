//! Dispatch behavior of the router, end to end through the public API.

use std::sync::Arc;

use restd::Router;

mod common;

use common::{args, names, recorder, CallLog};

#[test]
fn test_get_artefact_by_id() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route("GET", "/artefact/{id}", recorder("get", &log));

    router.route("GET", "/artefact/123", b"");

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, Some(args([("id", "123")])));
    assert_eq!(calls[0].path, "/artefact/123");
}

#[test]
fn test_wrong_method_falls_back() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route("POST", "/artefact", recorder("post", &log));
    router.set_default_handler(recorder("default", &log));

    router.route("GET", "/artefact", b"");

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].handler, "default");
    assert_eq!(calls[0].args, None);
    assert_eq!(calls[0].method, "GET");
}

#[test]
fn test_zero_param_route_gets_empty_args() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route("GET", "/status", recorder("status", &log));
    router.set_default_handler(recorder("default", &log));

    router.route("GET", "/status", b"");

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].handler, "status");
    assert_eq!(calls[0].args, Some(args([])));
}

#[test]
fn test_same_handler_two_patterns_runs_once() {
    let log = CallLog::default();
    let h = recorder("h", &log);
    let mut router = Router::default();
    router.add_route("GET", "/a/{x}", h.clone());
    router.add_route("GET", "/a/{y}", h);

    router.route("GET", "/a/5", b"");

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, Some(args([("x", "5")])));
}

#[test]
fn test_same_handler_across_methods() {
    let log = CallLog::default();
    let h = recorder("h", &log);
    let mut router = Router::default();
    router.add_route("GET", "/a", h.clone());
    router.add_route("DELETE", "/a", h);

    router.route("GET", "/a", b"");
    router.route("DELETE", "/a/", b"");

    let calls = log.lock().unwrap();
    let methods: Vec<_> = calls.iter().map(|c| c.method.as_str()).collect();
    assert_eq!(methods, vec!["GET", "DELETE"]);
}

#[test]
fn test_all_distinct_matches_run_in_registration_order() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route("PUT", "/{kind}/{id}", recorder("generic", &log));
    router.add_route("PUT", "/artefact/{id}", recorder("specific", &log));
    router.set_default_handler(recorder("default", &log));

    let response = router.route("PUT", "/artefact/7", b"{}");

    assert_eq!(names(&log), vec!["generic", "specific"]);
    assert_eq!(response.body(), b"genericspecific");
    let calls = log.lock().unwrap();
    assert_eq!(calls[0].args, Some(args([("kind", "artefact"), ("id", "7")])));
    assert_eq!(calls[1].args, Some(args([("id", "7")])));
    assert_eq!(calls[1].body, b"{}");
}

#[test]
fn test_pattern_list_registration() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route(
        "GET",
        vec!["/artefact/{id}", "/artefacts/{id}"],
        recorder("get", &log),
    );
    router.set_default_handler(recorder("default", &log));

    router.route("GET", "/artefacts/1", b"");
    router.route("GET", "/artefact/2", b"");
    router.route("GET", "/artefactz/3", b"");

    assert_eq!(router.route_count("GET"), 2);
    assert_eq!(names(&log), vec!["get", "get", "default"]);
}

#[test]
fn test_trailing_slash_equivalence() {
    let log = CallLog::default();
    let mut router = Router::new("/example");
    router.add_route("GET", "/artefact/{id}", recorder("get", &log));

    router.route("GET", "/example/artefact/123/", b"");
    router.route("GET", "/example/artefact/123", b"");

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].path, calls[1].path);
    assert_eq!(calls[0].args, calls[1].args);
}

#[test]
fn test_shared_router_across_threads() {
    let log = CallLog::default();
    let mut router = Router::default();
    router.add_route("GET", "/n/{i}", recorder("n", &log));
    let router = Arc::new(router);

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let router = router.clone();
            std::thread::spawn(move || {
                router.route("GET", &format!("/n/{i}"), b"");
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(log.lock().unwrap().len(), 4);
}
