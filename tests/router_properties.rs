//! Router behaviour through the public API only.

use std::sync::{Arc, Mutex};
use std::thread;

use axum::body::Bytes;
use axum::http::StatusCode;
use settlements_web::routing::{
    handler_fn, Handler, MatchError, Params, Request, ResponseWriter, Router,
};

fn request(method: &str, path: &str) -> Request {
    axum::http::Request::builder()
        .method(method)
        .uri(path)
        .body(Bytes::new())
        .unwrap()
}

fn named(name: &'static str) -> impl Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static {
    move |w, _, _| w.text(StatusCode::OK, name)
}

fn body_of(router: &Router, method: &str, path: &str) -> (StatusCode, String) {
    let mut w = ResponseWriter::new();
    router.dispatch(&request(method, path), &mut w);
    (w.status(), String::from_utf8(w.body().to_vec()).unwrap())
}

#[test]
fn test_literal_routes_match_with_empty_params() {
    let paths = ["/", "/about", "/api/v1/status", "/a/b/c/d"];
    let mut router = Router::new();
    for path in paths {
        router.get(path, named("ok"));
        router.post(path, named("ok"));
    }

    for path in paths {
        for method in ["GET", "POST"] {
            let (_, params) = router.lookup(method, path).unwrap();
            assert!(params.is_empty(), "{method} {path}");
        }
    }
}

#[test]
fn test_precedence_literal_param_catch_all() {
    let mut router = Router::new();
    router.get("/files/readme", named("literal"));
    router.get("/files/:name", named("param"));
    router.get("/files/:name/*rest", named("nested-catch-all"));
    router.get("/assets/*path", named("catch-all"));

    assert_eq!(body_of(&router, "GET", "/files/readme").1, "literal");
    assert_eq!(body_of(&router, "GET", "/files/notes").1, "param");
    assert_eq!(body_of(&router, "GET", "/files/notes/a/b").1, "nested-catch-all");
    assert_eq!(body_of(&router, "GET", "/assets").1, "catch-all");

    let (_, params) = router.lookup("GET", "/files/notes/a/b").unwrap();
    assert_eq!(params.get("name"), Some("notes"));
    assert_eq!(params.get("rest"), Some("a/b"));
}

#[test]
fn test_not_found_versus_method_not_allowed() {
    let mut router = Router::new();
    router.get("/users/:id", named("user"));

    assert!(matches!(
        router.find("POST", "/users/1"),
        Err(MatchError::MethodNotAllowed { .. })
    ));
    assert!(matches!(router.find("POST", "/groups/1"), Err(MatchError::NotFound)));

    assert_eq!(body_of(&router, "POST", "/users/1").0, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_of(&router, "GET", "/groups/1").0, StatusCode::NOT_FOUND);
}

#[test]
fn test_middleware_nesting() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let mut router = Router::new();
    for name in ["outer", "inner"] {
        let log = log.clone();
        router.use_middleware(move |next: Handler| -> Handler {
            let log = log.clone();
            handler_fn(move |w, req, params| {
                log.lock().unwrap().push(format!("{name}:before"));
                next(w, req, params);
                log.lock().unwrap().push(format!("{name}:after"));
            })
        });
    }
    let handler_log = log.clone();
    router.get("/", move |_, _, _| handler_log.lock().unwrap().push("handler".to_string()));

    router.dispatch(&request("GET", "/"), &mut ResponseWriter::new());

    assert_eq!(
        *log.lock().unwrap(),
        ["outer:before", "inner:before", "handler", "inner:after", "outer:after"]
    );
}

#[test]
fn test_shared_router_across_threads() {
    let mut router = Router::new();
    router.get("/items/:id", |w, _, p| {
        w.text(StatusCode::OK, p.get("id").unwrap_or_default())
    });
    let router = Arc::new(router);

    let workers: Vec<_> = (0..8)
        .map(|i| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                for j in 0..100 {
                    let id = format!("{i}-{j}");
                    let (status, body) = body_of(&router, "GET", &format!("/items/{id}"));
                    assert_eq!(status, StatusCode::OK);
                    assert_eq!(body, id);
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
}
