use hearth::http::request::{Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        method: "GET".to_string(),
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: Default::default(),
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new().path("/index.html").build().unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.version, "HTTP/1.1");
    assert!(req.headers.is_empty());
    assert!(req.body.is_empty());
}

#[test]
fn test_request_builder_requires_path() {
    assert!(RequestBuilder::new().method("GET").build().is_err());
}

#[test]
fn test_request_builder_sets_all_fields() {
    let req = RequestBuilder::new()
        .method("HEAD")
        .path("/a?b=c")
        .version("HTTP/1.0")
        .header("Accept", "*/*")
        .body("payload")
        .build()
        .unwrap();

    assert_eq!(req.method, "HEAD");
    assert_eq!(req.path, "/a?b=c");
    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.header("Accept"), Some("*/*"));
    assert_eq!(req.body.as_ref(), b"payload");
}
