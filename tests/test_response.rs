use hearth::http::response::{Response, ResponseBuilder, StatusCode};

fn head_of(response: &Response) -> String {
    let raw = String::from_utf8_lossy(&response.raw);
    raw.split("\r\n\r\n").next().unwrap().to_string()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_exact_wire_format() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/html")
        .body("<p>hi</p>")
        .build();

    assert_eq!(
        response.raw.as_ref(),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 9\r\nConnection: close\r\n\r\n<p>hi</p>"
    );
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_length, 9);
}

#[test]
fn test_response_builder_defaults_to_text_plain() {
    let response = ResponseBuilder::new(StatusCode::NotFound).body("x").build();

    assert!(head_of(&response).contains("\r\nContent-Type: text/plain\r\n"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.content_length, 0);
    assert!(response.raw.ends_with(b"Content-Length: 0\r\nConnection: close\r\n\r\n"));
    assert!(response.body().is_empty());
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    let body = "héllo wörld";
    let response = Response::ok("text/plain; charset=utf-8", body);

    assert_eq!(response.content_length, body.len());
    assert!(head_of(&response).contains(&format!("Content-Length: {}", body.len())));
    assert_eq!(response.body(), body.as_bytes());
}

#[test]
fn test_binary_body_is_copied_verbatim() {
    let body = vec![0u8, 159, 146, 150, 13, 10, 13, 10];
    let response = Response::ok("application/octet-stream", body.clone());

    assert_eq!(response.body(), body.as_slice());
    assert_eq!(response.content_length, body.len());
}

#[test]
fn test_header_order_is_fixed() {
    let head = head_of(&Response::forbidden());
    let lines: Vec<&str> = head.split("\r\n").collect();

    assert_eq!(lines[0], "HTTP/1.1 403 Forbidden");
    assert!(lines[1].starts_with("Content-Type: "));
    assert!(lines[2].starts_with("Content-Length: "));
    assert_eq!(lines[3], "Connection: close");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_error_helpers_have_non_empty_bodies() {
    for (response, status) in [
        (Response::forbidden(), StatusCode::Forbidden),
        (Response::not_found(), StatusCode::NotFound),
        (Response::internal_error(), StatusCode::InternalServerError),
    ] {
        assert_eq!(response.status, status);
        assert!(response.content_length > 0);
        assert_eq!(response.body().len(), response.content_length);
    }
}
