use bytes::{BufMut, Bytes, BytesMut};

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): File or directory served
/// - `Forbidden` (403): Path resolves outside the served root
/// - `NotFound` (404): Path does not exist
/// - `InternalServerError` (500): Stat/read failure or unsupported file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A serialized HTTP response ready to be written to a client.
#[derive(Debug, Clone)]
pub struct Response {
    /// Exact wire bytes: status line, headers, blank line, body
    pub raw: Bytes,
    /// The HTTP status code
    pub status: StatusCode,
    /// Byte length of the body alone
    pub content_length: usize,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// The header set is fixed: `Content-Type`, `Content-Length` and
/// `Connection: close`, always in that order.
///
/// # Example
///
/// ```
/// # use hearth::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/html")
///     .body("<p>hi</p>")
///     .build();
/// assert_eq!(response.content_length, 9);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code and a
    /// `text/plain` content type.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: Bytes::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes the response. `Content-Length` is always the body's length.
    pub fn build(self) -> Response {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_type,
            self.body.len(),
        );

        let mut raw = BytesMut::with_capacity(head.len() + self.body.len());
        raw.put_slice(head.as_bytes());
        raw.put_slice(&self.body);

        Response {
            raw: raw.freeze(),
            status: self.status,
            content_length: self.body.len(),
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given content type and body.
    pub fn ok(content_type: &str, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden() -> Self {
        ResponseBuilder::new(StatusCode::Forbidden)
            .body("403 Forbidden")
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body("404 Not Found")
            .build()
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError)
            .body("500 Internal Server Error")
            .build()
    }

    /// The body portion of [`raw`](Self::raw).
    pub fn body(&self) -> &[u8] {
        &self.raw[self.raw.len() - self.content_length..]
    }
}
