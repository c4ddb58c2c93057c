use hearth::http::framer::Framer;

#[test]
fn test_incomplete_frame_is_retained() {
    let mut framer = Framer::new();
    framer.extend(b"GET / HTTP/1.1\r\nHost: a\r\n");

    assert!(framer.next_frame().is_none());
    assert_eq!(framer.buffered(), b"GET / HTTP/1.1\r\nHost: a\r\n");
}

#[test]
fn test_frame_completed_across_reads() {
    let mut framer = Framer::new();
    framer.extend(b"GET / HTTP/1.1\r\n");
    assert!(framer.next_frame().is_none());

    framer.extend(b"Host: a\r\n\r");
    assert!(framer.next_frame().is_none());

    framer.extend(b"\n");
    let frame = framer.next_frame().unwrap();

    assert_eq!(frame.as_ref(), b"GET / HTTP/1.1\r\nHost: a\r\n\r\n");
    assert!(framer.buffered().is_empty());
}

#[test]
fn test_pipelined_frames_extracted_in_order() {
    let mut framer = Framer::new();
    framer.extend(b"GET /one HTTP/1.1\r\n\r\nGET /two HTTP/1.1\r\n\r\nGET /thr");

    assert_eq!(framer.next_frame().unwrap().as_ref(), b"GET /one HTTP/1.1\r\n\r\n");
    assert_eq!(framer.next_frame().unwrap().as_ref(), b"GET /two HTTP/1.1\r\n\r\n");
    assert!(framer.next_frame().is_none());
    assert_eq!(framer.buffered(), b"GET /thr");
}

#[test]
fn test_body_bytes_start_next_frame() {
    // Content-Length is not used for framing.
    let mut framer = Framer::new();
    framer.extend(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello");

    let frame = framer.next_frame().unwrap();
    assert!(frame.ends_with(b"\r\n\r\n"));
    assert_eq!(framer.buffered(), b"hello");
}

#[test]
fn test_clear_discards_buffer() {
    let mut framer = Framer::new();
    framer.extend(b"partial");
    framer.clear();

    assert!(framer.buffered().is_empty());
}
