use net::{FetchConfig, FetchError, fetch_text};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serves a single canned HTTP response on a loopback port and returns the page URL.
fn serve_once(response: String) -> (String, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        request
    });
    (format!("http://{addr}/company"), handle)
}

fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[test]
fn fetches_html_body() {
    let body = "<html><body><a href=/>home</a></body></html>";
    let (url, server) = serve_once(http_response("200 OK", "text/html; charset=utf-8", body));

    let page = fetch_text(&url, &FetchConfig::default()).expect("fetch should succeed");
    let request = server.join().expect("server thread");

    assert_eq!(page.status, 200);
    assert_eq!(page.body, body);
    assert_eq!(page.bytes, body.len());
    assert_eq!(page.requested_url, url);
    assert!(page.is_html());
    assert!(!page.truncated);
    let request = String::from_utf8_lossy(&request);
    assert!(
        request.starts_with("GET /company HTTP/1.1"),
        "unexpected request line: {request}"
    );
    assert!(
        request.to_ascii_lowercase().contains("user-agent: tagstats/"),
        "expected tagstats user agent, got: {request}"
    );
}

#[test]
fn non_success_status_is_an_error() {
    let (url, server) = serve_once(http_response("404 Not Found", "text/html", "missing"));

    let err = fetch_text(&url, &FetchConfig::default()).unwrap_err();
    server.join().expect("server thread");

    assert!(
        matches!(err, FetchError::Status { status: 404, .. }),
        "expected 404 status error, got: {err:?}"
    );
    assert_eq!(err.url(), url);
}

#[test]
fn oversized_body_is_truncated() {
    let body = "abcdefghijklmnopqrstuvwxyz";
    let (url, server) = serve_once(http_response("200 OK", "text/plain", body));
    let config = FetchConfig {
        max_bytes: 10,
        ..FetchConfig::default()
    };

    let page = fetch_text(&url, &config).expect("fetch should succeed");
    server.join().expect("server thread");

    assert!(page.truncated);
    assert_eq!(page.body, "abcdefghij");
    assert_eq!(page.bytes, 10);
    assert!(!page.is_html());
}

#[test]
fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let err = fetch_text(&format!("http://{addr}/"), &FetchConfig::default()).unwrap_err();
    assert!(
        matches!(err, FetchError::Transport { .. }),
        "expected transport error, got: {err:?}"
    );
}
