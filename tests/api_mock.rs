//! End-to-end request tests against a local one-shot HTTP server, verifying
//! the exact path and headers the client puts on the wire.

use onair_va::{Client, Error};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve exactly one request, then return the raw request text.
fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        // GET requests have no body; the blank line ends them.
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}"), handle)
}

#[test]
fn flights_request_carries_path_and_headers() {
    let body = r#"{"Content":[{"Id":"f1","DepartureAirport":{"Id":"a1","ICAO":"ESSA"},"ArrivalActualAirport":{"Id":"a2","ICAO":"ESGG"},"Registered":true,"ResultComments":"","StartTime":"2024-01-01T10:00:00Z","EndTime":null}]}"#;
    let (base_url, server) = one_shot_server("HTTP/1.1 200 OK", body);

    let client = Client::new("ABC123").unwrap().with_base_url(base_url);
    let flights = client.flights("42").unwrap();

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, "f1");
    assert!(flights[0].registered);
    assert_eq!(flights[0].end_time, None);

    // Header names arrive lowercased on the wire.
    let request = server.join().unwrap().to_ascii_lowercase();
    assert!(request.starts_with("get /company/42/flights http/1.1"));
    assert!(request.contains("oa-apikey: abc123"));
    assert!(request.contains("accept: application/json"));
    assert!(request.contains(&format!("user-agent: onair_va/{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn company_id_is_percent_encoded_in_the_path() {
    let (base_url, server) = one_shot_server("HTTP/1.1 200 OK", r#"{"Content":[]}"#);

    let client = Client::new("ABC123").unwrap().with_base_url(base_url);
    let notifications = client.notifications("my airline/42").unwrap();
    assert!(notifications.is_empty());

    let request = server.join().unwrap();
    assert!(request.contains("/company/my%20airline%2F42/notifications"));
}

#[test]
fn unauthorized_status_is_a_status_error_not_a_decode_error() {
    let (base_url, server) = one_shot_server(
        "HTTP/1.1 401 Unauthorized",
        r#"{"Message":"invalid api key"}"#,
    );

    let client = Client::new("wrong-key").unwrap().with_base_url(base_url);
    let res = client.cash_flow("42");
    match res {
        Err(Error::Status { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn malformed_success_body_is_an_envelope_error() {
    let (base_url, server) = one_shot_server("HTTP/1.1 200 OK", "<html>oops</html>");

    let client = Client::new("ABC123").unwrap().with_base_url(base_url);
    let res = client.flights("42");
    assert!(matches!(res, Err(Error::Envelope { .. })));
    server.join().unwrap();
}
