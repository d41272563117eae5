mod common;

use murl::client::{RawTransport, Transport};
use murl::error::MurlError;
use murl::http::reader::DisplayMode;
use murl::http::request::RequestBuilder;
use murl::http::writer::serialize_request;

use common::{LimitedWriter, OK_HELLO, closed_addr, serve};

#[tokio::test]
async fn test_raw_sends_formatted_request_and_prints_body() {
    let (addr, server) = serve(vec![OK_HELLO]).await;

    let request = RequestBuilder::new()
        .method("POST")
        .url(format!("http://{}/submit", addr))
        .header("X-Id: 42")
        .body("payload")
        .build()
        .unwrap();

    let mut out = Vec::new();
    RawTransport::new(DisplayMode::Quiet)
        .exchange(&request, &mut out)
        .await
        .unwrap();

    let received = server.await.unwrap();
    let expected = String::from_utf8(serialize_request(&request).to_vec()).unwrap();
    assert_eq!(received, vec![expected]);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Connecting to 127.0.0.1:{} via TCP...\nhello\n", addr.port())
    );
}

#[tokio::test]
async fn test_raw_verbose_echoes_both_directions() {
    let (addr, server) = serve(vec![OK_HELLO]).await;

    let request = RequestBuilder::new()
        .url(format!("http://{}/", addr))
        .build()
        .unwrap();

    let mut out = Vec::new();
    RawTransport::new(DisplayMode::Verbose)
        .exchange(&request, &mut out)
        .await
        .unwrap();
    server.await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("> GET / HTTP/1.1\n> Host: 127.0.0.1\n> Accept: */*\n"));
    assert!(out.contains("< HTTP/1.1 200 OK\n"));
    assert!(out.contains("< Content-Length: 5\n< Connection: close\n< \n< hello\n"));
}

#[tokio::test]
async fn test_raw_connect_failure_is_not_fatal() {
    let addr = closed_addr().await;

    let request = RequestBuilder::new()
        .url(format!("http://{}/", addr))
        .build()
        .unwrap();

    let mut out = Vec::new();
    let err = RawTransport::new(DisplayMode::Quiet)
        .exchange(&request, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, MurlError::RawConnect(_)));
    assert!(!err.is_fatal());
    assert!(err.to_string().starts_with("Error connecting to server: "));
}

#[tokio::test]
async fn test_raw_output_failure_is_not_fatal() {
    let addr = closed_addr().await;

    let request = RequestBuilder::new()
        .url(format!("http://{}/", addr))
        .build()
        .unwrap();

    let mut out = LimitedWriter::new(0);
    let err = RawTransport::new(DisplayMode::Quiet)
        .exchange(&request, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, MurlError::RawOutput(_)));
    assert!(!err.is_fatal());
}
