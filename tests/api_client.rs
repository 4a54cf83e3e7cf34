//! Integration tests for the HTTP client against a local stub server.
//!
//! The stub accepts one connection, records the raw request and answers with a canned
//! status and body, so the tests exercise the real reqwest stack without any network.

use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use elegance_names::api::{ApiConfig, NameApi, NameError, SuggestionOptions, SuggestionSource};
use elegance_names::i18n::{I18n, Language};
use elegance_names::logic::{ControllerConfig, FormController};
use elegance_names::state::InputType;

/// Captured request: head (request line + headers) and body.
struct Captured {
    head: String,
    body: String,
}

/// What: Serve exactly one HTTP response on an ephemeral port.
///
/// Output:
/// - Base URL (`http://127.0.0.1:PORT/api`) and a receiver for the captured request
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let Ok((mut sock, _)) = listener.accept().await else {
            return;
        };
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head, body_start, content_len) = loop {
            let n = sock.read(&mut chunk).await.expect("read request");
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let len = head
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                break (head, pos + 4, len);
            }
        };
        while buf.len() < body_start + content_len {
            let n = sock.read(&mut chunk).await.expect("read body");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let req_body = String::from_utf8_lossy(&buf[body_start..]).to_string();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes()).await.expect("write response");
        let _ = sock.shutdown().await;
        let _ = tx.send(Captured {
            head,
            body: req_body,
        });
    });
    (format!("http://{addr}/api"), rx)
}

fn client(base_url: String) -> NameApi {
    NameApi::new(&ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .expect("client")
}

const HUI_SEN: &str = r#"{"suggestions":[{"chineseName":"慧森","pinyin":"hui sen","characters":[{"character":"慧","pinyin":"huì"},{"character":"森","pinyin":"sēn"}],"meaning":"Wise forest","culturalNotes":"","personality":"Calm","englishIntro":"Hui Sen means wise forest."}]}"#;

#[tokio::test]
async fn success_formats_pinyin_and_sends_expected_body() {
    let (base, captured) = serve_once("200 OK", HUI_SEN).await;
    let api = client(base);
    assert!(api.endpoint().ends_with("/api/generate"));

    let options = SuggestionOptions::new(Language::En).with_mode(InputType::Chinese);
    let suggestions = api
        .get_name_suggestions("Barack Obama", &options)
        .await
        .expect("suggestions");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].chinese_name.as_deref(), Some("慧森"));
    assert_eq!(suggestions[0].pinyin.as_deref(), Some("Hui Sen"));
    let chars = suggestions[0].characters.as_ref().expect("characters");
    assert_eq!(chars[0].pinyin.as_deref(), Some("Huì"));
    assert_eq!(chars[1].pinyin.as_deref(), Some("Sēn"));

    let req = captured.await.expect("captured request");
    assert!(req.head.starts_with("POST /api/generate HTTP/1.1"));
    assert!(
        req.head
            .to_ascii_lowercase()
            .contains("content-type: application/json")
    );
    let body: serde_json::Value = serde_json::from_str(&req.body).expect("json body");
    assert_eq!(body["english_name"], "Barack Obama");
    assert_eq!(body["language"], "en");
    assert_eq!(body["mode"], "chinese");
}

#[tokio::test]
async fn server_error_carries_message() {
    let (base, _captured) = serve_once(
        "500 Internal Server Error",
        r#"{"error":"rate limited"}"#,
    )
    .await;
    let err = client(base)
        .get_name_suggestions("Ann", &SuggestionOptions::new(Language::Zh))
        .await
        .expect_err("server error");
    assert_eq!(
        err,
        NameError::Server {
            status: 500,
            message: "rate limited".into()
        }
    );
}

#[tokio::test]
async fn server_error_without_body_uses_generic_message() {
    let (base, _captured) = serve_once("502 Bad Gateway", "").await;
    let err = client(base)
        .get_name_suggestions("Ann", &SuggestionOptions::new(Language::Zh))
        .await
        .expect_err("server error");
    assert_eq!(
        err,
        NameError::Server {
            status: 502,
            message: elegance_names::api::GENERIC_FAILURE.into()
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (base, _captured) = serve_once("200 OK", "not json").await;
    let err = client(base)
        .get_name_suggestions("Ann", &SuggestionOptions::new(Language::En))
        .await
        .expect_err("decode error");
    assert!(matches!(err, NameError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let err = client(format!("http://{addr}/api"))
        .get_name_suggestions("Ann", &SuggestionOptions::new(Language::En))
        .await
        .expect_err("transport error");
    assert!(matches!(err, NameError::Transport(_)));
    assert!(err.is_network_or_server());
}

#[tokio::test]
async fn form_renders_service_result_end_to_end() {
    let (base, _captured) = serve_once("200 OK", HUI_SEN).await;
    let api = client(base);
    let i18n = I18n::new(Language::En);
    let mut form = FormController::new(ControllerConfig::default());
    form.set_input("Barack Obama");

    let req = form
        .handle_submit(&i18n, Instant::now())
        .expect("valid submission");
    assert!(form.is_loading());
    let outcome = api.get_name_suggestions(&req.name, &req.options).await;
    form.complete_submit(outcome, &i18n, Instant::now());

    assert!(!form.is_loading());
    assert!(form.error().is_none());
    let card = &form.cards()[0];
    assert_eq!(card.pinyin.as_deref(), Some("Hui Sen"));
    let headings: Vec<&str> = card.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(
        headings,
        ["Meaning", "Personality Traits", "English Introduction"]
    );
}
