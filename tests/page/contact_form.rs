use claims::assert_matches;
use fake::{
    faker::{internet::en::SafeEmail, lorem::en::Sentence, name::en::FirstName},
    Fake,
};
use portfolio_page::domain::{SubmissionOutcome, ValidationError};
use urlencoding::encode;
use wiremock::{
    matchers::{any, body_string, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{portfolio_document, spawn_page};

#[tokio::test]
async fn valid_submission_is_posted_once_and_the_form_is_reset() {
    // GIVEN
    let mut app = spawn_page().await;
    let name: String = FirstName().fake();
    let email: String = SafeEmail().fake();
    let message: String = Sentence(3..8).fake();
    app.fill_form(&name, &email, &message);
    let body = format!(
        "name={}&email={}&message={}",
        encode(&name),
        encode(&email),
        encode(&message)
    )
    .replace("%20", "+");

    Mock::given(path("/f/portfolio"))
        .and(method("POST"))
        .and(header("Accept", "application/json"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.form_server)
        .await;

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert_matches!(result, Some(Ok(SubmissionOutcome::Success)));
    assert_eq!(
        app.alerts(),
        vec!["Thank you for your message! I'll get back to you soon."]
    );
    for field in ["name", "email", "message"] {
        assert_eq!(app.field(field), "", "{field} was not reset");
    }
}

#[tokio::test]
async fn invalid_forms_never_reach_the_server() {
    // GIVEN
    let mut app = spawn_page().await;
    let test_cases = [
        ("", "arsene@lup.in", "Hi", "Please fill in all fields.", "empty name"),
        ("Lupin", "", "Hi", "Please fill in all fields.", "empty email"),
        ("Lupin", "arsene@lup.in", "", "Please fill in all fields.", "empty message"),
        ("Lupin", "a@b", "Hi", "Please enter a valid email address.", "no dot in domain"),
        ("Lupin", "a@@b.com", "Hi", "Please enter a valid email address.", "doubled @"),
        ("Lupin", "invalidemail.com", "Hi", "Please enter a valid email address.", "no @ sign"),
    ];

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    for (name, email, message, expected_alert, why_invalid) in test_cases {
        app.fill_form(name, email, message);

        // WHEN
        let result = app.page.submit().await;

        // THEN
        assert_matches!(result, Some(Err(_)), "{why_invalid} was accepted");
        assert_eq!(
            app.alerts().last().map(String::as_str),
            Some(expected_alert),
            "Unexpected alert when the form had {why_invalid}"
        );
        assert_eq!(app.field("name"), name, "{why_invalid} cleared the form");
    }
}

#[tokio::test]
async fn server_error_messages_are_joined_and_fields_kept() {
    // GIVEN
    let mut app = spawn_page().await;
    app.fill_form("Lupin", "arsene@lup.in", "Hi");

    Mock::given(path("/f/portfolio"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [{ "message": "Bad name" }, { "message": "Bad email" }]
        })))
        .expect(1)
        .mount(&app.form_server)
        .await;

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert_matches!(result, Some(Ok(SubmissionOutcome::ServerError(_))));
    assert_eq!(app.alerts(), vec!["Error: Bad name, Bad email"]);
    assert_eq!(app.field("email"), "arsene@lup.in");
}

#[tokio::test]
async fn unparsable_error_body_yields_a_generic_failure() {
    // GIVEN
    let mut app = spawn_page().await;
    app.fill_form("Lupin", "arsene@lup.in", "Hi");

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal error</h1>"))
        .expect(1)
        .mount(&app.form_server)
        .await;

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert_matches!(result, Some(Ok(SubmissionOutcome::ParseError)));
    assert_eq!(
        app.alerts(),
        vec!["There was an error sending your message. Please try again."]
    );
    assert_eq!(app.field("message"), "Hi");
}

#[tokio::test]
async fn unreachable_endpoint_yields_a_connectivity_failure() {
    // GIVEN
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let mut app = spawn_page().await;
    let (document, _) = portfolio_document(&format!("http://127.0.0.1:{port}/f/portfolio"));
    app.page = portfolio_page::startup::Page::load(
        document,
        app.page.settings().clone(),
        portfolio_page::transport::HttpTransport::new(),
    );
    app.fill_form("Lupin", "arsene@lup.in", "Hi");

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert_matches!(result, Some(Ok(SubmissionOutcome::NetworkError)));
    assert_eq!(
        app.alerts(),
        vec!["There was an error sending your message. Please check your connection and try again."]
    );
    assert_eq!(app.field("name"), "Lupin");
}

#[tokio::test]
async fn every_submit_sends_its_own_request() {
    // GIVEN
    let mut app = spawn_page().await;

    Mock::given(path("/f/portfolio"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.form_server)
        .await;

    // WHEN
    for _ in 0..2 {
        app.fill_form("Lupin", "arsene@lup.in", "Hi");
        let result = app.page.submit().await;

        // THEN
        assert_matches!(result, Some(Ok(SubmissionOutcome::Success)));
    }
}

#[tokio::test]
async fn page_without_contact_form_ignores_submit() {
    // GIVEN
    let mut app = spawn_page().await;
    let mut settings = app.page.settings().clone();
    settings.contact_form_id = "newsletterForm".into();
    let (document, _) = portfolio_document(&app.form_server.uri());
    app.page = portfolio_page::startup::Page::load(
        document,
        settings,
        portfolio_page::transport::HttpTransport::new(),
    );

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert!(result.is_none());
    assert!(app.alerts().is_empty());
}

#[tokio::test]
async fn validation_errors_name_the_missing_fields() {
    // GIVEN
    let mut app = spawn_page().await;
    app.fill_form("Lupin", "", "");

    // WHEN
    let result = app.page.submit().await;

    // THEN
    assert_eq!(
        result.and_then(Result::err),
        Some(ValidationError::MissingFields(vec!["email", "message"]))
    );
}
