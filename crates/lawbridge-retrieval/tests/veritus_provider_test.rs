//! Integration tests for the Veritus client and the degraded retrieval
//! path, using a wiremock provider double.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lawbridge_core::{DocumentRetriever, LegalCategory};
use lawbridge_retrieval::{RetrievalService, VeritusClient, VeritusConfig};

fn client_for(server: &MockServer) -> VeritusClient {
    VeritusClient::new(VeritusConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_search_parses_provider_papers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/papers/search"))
        .and(query_param("title", "legal tenant eviction notice"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "title": "Eviction Procedures",
                "abstract": "State eviction law requires notice.",
                "link": "https://papers.test/eviction",
                "score": 0.91
            },
            {
                "title": "Notice Requirements",
                "tldr": "Most states require 30 days.",
                "pdfLink": "https://papers.test/notice.pdf"
            }
        ])))
        .mount(&server)
        .await;

    let docs = client_for(&server)
        .search("tenant eviction notice", LegalCategory::All, 5)
        .await
        .unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].title, "Eviction Procedures");
    assert_eq!(docs[0].content, "State eviction law requires notice.");
    assert_eq!(docs[0].url, "https://papers.test/eviction");
    assert!((docs[0].score - 0.91).abs() < f32::EPSILON);
    assert_eq!(docs[1].content, "Most states require 30 days.");
    assert_eq!(docs[1].url, "https://papers.test/notice.pdf");
}

#[tokio::test]
async fn test_search_applies_category_prefix_and_limit() {
    let server = MockServer::start().await;

    let papers: Vec<serde_json::Value> = (0..8)
        .map(|i| serde_json::json!({ "title": format!("Paper {i}") }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/v1/papers/search"))
        .and(query_param("title", "housing law security deposit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(papers))
        .mount(&server)
        .await;

    let docs = client_for(&server)
        .search("security deposit", LegalCategory::Housing, 5)
        .await
        .unwrap();

    assert_eq!(docs.len(), 5);
    assert_eq!(docs[0].title, "Paper 0");
}

#[tokio::test]
async fn test_provider_error_degrades_to_corpus() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/papers/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = RetrievalService::new(Some(client_for(&server)));
    let docs = service
        .retrieve("tenant rights", LegalCategory::All, 5)
        .await;

    // Fallback corpus, not an error and not empty.
    assert!(!docs.is_empty());
    assert!(docs.iter().any(|d| d.content.contains("habitable dwelling")));
}

#[tokio::test]
async fn test_provider_empty_result_degrades_to_corpus() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/papers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let service = RetrievalService::new(Some(client_for(&server)));
    let docs = service
        .retrieve("asdkjasdkj", LegalCategory::All, 5)
        .await;

    assert_eq!(docs.len(), 3);
}

#[tokio::test]
async fn test_malformed_provider_body_degrades_to_corpus() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/papers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = RetrievalService::new(Some(client_for(&server)));
    let docs = service
        .retrieve("small claims court", LegalCategory::All, 5)
        .await;

    assert!(docs.iter().any(|d| d.title.contains("Small Claims")));
}
