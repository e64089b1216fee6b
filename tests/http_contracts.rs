//! Integration tests for the explore endpoints against a mock server.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use tokio::sync::mpsc;

use dataset_explorer::domain::{DatasetId, ExplorerError, PublicationTypeFilter, Sorting};
use dataset_explorer::worker::{
    CreateFromCartRequest, DownloadCartRequest, ExploreClient, ExplorerWorker, Failure, SearchRequest,
    WorkerMessage, WorkerResponse,
};
use dataset_explorer::{handle_event, Action, AppState, Event};

fn client(server: &mockito::ServerGuard) -> ExploreClient {
    ExploreClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

fn search_request(query: &str) -> SearchRequest {
    SearchRequest {
        csrf_token: "tok".to_string(),
        query: query.to_string(),
        publication_type: PublicationTypeFilter::Any,
        sorting: Sorting::Newest,
    }
}

#[tokio::test]
async fn search_posts_criteria_and_decodes_results() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/explore")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "csrf_token": "tok",
            "query": "phones",
            "publication_type": "any",
            "sorting": "newest"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "id": 3, "title": "Phones", "tags": ["mobile"], "total_size_in_human_format": "2 KB" },
                { "id": 7, "title": "Tablets", "extra_field": true }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let datasets = client(&server).search(&search_request("phones")).await.unwrap();

    mock.assert_async().await;
    let ids: Vec<DatasetId> = datasets.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![DatasetId(3), DatasetId(7)]);
    assert_eq!(datasets[0].download_label(), "Download (2 KB)");
}

#[tokio::test]
async fn search_with_non_array_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore")
        .with_status(200)
        .with_body(r#"{"error": "oops"}"#)
        .create_async()
        .await;

    let err = client(&server).search(&search_request("")).await.unwrap_err();
    assert!(matches!(err, ExplorerError::Decode(_)));
}

#[tokio::test]
async fn create_from_cart_sends_form_fields() {
    let dir = tempfile::tempdir().unwrap();
    let attachment = dir.path().join("model.uvl");
    std::fs::write(&attachment, "features\n    Root").unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/explore/create-dataset-from-cart")
        .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="title"\r\n\r\nMerged\r\n"#.to_string()),
            Matcher::Regex(r#"name="selected_datasets"\r\n\r\n4,8\r\n"#.to_string()),
            Matcher::Regex(r#"name="csrf_token"\r\n\r\ntok\r\n"#.to_string()),
            Matcher::Regex(r#"name="files"; filename="model.uvl""#.to_string()),
        ]))
        .with_status(200)
        .with_body(json!({ "success": true, "message": "Dataset created successfully!", "dataset_id": 11 }).to_string())
        .create_async()
        .await;

    let request = CreateFromCartRequest {
        title: "Merged".to_string(),
        description: String::new(),
        publication_type: "none".to_string(),
        tags: "a, b".to_string(),
        selected_datasets: "4,8".to_string(),
        csrf_token: "tok".to_string(),
        attachments: vec![attachment],
    };
    let outcome = client(&server).create_from_cart(&request).await.unwrap();

    mock.assert_async().await;
    assert!(outcome.success);
    assert_eq!(outcome.dataset_id, Some(DatasetId(11)));
}

#[tokio::test]
async fn create_verdict_is_read_from_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore/create-dataset-from-cart")
        .with_status(500)
        .with_body(json!({ "success": false, "message": "Title already used" }).to_string())
        .create_async()
        .await;

    let request = CreateFromCartRequest {
        title: "Merged".to_string(),
        description: String::new(),
        publication_type: "none".to_string(),
        tags: String::new(),
        selected_datasets: "1".to_string(),
        csrf_token: String::new(),
        attachments: vec![],
    };
    let outcome = client(&server).create_from_cart(&request).await.unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Title already used"));
}

#[tokio::test]
async fn download_sends_csrf_header_and_returns_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/explore/download_cart")
        .match_header("x-csrftoken", "tok")
        .match_body(Matcher::Json(json!({ "dataset_ids": [4, 2], "filename": "cart" })))
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(b"PK\x03\x04archive")
        .create_async()
        .await;

    let request = DownloadCartRequest {
        dataset_ids: vec![DatasetId(4), DatasetId(2)],
        filename: "cart".to_string(),
    };
    let bytes = client(&server).download_cart(&request, "tok").await.unwrap();

    mock.assert_async().await;
    assert_eq!(bytes, b"PK\x03\x04archive".to_vec());
}

#[tokio::test]
async fn download_rejection_carries_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore/download_cart")
        .with_status(400)
        .with_body("No datasets selected")
        .create_async()
        .await;

    let request = DownloadCartRequest {
        dataset_ids: vec![],
        filename: "models".to_string(),
    };
    let err = client(&server).download_cart(&request, "").await.unwrap_err();

    match err {
        ExplorerError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "No datasets selected");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn worker_saves_archive_and_reports_rejections() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let _ok = server
        .mock("POST", "/explore/download_cart")
        .match_body(Matcher::PartialJson(json!({ "filename": "cart" })))
        .with_status(200)
        .with_body("zip-bytes")
        .create_async()
        .await;
    let _rejected = server
        .mock("POST", "/explore/download_cart")
        .match_body(Matcher::PartialJson(json!({ "filename": "empty" })))
        .with_status(400)
        .with_body("No datasets selected")
        .create_async()
        .await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client(&server), dir.path().join("downloads"), tx);

    let response = worker
        .process(WorkerMessage::DownloadCart {
            request: DownloadCartRequest {
                dataset_ids: vec![DatasetId(1)],
                filename: "cart".to_string(),
            },
            csrf_token: "tok".to_string(),
            save_as: "cart.zip".to_string(),
        })
        .await;
    let WorkerResponse::ArchiveSaved(saved) = response else {
        panic!("expected a saved archive, got {response:?}");
    };
    assert_eq!(saved.path, dir.path().join("downloads").join("cart.zip"));
    assert_eq!(saved.bytes, 9);
    assert_eq!(std::fs::read(&saved.path).unwrap(), b"zip-bytes");

    let response = worker
        .process(WorkerMessage::DownloadCart {
            request: DownloadCartRequest {
                dataset_ids: vec![DatasetId(1)],
                filename: "empty".to_string(),
            },
            csrf_token: "tok".to_string(),
            save_as: "empty.zip".to_string(),
        })
        .await;
    assert_eq!(
        response,
        WorkerResponse::DownloadFailed(Failure::Rejected("No datasets selected".to_string()))
    );
}

#[tokio::test]
async fn executed_search_comes_back_as_event() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore")
        .with_status(200)
        .with_body(json!([{ "id": 5, "title": "Five" }]).to_string())
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client(&server), std::env::temp_dir(), tx);
    let mut state = AppState::new("tok".to_string());

    let (_, actions) = handle_event(&mut state, &Event::PageLoaded { query: None }).unwrap();
    for action in actions {
        worker.execute(action);
    }

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, Event::WorkerResponse(WorkerResponse::SearchCompleted { .. })));

    handle_event(&mut state, &event).unwrap();
    assert_eq!(state.compute_viewmodel().results.counter.as_deref(), Some("1 dataset found"));
}

#[tokio::test]
async fn server_error_on_search_shows_banner() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client(&server), std::env::temp_dir(), tx);
    let mut state = AppState::new(String::new());

    let (_, actions) = handle_event(&mut state, &Event::QueryInput("x".to_string())).unwrap();
    let [Action::PostToWorker(message)] = &actions[..] else {
        panic!("expected one search, got {actions:?}");
    };
    let response = worker.process(message.clone()).await;
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    let vm = state.compute_viewmodel();
    assert_eq!(vm.results.error.as_deref(), Some("Search error: boom"));
    assert!(vm.results.cards.is_empty());
}

async fn search_through_worker(worker: &ExplorerWorker, state: &mut AppState) {
    let (_, actions) = handle_event(state, &Event::QueryInput("x".to_string())).unwrap();
    let [Action::PostToWorker(message)] = &actions[..] else {
        panic!("expected one search, got {actions:?}");
    };
    let response = worker.process(message.clone()).await;
    handle_event(state, &Event::WorkerResponse(response)).unwrap();
}

fn state_with_stale_cards() -> AppState {
    let mut state = AppState::new(String::new());
    state.apply_search_results(vec![serde_json::from_value(json!({ "id": 1, "title": "Old" })).unwrap()]);
    state
}

#[tokio::test]
async fn unreachable_server_shows_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ExploreClient::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(5)).unwrap();
    let (tx, _rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client, std::env::temp_dir(), tx);
    let mut state = state_with_stale_cards();

    search_through_worker(&worker, &mut state).await;

    let vm = state.compute_viewmodel();
    let banner = vm.results.error.unwrap();
    assert!(banner.starts_with("Network error: HTTP error"), "{banner}");
    assert_eq!(vm.results.counter.as_deref(), Some("Search failed"));
    assert!(vm.results.cards.is_empty());
    assert!(!vm.results.not_found_visible);
}

#[tokio::test]
async fn non_json_search_reply_shows_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/explore")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>login</html>")
        .create_async()
        .await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client(&server), std::env::temp_dir(), tx);
    let mut state = state_with_stale_cards();

    search_through_worker(&worker, &mut state).await;

    let vm = state.compute_viewmodel();
    let banner = vm.results.error.unwrap();
    assert!(banner.starts_with("Network error: Decode error"), "{banner}");
    assert_eq!(vm.results.counter.as_deref(), Some("Search failed"));
    assert!(vm.results.cards.is_empty());
}

#[tokio::test]
async fn truncated_error_body_is_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 400 Bad Request\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
    });

    let client = ExploreClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let request = DownloadCartRequest {
        dataset_ids: vec![DatasetId(1)],
        filename: "models".to_string(),
    };
    let err = client.download_cart(&request, "tok").await.unwrap_err();

    assert!(matches!(err, ExplorerError::Http(_)), "{err:?}");
    assert!(matches!(Failure::from(err), Failure::Transport(_)));
}
