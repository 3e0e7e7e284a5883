//! End-to-end tests of the HTTP client against the domain router served on
//! a local port with the in-memory repository.

use advocates_client::*;
use axum::Router;
use domain_advocates::{AdvocateService, InMemoryAdvocateRepository, handlers};
use tokio::net::TcpListener;

async fn serve() -> String {
    let service = AdvocateService::new(InMemoryAdvocateRepository::new());
    let app = Router::new().nest("/api", handlers::router(service));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_seed_then_search() {
    let client = AdvocatesClient::new(serve().await).unwrap();

    let inserted = client.seed().await.unwrap();
    assert!(!inserted.is_empty());
    assert!(client.seed().await.unwrap().is_empty());

    let page = client.search("", 1, 5).await.unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].id, inserted[0].id);

    let chicago = client.search("chicago", 1, 20).await.unwrap();
    assert!(chicago.iter().all(|a| a.city == "Chicago"));
}

#[tokio::test]
async fn test_view_scrolls_through_everything() {
    let client = AdvocatesClient::new(serve().await).unwrap();
    let total = client.seed().await.unwrap().len();

    let mut view = AdvocateGridView::new(5);
    let request = view.start();
    view.fetch(&client, request).await;
    while let Some(request) = view.load_more() {
        view.fetch(&client, request).await;
    }

    assert_eq!(view.fetched().len(), total);
    assert!(!view.has_more());
}

#[tokio::test]
async fn test_unknown_route_is_status_error() {
    let base = serve().await;
    let client = AdvocatesClient::new(format!("{base}/missing")).unwrap();

    let err = client.search("", 1, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}
