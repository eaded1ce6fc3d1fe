//! Home page and health routes.

use serde_json::{json, Value};
use travel_wish::{transport, AccommodationStore, DestinationCatalog};

async fn start_server() -> String {
    let state = transport::http::AppState::new(
        AccommodationStore::with_sample_data(),
        DestinationCatalog::featured(),
    );
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn home_lists_featured_destinations() -> Result<(), Box<dyn std::error::Error>> {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/")).await?;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Welcome to Travel Wish!");
    assert_eq!(
        body["featuredDestinations"],
        json!([
            { "id": 1, "name": "Paris", "description": "The city of lights", "image": "paris.jpg" },
            { "id": 2, "name": "Tokyo", "description": "A bustling metropolis", "image": "tokyo.jpg" },
            { "id": 3, "name": "New York", "description": "The city that never sleeps", "image": "newyork.jpg" }
        ])
    );

    Ok(())
}

#[tokio::test]
async fn health_reports_record_count() -> Result<(), Box<dyn std::error::Error>> {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let body: Value = client.get(format!("{base}/health")).send().await?.json().await?;
    assert_eq!(body, json!({ "status": "ok", "accommodations": 3 }));

    client.delete(format!("{base}/api/accommodations/1")).send().await?;
    let body: Value = client.get(format!("{base}/health")).send().await?.json().await?;
    assert_eq!(body["accommodations"], 2);

    Ok(())
}
