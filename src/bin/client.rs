//! Demo client exercising all four call patterns against a running server.
//!
//! ```not_rust
//! SERVER_URL=ws://localhost:3000 cargo run --bin client
//! ```

use std::env;
use std::error::Error;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use route_guide::handlers::socket_actor::END_OF_STREAM_FRAME;
use route_guide::models::{
    Feature, Point, RecommendationMode, RecommendationRequest, Rectangle, RouteSummary,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base = env::var("SERVER_URL").unwrap_or_else(|_| "ws://localhost:3000".to_string());

    run_get_feature(&base).await?;
    run_list_features(&base).await?;
    run_record_route(&base).await?;
    run_recommend(&base).await?;

    Ok(())
}

async fn run_get_feature(base: &str) -> Result<(), Box<dyn Error>> {
    let (mut ws, _) = connect_async(format!("{}/ws/get_feature", base)).await?;

    let point = Point::new(310235000, 121437403);
    ws.send(Message::Text(serde_json::to_string(&point)?)).await?;

    while let Some(frame) = ws.next().await {
        match frame? {
            Message::Text(text) => {
                match serde_json::from_str::<Option<Feature>>(&text)? {
                    Some(feature) => println!("GetFeature: {}", feature.name),
                    None => println!("GetFeature: no feature at {:?}", point),
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
    Ok(())
}

async fn run_list_features(base: &str) -> Result<(), Box<dyn Error>> {
    let (mut ws, _) = connect_async(format!("{}/ws/list_features", base)).await?;

    // corners arrive high-first on latitude; the server normalizes
    let rect = Rectangle {
        low: Point::new(313374060, 121358540),
        high: Point::new(311034130, 121598790),
    };
    ws.send(Message::Text(serde_json::to_string(&rect)?)).await?;

    while let Some(frame) = ws.next().await {
        match frame? {
            Message::Text(text) => {
                let feature: Feature = serde_json::from_str(&text)?;
                println!("ListFeatures: {}", feature.name);
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
    Ok(())
}

async fn run_record_route(base: &str) -> Result<(), Box<dyn Error>> {
    let (mut ws, _) = connect_async(format!("{}/ws/record_route", base)).await?;

    let route = vec![
        Point::new(313374060, 121358540),
        Point::new(311034130, 121598790),
        Point::new(310235000, 121437403),
    ];

    // upload one point per second, like a courier reporting its position
    let mut paced = Box::pin(async_stream::stream! {
        for point in route {
            tokio::time::sleep(Duration::from_secs(1)).await;
            yield point;
        }
    });
    while let Some(point) = paced.next().await {
        ws.send(Message::Text(serde_json::to_string(&point)?)).await?;
    }
    ws.send(Message::Text(END_OF_STREAM_FRAME.to_string())).await?;

    while let Some(frame) = ws.next().await {
        match frame? {
            Message::Text(text) => {
                let summary: RouteSummary = serde_json::from_str(&text)?;
                println!(
                    "RecordRoute: {} points, {} m, {} s",
                    summary.point_count, summary.distance, summary.elapsed_seconds
                );
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
    Ok(())
}

async fn run_recommend(base: &str) -> Result<(), Box<dyn Error>> {
    let (mut ws, _) = connect_async(format!("{}/ws/recommend", base)).await?;

    for mode in [RecommendationMode::Nearest, RecommendationMode::Farthest] {
        let request = RecommendationRequest {
            point: Point::new(310000000, 121500000),
            mode,
        };
        ws.send(Message::Text(serde_json::to_string(&request)?)).await?;

        if let Some(frame) = ws.next().await {
            if let Message::Text(text) = frame? {
                match serde_json::from_str::<Option<Feature>>(&text)? {
                    Some(feature) => println!("Recommend {:?}: {}", mode, feature.name),
                    None => println!("Recommend {:?}: catalog is empty", mode),
                }
            }
        }
    }

    ws.send(Message::Text(END_OF_STREAM_FRAME.to_string())).await?;
    while let Some(frame) = ws.next().await {
        if let Message::Close(_) = frame? {
            break;
        }
    }
    Ok(())
}
