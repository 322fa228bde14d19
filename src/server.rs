//! HTTP boundary.
//!
//! All transport mapping lives here: query extraction, the tagged error to
//! status-code conversion, CORS and request tracing. The core pipeline stays
//! transport-free.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::capability::Capabilities;
use crate::error::{FacegenError, FacegenResult};
use crate::pipeline::generate_animation;
use crate::seeds::normalize_seeds;

pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_DURATION_MS: u32 = 1000;

struct AppState {
    caps: Capabilities,
}

/// Build the application router. Factored out so tests can drive it
/// in-process.
pub fn router(caps: Capabilities) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/face.gif", get(face_gif))
        .with_state(Arc::new(AppState { caps }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind to all interfaces on `port` and serve until the process stops.
pub async fn run(caps: Capabilities, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on port: {port}");
    axum::serve(listener, router(caps)).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Deserialize)]
struct FaceGifParams {
    seeds: Option<String>,
    duration: Option<String>,
}

async fn face_gif(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FaceGifParams>,
) -> Response {
    match animation_response(&state.caps, &params) {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

fn animation_response(caps: &Capabilities, params: &FaceGifParams) -> FacegenResult<Response> {
    let seeds = normalize_seeds(params.seeds.as_deref())?;
    let duration_ms = parse_duration(params.duration.as_deref())?;
    let animation = generate_animation(caps, &seeds, duration_ms)?;
    Ok(([(header::CONTENT_TYPE, animation.mime)], animation.bytes).into_response())
}

fn parse_duration(raw: Option<&str>) -> FacegenResult<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DURATION_MS);
    };
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(FacegenError::invalid_input(
            "Error: 'duration' must be a positive integer (milliseconds)",
        )),
    }
}

impl IntoResponse for FacegenError {
    fn into_response(self) -> Response {
        let status = match &self {
            FacegenError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            FacegenError::RenderingUnavailable
            | FacegenError::EncodingUnavailable
            | FacegenError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match self {
            FacegenError::Generation(e) => format!("Error generating GIF: {e}"),
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Dynamic GIF Generator</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 { color: #333; }
        code {
            background: #f0f0f0;
            padding: 4px 8px;
            border-radius: 4px;
            font-family: monospace;
        }
        .example {
            margin: 20px 0;
            padding: 15px;
            background: #f9f9f9;
            border-left: 4px solid #4CAF50;
        }
        img {
            border: 2px solid #ddd;
            margin: 10px 0;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🎬 Dynamic GIF Generator</h1>
        <p>Generates animated GIF face images based on seed values.</p>

        <h2>Usage</h2>
        <div class="example">
            <code>/face.gif?seeds=SEED1,SEED2,SEED3</code>
        </div>

        <h2>Examples</h2>
        <p><strong>Seeds: rocket, sunset, ocean</strong></p>
        <img src="/face.gif?seeds=rocket,sunset,ocean" width="150">
        <p><code>/face.gif?seeds=rocket,sunset,ocean</code></p>

        <p><strong>Seeds: red, blue (faster)</strong></p>
        <img src="/face.gif?seeds=red,blue&duration=500" width="150">
        <p><code>/face.gif?seeds=red,blue&duration=500</code></p>

        <h2>API</h2>
        <p><strong>GET /face.gif</strong></p>
        <ul>
            <li><strong>Parameter:</strong> <code>seeds</code> (comma-separated strings, required)</li>
            <li><strong>Parameter:</strong> <code>duration</code> (milliseconds per frame, optional, default: 1000)</li>
            <li><strong>Returns:</strong> Animated GIF (image/gif)</li>
        </ul>

        <h2>Features</h2>
        <ul>
            <li>Deterministic generation (same seeds = same GIF)</li>
            <li>14,400 possible combinations per frame</li>
            <li>Animated GIF format (loops forever)</li>
            <li>Works everywhere (email, social, messengers)</li>
            <li>True "forever stamp"</li>
        </ul>
    </div>
</body>
</html>
"#;
