//! Parcel geometry summaries: centroid, label anchor and bounds for a polygon
//! ring, plus the distance from an optional reference point (typically the
//! map centre or a transit stop).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use foundation::{haversine_distance_m, representative_point, ring_centroid, LngLat, LngLatBounds};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct GeometrySummaryRequest {
    /// `[lng, lat]` pairs, open or closed.
    pub ring: Vec<[f64; 2]>,
    #[serde(default)]
    pub from: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySummary {
    pub centroid: [f64; 2],
    pub label_point: [f64; 2],
    /// `[[min_lng, min_lat], [max_lng, max_lat]]`
    pub bounds: [[f64; 2]; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    TooFewVertices(usize),
    NonFiniteCoordinate,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::TooFewVertices(n) => {
                write!(f, "ring needs at least 3 vertices, got {n}")
            }
            GeometryError::NonFiniteCoordinate => write!(f, "ring contains a non-finite coordinate"),
        }
    }
}

impl std::error::Error for GeometryError {}

pub fn summarize_ring(req: &GeometrySummaryRequest) -> Result<GeometrySummary, GeometryError> {
    let mut ring: Vec<LngLat> = req.ring.iter().copied().map(LngLat::from).collect();
    if ring.iter().any(|p| !p.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate);
    }
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(GeometryError::TooFewVertices(ring.len()));
    }

    let centroid = ring_centroid(&ring).ok_or(GeometryError::TooFewVertices(0))?;
    let label_point = representative_point(&ring).unwrap_or(centroid);
    let bounds = LngLatBounds::from_points(&ring).ok_or(GeometryError::TooFewVertices(0))?;
    let distance_m = req
        .from
        .map(LngLat::from)
        .filter(LngLat::is_finite)
        .map(|from| haversine_distance_m(from, label_point));

    Ok(GeometrySummary {
        centroid: centroid.to_array(),
        label_point: label_point.to_array(),
        bounds: [bounds.min.to_array(), bounds.max.to_array()],
        distance_m,
    })
}

pub async fn summarize(Json(req): Json<GeometrySummaryRequest>) -> Response {
    match summarize_ring(&req) {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            warn!("rejecting geometry summary: {err}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{summarize_ring, GeometryError, GeometrySummaryRequest};
    use crate::{app, ServerConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn square() -> Vec<[f64; 2]> {
        vec![
            [-122.34, 47.60],
            [-122.33, 47.60],
            [-122.33, 47.61],
            [-122.34, 47.61],
            [-122.34, 47.60],
        ]
    }

    #[test]
    fn square_summary() {
        let summary = summarize_ring(&GeometrySummaryRequest {
            ring: square(),
            from: Some([-122.335, 47.605]),
        })
        .unwrap();
        assert!((summary.centroid[0] + 122.335).abs() < 1e-7);
        assert!((summary.centroid[1] - 47.605).abs() < 1e-7);
        assert_eq!(summary.label_point, summary.centroid);
        assert_eq!(summary.bounds, [[-122.34, 47.60], [-122.33, 47.61]]);
        assert!(summary.distance_m.unwrap() < 1e-3);
    }

    #[test]
    fn rejects_degenerate_rings() {
        let req = GeometrySummaryRequest {
            ring: vec![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
            from: None,
        };
        assert_eq!(summarize_ring(&req), Err(GeometryError::TooFewVertices(2)));

        let req = GeometrySummaryRequest {
            ring: vec![[0.0, 0.0], [f64::NAN, 1.0], [1.0, 0.0]],
            from: None,
        };
        assert_eq!(summarize_ring(&req), Err(GeometryError::NonFiniteCoordinate));
    }

    async fn post(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let resp = app(ServerConfig::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/geometry/summary")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn summary_endpoint() {
        let (status, body) = post(serde_json::json!({ "ring": square() })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["labelPoint"].is_array());
        assert!(body.get("distanceM").is_none());
    }

    #[tokio::test]
    async fn summary_endpoint_rejects_short_ring() {
        let (status, body) = post(serde_json::json!({ "ring": [[0.0, 0.0], [1.0, 1.0]] })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("at least 3"));
    }
}
