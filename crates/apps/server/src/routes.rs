use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};
use viewstate::parse_query;
use zoning::{get_all_zone_codes, get_zone_info, zones_in_category, ZoneCategory, ZoneInfo};

use crate::AppState;

#[derive(Debug, Serialize)]
struct CategoryListing {
    category: ZoneCategory,
    label: &'static str,
    codes: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct ZoneListing {
    codes: Vec<&'static str>,
    categories: Vec<CategoryListing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneDetail {
    #[serde(flatten)]
    zone: ZoneInfo,
    category_label: &'static str,
}

pub async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

pub async fn list_zones(State(state): State<AppState>) -> Response {
    let categories = ZoneCategory::ALL
        .into_iter()
        .map(|category| CategoryListing {
            category,
            label: category.label(),
            codes: zones_in_category(category)
                .into_iter()
                .map(|zone| &*zone.code)
                .collect(),
        })
        .collect();

    let listing = ZoneListing {
        codes: get_all_zone_codes(),
        categories,
    };
    (cache_headers(&state), Json(listing)).into_response()
}

pub async fn get_zone(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match get_zone_info(&code) {
        Some(zone) => {
            let detail = ZoneDetail {
                category_label: zone.category.label(),
                zone,
            };
            (cache_headers(&state), Json(detail)).into_response()
        }
        None => {
            debug!(code = code.as_str(), "zone lookup miss");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "unknown zone code", "code": code })),
            )
                .into_response()
        }
    }
}

pub async fn decode_view(RawQuery(query): RawQuery) -> Response {
    let params = parse_query(query.as_deref().unwrap_or(""));
    Json(params).into_response()
}

pub async fn share_url(RawQuery(query): RawQuery) -> Response {
    let params = parse_query(query.as_deref().unwrap_or(""));
    Json(json!({ "url": params.shareable_url() })).into_response()
}

fn cache_headers(state: &AppState) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = format!("public, max-age={}", state.config.cache_max_age_secs);
    match HeaderValue::from_str(&value) {
        Ok(v) => {
            headers.insert(http::header::CACHE_CONTROL, v);
        }
        Err(err) => warn!("invalid cache-control value {value:?}: {err}"),
    }
    headers
}

#[cfg(test)]
mod tests {
    use crate::{app, ServerConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, http::HeaderMap, serde_json::Value) {
        let resp = app(ServerConfig::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, headers, json)
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let resp = app(ServerConfig::default())
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn zone_with_height_suffix() {
        let (status, headers, body) = get("/api/zoning/nc3-65").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "NC3-65");
        assert_eq!(body["maxHeightFt"], 65);
        assert_eq!(body["name"], "Neighborhood Commercial 3");
        assert_eq!(body["categoryLabel"], "Commercial");
        assert_eq!(headers[http::header::CACHE_CONTROL], "public, max-age=3600");
    }

    #[tokio::test]
    async fn unknown_zone_is_404() {
        let (status, _, body) = get("/api/zoning/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown zone code");
    }

    #[tokio::test]
    async fn listing_groups_codes_by_category() {
        let (status, _, body) = get("/api/zoning").await;
        assert_eq!(status, StatusCode::OK);
        let codes = body["codes"].as_array().unwrap();
        assert!(codes.iter().any(|c| c == "NR1"));
        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0]["category"], "residential");
        assert_eq!(categories[0]["label"], "Residential");
        let grouped: usize = categories
            .iter()
            .map(|c| c["codes"].as_array().unwrap().len())
            .sum();
        assert_eq!(grouped, codes.len());
    }

    #[tokio::test]
    async fn share_with_defaults_is_bare_map_path() {
        let (status, _, body) = get("/api/share").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "/map");

        let (_, _, body) = get("/api/share?lat=47.6062&lng=-122.3321&z=12&layers=zoning").await;
        assert_eq!(body["url"], "/map");
    }

    #[tokio::test]
    async fn share_canonicalizes_query() {
        let (_, _, body) =
            get("/api/share?compare=true&utm=x&lat=47.61&layers=zoning,transit").await;
        assert_eq!(
            body["url"],
            "/map?lat=47.6100&layers=zoning%2Ctransit&compare=true"
        );
    }

    #[tokio::test]
    async fn view_distinguishes_cleared_layers() {
        let (_, _, body) = get("/api/view?layers=").await;
        assert_eq!(body["layers"], serde_json::json!([]));

        let (_, _, body) = get("/api/view").await;
        assert_eq!(body["layers"], serde_json::json!(["zoning"]));
        let lat = body["viewState"]["lat"].as_f64().unwrap();
        assert!((lat - 47.6062).abs() < 1e-9);
    }
}
