use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::*;
use super::state::AppState;

pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/calculate", get(calculate))
        .route("/api/batch", post(upload_batch))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit_bytes))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::AzimuthCalculator;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        create_router(AppState::new(AzimuthCalculator::wgs84(), 100), 1024 * 1024)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["ellipsoid"], "wgs84");
    }

    #[tokio::test]
    async fn test_calculate_with_comma_decimals() {
        let uri = "/api/calculate?lat_a=50%2C0&lon_a=10&azimuth=90&distance_km=100&lat_b=50&lon_b=11";
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let azimuth = json["azimuth_from_b"].as_f64().unwrap();
        assert!((azimuth - 91.74).abs() < 0.01);
        let lat = json["target"]["latitude"].as_f64().unwrap();
        assert!((lat - 49.991618).abs() < 1e-4);
        assert!(json["distance_from_b_km"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_calculate_invalid_input() {
        let uri = "/api/calculate?lat_a=abc&lon_a=10&azimuth=90&distance_km=100&lat_b=50&lon_b=11";
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_INPUT");
        assert_eq!(json["message"], "Please enter valid values");
    }

    #[tokio::test]
    async fn test_calculate_missing_fields() {
        let response = router()
            .oneshot(Request::builder().uri("/api/calculate?lat_a=50").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_calculate_malformed_query_is_json() {
        let uri = "/api/calculate?lat_a=50&lat_a=51&lon_a=10&azimuth=90&distance_km=100&lat_b=50&lon_b=11";
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["message"].as_str().unwrap().contains("lat_a"));
    }

    #[tokio::test]
    async fn test_calculate_non_finite() {
        let uri = "/api/calculate?lat_a=50&lon_a=10&azimuth=90&distance_km=inf&lat_b=50&lon_b=11";
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "GEODESY_ERROR");
    }

    #[tokio::test]
    async fn test_batch_upload() {
        let csv = "lat_a,lon_a,azimuth,distance_km,lat_b,lon_b\n50.0,10.0,90,100,50.0,11.0\n";
        let body = format!(
            "--BOUNDARY\r\n\
             Content-Disposition: form-data; name=\"csv\"; filename=\"rows.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {}\r\n\
             --BOUNDARY--\r\n",
            csv
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/batch")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let report = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(report.contains("# Successful: 1\n"));
        assert!(report.contains(",91.74\n"));
    }

    #[tokio::test]
    async fn test_batch_without_csv_field() {
        let body = "--BOUNDARY\r\n\
                    Content-Disposition: form-data; name=\"other\"\r\n\r\n\
                    x\r\n\
                    --BOUNDARY--\r\n";

        let request = Request::builder()
            .method("POST")
            .uri("/api/batch")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
