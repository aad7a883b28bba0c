use axum::{
    body::{Body, Bytes},
    http::Request,
    response::Response,
    Router,
};
use tower::ServiceExt;

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup driving the router in-process
pub struct TestSetup {
    pub router: Router,
}

// Not every test binary uses every helper
#[allow(dead_code)]
impl TestSetup {
    pub fn new() -> Self {
        setup_test_env();

        Self {
            router: backend::routes::handler(),
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder().uri(route).method("GET").body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn response_body_bytes(
        &self,
        response: Response,
    ) -> Result<Bytes, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        Ok(response.into_body().collect().await?.to_bytes())
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let body = self.response_body_bytes(response).await?;
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
