//! HTTP client for network-based API calls

use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    CategoryIndex, Product, ProductInput, Review, ReviewApproval, ReviewInput, ReviewQuery,
};
use shared::{ErrorResponse, MessageResponse};

use crate::{ClientConfig, ClientError, ClientResult};

const PRODUCTS: [&str; 2] = ["api", "products"];
const REVIEWS: [&str; 2] = ["api", "reviews"];

/// HTTP client for making network requests to the menu server
///
/// Request paths are given as segments; each segment is percent-encoded, so
/// ids containing `/`, `?` or spaces address the intended resource.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let raw = config.base_url.trim();
        if raw.is_empty() {
            return Err(ClientError::Config("base_url must not be empty".into()));
        }
        let base_url = Url::parse(raw)
            .map_err(|e| ClientError::Config(format!("invalid base_url {}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("base_url {} cannot hold a path", raw)));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Always Ok: `new` rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        self.send(self.client.get(self.url(segments))).await
    }

    /// Make a GET request with a query string
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(segments)).query(query)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(segments)).json(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(segments)).json(body)).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.patch(self.url(segments)).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        self.send(self.client.delete(self.url(segments))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies in the server's `{code, error, details}` shape become
    /// [`ClientError::Api`]; anything else becomes [`ClientError::Status`].
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(body) = serde_json::from_str::<ErrorResponse>(&text) {
                return Err(ClientError::Api(body.into_error()));
            }
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Products API ==========

    /// All products, newest first
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get(&PRODUCTS).await
    }

    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        self.get(&[PRODUCTS[0], PRODUCTS[1], id]).await
    }

    pub async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        self.post(&PRODUCTS, input).await
    }

    pub async fn update_product(&self, id: &str, input: &ProductInput) -> ClientResult<Product> {
        self.put(&[PRODUCTS[0], PRODUCTS[1], id], input).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<MessageResponse> {
        self.delete(&[PRODUCTS[0], PRODUCTS[1], id]).await
    }

    // ========== Categories API ==========

    pub async fn categories(&self) -> ClientResult<CategoryIndex> {
        self.get(&["api", "categories"]).await
    }

    // ========== Reviews API ==========

    /// Reviews newest first; `approved_only` narrows to approved ones
    pub async fn list_reviews(&self, approved_only: bool) -> ClientResult<Vec<Review>> {
        if approved_only {
            self.get_with_query(&REVIEWS, &ReviewQuery::approved_only())
                .await
        } else {
            self.get(&REVIEWS).await
        }
    }

    pub async fn submit_review(&self, input: &ReviewInput) -> ClientResult<MessageResponse> {
        self.post(&REVIEWS, input).await
    }

    pub async fn set_review_approval(&self, id: &str, is_approved: bool) -> ClientResult<Review> {
        self.patch(
            &[REVIEWS[0], REVIEWS[1], id],
            &ReviewApproval { is_approved },
        )
        .await
    }

    pub async fn delete_review(&self, id: &str) -> ClientResult<MessageResponse> {
        self.delete(&[REVIEWS[0], REVIEWS[1], id]).await
    }

    // ========== Health ==========

    /// Raw `/health` body
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get(&["health"]).await
    }
}
