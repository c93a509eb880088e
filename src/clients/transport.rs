//! 被测服务传输层
//!
//! 只负责把请求发出去、把状态码和响应体带回来，不做任何判断
use crate::error::{AppError, AppResult};
use crate::models::OrderPayload;
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 原始响应：状态码 + 响应体文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 订单接口的传输能力
///
/// 评分流程只依赖这个 trait，测试中可以换成进程内的假服务
#[allow(async_fn_in_trait)]
pub trait OrderTransport {
    /// `GET /api/books/{id}`
    async fn get_book(&self, book_id: u32) -> AppResult<RawResponse>;

    /// `POST /api/orders`
    async fn post_order(&self, payload: &OrderPayload) -> AppResult<RawResponse>;
}

/// 基于 reqwest 的 HTTP 传输
///
/// 不设置超时，也不重试，连接失败直接作为错误返回
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// 创建新的 HTTP 传输，`base_url` 末尾不带 `/`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_response(endpoint: &str, response: reqwest::Response) -> AppResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        debug!("{} -> {} | {}", endpoint, status, truncate_text(&body, 80));

        Ok(RawResponse { status, body })
    }
}

impl OrderTransport for HttpTransport {
    async fn get_book(&self, book_id: u32) -> AppResult<RawResponse> {
        let endpoint = format!("{}/api/books/{}", self.base_url, book_id);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.as_str(), e))?;

        Self::read_response(&endpoint, response).await
    }

    async fn post_order(&self, payload: &OrderPayload) -> AppResult<RawResponse> {
        let endpoint = format!("{}/api/orders", self.base_url);

        // json() 会设置 Content-Type: application/json
        let response = self
            .http
            .post(&endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.as_str(), e))?;

        Self::read_response(&endpoint, response).await
    }
}
