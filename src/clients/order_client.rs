//! 订单接口客户端
//!
//! 封装"取一本测试图书"和"提交一个用例"两项调用
use crate::clients::transport::{HttpTransport, OrderTransport};
use crate::error::{AppError, AppResult};
use crate::models::{Book, CaseOutcome, CustomerForm};
use crate::services::payload_builder::build_payload;
use tracing::debug;

/// 订单接口客户端
pub struct OrderClient<T = HttpTransport> {
    transport: T,
}

impl OrderClient<HttpTransport> {
    /// 为指定服务地址创建 HTTP 客户端
    pub fn for_host(host_url: &str) -> Self {
        Self::new(HttpTransport::new(host_url))
    }
}

impl<T: OrderTransport> OrderClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// 获取测试图书
    ///
    /// # 返回
    /// 状态码不是 200 或响应体不是 JSON 时返回错误
    pub async fn fetch_book(&self, book_id: u32) -> AppResult<Book> {
        let response = self.transport.get_book(book_id).await?;

        if response.status != 200 {
            return Err(AppError::bad_response(
                format!("/api/books/{}", book_id),
                response.status,
            ));
        }

        let book: Book = serde_json::from_str(&response.body)?;
        debug!("测试图书: {}", book);

        Ok(book)
    }

    /// 提交一个用例
    ///
    /// # 参数
    /// - `form`: 客户表单
    /// - `book`: 测试图书
    /// - `quantity`: 购买数量
    ///
    /// # 返回
    /// 状态码、响应体、格式化后的请求体
    pub async fn submit(
        &self,
        form: &CustomerForm,
        book: &Book,
        quantity: u32,
    ) -> AppResult<CaseOutcome> {
        let payload = build_payload(form, book, quantity);
        let pretty = payload.to_pretty_json()?;

        let response = self.transport.post_order(&payload).await?;

        Ok(CaseOutcome {
            status: response.status,
            body: response.body,
            payload: pretty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::RawResponse;
    use crate::error::ApiError;
    use crate::models::{Field, OrderPayload};
    use std::cell::RefCell;

    /// 记录请求并返回固定响应
    struct CannedTransport {
        book: RawResponse,
        order: RawResponse,
        posted: RefCell<Vec<OrderPayload>>,
    }

    impl OrderTransport for CannedTransport {
        async fn get_book(&self, _book_id: u32) -> AppResult<RawResponse> {
            Ok(self.book.clone())
        }

        async fn post_order(&self, payload: &OrderPayload) -> AppResult<RawResponse> {
            self.posted.borrow_mut().push(payload.clone());
            Ok(self.order.clone())
        }
    }

    fn canned(book: RawResponse, order: RawResponse) -> OrderClient<CannedTransport> {
        OrderClient::new(CannedTransport {
            book,
            order,
            posted: RefCell::new(Vec::new()),
        })
    }

    #[test]
    fn test_fetch_book_non_200_is_error() {
        let client = canned(RawResponse::new(404, "Not Found"), RawResponse::new(400, ""));
        let err = tokio_test::block_on(client.fetch_book(1005)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Api(ApiError::BadResponse { status: 404, .. })
        ));
    }

    #[test]
    fn test_fetch_book_bad_json_is_error() {
        let client = canned(RawResponse::new(200, "<html>"), RawResponse::new(400, ""));
        let err = tokio_test::block_on(client.fetch_book(1005)).unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::JsonParseFailed { .. })));
    }

    #[test]
    fn test_submit_returns_outcome_triple() {
        let client = canned(
            RawResponse::new(200, r#"{"bookId":1005}"#),
            RawResponse::new(400, "Transactions have not been implemented yet"),
        );
        let book = tokio_test::block_on(client.fetch_book(1005)).unwrap();
        let form = CustomerForm::new().with(Field::Name, "Monica");

        let outcome = tokio_test::block_on(client.submit(&form, &book, 3)).unwrap();

        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body, "Transactions have not been implemented yet");
        assert!(outcome.payload.contains("\"quantity\": 3"));

        let posted = client.transport.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].customer_form, form);
    }
}
