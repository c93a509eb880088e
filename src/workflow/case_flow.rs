//! 单个用例的处理流程 - 流程层
//!
//! 提交 → 分类 → 评判，一次只处理一个用例

use crate::clients::{OrderClient, OrderTransport};
use crate::error::AppResult;
use crate::models::Book;
use crate::workflow::grading_case::GradingCase;
use crate::workflow::scoring::{ScoreState, Verdict};

/// 用例处理流程
///
/// 持有客户端和测试图书的引用，不持有评分状态
pub struct CaseFlow<'a, T: OrderTransport> {
    client: &'a OrderClient<T>,
    book: &'a Book,
}

impl<'a, T: OrderTransport> CaseFlow<'a, T> {
    pub fn new(client: &'a OrderClient<T>, book: &'a Book) -> Self {
        Self { client, book }
    }

    /// 执行一个用例并记分
    ///
    /// 传输错误直接返回，由编排层决定是否中止
    pub async fn run(&self, case: &GradingCase, score: &mut ScoreState) -> AppResult<Verdict> {
        let outcome = self
            .client
            .submit(&case.form, self.book, case.quantity)
            .await?;

        Ok(score.judge(case, &outcome))
    }
}
