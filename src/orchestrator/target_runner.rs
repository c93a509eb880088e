//! 单个目标评分器 - 编排层
//!
//! ## 职责
//!
//! 对一个学生服务按固定顺序执行全部用例，并汇总为 `RunResult`。
//!
//! ## 用例顺序
//!
//! 1. **缺失字段**：每个字段一个
//! 2. **空字段**：每个字段一个
//! 3. **非法值**：每个字段的每个非法值
//! 4. **合法值**：每个字段的每个合法值（类别结束后结算封顶）
//! 5. **有效期**：上个月 / 本月 / 下个月
//! 6. **数量超限**：数量 100
//!
//! ## 错误处理
//!
//! - 取测试图书失败：成绩 0，只记一条日志，不执行任何用例
//! - 用例执行中出错：原样记录错误，停止后续用例，已累计的分数照常结算

use crate::clients::{OrderClient, OrderTransport};
use crate::models::{Book, RunResult, Target};
use crate::services::case_catalog::CaseCatalog;
use crate::workflow::{CaseFlow, Category, GradingCase, ScoreState, Verdict, MAX_POINTS};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{error, info, warn};

/// 取测试图书失败时的唯一日志
pub const BOOK_FETCH_FAILED: &str = "Failed to fetch a test book.\n";

/// 同一类别的一组用例
#[derive(Debug, Clone)]
pub struct CaseBatch {
    pub category: Category,
    pub cases: Vec<GradingCase>,
}

/// 生成全部用例，按执行顺序分组
pub fn plan_cases(catalog: &CaseCatalog) -> Vec<CaseBatch> {
    let base = catalog.baseline_form();
    let fields = catalog.fields();

    let missing = fields
        .iter()
        .map(|&f| GradingCase::missing(&base, f))
        .collect();

    let empty = fields
        .iter()
        .map(|&f| GradingCase::empty(&base, f))
        .collect();

    let invalid = catalog
        .invalid_values()
        .iter()
        .flat_map(|(&f, values)| values.iter().map(move |v| (f, v.clone())))
        .map(|(f, v)| GradingCase::invalid(&base, f, &v))
        .collect();

    let valid = catalog
        .valid_values()
        .iter()
        .flat_map(|(&f, values)| values.iter().map(move |v| (f, v.clone())))
        .map(|(f, v)| GradingCase::valid(&base, f, &v))
        .collect();

    let expiry = catalog.expiry_cases();

    vec![
        CaseBatch {
            category: Category::MissingField,
            cases: missing,
        },
        CaseBatch {
            category: Category::EmptyField,
            cases: empty,
        },
        CaseBatch {
            category: Category::InvalidValue,
            cases: invalid,
        },
        CaseBatch {
            category: Category::ValidValue,
            cases: valid,
        },
        CaseBatch {
            category: Category::ExpiryPast,
            cases: vec![GradingCase::expiry(&base, Category::ExpiryPast, expiry.past)],
        },
        CaseBatch {
            category: Category::ExpiryCurrent,
            cases: vec![GradingCase::expiry(
                &base,
                Category::ExpiryCurrent,
                expiry.current,
            )],
        },
        CaseBatch {
            category: Category::ExpiryNext,
            cases: vec![GradingCase::expiry(&base, Category::ExpiryNext, expiry.next)],
        },
        CaseBatch {
            category: Category::QuantityOverflow,
            cases: vec![GradingCase::quantity_overflow(&base)],
        },
    ]
}

/// 对一个目标执行完整评分
///
/// # 参数
/// - `client`: 已绑定目标地址的订单客户端
/// - `target`: 学生姓名与服务地址
/// - `book_id`: 测试图书 ID
/// - `today`: 评分日期，决定有效期用例
pub async fn grade_target<T: OrderTransport>(
    client: &OrderClient<T>,
    target: &Target,
    book_id: u32,
    today: NaiveDate,
) -> RunResult {
    let book = match client.fetch_book(book_id).await {
        Ok(book) => book,
        Err(e) => {
            warn!("[{}] ⚠️ 无法获取测试图书: {}", target.student_name, e);
            return RunResult {
                student_name: target.student_name.clone(),
                host_url: target.host_url.clone(),
                entries: vec![BOOK_FETCH_FAILED.to_string()],
                preliminary: None,
                score: 0,
            };
        }
    };

    let catalog = CaseCatalog::new(today);
    let mut score = ScoreState::new();

    if let Err(e) = run_cases(client, &book, &catalog, &mut score, &target.student_name).await {
        error!("[{}] ❌ 评分过程中发生错误: {:#}", target.student_name, e);
        score.note(format!("Error during testing: {:?}\n", e));
    }

    let final_score = score.finalize();
    info!(
        "[{}] ✓ 评分完成: {} → {}/{}",
        target.student_name,
        final_score.preliminary,
        final_score.score,
        MAX_POINTS.round_to_grade()
    );

    RunResult {
        student_name: target.student_name.clone(),
        host_url: target.host_url.clone(),
        entries: final_score.entries,
        preliminary: Some(final_score.preliminary),
        score: final_score.score,
    }
}

/// 按顺序执行全部用例，遇到错误立即返回
async fn run_cases<T: OrderTransport>(
    client: &OrderClient<T>,
    book: &Book,
    catalog: &CaseCatalog,
    score: &mut ScoreState,
    student: &str,
) -> Result<()> {
    let flow = CaseFlow::new(client, book);

    for batch in plan_cases(catalog) {
        let mut failed = 0;
        for case in &batch.cases {
            let verdict = flow
                .run(case, score)
                .await
                .with_context(|| format!("while running case: {}", case.description))?;
            if let Verdict::Fail { .. } = verdict {
                failed += 1;
            }
        }
        score.close_category(batch.category);

        info!(
            "[{}] {:?}: 失败 {}/{}",
            student,
            batch.category,
            failed,
            batch.cases.len()
        );
    }

    Ok(())
}
