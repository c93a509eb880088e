//! 评分引擎 - 流程层
//!
//! 每个目标一个 `ScoreState`：从满分开始只减不增，
//! `finalize()` 消费它得到不可变的 `FinalScore`
//!
//! 只有失败的用例会写入日志

use crate::models::CaseOutcome;
use crate::workflow::grading_case::{Category, GradingCase, ResponseClass};
use crate::workflow::points::Points;
use tracing::debug;

/// 满分
pub const MAX_POINTS: Points = Points::whole(20);

const BANNER: &str = "========================================================";
const RULE: &str = "--------------------------------------------------------";

/// 单个用例的评判结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail { penalty: Points },
}

/// 封顶类别的额度池
///
/// 每次失败从额度中扣除，额度不低于 0；类别结束后一次性结算
#[derive(Debug, Clone, Copy)]
struct CreditPool {
    category: Category,
    cap: Points,
    remaining: Points,
}

impl CreditPool {
    fn open(category: Category, cap: Points) -> Self {
        Self {
            category,
            cap,
            remaining: cap,
        }
    }

    fn charge(&mut self, penalty: Points) {
        self.remaining = (self.remaining - penalty).max(Points::ZERO);
    }

    fn lost(&self) -> Points {
        self.cap - self.remaining
    }
}

/// 累计中的评分状态
#[derive(Debug)]
pub struct ScoreState {
    total: Points,
    entries: Vec<String>,
    pool: Option<CreditPool>,
}

/// 最终成绩
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    /// 取整前的分数
    pub preliminary: Points,
    /// 取整后的成绩，范围 [0, 20]
    pub score: u32,
    /// 失败用例日志及其他记录
    pub entries: Vec<String>,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            total: MAX_POINTS,
            entries: Vec::new(),
            pool: None,
        }
    }

    /// 当前分数（不含尚未结算的额度池）
    pub fn total(&self) -> Points {
        self.total
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 追加一条原样记录
    pub fn note(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// 评判一个用例的结果
    pub fn judge(&mut self, case: &GradingCase, outcome: &CaseOutcome) -> Verdict {
        let expectation = case.category.expectation();
        let class = ResponseClass::classify(outcome.status, &outcome.body);

        if expectation.is_met_by(class) {
            return Verdict::Pass;
        }

        let penalty = case.category.penalty();
        debug!(
            "用例失败: {} (status={}, -{})",
            case.description, outcome.status, penalty
        );

        match case.category.cap() {
            Some(cap) => self.charge_pool(case.category, cap, penalty),
            None => self.total = self.total - penalty,
        }

        self.entries.push(format!(
            "{BANNER}\n{}.\nExpected {} but encountered:\n\tstatus_code={} and\n\tresponse={}\n\norder placement failed (FAIL, -{})\n{RULE}\n{}\n{BANNER}\n\n",
            case.description,
            expectation.describe(),
            outcome.status,
            outcome.body,
            penalty,
            outcome.payload,
        ));

        Verdict::Fail { penalty }
    }

    /// 类别结束：若该类别有额度池则结算
    pub fn close_category(&mut self, category: Category) {
        if self.pool.is_some_and(|p| p.category == category) {
            self.settle_pool();
        }
    }

    /// 结束评分，结算未关闭的额度池并取整
    pub fn finalize(mut self) -> FinalScore {
        self.settle_pool();
        FinalScore {
            preliminary: self.total,
            score: self.total.round_to_grade(),
            entries: self.entries,
        }
    }

    fn charge_pool(&mut self, category: Category, cap: Points, penalty: Points) {
        if self.pool.is_some_and(|p| p.category != category) {
            self.settle_pool();
        }
        self.pool
            .get_or_insert_with(|| CreditPool::open(category, cap))
            .charge(penalty);
    }

    fn settle_pool(&mut self) {
        if let Some(pool) = self.pool.take() {
            self.total = self.total - pool.lost();
        }
    }
}
