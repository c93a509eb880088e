//! 评分用例
//!
//! 类别 → 期望 → 扣分 的对照表集中在这里，评分引擎只查表

use crate::models::{CustomerForm, Field, FormValue};
use crate::services::case_catalog::{YearMonth, DEFAULT_QUANTITY, OVERFLOW_QUANTITY};
use crate::workflow::points::Points;

/// 合法提交的标志文本（区分大小写的子串匹配）
pub const SUCCESS_MARKER: &str = "Transactions have not been implemented yet";

/// 按状态码和响应体对结果分类
///
/// 被测服务尚未实现结账，所以合法提交同样返回 400，
/// 只是响应体里带有 `SUCCESS_MARKER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 400；`formally_invalid` 表示响应体中没有成功标志
    Rejected { formally_invalid: bool },
    /// 其他状态码
    Unexpected(u16),
}

impl ResponseClass {
    pub fn classify(status: u16, body: &str) -> Self {
        if status == 400 {
            ResponseClass::Rejected {
                formally_invalid: !body.contains(SUCCESS_MARKER),
            }
        } else {
            ResponseClass::Unexpected(status)
        }
    }
}

/// 期望的服务行为
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// 任意 400
    FieldError,
    /// 400 且带成功标志
    Success,
    /// 400 且不带成功标志
    LogicError,
}

impl Expectation {
    pub fn is_met_by(self, class: ResponseClass) -> bool {
        match (self, class) {
            (Expectation::FieldError, ResponseClass::Rejected { .. }) => true,
            (Expectation::Success, ResponseClass::Rejected { formally_invalid }) => {
                !formally_invalid
            }
            (Expectation::LogicError, ResponseClass::Rejected { formally_invalid }) => {
                formally_invalid
            }
            (_, ResponseClass::Unexpected(_)) => false,
        }
    }

    /// 日志中的期望描述
    pub fn describe(self) -> &'static str {
        match self {
            Expectation::FieldError | Expectation::LogicError => "field error",
            Expectation::Success => "success message",
        }
    }
}

/// 用例类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MissingField,
    EmptyField,
    InvalidValue,
    ValidValue,
    ExpiryPast,
    ExpiryCurrent,
    ExpiryNext,
    QuantityOverflow,
}

impl Category {
    pub fn expectation(self) -> Expectation {
        match self {
            Category::MissingField | Category::EmptyField | Category::InvalidValue => {
                Expectation::FieldError
            }
            Category::ValidValue | Category::ExpiryCurrent | Category::ExpiryNext => {
                Expectation::Success
            }
            Category::ExpiryPast | Category::QuantityOverflow => Expectation::LogicError,
        }
    }

    /// 单个用例失败的扣分
    pub fn penalty(self) -> Points {
        match self {
            Category::MissingField | Category::EmptyField => Points::hundredths(50),
            Category::InvalidValue => Points::hundredths(25),
            Category::ValidValue => Points::hundredths(40),
            Category::ExpiryPast
            | Category::ExpiryCurrent
            | Category::ExpiryNext
            | Category::QuantityOverflow => Points::whole(1),
        }
    }

    /// 整个类别最多扣多少分；`None` 表示不封顶
    pub fn cap(self) -> Option<Points> {
        match self {
            Category::ValidValue => Some(Points::whole(4)),
            _ => None,
        }
    }
}

/// 一个待提交的用例
#[derive(Debug, Clone, PartialEq)]
pub struct GradingCase {
    pub category: Category,
    /// 日志中的用例描述，不含结尾句号
    pub description: String,
    pub form: CustomerForm,
    pub quantity: u32,
}

impl GradingCase {
    fn new(category: Category, description: String, form: CustomerForm) -> Self {
        Self {
            category,
            description,
            form,
            quantity: DEFAULT_QUANTITY,
        }
    }

    pub fn missing(base: &CustomerForm, field: Field) -> Self {
        Self::new(
            Category::MissingField,
            format!("Tested with missing field {}", field),
            base.clone().without(field),
        )
    }

    pub fn empty(base: &CustomerForm, field: Field) -> Self {
        Self::new(
            Category::EmptyField,
            format!("Tested with empty value for field {}", field),
            base.clone().with(field, FormValue::empty()),
        )
    }

    pub fn invalid(base: &CustomerForm, field: Field, value: &FormValue) -> Self {
        Self::new(
            Category::InvalidValue,
            format!("Tested with invalid {}/{}", field, value),
            base.clone().with(field, value.clone()),
        )
    }

    pub fn valid(base: &CustomerForm, field: Field, value: &FormValue) -> Self {
        Self::new(
            Category::ValidValue,
            format!("Tested with valid {}/{}", field, value),
            base.clone().with(field, value.clone()),
        )
    }

    pub fn expiry(base: &CustomerForm, category: Category, date: YearMonth) -> Self {
        let label = match category {
            Category::ExpiryPast => "past",
            Category::ExpiryCurrent => "current",
            _ => "future",
        };
        Self::new(
            category,
            format!("Submit with {} date {}", label, date),
            base.clone()
                .with(Field::CcExpiryMonth, date.month)
                .with(Field::CcExpiryYear, date.year),
        )
    }

    pub fn quantity_overflow(base: &CustomerForm) -> Self {
        Self {
            quantity: OVERFLOW_QUANTITY,
            ..Self::new(
                Category::QuantityOverflow,
                format!("Submit with invalid quantity ({})", OVERFLOW_QUANTITY),
                base.clone(),
            )
        }
    }
}
