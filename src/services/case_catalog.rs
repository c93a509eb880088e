//! 测试用例目录 - 业务能力层
//!
//! 只描述"要发送哪些值"，不关心怎么发送、怎么评分

use crate::models::{CustomerForm, Field, FormValue};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// 超出上限的购买数量
pub const OVERFLOW_QUANTITY: u32 = 100;

/// 默认购买数量
pub const DEFAULT_QUANTITY: u32 = 1;

/// 年月，用于信用卡有效期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 上一个月，1 月回绕到去年 12 月
    pub fn previous(self) -> Self {
        if self.month > 1 {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
            }
        }
    }

    /// 下一个月，12 月回绕到明年 1 月
    pub fn next(self) -> Self {
        if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// 相对"今天"的三个有效期用例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryCases {
    pub past: YearMonth,
    pub current: YearMonth,
    pub next: YearMonth,
}

impl ExpiryCases {
    pub fn relative_to(today: NaiveDate) -> Self {
        let current = YearMonth::of(today);
        Self {
            past: current.previous(),
            current,
            next: current.next(),
        }
    }
}

/// 测试用例目录
///
/// 所有查询都是纯函数；唯一的外部输入是构造时给定的日期
#[derive(Debug, Clone, Copy)]
pub struct CaseCatalog {
    today: NaiveDate,
}

impl CaseCatalog {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// 全部字段，按固定顺序
    pub fn fields(&self) -> &'static [Field] {
        &Field::ALL
    }

    /// 必须被拒绝的值
    pub fn invalid_values(&self) -> BTreeMap<Field, Vec<FormValue>> {
        BTreeMap::from([
            (
                Field::Name,
                vec![
                    "Bad".into(),
                    "A very long name bigger than forty five characters is an invalid name."
                        .into(),
                ],
            ),
            (Field::Email, vec!["Bad".into(), "tom@x.".into()]),
            (
                Field::Address,
                vec![
                    "Bad".into(),
                    "A very long address bigger than forty five characters is an invalid address."
                        .into(),
                ],
            ),
            (
                Field::Phone,
                vec![
                    "Bad".into(),
                    "123456789".into(),
                    "123456789123456789".into(),
                ],
            ),
            (
                Field::CcNumber,
                vec!["123456789012".into(), "12345678901234567".into()],
            ),
            (Field::CcExpiryMonth, vec![FormValue::Number(13)]),
            (Field::CcExpiryYear, vec![FormValue::Number(2020), FormValue::Number(0)]),
        ])
    }

    /// 必须被接受的值
    ///
    /// 有效期的两个值相对今天计算：12 月在当年永远不会过期，
    /// 明年在任何月份都不会过期
    pub fn valid_values(&self) -> BTreeMap<Field, Vec<FormValue>> {
        BTreeMap::from([
            (Field::Name, vec!["Monica".into()]),
            (Field::Email, vec!["monica@email.com".into()]),
            (Field::Address, vec!["123 Main St".into()]),
            (
                Field::Phone,
                vec![
                    "408-555-1212".into(),
                    "408 555 1212".into(),
                    "(408) 555 1212".into(),
                ],
            ),
            (Field::CcNumber, vec!["4444333322221111".into()]),
            (Field::CcExpiryMonth, vec![FormValue::Number(12)]),
            (Field::CcExpiryYear, vec![(self.today.year() + 1).into()]),
        ])
    }

    /// 基准表单：所有字段都合法，有效期为当前月
    pub fn baseline_form(&self) -> CustomerForm {
        let current = YearMonth::of(self.today);
        CustomerForm::new()
            .with(Field::Name, "Monica")
            .with(Field::Email, "monica@email.com")
            .with(Field::Address, "123 Main St")
            .with(Field::Phone, "408 555 1212")
            .with(Field::CcNumber, "4444333322221111")
            .with(Field::CcExpiryMonth, current.month)
            .with(Field::CcExpiryYear, current.year)
    }

    pub fn expiry_cases(&self) -> ExpiryCases {
        ExpiryCases::relative_to(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiry_wraps_in_january() {
        let cases = ExpiryCases::relative_to(date(2027, 1, 10));
        assert_eq!(cases.past, YearMonth { year: 2026, month: 12 });
        assert_eq!(cases.current, YearMonth { year: 2027, month: 1 });
        assert_eq!(cases.next, YearMonth { year: 2027, month: 2 });
    }

    #[test]
    fn test_expiry_wraps_in_december() {
        let cases = ExpiryCases::relative_to(date(2026, 12, 31));
        assert_eq!(cases.past, YearMonth { year: 2026, month: 11 });
        assert_eq!(cases.next, YearMonth { year: 2027, month: 1 });
    }

    #[test]
    fn test_past_is_always_before_current() {
        for month in 1..=12 {
            let cases = ExpiryCases::relative_to(date(2026, month, 1));
            assert!(cases.past < cases.current);
            assert!(cases.current < cases.next);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        let catalog = CaseCatalog::new(date(2026, 10, 15));
        let invalid: usize = catalog.invalid_values().values().map(Vec::len).sum();
        let valid: usize = catalog.valid_values().values().map(Vec::len).sum();
        assert_eq!(invalid, 14);
        assert_eq!(valid, 9);
        assert_eq!(catalog.fields().len(), 7);
    }

    #[test]
    fn test_every_field_has_entries() {
        let catalog = CaseCatalog::new(date(2026, 10, 15));
        for field in catalog.fields() {
            assert!(catalog.invalid_values().contains_key(field));
            assert!(catalog.valid_values().contains_key(field));
        }
    }

    #[test]
    fn test_long_invalid_values_exceed_limit() {
        let catalog = CaseCatalog::new(date(2026, 10, 15));
        let invalid = catalog.invalid_values();
        for field in [Field::Name, Field::Address] {
            match &invalid[&field][1] {
                FormValue::Text(s) => assert!(s.chars().count() > 45),
                other => panic!("unexpected value {:?}", other),
            }
        }
    }

    #[test]
    fn test_baseline_uses_current_month() {
        let catalog = CaseCatalog::new(date(2026, 10, 15));
        let form = catalog.baseline_form();
        assert_eq!(form.len(), 7);
        assert_eq!(form.get(Field::CcExpiryMonth), Some(&FormValue::Number(10)));
        assert_eq!(form.get(Field::CcExpiryYear), Some(&FormValue::Number(2026)));
    }

    #[test]
    fn test_valid_year_is_next_year() {
        let catalog = CaseCatalog::new(date(2026, 10, 15));
        assert_eq!(
            catalog.valid_values()[&Field::CcExpiryYear],
            vec![FormValue::Number(2027)]
        );
    }
}
