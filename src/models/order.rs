//! 订单请求相关的数据结构
//!
//! 线上格式：
//!
//! ```json
//! {
//!   "cart": { "itemArray": [ { "book": {...}, "quantity": 1 } ] },
//!   "customerForm": { "name": "...", ... }
//! }
//! ```

use crate::models::field::Field;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// 从被测服务获取的图书记录，内容不做解析
pub type Book = Value;

/// 表单字段值：字符串或整数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(i64),
}

impl FormValue {
    /// 空字符串
    pub fn empty() -> Self {
        FormValue::Text(String::new())
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        FormValue::Number(n)
    }
}

impl From<i32> for FormValue {
    fn from(n: i32) -> Self {
        FormValue::Number(n.into())
    }
}

impl From<u32> for FormValue {
    fn from(n: u32) -> Self {
        FormValue::Number(n.into())
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Text(s) => write!(f, "{}", s),
            FormValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 一次提交使用的客户表单
///
/// 键按 `Field` 声明顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomerForm(BTreeMap<Field, FormValue>);

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字段，返回新表单
    pub fn with(mut self, field: Field, value: impl Into<FormValue>) -> Self {
        self.set(field, value);
        self
    }

    /// 移除字段，返回新表单
    pub fn without(mut self, field: Field) -> Self {
        self.0.remove(&field);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<FormValue>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&FormValue> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 购物车条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub book: Book,
    pub quantity: u32,
}

/// 购物车
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    #[serde(rename = "itemArray")]
    pub item_array: [CartItem; 1],
}

/// 完整的下单请求体，购物车中恰好一个条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub cart: Cart,
    #[serde(rename = "customerForm")]
    pub customer_form: CustomerForm,
}

impl OrderPayload {
    pub fn item(&self) -> &CartItem {
        &self.cart.item_array[0]
    }

    /// 以两个空格缩进格式化，用于评分日志
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 单次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体文本
    pub body: String,
    /// 格式化后的请求体
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_serializes_in_field_order() {
        let form = CustomerForm::new()
            .with(Field::CcExpiryYear, 2026_i64)
            .with(Field::Name, "Monica")
            .with(Field::Phone, "408 555 1212");

        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Monica","phone":"408 555 1212","ccExpiryYear":2026}"#
        );
    }

    #[test]
    fn test_without_removes_field() {
        let form = CustomerForm::new()
            .with(Field::Name, "Monica")
            .with(Field::Email, "monica@email.com")
            .without(Field::Name);

        assert!(!form.contains(Field::Name));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_payload_shape() {
        let payload = OrderPayload {
            cart: Cart {
                item_array: [CartItem {
                    book: json!({"bookId": 1005}),
                    quantity: 2,
                }],
            },
            customer_form: CustomerForm::new().with(Field::Email, ""),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "cart": {"itemArray": [{"book": {"bookId": 1005}, "quantity": 2}]},
                "customerForm": {"email": ""}
            })
        );
    }
}
