//! 请求体构建 - 业务能力层
//!
//! 不做任何校验，表单原样透传，校验完全由被测服务负责

use crate::models::{Book, Cart, CartItem, CustomerForm, OrderPayload};

/// 构建下单请求体
pub fn build_payload(form: &CustomerForm, book: &Book, quantity: u32) -> OrderPayload {
    OrderPayload {
        cart: Cart {
            item_array: [CartItem {
                book: book.clone(),
                quantity,
            }],
        },
        customer_form: form.clone(),
    }
}
