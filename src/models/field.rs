/// 客户表单字段
///
/// 声明顺序即日志中的输出顺序，也是 `CustomerForm` 序列化时的键顺序
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Field {
    /// 姓名
    #[serde(rename = "name")]
    Name,
    /// 邮箱
    #[serde(rename = "email")]
    Email,
    /// 地址
    #[serde(rename = "address")]
    Address,
    /// 电话
    #[serde(rename = "phone")]
    Phone,
    /// 信用卡号
    #[serde(rename = "ccNumber")]
    CcNumber,
    /// 信用卡有效期（月）
    #[serde(rename = "ccExpiryMonth")]
    CcExpiryMonth,
    /// 信用卡有效期（年）
    #[serde(rename = "ccExpiryYear")]
    CcExpiryYear,
}

impl Field {
    /// 全部字段，按固定顺序
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Address,
        Field::Phone,
        Field::CcNumber,
        Field::CcExpiryMonth,
        Field::CcExpiryYear,
    ];

    /// 接口中使用的字段名
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::CcNumber => "ccNumber",
            Field::CcExpiryMonth => "ccExpiryMonth",
            Field::CcExpiryYear => "ccExpiryYear",
        }
    }

    /// 从字段名解析
    pub fn from_wire_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_matches_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.wire_name()));
            assert_eq!(Field::from_wire_name(field.wire_name()), Some(field));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Field::from_wire_name("zip"), None);
    }
}
