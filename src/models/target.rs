use serde::Deserialize;

/// 被测目标：学生姓名 + 服务地址
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub student_name: String,
    pub host_url: String,
}

impl Target {
    pub fn new(student_name: impl Into<String>, host_url: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            host_url: normalize_host(&host_url.into()),
        }
    }
}

/// 名单文件
///
/// ```toml
/// [[targets]]
/// student_name = "Alice"
/// host_url = "http://localhost:8080"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub targets: Vec<Target>,
}

/// 去掉地址末尾的 `/`
pub fn normalize_host(host_url: &str) -> String {
    host_url.trim().trim_end_matches('/').to_string()
}
