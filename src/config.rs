/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 学生名单文件（TOML）
    pub targets_file: String,
    /// 单个学生的评分日志存放目录
    pub results_dir: String,
    /// 成绩汇总文件
    pub scores_file: String,
    /// 用于下单测试的图书 ID
    pub book_id: u32,
    /// 单目标模式：被测服务地址（设置后忽略名单文件）
    pub host_url: Option<String>,
    /// 单目标模式：学生姓名
    pub student_name: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets_file: "targets.toml".to_string(),
            results_dir: "results".to_string(),
            scores_file: "scores.csv".to_string(),
            book_id: 1005,
            host_url: None,
            student_name: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            targets_file: std::env::var("TARGETS_FILE").unwrap_or(default.targets_file),
            results_dir: std::env::var("RESULTS_DIR").unwrap_or(default.results_dir),
            scores_file: std::env::var("SCORES_FILE").unwrap_or(default.scores_file),
            book_id: std::env::var("BOOK_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.book_id),
            host_url: std::env::var("HOST_URL").ok().filter(|v| !v.trim().is_empty()),
            student_name: std::env::var("STUDENT_NAME").ok().filter(|v| !v.trim().is_empty()),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 是否为单目标模式
    pub fn single_target(&self) -> Option<(&str, &str)> {
        let host = self.host_url.as_deref()?;
        let name = self.student_name.as_deref().unwrap_or("student");
        Some((name, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.book_id, 1005);
        assert_eq!(config.targets_file, "targets.toml");
        assert!(config.single_target().is_none());
    }

    #[test]
    fn test_single_target_falls_back_to_default_name() {
        let config = Config {
            host_url: Some("http://localhost:8080".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.single_target(),
            Some(("student", "http://localhost:8080"))
        );
    }
}
