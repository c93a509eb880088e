use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::target::{Roster, Target};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载学生名单
///
/// 姓名为空的条目被跳过，服务地址末尾的 `/` 被去掉
pub async fn load_roster(path: &Path) -> AppResult<Vec<Target>> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(FileError::NotFound { path: display }.into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: display.clone(),
            source,
        })?;

    parse_roster(&content, &display)
}

/// 解析名单内容
pub fn parse_roster(content: &str, path: &str) -> AppResult<Vec<Target>> {
    let roster: Roster = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;

    let mut targets = Vec::new();
    for entry in roster.targets {
        let name = entry.student_name.trim();
        if name.is_empty() {
            tracing::warn!("跳过姓名为空的名单条目: {}", entry.host_url);
            continue;
        }

        let target = Target::new(name, entry.host_url.as_str());
        if !target.host_url.starts_with("http://") && !target.host_url.starts_with("https://") {
            return Err(AppError::Config(ConfigError::InvalidHostUrl {
                student: target.student_name,
                host_url: entry.host_url,
            }));
        }
        targets.push(target);
    }

    if targets.is_empty() {
        return Err(ConfigError::EmptyRoster {
            path: path.to_string(),
        }
        .into());
    }

    tracing::info!("成功加载 {} 个学生", targets.len());
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_normalizes_hosts() {
        let content = r#"
            [[targets]]
            student_name = "Alice"
            host_url = "http://localhost:8080/"

            [[targets]]
            student_name = "   "
            host_url = "http://localhost:8081"

            [[targets]]
            student_name = "Bob"
            host_url = "https://bob.example.com"
        "#;

        let targets = parse_roster(content, "targets.toml").unwrap();
        assert_eq!(
            targets,
            vec![
                Target::new("Alice", "http://localhost:8080"),
                Target::new("Bob", "https://bob.example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_roster_rejects_bad_url() {
        let content = r#"
            [[targets]]
            student_name = "Carol"
            host_url = "localhost:8082"
        "#;

        let err = parse_roster(content, "targets.toml").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidHostUrl { .. })
        ));
    }

    #[test]
    fn test_parse_roster_empty() {
        let err = parse_roster("", "targets.toml").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::EmptyRoster { .. })));
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = tokio_test::block_on(load_roster(Path::new("/nonexistent/targets.toml")))
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }
}
