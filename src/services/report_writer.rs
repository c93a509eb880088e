//! 成绩写入服务 - 业务能力层
//!
//! 只负责把评分结果落盘，不关心评分流程

use crate::error::{AppError, AppResult};
use crate::models::RunResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 成绩写入服务
///
/// 职责：
/// - 每个学生一个 `{results_dir}/{学生姓名}.txt`
/// - 汇总成绩写入 `StudentName,Score` 格式的表格
pub struct ReportWriter {
    results_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// 写入单个学生的评分日志
    ///
    /// # 返回
    /// 写入的文件路径
    pub async fn write_log(&self, result: &RunResult) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.results_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.results_dir.display().to_string(), e))?;

        let path = self
            .results_dir
            .join(format!("{}.txt", file_stem(&result.student_name)));

        debug!(
            "写入评分日志: {} | 记录数: {}",
            path.display(),
            result.entries.len()
        );

        fs::write(&path, result.narrative())
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }

    /// 写入成绩汇总
    pub async fn write_scores(&self, path: &Path, results: &[RunResult]) -> AppResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
        }

        fs::write(path, render_scores(results))
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(())
    }
}

/// 渲染成绩表
pub fn render_scores(results: &[RunResult]) -> String {
    let mut table = String::from("StudentName,Score\n");
    for result in results {
        table.push_str(&format!(
            "{},{}\n",
            csv_field(&result.student_name),
            result.score
        ));
    }
    table
}

/// 含逗号、引号或换行的字段加引号
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// 学生姓名转为文件名，去掉路径分隔符
fn file_stem(student_name: &str) -> String {
    student_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Points;

    fn result(name: &str, score: u32) -> RunResult {
        RunResult {
            student_name: name.to_string(),
            host_url: "http://localhost:8080".to_string(),
            entries: Vec::new(),
            preliminary: Some(Points::whole(score as i64)),
            score,
        }
    }

    #[test]
    fn test_render_scores() {
        let table = render_scores(&[result("Alice", 20), result("Smith, Bob", 13)]);
        assert_eq!(table, "StudentName,Score\nAlice,20\n\"Smith, Bob\",13\n");
    }

    #[test]
    fn test_file_stem_strips_separators() {
        assert_eq!(file_stem("a/b\\c"), "a_b_c");
        assert_eq!(file_stem("Alice"), "Alice");
    }

    #[tokio::test]
    async fn test_write_log_and_scores() {
        let dir = std::env::temp_dir().join(format!("order_validator_{}", std::process::id()));
        let writer = ReportWriter::new(dir.join("results"));

        let alice = result("Alice", 18);
        let path = writer.write_log(&alice).await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, alice.narrative());

        let scores = dir.join("scores.csv");
        writer.write_scores(&scores, &[alice]).await.unwrap();
        let table = tokio::fs::read_to_string(&scores).await.unwrap();
        assert_eq!(table, "StudentName,Score\nAlice,18\n");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
