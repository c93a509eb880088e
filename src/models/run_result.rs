//! 单个目标的评分结果

use crate::workflow::{Points, MAX_POINTS};

/// 单个目标的评分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub student_name: String,
    pub host_url: String,
    /// 失败用例及错误记录，按发生顺序
    pub entries: Vec<String>,
    /// 取整前的分数；取测试图书失败时为 `None`
    pub preliminary: Option<Points>,
    /// 最终成绩，范围 [0, 20]
    pub score: u32,
}

impl RunResult {
    /// 是否因取测试图书失败而中止
    pub fn setup_failed(&self) -> bool {
        self.preliminary.is_none()
    }

    /// 完整的评分说明，写入学生的日志文件
    pub fn narrative(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!(
            "TESTING {} - {}: out of {}\n",
            self.student_name,
            self.host_url,
            MAX_POINTS.round_to_grade()
        ));
        text.push_str(GRADING_NOTES);

        for entry in &self.entries {
            text.push_str(entry);
        }

        if let Some(preliminary) = self.preliminary {
            text.push_str(&format!(
                "Preliminary point total is {}, subject to rounding.\n",
                preliminary
            ));
            text.push_str(&format!(
                "Your score was rounded from {} to {} since grades must be integers.\n",
                preliminary, self.score
            ));
            text.push_str(&format!(
                "SCORE for {}: {}/{}\n",
                self.student_name,
                self.score,
                MAX_POINTS.round_to_grade()
            ));
        }

        text
    }
}

const GRADING_NOTES: &str = "===============================================================================
GRADING NOTES
===============================================================================
We are testing with the following sections, and each section is worth 4 points.
 * Missing customer form values - expect a field error
 * Empty customer form values - expect a field error
 * Invalid customer form values - expect a field error
 * Valid customer form values - expect success message
 * Quantity and expiry date logic - expect appropriate errors
";

#[cfg(test)]
mod tests {
    use super::*;

    use crate::orchestrator::target_runner::BOOK_FETCH_FAILED;

    #[test]
    fn test_setup_failure_narrative() {
        let result = RunResult {
            student_name: "Alice".to_string(),
            host_url: "http://localhost:8080".to_string(),
            entries: vec![BOOK_FETCH_FAILED.to_string()],
            preliminary: None,
            score: 0,
        };
        let text = result.narrative();
        assert!(text.starts_with("TESTING Alice - http://localhost:8080: out of 20\n"));
        assert!(text.ends_with(BOOK_FETCH_FAILED));
        assert!(!text.contains("SCORE for"));
    }

    #[test]
    fn test_completed_narrative_summary() {
        let result = RunResult {
            student_name: "Bob".to_string(),
            host_url: "http://localhost:8081".to_string(),
            entries: Vec::new(),
            preliminary: Some(Points::hundredths(1650)),
            score: 16,
        };
        let text = result.narrative();
        assert!(text.contains("Preliminary point total is 16.5, subject to rounding.\n"));
        assert!(text.contains("Your score was rounded from 16.5 to 16 since grades must be integers.\n"));
        assert!(text.ends_with("SCORE for Bob: 16/20\n"));
    }
}
