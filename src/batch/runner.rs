//! # 批量执行器
//!
//! 依输入顺序逐个执行处理任务。记录之间没有依赖，输出顺序
//! 等于输入顺序；单条失败只计入统计，不中断批处理。
//!
//! ## 功能
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::progress;

use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（如输出已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (对象, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(target, err) => {
                self.failed += 1;
                self.failures.push((target, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器（顺序处理）
#[derive(Default)]
pub struct BatchRunner;

impl BatchRunner {
    pub fn new() -> Self {
        Self
    }

    /// 依次处理文件列表，带进度条
    pub fn run<F>(&self, files: Vec<PathBuf>, mut processor: F) -> BatchResult
    where
        F: FnMut(&PathBuf) -> ProcessResult,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        let mut batch_result = BatchResult::default();
        for file in &files {
            let result = processor(file);
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_statistics() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a".to_string()));
        result.merge(ProcessResult::Failed("b".to_string(), "bad".to_string()));
        result.merge(ProcessResult::Skipped("c".to_string()));
        result.merge(ProcessResult::Success("d".to_string()));

        assert_eq!(result.success, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 4);
        assert_eq!(result.failures, vec![("b".to_string(), "bad".to_string())]);
    }
}
