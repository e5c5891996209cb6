//! # 统一错误处理模块
//!
//! 定义 oligomelt 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// oligomelt 统一错误类型
#[derive(Error, Debug)]
pub enum MeltError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 记录级错误（单条记录失败，不终止批处理）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid sequence '{name}': {reason}")]
    InvalidSequence { name: String, reason: String },

    #[error("Unknown nearest-neighbor step '{step}' for duplex type {duplex_type}")]
    UnknownNnStep { duplex_type: String, step: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid m-value spec '{0}' (expected a number or 'xL+y' / 'xL-y')")]
    InvalidMValueSpec(String),

    #[error("Invalid curve spec: step {step} exceeds half of range {range}")]
    InvalidCurveSpec { range: f64, step: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MeltError>;
