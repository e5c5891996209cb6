//! # 解析器模块
//!
//! 提供 FASTA 风格序列文件的流式解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: fasta

pub mod fasta;

pub use fasta::{FastaReader, FastaRecord};
