//! # FASTA 格式解析器
//!
//! 惰性、流式地迭代 (name, sequence) 记录对；每个文件可独立重开。
//!
//! ## 格式说明
//! ```text
//! >record_name optional description
//! ATGCGC
//! GCGATT
//! >next_record
//! ...
//! ```
//! - 序列可以跨多行，空行忽略
//! - `;` 开头的行视为注释（历史 FASTA 变体）
//! - 无 `>` 头的文件整体视为一条记录，记录名取文件主干名
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{MeltError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// 一条 FASTA 记录（原始序列，未经规范化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub name: String,
    pub sequence: String,
}

/// 流式 FASTA 读取器
pub struct FastaReader<R: BufRead> {
    lines: Lines<R>,
    /// 上一次迭代读到但尚未消费的头行
    pending_header: Option<String>,
    /// 无头文件的记录名回退
    default_name: String,
    /// 已发出的记录数（用于给空头命名）
    emitted: usize,
    done: bool,
}

impl FastaReader<BufReader<File>> {
    /// 打开文件作为 FASTA 读取器
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| MeltError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let default_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("record")
            .to_string();
        Ok(Self::new(BufReader::new(file), default_name))
    }
}

impl<R: BufRead> FastaReader<R> {
    /// 从任意 BufRead 构造（测试与管道输入）
    pub fn new(reader: R, default_name: impl Into<String>) -> Self {
        FastaReader {
            lines: reader.lines(),
            pending_header: None,
            default_name: default_name.into(),
            emitted: 0,
            done: false,
        }
    }

    /// 从头行内容提取记录名：第一个空白分隔的词
    fn record_name(&self, header: &str) -> String {
        let name = header
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();
        if name.is_empty() {
            format!("{}_{}", self.default_name, self.emitted + 1)
        } else {
            name
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut header = self.pending_header.take();
        let mut sequence = String::new();

        loop {
            match self.lines.next() {
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(MeltError::FileReadError {
                        path: self.default_name.clone(),
                        source: e,
                    }));
                }
                Some(Ok(line)) => {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with(';') {
                        continue;
                    }
                    if let Some(rest) = line.strip_prefix('>') {
                        if header.is_none() && sequence.is_empty() {
                            // 本条记录的头
                            header = Some(rest.to_string());
                        } else {
                            // 下一条记录开始，暂存头行
                            self.pending_header = Some(rest.to_string());
                            break;
                        }
                    } else {
                        sequence.push_str(line);
                    }
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if header.is_none() && sequence.is_empty() {
            return None;
        }

        let name = match &header {
            Some(h) => self.record_name(h),
            // 无头文件：整体一条记录，以文件主干名命名
            None => self.default_name.clone(),
        };

        self.emitted += 1;
        Some(Ok(FastaRecord { name, sequence }))
    }
}
