//! # 双链体数据模型
//!
//! 定义双链体类型与规范化的序列表示。构造函数即为序列规范化器：
//! 大写化、去除空白、检查字母表、检查最小长度。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `thermo/`, `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{MeltError, Result};
use serde::{Deserialize, Serialize};

/// 双链体类型
///
/// 对于杂交双链体，存储的序列为类型名中第一个链：
/// `DnaRna` 保存 DNA 链（5'->3'），`RnaDna` 保存 RNA 链（5'->3'）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplexType {
    DnaDna,
    RnaRna,
    DnaRna,
    RnaDna,
}

impl DuplexType {
    /// 存储链是否为 RNA 链（字母表含 U 而非 T）
    pub fn strand_is_rna(&self) -> bool {
        matches!(self, DuplexType::RnaRna | DuplexType::RnaDna)
    }

    /// 是否为 DNA/RNA 杂交双链体
    pub fn is_hybrid(&self) -> bool {
        matches!(self, DuplexType::DnaRna | DuplexType::RnaDna)
    }

    /// 存储链的合法字母表
    pub fn alphabet(&self) -> &'static [u8] {
        if self.strand_is_rna() {
            b"ACGU"
        } else {
            b"ACGT"
        }
    }
}

impl std::fmt::Display for DuplexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplexType::DnaDna => write!(f, "DNA:DNA"),
            DuplexType::RnaRna => write!(f, "RNA:RNA"),
            DuplexType::DnaRna => write!(f, "DNA:RNA"),
            DuplexType::RnaDna => write!(f, "RNA:DNA"),
        }
    }
}

/// 规范化后的双链体记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duplex {
    /// 记录名称（来自 FASTA 头）
    pub name: String,
    /// 规范化序列（大写，无空白）
    pub sequence: String,
    /// 双链体类型
    pub duplex_type: DuplexType,
}

impl Duplex {
    /// 从原始序列构造双链体，执行规范化与校验
    ///
    /// 失败条件：空序列、长度 < 2、出现字母表之外的符号。
    pub fn new(name: impl Into<String>, raw: &str, duplex_type: DuplexType) -> Result<Self> {
        let name = name.into();

        let sequence: String = raw
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if sequence.is_empty() {
            return Err(MeltError::InvalidSequence {
                name,
                reason: "empty sequence".to_string(),
            });
        }
        if sequence.len() < 2 {
            return Err(MeltError::InvalidSequence {
                name,
                reason: format!(
                    "sequence of {} base is too short for a nearest-neighbor step (need >= 2)",
                    sequence.len()
                ),
            });
        }

        let alphabet = duplex_type.alphabet();
        if let Some(bad) = sequence.bytes().find(|b| !alphabet.contains(b)) {
            return Err(MeltError::InvalidSequence {
                name,
                reason: format!(
                    "symbol '{}' is not allowed for duplex type {} (alphabet: {})",
                    bad as char,
                    duplex_type,
                    String::from_utf8_lossy(alphabet)
                ),
            });
        }

        Ok(Duplex {
            name,
            sequence,
            duplex_type,
        })
    }

    /// 序列长度（碱基数）
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// GC 含量（0.0 - 1.0）
    pub fn gc_fraction(&self) -> f64 {
        let gc = self
            .sequence
            .bytes()
            .filter(|b| matches!(b, b'G' | b'C'))
            .count();
        gc as f64 / self.sequence.len() as f64
    }

    /// 存储链的反向互补序列（同字母表）
    pub fn reverse_complement(&self) -> String {
        let rna = self.duplex_type.strand_is_rna();
        self.sequence
            .bytes()
            .rev()
            .map(|b| complement(b, rna) as char)
            .collect()
    }

    /// 是否为自互补（回文）双链体
    ///
    /// 杂交双链体由两条化学性质不同的链组成，不可能与自身退火，
    /// 因此恒为 false；计量因子取 4。
    pub fn is_self_complementary(&self) -> bool {
        if self.duplex_type.is_hybrid() {
            return false;
        }
        self.sequence == self.reverse_complement()
    }

    /// Tm 公式中的计量因子 x：自互补为 1，否则为 4
    pub fn stoichiometric_factor(&self) -> f64 {
        if self.is_self_complementary() {
            1.0
        } else {
            4.0
        }
    }
}

/// 单碱基互补（rna 决定 A 的配对是 U 还是 T）
pub fn complement(base: u8, rna: bool) -> u8 {
    match base {
        b'A' => {
            if rna {
                b'U'
            } else {
                b'T'
            }
        }
        b'T' | b'U' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}
