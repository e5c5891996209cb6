//! # melt 子命令 CLI 定义
//!
//! 定义熔解温度计算的输入、双链体类型、浓度条件与甲酰胺设置。
//! `ConditionArgs` 同时被 `curve` 子命令平铺复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/melt.rs`

use crate::models::{DuplexType, FormamideMode};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 双链体类型（决定近邻参数表与字母表）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DuplexKind {
    /// DNA:DNA, Allawi & SantaLucia (1997)
    DnaDna,
    /// RNA:RNA, Freier et al. (1986)
    RnaRna,
    /// DNA:RNA hybrid, sequence is the DNA strand, Sugimoto et al. (1995)
    DnaRna,
    /// RNA:DNA hybrid, sequence is the RNA strand, Sugimoto et al. (1995)
    RnaDna,
}

impl From<DuplexKind> for DuplexType {
    fn from(kind: DuplexKind) -> Self {
        match kind {
            DuplexKind::DnaDna => DuplexType::DnaDna,
            DuplexKind::RnaRna => DuplexType::RnaRna,
            DuplexKind::DnaRna => DuplexType::DnaRna,
            DuplexKind::RnaDna => DuplexType::RnaDna,
        }
    }
}

impl std::fmt::Display for DuplexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplexKind::DnaDna => write!(f, "dna-dna"),
            DuplexKind::RnaRna => write!(f, "rna-rna"),
            DuplexKind::DnaRna => write!(f, "dna-rna"),
            DuplexKind::RnaDna => write!(f, "rna-dna"),
        }
    }
}

/// 甲酰胺校正模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FaMode {
    /// Linear -0.72 degree per % v/v, McConaughy et al. (1969)
    Mcconaughy,
    /// Single-reaction model with m-value, Wright et al. (2014)
    Wright,
}

impl From<FaMode> for FormamideMode {
    fn from(mode: FaMode) -> Self {
        match mode {
            FaMode::Mcconaughy => FormamideMode::McConaughy,
            FaMode::Wright => FormamideMode::Wright,
        }
    }
}

impl std::fmt::Display for FaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaMode::Mcconaughy => write!(f, "mcconaughy"),
            FaMode::Wright => write!(f, "wright"),
        }
    }
}

/// melt 与 curve 共用的输入/条件参数
#[derive(Args, Debug)]
pub struct ConditionArgs {
    /// Input: FASTA-like sequence file or directory containing sequence files
    pub input: PathBuf,

    /// Duplex type (selects the nearest-neighbor table and alphabet)
    #[arg(short = 't', long, value_enum, default_value = "dna-dna")]
    pub duplex_type: DuplexKind,

    /// Oligo concentration in M
    #[arg(long, default_value_t = 0.25e-6)]
    pub oligo: f64,

    /// Na+ concentration in M
    #[arg(long, default_value_t = 50e-3)]
    pub na: f64,

    /// Mg2+ concentration in M (when > 0, supersedes the Na+ correction)
    #[arg(long, default_value_t = 0.0)]
    pub mg: f64,

    /// Formamide concentration in % v/v
    #[arg(long, default_value_t = 0.0)]
    pub fa: f64,

    /// Formamide correction mode
    #[arg(long, value_enum, default_value = "mcconaughy")]
    pub fa_mode: FaMode,

    /// m-value for wright mode: a number, or 'xL+y' / 'xL-y' with L the sequence length
    #[arg(long, default_value = "0.1734")]
    pub m_value: String,

    /// Report temperatures in Celsius instead of Kelvin
    #[arg(short = 'C', long, default_value_t = false)]
    pub celsius: bool,

    /// Glob pattern for input files (directory mode)
    #[arg(long, default_value = "*.fa,*.fasta,*.fna,*.txt")]
    pub pattern: String,

    /// Recurse into subdirectories (directory mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}

/// melt 子命令参数
#[derive(Args, Debug)]
pub struct MeltArgs {
    #[command(flatten)]
    pub conditions: ConditionArgs,

    /// Write per-record results to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
