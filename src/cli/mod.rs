//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `melt`: 计算每条记录的 ΔG/ΔH/ΔS/Tm
//! - `curve`: 在 melt 的基础上生成熔解曲线表与图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: melt, curve

pub mod curve;
pub mod melt;

use clap::{Parser, Subcommand};

/// oligomelt - 核酸双链体熔解温度工具箱
#[derive(Parser)]
#[command(name = "oligomelt")]
#[command(version)]
#[command(about = "Nucleic acid duplex melting temperature and thermodynamics toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute dG/dH/dS/Tm for each record in FASTA-like input
    Melt(melt::MeltArgs),

    /// Compute thermodynamics and generate melting curves
    Curve(curve::CurveArgs),
}
