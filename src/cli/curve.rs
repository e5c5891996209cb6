//! # curve 子命令 CLI 定义
//!
//! 在 melt 参数的基础上增加熔解曲线的范围、步长与输出目标。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/curve.rs`

use crate::cli::melt::ConditionArgs;

use clap::Args;
use std::path::PathBuf;

/// curve 子命令参数
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub conditions: ConditionArgs,

    /// Total temperature span of the curve, centered on Tm (degrees)
    #[arg(long, default_value_t = 30.0)]
    pub range: f64,

    /// Temperature increment between curve points (degrees)
    #[arg(long, default_value_t = 0.5)]
    pub step: f64,

    /// Shared curve table output (CSV keyed by record name)
    #[arg(long, default_value = "melt_curves.csv")]
    pub curve_out: PathBuf,

    /// Optional curve plot output (PNG, or SVG by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Write per-record results to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file name)
    #[arg(long)]
    pub title: Option<String>,
}
