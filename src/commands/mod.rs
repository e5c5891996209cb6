//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `thermo/`, `batch/`, `utils/`
//! - 子模块: melt, curve

pub mod curve;
pub mod melt;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Melt(args) => melt::execute(args),
        Commands::Curve(args) => curve::execute(args),
    }
}
