//! # oligomelt - 核酸双链体熔解温度工具箱
//!
//! 基于近邻热力学模型计算双链体的 ΔG/ΔH/ΔS/Tm，施加盐浓度与
//! 甲酰胺经验校正，并可生成熔解曲线。
//!
//! ## 子命令
//! - `melt`  - 逐条记录计算热力学参数
//! - `curve` - 计算并生成熔解曲线表/图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (FASTA 解析)
//!   │     ├── thermo/    (热力学核心)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (多文件批处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod thermo;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
