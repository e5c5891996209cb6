//! # 热力学计算模块
//!
//! 提供近邻模型 Tm 计算与熔解曲线生成功能。
//!
//! ## 子模块
//! - `tables`: 近邻热力学参数表
//! - `calculator`: 求和引擎与 Tm 推导
//! - `salt`: 阳离子浓度校正
//! - `formamide`: 甲酰胺校正
//! - `curve`: 熔解曲线生成
//! - `export`: 数据导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod calculator;
pub mod curve;
pub mod export;
pub mod formamide;
pub mod plot;
pub mod salt;
pub mod tables;

pub use calculator::{MeltCalculator, GAS_CONSTANT, REFERENCE_TEMP};
