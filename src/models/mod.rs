//! # 数据模型模块
//!
//! 定义双链体、实验条件与计算结果的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `thermo/`, `commands/` 使用
//! - 子模块: duplex, conditions, result

pub mod conditions;
pub mod duplex;
pub mod result;

pub use conditions::{Conditions, CurveSpec, FormamideMode, FormamideSettings, MValue};
pub use duplex::{Duplex, DuplexType};
pub use result::{CurvePoint, ThermodynamicResult};
