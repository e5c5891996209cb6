//! # 计算结果数据模型
//!
//! 存储单条双链体的热力学计算结果与熔解曲线点。
//! 温度内部一律使用开尔文；摄氏换算只发生在输出环节。
//!
//! ## 依赖关系
//! - 被 `thermo/`, `commands/` 使用

use serde::{Deserialize, Serialize};

/// 0 °C 对应的开尔文温度
pub const CELSIUS_OFFSET: f64 = 273.15;

/// 单条双链体的热力学计算结果（计算完成后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermodynamicResult {
    /// ΔG，37 °C 下的吉布斯自由能 (kcal/mol)
    pub dg: f64,
    /// ΔH，焓变 (kcal/mol)
    pub dh: f64,
    /// ΔS，熵变 (cal/(mol·K))
    pub ds: f64,
    /// 熔解温度 (K)
    pub tm: f64,
}

impl ThermodynamicResult {
    /// 以指定单位返回 Tm
    pub fn tm_in(&self, celsius: bool) -> f64 {
        if celsius {
            self.tm - CELSIUS_OFFSET
        } else {
            self.tm
        }
    }
}

/// 熔解曲线上的一个点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// 温度（输出单位由调用方决定）
    pub temperature: f64,
    /// 解链比例，0.0（全双链）到 1.0（全解链）
    pub fraction_melted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tm_unit_conversion() {
        let r = ThermodynamicResult {
            dg: -10.0,
            dh: -70.0,
            ds: -190.0,
            tm: 330.0,
        };
        assert_eq!(r.tm_in(false), 330.0);
        assert!((r.tm_in(true) - 56.85).abs() < 1e-9);
    }
}
