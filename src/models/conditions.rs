//! # 实验条件数据模型
//!
//! 定义浓度条件、甲酰胺校正设置与熔解曲线规格。
//! 所有校验都在构造时完成，计算管线内部不再做配置检查。
//!
//! ## 依赖关系
//! - 被 `thermo/`, `commands/` 使用
//! - 使用 `error.rs`
//! - 使用 `regex` 解析 m 值文法

use crate::error::{MeltError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// 浓度条件（摩尔浓度与体积分数）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Conditions {
    /// 寡核苷酸浓度 (M)
    pub oligo_conc: f64,
    /// Na+ 浓度 (M)
    pub na_conc: f64,
    /// Mg2+ 浓度 (M)；> 0 时二价校正优先于 Na+ 校正
    pub mg_conc: f64,
    /// 甲酰胺浓度 (% v/v)
    pub fa_conc: f64,
}

impl Conditions {
    /// 构造并校验浓度条件
    pub fn new(oligo_conc: f64, na_conc: f64, mg_conc: f64, fa_conc: f64) -> Result<Self> {
        if !(oligo_conc > 0.0) {
            return Err(MeltError::InvalidArgument(format!(
                "oligo concentration must be > 0 M, got {}",
                oligo_conc
            )));
        }
        if na_conc < 0.0 || mg_conc < 0.0 {
            return Err(MeltError::InvalidArgument(format!(
                "ion concentrations must be >= 0 M, got Na+ {} / Mg2+ {}",
                na_conc, mg_conc
            )));
        }
        if fa_conc < 0.0 {
            return Err(MeltError::InvalidArgument(format!(
                "formamide concentration must be >= 0 %, got {}",
                fa_conc
            )));
        }
        Ok(Conditions {
            oligo_conc,
            na_conc,
            mg_conc,
            fa_conc,
        })
    }
}

impl Default for Conditions {
    /// 默认条件：0.25 µM 寡核苷酸，50 mM Na+，无 Mg2+，无甲酰胺
    fn default() -> Self {
        Conditions {
            oligo_conc: 0.25e-6,
            na_conc: 50e-3,
            mg_conc: 0.0,
            fa_conc: 0.0,
        }
    }
}

/// 甲酰胺校正模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormamideMode {
    /// McConaughy et al. (1969)：Tm -= 0.72 × [FA]
    McConaughy,
    /// Wright et al. (2014) 单反应模型：Tm += m × [FA]
    Wright,
}

impl std::fmt::Display for FormamideMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormamideMode::McConaughy => write!(f, "mcconaughy"),
            FormamideMode::Wright => write!(f, "wright"),
        }
    }
}

/// m 值文法：
/// - 标量：`0.63`、`-1.2e-2`
/// - 长度相关：`xL+y` / `xL-y`（截距符号必须显式），如 `0.1734L-0.35`
///
/// 不允许内部空白；其余形式一律拒绝。
static MVALUE_SCALAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});
static MVALUE_LINEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)L([+-](?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$",
    )
    .unwrap()
});

/// Wright 模型的 m 值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MValue {
    /// 固定标量 m
    Constant(f64),
    /// 长度相关 m = slope·L + intercept
    LengthDependent { slope: f64, intercept: f64 },
}

impl MValue {
    /// 给定序列长度，求出实际 m 值
    pub fn evaluate(&self, seq_len: usize) -> f64 {
        match *self {
            MValue::Constant(m) => m,
            MValue::LengthDependent { slope, intercept } => slope * seq_len as f64 + intercept,
        }
    }
}

impl FromStr for MValue {
    type Err = MeltError;

    fn from_str(s: &str) -> Result<Self> {
        if MVALUE_SCALAR.is_match(s) {
            let m = s
                .parse::<f64>()
                .map_err(|_| MeltError::InvalidMValueSpec(s.to_string()))?;
            return Ok(MValue::Constant(m));
        }
        if let Some(caps) = MVALUE_LINEAR.captures(s) {
            let slope = caps[1]
                .parse::<f64>()
                .map_err(|_| MeltError::InvalidMValueSpec(s.to_string()))?;
            let intercept = caps[2]
                .parse::<f64>()
                .map_err(|_| MeltError::InvalidMValueSpec(s.to_string()))?;
            return Ok(MValue::LengthDependent { slope, intercept });
        }
        Err(MeltError::InvalidMValueSpec(s.to_string()))
    }
}

/// 甲酰胺校正设置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormamideSettings {
    pub mode: FormamideMode,
    /// 仅 Wright 模式使用；构造时已完成文法校验
    pub m_value: MValue,
}

impl FormamideSettings {
    pub fn new(mode: FormamideMode, m_value_spec: &str) -> Result<Self> {
        let m_value = m_value_spec.parse::<MValue>()?;
        Ok(FormamideSettings { mode, m_value })
    }
}

/// 熔解曲线规格：以 Tm 为中心的温度跨度与步长
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveSpec {
    /// 总温度跨度 (°)
    pub range: f64,
    /// 步长 (°)
    pub step: f64,
}

impl CurveSpec {
    /// 构造并校验：range、step 均为正，且 step <= range/2
    /// （否则曲线不足 3 个点）
    pub fn new(range: f64, step: f64) -> Result<Self> {
        if !(range > 0.0) || !(step > 0.0) {
            return Err(MeltError::InvalidArgument(format!(
                "curve range and step must be > 0, got range {} / step {}",
                range, step
            )));
        }
        if step > range / 2.0 {
            return Err(MeltError::InvalidCurveSpec { range, step });
        }
        Ok(CurveSpec { range, step })
    }

    /// 截断到步长整数倍后的有效跨度
    pub fn effective_range(&self) -> f64 {
        (self.range / self.step).floor() * self.step
    }

    /// 曲线点数（有效跨度 / 步长 + 1）
    pub fn point_count(&self) -> usize {
        (self.range / self.step).floor() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conditions_validation() {
        assert!(Conditions::new(0.25e-6, 0.05, 0.0, 0.0).is_ok());
        assert!(Conditions::new(0.0, 0.05, 0.0, 0.0).is_err());
        assert!(Conditions::new(0.25e-6, -0.1, 0.0, 0.0).is_err());
        assert!(Conditions::new(0.25e-6, 0.05, -1.0, 0.0).is_err());
        assert!(Conditions::new(0.25e-6, 0.05, 0.0, -5.0).is_err());
    }

    #[test]
    fn test_mvalue_scalar() {
        assert_eq!("0.63".parse::<MValue>().unwrap(), MValue::Constant(0.63));
        assert_eq!("-1.5".parse::<MValue>().unwrap(), MValue::Constant(-1.5));
        assert_eq!(
            "1.2e-2".parse::<MValue>().unwrap(),
            MValue::Constant(0.012)
        );
    }

    #[test]
    fn test_mvalue_linear() {
        let m = "0.1734L-0.35".parse::<MValue>().unwrap();
        assert_eq!(
            m,
            MValue::LengthDependent {
                slope: 0.1734,
                intercept: -0.35
            }
        );
        assert_relative_eq!(m.evaluate(20), 0.1734 * 20.0 - 0.35);

        let m = "-0.2L+1".parse::<MValue>().unwrap();
        assert_relative_eq!(m.evaluate(10), -1.0);
    }

    #[test]
    fn test_mvalue_rejects() {
        for bad in ["", "L", "0.1L", "L+2", "1.0 L+2", "0.1l+2", "abc", "1..2", "0.1L2"] {
            assert!(bad.parse::<MValue>().is_err(), "should reject {:?}", bad);
        }
    }

    #[test]
    fn test_curve_spec() {
        // step > range/2 在构造时拒绝
        assert!(CurveSpec::new(20.0, 6.0).is_err());
        assert!(CurveSpec::new(20.0, 10.0).is_ok());
        assert!(CurveSpec::new(20.0, -1.0).is_err());
        assert!(CurveSpec::new(0.0, 0.5).is_err());

        let spec = CurveSpec::new(20.0, 2.0).unwrap();
        assert_eq!(spec.point_count(), 11);
        assert_eq!(spec.effective_range(), 20.0);

        // 跨度截断到步长整数倍
        let spec = CurveSpec::new(10.0, 3.0).unwrap();
        assert_eq!(spec.effective_range(), 9.0);
        assert_eq!(spec.point_count(), 4);
    }
}
