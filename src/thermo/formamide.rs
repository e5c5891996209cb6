//! # 甲酰胺校正模型
//!
//! 管线最后一步：对盐校正后的 Tm 施加一次线性甲酰胺校正，
//! 输出即为最终报告的 Tm。
//!
//! - McConaughy 模式：Tm -= 0.72 × [FA]，固定斜率
//! - Wright 模式（单反应模型）：Tm += m × [FA]，m 为标量或
//!   长度相关 m = slope·L + intercept
//!
//! m 值文法在 `FormamideSettings` 构造时校验，此处不再失败。
//!
//! ## 参考
//! - McConaughy et al. (1969), Biochemistry 8: 3289-3295
//! - Wright et al. (2014), Appl. Environ. Microbiol. 80: 7570-7581
//!
//! ## 依赖关系
//! - 被 `thermo/calculator.rs` 调用
//! - 使用 `models/conditions.rs` 的 FormamideSettings

use crate::models::{FormamideMode, FormamideSettings};

/// McConaughy 模式的固定斜率 (°C 每 % v/v)
pub const MCCONAUGHY_SLOPE: f64 = 0.72;

/// 对盐校正后的 Tm (K) 施加甲酰胺校正，返回最终 Tm (K)
///
/// `fa_conc` 单位 % v/v；两种模式都是温度差的线性平移，
/// 开尔文与摄氏下等价。
pub fn correct_tm(tm: f64, settings: &FormamideSettings, fa_conc: f64, seq_len: usize) -> f64 {
    if fa_conc == 0.0 {
        return tm;
    }
    match settings.mode {
        FormamideMode::McConaughy => tm - MCCONAUGHY_SLOPE * fa_conc,
        FormamideMode::Wright => tm + settings.m_value.evaluate(seq_len) * fa_conc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MValue;
    use approx::assert_relative_eq;

    #[test]
    fn test_mcconaughy_slope() {
        let settings = FormamideSettings::new(FormamideMode::McConaughy, "0.1734").unwrap();
        let tm = 330.0;
        for fa in [0.0, 10.0, 25.0, 50.0] {
            assert_relative_eq!(
                correct_tm(tm, &settings, fa, 20),
                tm - 0.72 * fa,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_wright_scalar() {
        let settings = FormamideSettings::new(FormamideMode::Wright, "0.63").unwrap();
        let tm = 330.0;
        // 相对盐校正 Tm 恰好平移 m × [FA]
        assert_relative_eq!(
            correct_tm(tm, &settings, 20.0, 8) - tm,
            0.63 * 20.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_wright_length_dependent() {
        let settings = FormamideSettings::new(FormamideMode::Wright, "0.01L-0.5").unwrap();
        assert_eq!(
            settings.m_value,
            MValue::LengthDependent {
                slope: 0.01,
                intercept: -0.5
            }
        );
        let tm = 330.0;
        // L = 30: m = 0.01*30 - 0.5 = -0.2
        assert_relative_eq!(
            correct_tm(tm, &settings, 10.0, 30),
            tm - 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_formamide() {
        let settings = FormamideSettings::new(FormamideMode::Wright, "0.63").unwrap();
        assert_eq!(correct_tm(330.0, &settings, 0.0, 20), 330.0);
    }
}
