//! # 盐浓度校正模型
//!
//! 对未校正 Tm 施加一次阳离子浓度校正：
//! - Mg2+ > 0 时使用二价校正（Owczarzy et al. 2008），此时不再施加
//!   Na+ 校正项
//! - 否则使用一价 Na+ 校正（Owczarzy et al. 2004）
//!
//! 两个公式都作用在 1/Tm 上，输入输出均为开尔文。
//! 参数表以 1 M NaCl 为参考，故 Na+ = 1 M（或无盐信息）时不校正。
//!
//! ## 参考
//! - Owczarzy et al. (2004), Biochemistry 43: 3537-3554
//! - Owczarzy et al. (2008), Biochemistry 47: 5336-5353
//!
//! ## 依赖关系
//! - 被 `thermo/calculator.rs` 调用

use crate::models::Conditions;

// Owczarzy (2008) 式 16 系数
const MG_A: f64 = 3.92e-5;
const MG_B: f64 = -9.11e-6;
const MG_C: f64 = 6.26e-5;
const MG_D: f64 = 1.42e-5;
const MG_E: f64 = -4.82e-4;
const MG_F: f64 = 5.25e-4;
const MG_G: f64 = 8.31e-5;

/// 对未校正 Tm (K) 施加盐校正，返回校正后的 Tm (K)
///
/// `gc_fraction` 为 0.0-1.0，`seq_len` >= 2（由 Duplex 构造保证）。
pub fn correct_tm(tm: f64, conditions: &Conditions, gc_fraction: f64, seq_len: usize) -> f64 {
    if conditions.mg_conc > 0.0 {
        correct_divalent(tm, conditions.mg_conc, gc_fraction, seq_len)
    } else if conditions.na_conc > 0.0 && conditions.na_conc != 1.0 {
        correct_monovalent(tm, conditions.na_conc, gc_fraction)
    } else {
        tm
    }
}

/// 一价 Na+ 校正，Owczarzy (2004) 式 22
fn correct_monovalent(tm: f64, na_conc: f64, gc_fraction: f64) -> f64 {
    let ln_na = na_conc.ln();
    let inv = 1.0 / tm + (4.29 * gc_fraction - 3.95) * 1e-5 * ln_na + 9.40e-6 * ln_na * ln_na;
    1.0 / inv
}

/// 二价 Mg2+ 校正，Owczarzy (2008) 式 16
fn correct_divalent(tm: f64, mg_conc: f64, gc_fraction: f64, seq_len: usize) -> f64 {
    let ln_mg = mg_conc.ln();
    let inv = 1.0 / tm
        + MG_A
        + MG_B * ln_mg
        + gc_fraction * (MG_C + MG_D * ln_mg)
        + (MG_E + MG_F * ln_mg + MG_G * ln_mg * ln_mg) / (2.0 * (seq_len as f64 - 1.0));
    1.0 / inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn conditions(na: f64, mg: f64) -> Conditions {
        Conditions {
            oligo_conc: 0.25e-6,
            na_conc: na,
            mg_conc: mg,
            fa_conc: 0.0,
        }
    }

    #[test]
    fn test_na_monotonicity() {
        // Na+ 升高（Mg2+ = 0）严格提升 Tm
        let tm0 = 330.0;
        let mut prev = f64::NEG_INFINITY;
        for na in [0.01, 0.05, 0.1, 0.3, 0.5] {
            let tm = correct_tm(tm0, &conditions(na, 0.0), 0.5, 20);
            assert!(tm > prev, "Tm not increasing at [Na+] = {}", na);
            prev = tm;
        }
    }

    #[test]
    fn test_reference_na_unchanged() {
        // 1 M Na+ 为参数表参考条件，不做校正
        assert_eq!(correct_tm(330.0, &conditions(1.0, 0.0), 0.5, 20), 330.0);
        // 无盐信息时同样原样返回
        assert_eq!(correct_tm(330.0, &conditions(0.0, 0.0), 0.5, 20), 330.0);
    }

    #[test]
    fn test_mg_precedence() {
        // Mg2+ > 0 时选择二价模型，结果与 Na+ 取值无关
        let with_na = correct_tm(330.0, &conditions(0.3, 1.5e-3), 0.5, 20);
        let without_na = correct_tm(330.0, &conditions(0.0, 1.5e-3), 0.5, 20);
        assert_eq!(with_na, without_na);

        // 且确实不同于纯 Na+ 校正
        let na_only = correct_tm(330.0, &conditions(0.3, 0.0), 0.5, 20);
        assert!((with_na - na_only).abs() > 1e-9);
    }

    #[test]
    fn test_monovalent_formula() {
        // 手算对照：fgc = 0.5, [Na+] = 50 mM
        let tm = 330.0;
        let ln_na = 0.05_f64.ln();
        let expected =
            1.0 / (1.0 / tm + (4.29 * 0.5 - 3.95) * 1e-5 * ln_na + 9.40e-6 * ln_na * ln_na);
        assert_relative_eq!(
            correct_tm(tm, &conditions(0.05, 0.0), 0.5, 20),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_divalent_formula() {
        // 手算对照：fgc = 0.4, [Mg2+] = 2 mM, N = 25
        let tm = 335.0;
        let ln_mg = 2e-3_f64.ln();
        let expected = 1.0
            / (1.0 / tm
                + MG_A
                + MG_B * ln_mg
                + 0.4 * (MG_C + MG_D * ln_mg)
                + (MG_E + MG_F * ln_mg + MG_G * ln_mg * ln_mg) / (2.0 * 24.0));
        assert_relative_eq!(
            correct_tm(tm, &conditions(0.0, 2e-3), 0.4, 25),
            expected,
            epsilon = 1e-12
        );
    }
}
