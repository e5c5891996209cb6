//! # 双链体热力学计算器
//!
//! 实现近邻模型求和与 Tm 推导的核心算法。
//!
//! ## 算法概述
//! 1. 逐个二核苷酸步进累加 (ΔH, ΔS)
//! 2. 加上起始与末端校正
//! 3. 用两态平衡关系求未校正 Tm：
//!    Tm = ΔH·1000 / (ΔS + R·ln(CT/x))
//! 4. 依次施加盐校正与甲酰胺校正（各一次，顺序固定）
//! 5. 在 37 °C 参考温度下求 ΔG
//!
//! 纯函数：相同输入产生逐位相同的结果，参数表只读。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `thermo/tables.rs` 查询近邻参数
//! - 使用 `thermo/salt.rs`、`thermo/formamide.rs`、`thermo/curve.rs`

use crate::error::Result;
use crate::models::{
    Conditions, CurvePoint, CurveSpec, Duplex, FormamideSettings, ThermodynamicResult,
};
use crate::thermo::{curve, formamide, salt, tables};

/// 气体常数 R (cal/(mol·K))
pub const GAS_CONSTANT: f64 = 1.987;

/// ΔG 的参考温度：37 °C (K)
pub const REFERENCE_TEMP: f64 = 310.15;

/// 双链体热力学计算器
///
/// 持有一组不可变的实验条件；每条记录独立求值，互不影响。
pub struct MeltCalculator {
    conditions: Conditions,
    formamide: FormamideSettings,
}

impl MeltCalculator {
    /// 创建新的计算器
    pub fn new(conditions: Conditions, formamide: FormamideSettings) -> Self {
        Self {
            conditions,
            formamide,
        }
    }

    /// 对一条双链体执行完整管线：
    /// 求和 -> 未校正 Tm -> 盐校正 -> 甲酰胺校正 -> ΔG
    pub fn evaluate(&self, duplex: &Duplex) -> Result<ThermodynamicResult> {
        let (dh, ds) = self.sum_nearest_neighbors(duplex)?;

        let x = duplex.stoichiometric_factor();
        let tm = melting_temperature(dh, ds, self.conditions.oligo_conc, x);
        let tm = salt::correct_tm(tm, &self.conditions, duplex.gc_fraction(), duplex.len());
        let tm = formamide::correct_tm(tm, &self.formamide, self.conditions.fa_conc, duplex.len());

        // kcal 与 cal 的单位归一
        let dg = dh - REFERENCE_TEMP * ds / 1000.0;

        Ok(ThermodynamicResult { dg, dh, ds, tm })
    }

    /// 以最终 Tm 为中心生成熔解曲线
    ///
    /// 曲线温度为开尔文；单位换算由调用方处理。
    pub fn melting_curve(
        &self,
        duplex: &Duplex,
        result: &ThermodynamicResult,
        spec: &CurveSpec,
    ) -> Vec<CurvePoint> {
        let ct_over_x = self.conditions.oligo_conc / duplex.stoichiometric_factor();
        curve::generate(result.dh, result.tm, ct_over_x, spec)
    }

    /// 近邻求和：全部步进 + 起始校正 + 两个末端校正
    fn sum_nearest_neighbors(&self, duplex: &Duplex) -> Result<(f64, f64)> {
        let seq = duplex.sequence.as_bytes();
        let table = tables::table_for(duplex.duplex_type);

        let (mut dh, mut ds) = table.initiation;

        for end in [seq[0], seq[seq.len() - 1]] {
            let (end_dh, end_ds) = tables::terminal_correction(duplex.duplex_type, end);
            dh += end_dh;
            ds += end_ds;
        }

        for pair in seq.windows(2) {
            let (step_dh, step_ds) = tables::step_params(duplex.duplex_type, pair[0], pair[1])?;
            dh += step_dh;
            ds += step_ds;
        }

        Ok((dh, ds))
    }
}

/// 两态平衡 Tm (K)
///
/// `dh` 单位 kcal/mol，`ds` 单位 cal/(mol·K)，`ct` 为寡核苷酸摩尔浓度，
/// `x` 为计量因子（自互补 1，否则 4）。
pub fn melting_temperature(dh: f64, ds: f64, ct: f64, x: f64) -> f64 {
    dh * 1000.0 / (ds + GAS_CONSTANT * (ct / x).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DuplexType, FormamideMode};
    use approx::assert_relative_eq;

    fn default_calculator(mode: FormamideMode, mvalue: &str) -> MeltCalculator {
        MeltCalculator::new(
            Conditions::default(),
            FormamideSettings::new(mode, mvalue).unwrap(),
        )
    }

    #[test]
    fn test_gcgcgcgc_end_to_end() {
        // GCGCGCGC：4 个 GC 步进 + 3 个 CG 步进 + 两个 G/C 末端
        // ΔH = 4(-9.8) + 3(-10.6) + 2(0.1)  = -70.8 kcal/mol
        // ΔS = 4(-24.4) + 3(-27.2) + 2(-2.8) = -184.8 cal/(mol·K)
        let duplex = Duplex::new("gc8", "GCGCGCGC", DuplexType::DnaDna).unwrap();
        let calc = default_calculator(FormamideMode::Wright, "0.63");
        let result = calc.evaluate(&duplex).unwrap();

        assert_relative_eq!(result.dh, -70.8, epsilon = 1e-9);
        assert_relative_eq!(result.ds, -184.8, epsilon = 1e-9);
        assert_relative_eq!(
            result.dg,
            -70.8 - 310.15 * (-184.8) / 1000.0,
            epsilon = 1e-9
        );

        // 自互补，x = 1；再沿同一公式独立复算 Tm
        assert!(duplex.is_self_complementary());
        let tm0 = -70.8 * 1000.0 / (-184.8 + GAS_CONSTANT * 0.25e-6_f64.ln());
        let ln_na = 0.05_f64.ln();
        let tm_salt =
            1.0 / (1.0 / tm0 + (4.29 * 1.0 - 3.95) * 1e-5 * ln_na + 9.40e-6 * ln_na * ln_na);
        // 默认 [FA] = 0，甲酰胺校正不产生位移
        assert_relative_eq!(result.tm, tm_salt, epsilon = 1e-6);
    }

    #[test]
    fn test_idempotence() {
        let duplex = Duplex::new("p", "AGTCTGGTCTGGATCTGAGAACTTCAGGCT", DuplexType::DnaDna).unwrap();
        let calc = default_calculator(FormamideMode::McConaughy, "0.1734");
        let a = calc.evaluate(&duplex).unwrap();
        let b = calc.evaluate(&duplex).unwrap();
        // 逐位相同
        assert_eq!(a.dg.to_bits(), b.dg.to_bits());
        assert_eq!(a.dh.to_bits(), b.dh.to_bits());
        assert_eq!(a.ds.to_bits(), b.ds.to_bits());
        assert_eq!(a.tm.to_bits(), b.tm.to_bits());
    }

    #[test]
    fn test_stoichiometric_factor_effect() {
        // 固定 ΔH/ΔS 下，x = 1 与 x = 4 给出不同 Tm：
        // ct/x 变小使 ln 项更负，|分母| 增大，Tm 降低（ΔH < 0）
        let (dh, ds, ct) = (-70.8, -184.8, 0.25e-6);
        let tm_self = melting_temperature(dh, ds, ct, 1.0);
        let tm_distinct = melting_temperature(dh, ds, ct, 4.0);
        assert!(tm_self > tm_distinct);

        // 对应公式逐项复算
        assert_relative_eq!(
            tm_distinct,
            dh * 1000.0 / (ds + GAS_CONSTANT * (ct / 4.0).ln()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_formamide_applied_last() {
        let duplex = Duplex::new("p", "CCATTGCTACC", DuplexType::DnaDna).unwrap();

        let mut conditions = Conditions::default();
        conditions.fa_conc = 20.0;
        let with_fa = MeltCalculator::new(
            conditions,
            FormamideSettings::new(FormamideMode::McConaughy, "0.1734").unwrap(),
        );
        let without_fa = default_calculator(FormamideMode::McConaughy, "0.1734");

        let a = with_fa.evaluate(&duplex).unwrap();
        let b = without_fa.evaluate(&duplex).unwrap();
        // 除 Tm 平移外其余输出不变
        assert_relative_eq!(a.tm, b.tm - 0.72 * 20.0, epsilon = 1e-9);
        assert_eq!(a.dh, b.dh);
        assert_eq!(a.ds, b.ds);
        assert_eq!(a.dg, b.dg);
    }

    #[test]
    fn test_rna_duplex() {
        // RNA:RNA 走 Freier 表：AU 步进 + 起始 (0, -10.8)
        let duplex = Duplex::new("r", "AU", DuplexType::RnaRna).unwrap();
        let calc = default_calculator(FormamideMode::McConaughy, "0.1734");
        let result = calc.evaluate(&duplex).unwrap();
        assert_relative_eq!(result.dh, -5.7, epsilon = 1e-9);
        assert_relative_eq!(result.ds, -15.5 - 10.8, epsilon = 1e-9);
    }

    #[test]
    fn test_hybrid_duplex() {
        // DNA:RNA 走 Sugimoto 表：TG 步进 + 起始 (1.9, -3.9)，无末端校正
        let duplex = Duplex::new("h", "TG", DuplexType::DnaRna).unwrap();
        let calc = default_calculator(FormamideMode::McConaughy, "0.1734");
        let result = calc.evaluate(&duplex).unwrap();
        assert_relative_eq!(result.dh, -10.4 + 1.9, epsilon = 1e-9);
        assert_relative_eq!(result.ds, -28.4 - 3.9, epsilon = 1e-9);
    }
}
