//! # 熔解曲线生成器
//!
//! 基于两态平衡模型，在最终 Tm 附近生成解链比例-温度表。
//!
//! ## 模型
//! 校正后的 Tm 与 ΔH 定义一个有效熵
//! ΔS_eff = ΔH·1000/Tm − R·ln(CT/x)，
//! 缔合常数 K(T) = exp(ΔS_eff/R − ΔH·1000/(R·T))·CT/x，
//! 解链比例 f(T) = 1/(1 + K(T))。
//!
//! 如此曲线在报告 Tm 处恰好通过 0.5，校正只平移曲线而不改变形状；
//! 对 ΔH < 0 的双链体 f 随温度单调非减（1/T 上的 S 型）。
//!
//! ## 依赖关系
//! - 被 `thermo/calculator.rs` 调用
//! - 使用 `models/` 的 CurveSpec 与 CurvePoint

use crate::models::{CurvePoint, CurveSpec};
use crate::thermo::calculator::GAS_CONSTANT;

/// 生成熔解曲线，温度自 Tm − span/2 到 Tm + span/2，单位开尔文
///
/// `spec` 已在构造时校验过（step <= range/2）；
/// 跨度截断为步长整数倍，共 span/step + 1 个点，升序排列。
pub fn generate(dh: f64, tm: f64, ct_over_x: f64, spec: &CurveSpec) -> Vec<CurvePoint> {
    let span = spec.effective_range();
    let count = spec.point_count();
    let start = tm - span / 2.0;

    let ds_eff = dh * 1000.0 / tm - GAS_CONSTANT * ct_over_x.ln();

    (0..count)
        .map(|i| {
            let t = start + i as f64 * spec.step;
            CurvePoint {
                temperature: t,
                fraction_melted: fraction_melted(dh, ds_eff, ct_over_x, t),
            }
        })
        .collect()
}

/// 温度 t (K) 下的解链比例
fn fraction_melted(dh: f64, ds_eff: f64, ct_over_x: f64, t: f64) -> f64 {
    let k = (ds_eff / GAS_CONSTANT - dh * 1000.0 / (GAS_CONSTANT * t)).exp() * ct_over_x;
    1.0 / (1.0 + k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DH: f64 = -70.8;
    const TM: f64 = 321.4;
    const CT_OVER_X: f64 = 0.25e-6;

    #[test]
    fn test_point_count_and_span() {
        let spec = CurveSpec::new(20.0, 2.0).unwrap();
        let points = generate(DH, TM, CT_OVER_X, &spec);

        // range/step + 1 个点，覆盖 Tm ± 10
        assert_eq!(points.len(), 11);
        assert_relative_eq!(points[0].temperature, TM - 10.0, epsilon = 1e-9);
        assert_relative_eq!(points[10].temperature, TM + 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_half_melted_at_tm() {
        let spec = CurveSpec::new(20.0, 2.0).unwrap();
        let points = generate(DH, TM, CT_OVER_X, &spec);
        // 中心点即 Tm，解链比例恰为 0.5
        assert_relative_eq!(points[5].temperature, TM, epsilon = 1e-9);
        assert_relative_eq!(points[5].fraction_melted, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_monotone_and_bounded() {
        let spec = CurveSpec::new(30.0, 0.5).unwrap();
        let points = generate(DH, TM, CT_OVER_X, &spec);

        for pair in points.windows(2) {
            assert!(pair[1].fraction_melted >= pair[0].fraction_melted);
            assert!(pair[1].temperature > pair[0].temperature);
        }
        for p in &points {
            assert!((0.0..=1.0).contains(&p.fraction_melted));
        }
    }

    #[test]
    fn test_truncated_range() {
        // 10 / 3 截断为 9，4 个点
        let spec = CurveSpec::new(10.0, 3.0).unwrap();
        let points = generate(DH, TM, CT_OVER_X, &spec);
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0].temperature, TM - 4.5, epsilon = 1e-9);
        assert_relative_eq!(points[3].temperature, TM + 4.5, epsilon = 1e-9);
    }
}
