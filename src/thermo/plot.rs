//! # 熔解曲线图表生成
//!
//! 使用 `plotters` 库绘制解链比例-温度曲线，每条记录一条序列。
//!
//! ## 功能
//! - 支持 PNG 和 SVG 输出（按扩展名选择）
//! - 多记录共用一张图，带图例
//!
//! ## 依赖关系
//! - 被 `commands/curve.rs` 调用
//! - 使用 `models/` 的 CurvePoint
//! - 使用 `plotters` 渲染图表

use crate::error::{MeltError, Result};
use crate::models::{CurvePoint, result::CELSIUS_OFFSET};

use plotters::prelude::*;
use std::path::Path;

/// 系列调色板（循环使用）
const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 51, 51),
    RGBColor(34, 139, 34),
    RGBColor(204, 119, 0),
    RGBColor(122, 61, 163),
    RGBColor(0, 153, 153),
];

/// 生成熔解曲线图表
///
/// 输出格式按扩展名选择：`.svg` 走 SVG 后端，其余走位图 PNG。
pub fn generate_curve_plot(
    curves: &[(String, Vec<CurvePoint>)],
    output_path: &Path,
    title: &str,
    celsius: bool,
    width: u32,
    height: u32,
) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, curves, title, celsius)?;
        root.present()
            .map_err(|e| MeltError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, curves, title, celsius)?;
        root.present()
            .map_err(|e| MeltError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制曲线图表的核心逻辑
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &[(String, Vec<CurvePoint>)],
    title: &str,
    celsius: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MeltError::Other(format!("{:?}", e)))?;

    let offset = if celsius { CELSIUS_OFFSET } else { 0.0 };

    // 温度轴覆盖所有曲线
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for (_, points) in curves {
        for p in points {
            x_min = x_min.min(p.temperature - offset);
            x_max = x_max.max(p.temperature - offset);
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(MeltError::Other("no curve points to plot".to_string()));
    }

    let x_desc = if celsius {
        "Temperature (°C)"
    } else {
        "Temperature (K)"
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..1.05)
        .map_err(|e| MeltError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Fraction Melted")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| MeltError::Other(format!("{:?}", e)))?;

    for (i, (name, points)) in curves.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.temperature - offset, p.fraction_melted)),
                color.stroke_width(2),
            ))
            .map_err(|e| MeltError::Other(format!("{:?}", e)))?
            .label(name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .position(SeriesLabelPosition::LowerRight)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| MeltError::Other(format!("{:?}", e)))?;

    Ok(())
}
