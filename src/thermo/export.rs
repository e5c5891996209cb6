//! # 热力学数据导出
//!
//! 导出结果表与熔解曲线表到 CSV。
//!
//! ## 支持格式
//! - 结果表：每条记录一行 (name, dG, dH, dS, Tm)
//! - 曲线表：所有记录共用一个文件，按记录名键控，
//!   每行 (name, temperature, fraction_melted)
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{MeltError, Result};
use crate::models::{CurvePoint, ThermodynamicResult, result::CELSIUS_OFFSET};

use std::path::Path;

/// 导出结果表为 CSV
pub fn results_to_csv(
    rows: &[(String, ThermodynamicResult)],
    celsius: bool,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let tm_header = if celsius { "tm_C" } else { "tm_K" };
    wtr.write_record([
        "name",
        "dG_kcal_mol",
        "dH_kcal_mol",
        "dS_cal_mol_K",
        tm_header,
    ])?;

    for (name, result) in rows {
        wtr.write_record([
            name.clone(),
            format!("{:.4}", result.dg),
            format!("{:.4}", result.dh),
            format!("{:.4}", result.ds),
            format!("{:.4}", result.tm_in(celsius)),
        ])?;
    }

    wtr.flush().map_err(|e| MeltError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出全部熔解曲线为共享 CSV（按记录名键控，温度升序）
pub fn curves_to_csv(
    curves: &[(String, Vec<CurvePoint>)],
    celsius: bool,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let temp_header = if celsius {
        "temperature_C"
    } else {
        "temperature_K"
    };
    wtr.write_record(["name", temp_header, "fraction_melted"])?;

    for (name, points) in curves {
        for point in points {
            let t = if celsius {
                point.temperature - CELSIUS_OFFSET
            } else {
                point.temperature
            };
            wtr.write_record([
                name.clone(),
                format!("{:.4}", t),
                format!("{:.6}", point.fraction_melted),
            ])?;
        }
    }

    wtr.flush().map_err(|e| MeltError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
