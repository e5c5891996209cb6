//! # curve 子命令实现
//!
//! 在 melt 管线之后为每条成功记录生成熔解曲线，写入共享曲线表，
//! 并可选渲染曲线图。
//!
//! ## 依赖关系
//! - 使用 `cli/curve.rs` 定义的 CurveArgs
//! - 复用 `commands/melt.rs` 的管线与汇总逻辑
//! - 使用 `thermo/export.rs` 与 `thermo/plot.rs` 输出

use crate::cli::curve::CurveArgs;
use crate::commands::melt::{print_result_table, run_over_input, MeltContext};
use crate::error::Result;
use crate::models::CurveSpec;
use crate::thermo::{export, plot};
use crate::utils::output;

/// 执行 curve 分析
pub fn execute(args: CurveArgs) -> Result<()> {
    output::print_header("Duplex Melting Curve Generation");

    let ctx = MeltContext::new(&args.conditions)?;
    // step <= range/2 在这里校验，任何点生成之前
    let spec = CurveSpec::new(args.range, args.step)?;

    output::print_info(&format!(
        "Curve: Tm ± {:.1}°, step {:.2}° ({} points per record)",
        spec.effective_range() / 2.0,
        spec.step,
        spec.point_count()
    ));

    let report = run_over_input(&args.conditions, &ctx, Some(&spec))?;
    print_result_table(&report, &ctx);

    if let Some(ref out) = args.output {
        export::results_to_csv(&report.rows, ctx.celsius, out)?;
        output::print_success(&format!("Results saved to '{}'", out.display()));
    }

    if report.curves.is_empty() {
        output::print_warning("No curves generated, skipping curve outputs");
        return Ok(());
    }

    export::curves_to_csv(&report.curves, ctx.celsius, &args.curve_out)?;
    output::print_success(&format!(
        "Curve table ({} records) saved to '{}'",
        report.curves.len(),
        args.curve_out.display()
    ));

    if let Some(ref plot_path) = args.plot {
        let title = args.title.clone().unwrap_or_else(|| {
            args.conditions
                .input
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Melting Curves")
                .to_string()
        });
        plot::generate_curve_plot(
            &report.curves,
            plot_path,
            &title,
            ctx.celsius,
            args.width,
            args.height,
        )?;
        output::print_success(&format!("Curve plot saved to '{}'", plot_path.display()));
    }

    Ok(())
}
