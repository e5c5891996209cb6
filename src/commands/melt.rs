//! # melt 子命令实现
//!
//! 从 FASTA 输入逐条计算双链体热力学，打印结果表并可导出 CSV。
//!
//! ## 管线
//! 每条记录：规范化 -> 近邻求和 -> 盐校正 -> 甲酰胺校正。
//! 单条记录失败只报告并计入统计，批处理继续；输出顺序
//! 严格等于输入顺序。
//!
//! ## 依赖关系
//! - 使用 `cli/melt.rs` 定义的 MeltArgs
//! - 使用 `batch/` 模块进行多文件处理
//! - 使用 `thermo/` 模块进行计算
//! - 使用 `parsers/` 读取序列

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::melt::{ConditionArgs, MeltArgs};
use crate::error::{MeltError, Result};
use crate::models::{
    Conditions, CurvePoint, CurveSpec, Duplex, DuplexType, FormamideSettings, ThermodynamicResult,
};
use crate::parsers::{FastaReader, FastaRecord};
use crate::thermo::{export, MeltCalculator};
use crate::utils::output;

use std::path::Path;

/// 由 CLI 条件参数构造的共享计算上下文
pub struct MeltContext {
    pub duplex_type: DuplexType,
    pub calculator: MeltCalculator,
    pub celsius: bool,
}

impl MeltContext {
    /// 校验并构造上下文；配置错误在这里一次性暴露
    pub fn new(args: &ConditionArgs) -> Result<Self> {
        let conditions = Conditions::new(args.oligo, args.na, args.mg, args.fa)?;
        let formamide = FormamideSettings::new(args.fa_mode.into(), &args.m_value)?;
        Ok(MeltContext {
            duplex_type: args.duplex_type.into(),
            calculator: MeltCalculator::new(conditions, formamide),
            celsius: args.celsius,
        })
    }
}

/// 一个输入文件的处理报告
#[derive(Debug, Default)]
pub struct FileReport {
    /// 成功记录，输入顺序
    pub rows: Vec<(String, ThermodynamicResult)>,
    /// 成功记录的熔解曲线（仅在请求曲线时填充）
    pub curves: Vec<(String, Vec<CurvePoint>)>,
    /// 失败记录 (名称, 错误信息)，输入顺序
    pub failures: Vec<(String, String)>,
}

/// 逐条处理记录流；单条失败不中断
pub fn process_records<I>(
    records: I,
    ctx: &MeltContext,
    curve_spec: Option<&CurveSpec>,
) -> FileReport
where
    I: Iterator<Item = Result<FastaRecord>>,
{
    let mut report = FileReport::default();

    for record in records {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                report.failures.push(("<io>".to_string(), e.to_string()));
                continue;
            }
        };

        let name = record.name.clone();
        match evaluate_record(&record, ctx, curve_spec) {
            Ok((result, curve)) => {
                report.rows.push((name.clone(), result));
                if let Some(points) = curve {
                    report.curves.push((name, points));
                }
            }
            Err(e) => report.failures.push((name, e.to_string())),
        }
    }

    report
}

/// 单条记录的完整管线
fn evaluate_record(
    record: &FastaRecord,
    ctx: &MeltContext,
    curve_spec: Option<&CurveSpec>,
) -> Result<(ThermodynamicResult, Option<Vec<CurvePoint>>)> {
    let duplex = Duplex::new(record.name.clone(), &record.sequence, ctx.duplex_type)?;
    let result = ctx.calculator.evaluate(&duplex)?;
    let curve = curve_spec.map(|spec| ctx.calculator.melting_curve(&duplex, &result, spec));
    Ok((result, curve))
}

/// 处理一个输入文件
pub fn process_file(
    path: &Path,
    ctx: &MeltContext,
    curve_spec: Option<&CurveSpec>,
) -> Result<FileReport> {
    let reader = FastaReader::open(path)?;
    Ok(process_records(reader, ctx, curve_spec))
}

/// 执行 melt 分析
pub fn execute(args: MeltArgs) -> Result<()> {
    output::print_header("Duplex Melting Temperature Calculation");

    let ctx = MeltContext::new(&args.conditions)?;
    let report = run_over_input(&args.conditions, &ctx, None)?;

    print_result_table(&report, &ctx);

    if let Some(ref out) = args.output {
        export::results_to_csv(&report.rows, ctx.celsius, out)?;
        output::print_success(&format!("Results saved to '{}'", out.display()));
    }

    Ok(())
}

/// 单文件/目录两种模式的统一入口，汇总所有文件的记录报告
pub fn run_over_input(
    conditions: &ConditionArgs,
    ctx: &MeltContext,
    curve_spec: Option<&CurveSpec>,
) -> Result<FileReport> {
    let input = &conditions.input;
    if !input.exists() {
        return Err(MeltError::FileNotFound {
            path: input.display().to_string(),
        });
    }

    let collector = FileCollector::new(input.clone())
        .with_pattern(&conditions.pattern)
        .recursive(conditions.recursive);

    if collector.is_single_file() {
        output::print_info(&format!("Single file mode: '{}'", input.display()));
        return process_file(input, ctx, curve_spec);
    }

    let files = collector.collect();
    if files.is_empty() {
        return Err(MeltError::NoFilesFound {
            pattern: conditions.pattern.clone(),
        });
    }
    output::print_info(&format!(
        "Batch mode: {} sequence files in '{}'",
        files.len(),
        input.display()
    ));

    // 逐文件顺序处理；文件级失败计入统计，记录级报告合并
    let mut merged = FileReport::default();
    let runner = BatchRunner::new();
    let batch = runner.run(files, |file| match process_file(file, ctx, curve_spec) {
        Ok(report) => {
            let failed = report.failures.len();
            merge_report(&mut merged, report);
            if failed > 0 {
                ProcessResult::Failed(
                    file.display().to_string(),
                    format!("{} record(s) rejected", failed),
                )
            } else {
                ProcessResult::Success(file.display().to_string())
            }
        }
        Err(e) => {
            merged
                .failures
                .push((file.display().to_string(), e.to_string()));
            ProcessResult::Failed(file.display().to_string(), e.to_string())
        }
    });

    output::print_separator();
    output::print_info(&format!(
        "Batch complete: {} file(s), {} with rejected records",
        batch.total(),
        batch.failed
    ));

    Ok(merged)
}

fn merge_report(into: &mut FileReport, from: FileReport) {
    into.rows.extend(from.rows);
    into.curves.extend(from.curves);
    into.failures.extend(from.failures);
}

/// 打印结果表格与失败汇总
pub fn print_result_table(report: &FileReport, ctx: &MeltContext) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ResultRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "dG (kcal/mol)")]
        dg: String,
        #[tabled(rename = "dH (kcal/mol)")]
        dh: String,
        #[tabled(rename = "dS (cal/mol·K)")]
        ds: String,
        #[tabled(rename = "Tm")]
        tm: String,
    }

    let unit = if ctx.celsius { "°C" } else { "K" };
    output::print_info(&format!(
        "Duplex type: {}, temperatures in {}",
        ctx.duplex_type, unit
    ));

    let rows: Vec<ResultRow> = report
        .rows
        .iter()
        .map(|(name, r)| ResultRow {
            name: name.clone(),
            dg: format!("{:.2}", r.dg),
            dh: format!("{:.2}", r.dh),
            ds: format!("{:.2}", r.ds),
            tm: format!("{:.2}", r.tm_in(ctx.celsius)),
        })
        .collect();

    if !rows.is_empty() {
        let table = Table::new(&rows);
        println!("{}", table);
    }

    for (name, err) in &report.failures {
        output::print_error(&format!("{}: {}", name, err));
    }
    output::print_success(&format!(
        "{} record(s) computed, {} rejected",
        report.rows.len(),
        report.failures.len()
    ));
}
