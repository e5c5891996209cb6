//! # 近邻热力学参数表
//!
//! 提供各双链体类型的二核苷酸步进 (ΔH, ΔS) 查询。
//!
//! ## 数据来源
//! - DNA:DNA — Allawi & SantaLucia (1997), Biochemistry 36: 10581-10594
//! - RNA:RNA — Freier et al. (1986), PNAS 83: 9373-9377
//! - DNA:RNA — Sugimoto et al. (1995), Biochemistry 34: 11211-11216
//!
//! ΔH 单位 kcal/mol，ΔS 单位 cal/(mol·K)，参考条件 1 M NaCl。
//! 对称等价步进（如 DNA 的 AA 与 TT）已全部展开为 16 个键。
//!
//! ## 依赖关系
//! - 被 `thermo/calculator.rs` 调用
//! - 纯静态数据，进程级只读，不被修改

use crate::error::{MeltError, Result};
use crate::models::duplex::complement;
use crate::models::DuplexType;

use std::collections::HashMap;
use std::sync::LazyLock;

/// 一张近邻参数表：步进参数加起始/末端校正
#[derive(Debug)]
pub struct NnTable {
    /// 二核苷酸步进 -> (ΔH, ΔS)
    pub steps: HashMap<&'static str, (f64, f64)>,
    /// 双链体起始校正
    pub initiation: (f64, f64),
    /// 末端 A·T 碱基对校正（每个末端一次），无区分时为 None
    pub terminal_at: Option<(f64, f64)>,
    /// 末端 G·C 碱基对校正
    pub terminal_gc: Option<(f64, f64)>,
}

/// DNA:DNA，Allawi & SantaLucia (1997) 统一参数
pub static DNA_DNA: LazyLock<NnTable> = LazyLock::new(|| NnTable {
    steps: HashMap::from([
        ("AA", (-7.9, -22.2)),
        ("TT", (-7.9, -22.2)),
        ("AT", (-7.2, -20.4)),
        ("TA", (-7.2, -21.3)),
        ("CA", (-8.5, -22.7)),
        ("TG", (-8.5, -22.7)),
        ("GT", (-8.4, -22.4)),
        ("AC", (-8.4, -22.4)),
        ("CT", (-7.8, -21.0)),
        ("AG", (-7.8, -21.0)),
        ("GA", (-8.2, -22.2)),
        ("TC", (-8.2, -22.2)),
        ("CG", (-10.6, -27.2)),
        ("GC", (-9.8, -24.4)),
        ("GG", (-8.0, -19.9)),
        ("CC", (-8.0, -19.9)),
    ]),
    initiation: (0.0, 0.0),
    terminal_at: Some((2.3, 4.1)),
    terminal_gc: Some((0.1, -2.8)),
});

/// RNA:RNA，Freier et al. (1986)
pub static RNA_RNA: LazyLock<NnTable> = LazyLock::new(|| NnTable {
    steps: HashMap::from([
        ("AA", (-6.6, -18.4)),
        ("UU", (-6.6, -18.4)),
        ("AU", (-5.7, -15.5)),
        ("UA", (-8.1, -22.6)),
        ("CA", (-10.5, -27.8)),
        ("UG", (-10.5, -27.8)),
        ("CU", (-7.6, -19.2)),
        ("AG", (-7.6, -19.2)),
        ("GA", (-13.3, -35.5)),
        ("UC", (-13.3, -35.5)),
        ("GU", (-10.2, -26.2)),
        ("AC", (-10.2, -26.2)),
        ("CG", (-8.0, -19.4)),
        ("GC", (-14.2, -34.9)),
        ("GG", (-12.2, -29.7)),
        ("CC", (-12.2, -29.7)),
    ]),
    initiation: (0.0, -10.8),
    terminal_at: None,
    terminal_gc: None,
});

/// DNA:RNA 杂交，Sugimoto et al. (1995)，以 DNA 链 5'->3' 为键
pub static DNA_RNA: LazyLock<NnTable> = LazyLock::new(|| NnTable {
    steps: HashMap::from([
        ("AA", (-7.8, -21.9)),
        ("AC", (-5.9, -12.3)),
        ("AG", (-9.1, -23.5)),
        ("AT", (-8.3, -23.9)),
        ("CA", (-9.0, -26.1)),
        ("CC", (-9.3, -23.2)),
        ("CG", (-16.3, -47.1)),
        ("CT", (-7.0, -19.7)),
        ("GA", (-5.5, -13.5)),
        ("GC", (-8.0, -17.1)),
        ("GG", (-12.8, -31.9)),
        ("GT", (-7.8, -21.6)),
        ("TA", (-7.8, -23.2)),
        ("TC", (-8.6, -22.9)),
        ("TG", (-10.4, -28.4)),
        ("TT", (-11.5, -36.4)),
    ]),
    initiation: (1.9, -3.9),
    terminal_at: None,
    terminal_gc: None,
});

/// 取双链体类型对应的参数表
///
/// RNA:DNA 共用 Sugimoto 表，键在查询时重映射，见 [`step_params`]。
pub fn table_for(duplex_type: DuplexType) -> &'static NnTable {
    match duplex_type {
        DuplexType::DnaDna => &DNA_DNA,
        DuplexType::RnaRna => &RNA_RNA,
        DuplexType::DnaRna | DuplexType::RnaDna => &DNA_RNA,
    }
}

/// 查询一个二核苷酸步进的 (ΔH, ΔS)
///
/// RNA:DNA 的步进先映射为互补 DNA 链的步进再查 Sugimoto 表：
/// RNA 5'-b1 b2-3' 对应 DNA 链 5'-comp(b2) comp(b1)-3'。
/// 查不到的步进返回 `UnknownNnStep`。
pub fn step_params(duplex_type: DuplexType, b1: u8, b2: u8) -> Result<(f64, f64)> {
    let key: [u8; 2] = match duplex_type {
        DuplexType::RnaDna => [complement(b2, false), complement(b1, false)],
        _ => [b1, b2],
    };
    let key_str = std::str::from_utf8(&key).map_err(|_| MeltError::UnknownNnStep {
        duplex_type: duplex_type.to_string(),
        step: format!("{}{}", b1 as char, b2 as char),
    })?;

    table_for(duplex_type)
        .steps
        .get(key_str)
        .copied()
        .ok_or_else(|| MeltError::UnknownNnStep {
            duplex_type: duplex_type.to_string(),
            step: format!("{}{}", b1 as char, b2 as char),
        })
}

/// 查询一个末端碱基的校正项；该表无末端区分时为 (0, 0)
pub fn terminal_correction(duplex_type: DuplexType, base: u8) -> (f64, f64) {
    let table = table_for(duplex_type);
    let entry = match base {
        b'A' | b'T' | b'U' => table.terminal_at,
        b'G' | b'C' => table.terminal_gc,
        _ => None,
    };
    entry.unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_complete() {
        // 每张表覆盖其字母表的全部 16 个步进
        for (table, alphabet) in [
            (&*DNA_DNA, b"ACGT"),
            (&*RNA_RNA, b"ACGU"),
            (&*DNA_RNA, b"ACGT"),
        ] {
            assert_eq!(table.steps.len(), 16);
            for &a in alphabet {
                for &b in alphabet {
                    let key = format!("{}{}", a as char, b as char);
                    assert!(table.steps.contains_key(key.as_str()), "missing {}", key);
                }
            }
        }
    }

    #[test]
    fn test_dna_symmetry() {
        // 对称等价步进数值一致（SantaLucia 表的展开是否正确）
        for (a, b) in [("AA", "TT"), ("CA", "TG"), ("GT", "AC"), ("CT", "AG"), ("GA", "TC"), ("GG", "CC")] {
            assert_eq!(DNA_DNA.steps[a], DNA_DNA.steps[b]);
        }
    }

    #[test]
    fn test_step_lookup() {
        assert_eq!(
            step_params(DuplexType::DnaDna, b'G', b'C').unwrap(),
            (-9.8, -24.4)
        );
        assert_eq!(
            step_params(DuplexType::RnaRna, b'G', b'C').unwrap(),
            (-14.2, -34.9)
        );
        // 未知步进报 UnknownNnStep
        assert!(step_params(DuplexType::DnaDna, b'G', b'X').is_err());
    }

    #[test]
    fn test_rna_dna_remap() {
        // RNA 5'-AA-3' 对应 DNA 链 5'-TT-3'，应取 Sugimoto 的 TT 参数
        assert_eq!(
            step_params(DuplexType::RnaDna, b'A', b'A').unwrap(),
            DNA_RNA.steps["TT"]
        );
        // RNA 5'-GU-3' -> DNA 5'-AC-3'
        assert_eq!(
            step_params(DuplexType::RnaDna, b'G', b'U').unwrap(),
            DNA_RNA.steps["AC"]
        );
    }

    #[test]
    fn test_terminal_corrections() {
        assert_eq!(terminal_correction(DuplexType::DnaDna, b'A'), (2.3, 4.1));
        assert_eq!(terminal_correction(DuplexType::DnaDna, b'G'), (0.1, -2.8));
        // RNA 与杂交表无末端区分
        assert_eq!(terminal_correction(DuplexType::RnaRna, b'G'), (0.0, 0.0));
        assert_eq!(terminal_correction(DuplexType::DnaRna, b'A'), (0.0, 0.0));
    }
}
