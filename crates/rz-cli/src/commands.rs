use anyhow::{Context, Result};

use rz_layout::compile;
use rz_model::{CATALOG_YEAR, zone_catalog};
use rz_validate::ValidationReport;
use rz_workbook::dump_workbook;

use crate::cli::{CheckArgs, GenerateArgs, InspectArgs, ReportFormatArg};
use crate::pipeline::{GenerateRequest, GenerateResult, check, generate};
use crate::summary::{print_findings, print_generate_summary, print_schema};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let request = GenerateRequest {
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from(".")),
        year: args.year.unwrap_or(CATALOG_YEAR),
        with_macros: !args.no_macros,
    };
    let result = generate(&request)?;
    print_generate_summary(&result);
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let dumps = dump_workbook(&args.workbook, args.rows)
        .with_context(|| format!("read {}", args.workbook.display()))?;
    let mut printed = false;
    for dump in &dumps {
        if let Some(only) = &args.sheet {
            if &dump.name != only {
                continue;
            }
        }
        printed = true;
        println!("=== Sheet: {} ===", dump.name);
        println!("Max row: {}, Max col: {}", dump.height, dump.width);
        for (index, row) in dump.rows.iter().enumerate() {
            println!("  Row {}: {:?}", index + 1, row);
        }
        println!();
    }
    if let Some(only) = &args.sheet {
        if !printed {
            anyhow::bail!("workbook has no sheet named {only:?}");
        }
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<ValidationReport> {
    let report = check(&args.workbook)?;
    match args.format {
        ReportFormatArg::Table => print_findings(&report),
        ReportFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("serialize findings")?;
            println!("{json}");
        }
    }
    Ok(report)
}

pub fn run_schema() -> Result<()> {
    let schema = zone_catalog().context("build embedded catalog")?;
    let layout = compile(&schema).context("compile layout")?;
    print_schema(&schema, &layout);
    Ok(())
}
