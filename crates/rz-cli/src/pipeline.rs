//! The generation and check pipelines behind the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rz_layout::compile;
use rz_model::zone_catalog;
use rz_validate::{ValidationReport, validate_grid};
use rz_vba::{generate_modules, write_modules};
use rz_workbook::{load_grid, write_workbook};

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub output_dir: PathBuf,
    /// Year stamped into the workbook file name.
    pub year: u16,
    pub with_macros: bool,
}

/// Paths and counts produced by one generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub workbook: PathBuf,
    pub modules: Vec<PathBuf>,
    pub schools: usize,
    pub columns: usize,
    pub pairs: usize,
    pub links: usize,
}

/// Compile the embedded catalog and write the workbook plus macro modules.
pub fn generate(request: &GenerateRequest) -> Result<GenerateResult> {
    let span = info_span!("generate", year = request.year);
    let _guard = span.enter();

    let schema = zone_catalog().context("build embedded catalog")?;
    let layout = compile(&schema).context("compile layout")?;

    fs::create_dir_all(&request.output_dir)
        .with_context(|| format!("create {}", request.output_dir.display()))?;
    let workbook = request
        .output_dir
        .join(format!("Registro_Zona_{}.xlsx", request.year));
    write_workbook(&workbook, &schema, &layout)
        .with_context(|| format!("write {}", workbook.display()))?;

    let modules = if request.with_macros {
        let rendered = generate_modules(&layout).context("render macro modules")?;
        write_modules(&request.output_dir, &rendered).context("write macro modules")?
    } else {
        Vec::new()
    };

    info!(workbook = %workbook.display(), modules = modules.len(), "generation finished");
    Ok(GenerateResult {
        workbook,
        modules,
        schools: schema.schools().len(),
        columns: layout.columns.len(),
        pairs: layout.pairs.len(),
        links: layout.links.len(),
    })
}

/// Load a filled workbook's grid and run the pre-save validation over it.
pub fn check(workbook: &Path) -> Result<ValidationReport> {
    let schema = zone_catalog().context("build embedded catalog")?;
    let layout = compile(&schema).context("compile layout")?;
    let grid = load_grid(workbook, &layout)
        .with_context(|| format!("read {}", workbook.display()))?;
    Ok(validate_grid(&layout, &grid))
}
