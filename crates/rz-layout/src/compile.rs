//! The layout compiler: one left-to-right pass assigning columns, then
//! binding resolution into column-literal constraint records.

use rz_model::Schema;

use crate::error::{LayoutError, Result};
use crate::types::{
    CategoryBand, ColumnPlan, FIRST_DISCIPLINE_COL, Layout, ResolvedLink, ResolvedPair, RowRange,
};

/// Compile a schema into a grid layout.
///
/// Deterministic: the same schema always yields the same assignment, since
/// the single pass follows declaration order. Binding references were
/// already resolved by `Schema::new`; the lookups here can only fail if the
/// schema was mutated behind its constructor, and that still surfaces as a
/// typed error rather than a dropped constraint.
pub fn compile(schema: &Schema) -> Result<Layout> {
    let mut columns = Vec::with_capacity(schema.discipline_count());
    let mut bands = Vec::with_capacity(schema.categories().len());

    let mut next_column = FIRST_DISCIPLINE_COL;
    for category in schema.categories() {
        let first_column = next_column;
        for discipline in &category.disciplines {
            columns.push(ColumnPlan {
                key: discipline.key.clone(),
                name: discipline.name.clone(),
                kind: discipline.kind,
                column: next_column,
            });
            next_column += 1;
        }
        bands.push(CategoryBand {
            name: category.name.clone(),
            first_column,
            last_column: next_column - 1,
        });
    }

    let column_of = |binding: &str, key: &str| -> Result<u16> {
        columns
            .iter()
            .find(|plan| plan.key == key)
            .map(|plan| plan.column)
            .ok_or_else(|| LayoutError::UnknownDiscipline {
                binding: binding.to_string(),
                key: key.to_string(),
            })
    };
    let bounds_of = |binding: &str, key: &str| -> Result<rz_model::Bounds> {
        schema
            .discipline(key)
            .and_then(|discipline| discipline.bounds)
            .ok_or_else(|| LayoutError::MissingBounds {
                binding: binding.to_string(),
                key: key.to_string(),
            })
    };

    let mut pairs = Vec::with_capacity(schema.pairs().len());
    for pair in schema.pairs() {
        let individual_bounds = bounds_of(&pair.name, &pair.individual)?;
        let team_bounds = bounds_of(&pair.name, &pair.team)?;
        pairs.push(ResolvedPair {
            name: pair.name.clone(),
            individual_column: column_of(&pair.name, &pair.individual)?,
            team_column: column_of(&pair.name, &pair.team)?,
            count_column: column_of(&pair.name, &pair.count)?,
            individual_count: individual_bounds.min,
            team_min: team_bounds.min,
            team_max: team_bounds.max,
        });
    }

    let mut links = Vec::with_capacity(schema.links().len());
    for link in schema.links() {
        let count_bounds = bounds_of(&link.name, &link.count)?;
        links.push(ResolvedLink {
            name: link.name.clone(),
            trigger_column: column_of(&link.name, &link.trigger)?,
            count_column: column_of(&link.name, &link.count)?,
            min: count_bounds.min,
            max: count_bounds.max,
        });
    }

    Ok(Layout {
        columns,
        bands,
        pairs,
        links,
        data_rows: RowRange::for_schools(schema.schools().len()),
    })
}
