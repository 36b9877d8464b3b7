pub mod catalog;
pub mod error;
pub mod schema;

pub use catalog::{CATALOG_YEAR, zone_catalog};
pub use error::{Result, SchemaError};
pub use schema::{
    Bounds, Category, ColumnKind, Discipline, GRID_SHEET, LISTS_SHEET, LinkBinding, MARK_NO,
    MARK_YES, OPTION_LIST_TITLE, PARTICIPATION_OPTIONS, PairBinding, School, Schema,
    SUMMARY_SHEET,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_catalog_resolves() {
        let schema = zone_catalog().expect("embedded catalog must resolve");
        assert_eq!(schema.schools().len(), 18);
        assert_eq!(schema.categories().len(), 5);
        assert_eq!(schema.pairs().len(), 8);
        assert_eq!(schema.links().len(), 9);
    }

    #[test]
    fn schema_serializes() {
        let schema = zone_catalog().expect("catalog");
        let json = serde_json::to_string(&schema).expect("serialize schema");
        let round: Schema = serde_json::from_str(&json).expect("deserialize schema");
        assert_eq!(round.discipline_count(), schema.discipline_count());
    }
}
