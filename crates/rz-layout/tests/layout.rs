//! Layout compiler tests against the embedded catalog plus property tests
//! for arbitrary schemas.

use proptest::prelude::*;

use rz_layout::{FIRST_DISCIPLINE_COL, compile};
use rz_model::{Category, Discipline, School, Schema, zone_catalog};

#[test]
fn catalog_columns_are_contiguous_from_offset() {
    let schema = zone_catalog().expect("catalog");
    let layout = compile(&schema).expect("layout");

    assert_eq!(layout.columns.len(), schema.discipline_count());
    for (index, plan) in layout.columns.iter().enumerate() {
        assert_eq!(plan.column, FIRST_DISCIPLINE_COL + index as u16);
    }
}

#[test]
fn catalog_bands_cover_category_extents() {
    let schema = zone_catalog().expect("catalog");
    let layout = compile(&schema).expect("layout");

    assert_eq!(layout.bands.len(), schema.categories().len());
    let mut expected_first = FIRST_DISCIPLINE_COL;
    for (band, category) in layout.bands.iter().zip(schema.categories()) {
        assert_eq!(band.name, category.name);
        assert_eq!(band.first_column, expected_first);
        assert_eq!(
            band.last_column,
            expected_first + category.disciplines.len() as u16 - 1
        );
        expected_first = band.last_column + 1;
    }
}

#[test]
fn catalog_pair_resolution() {
    let schema = zone_catalog().expect("catalog");
    let layout = compile(&schema).expect("layout");

    let canto = layout
        .pairs
        .iter()
        .find(|pair| pair.name == "Canto")
        .expect("Canto pair");
    assert_eq!(canto.individual_column, layout.column("canto_solista").unwrap().column);
    assert_eq!(canto.team_column, layout.column("canto_dueto").unwrap().column);
    assert_eq!(canto.count_column, layout.column("canto_num").unwrap().column);
    assert_eq!(canto.individual_count, 1);
    assert_eq!(canto.team_min, 2);
    assert_eq!(canto.team_max, 2);

    // The three columns of a pair sit inside one category band.
    let comic = layout
        .pairs
        .iter()
        .find(|pair| pair.name == "Cómic")
        .expect("Cómic pair");
    assert_eq!(comic.team_column, comic.individual_column + 1);
    assert_eq!(comic.count_column, comic.individual_column + 2);
    assert_eq!(comic.team_min, 2);
    assert_eq!(comic.team_max, 3);
}

#[test]
fn catalog_link_resolution() {
    let schema = zone_catalog().expect("catalog");
    let layout = compile(&schema).expect("layout");

    let teatro = layout
        .links
        .iter()
        .find(|link| link.name == "Teatro")
        .expect("Teatro link");
    assert_eq!(teatro.trigger_column, layout.column("teatro").unwrap().column);
    assert_eq!(teatro.count_column, teatro.trigger_column + 1);
    assert_eq!(teatro.min, 1);
    assert_eq!(teatro.max, 10);

    let paec = layout
        .links
        .iter()
        .find(|link| link.name == "PAEC")
        .expect("PAEC link");
    assert_eq!(paec.min, 2);
    assert_eq!(paec.max, 20);
}

#[test]
fn data_rows_follow_school_count() {
    let schema = zone_catalog().expect("catalog");
    let layout = compile(&schema).expect("layout");
    assert_eq!(layout.data_rows.first, 5);
    assert_eq!(layout.data_rows.len(), schema.schools().len());
    assert_eq!(layout.data_rows.last, 4 + schema.schools().len() as u32);
}

#[test]
fn compilation_is_deterministic() {
    let schema = zone_catalog().expect("catalog");
    let first = serde_json::to_string(&compile(&schema).expect("layout")).expect("json");
    let second = serde_json::to_string(&compile(&schema).expect("layout")).expect("json");
    assert_eq!(first, second);
}

/// Arbitrary schema of plain participation disciplines: 1-5 categories of
/// 1-6 disciplines each, no bindings.
fn arb_schema() -> impl Strategy<Value = Schema> {
    (prop::collection::vec(1usize..=6, 1..=5), 1usize..=30).prop_map(|(sizes, school_count)| {
        let mut key = 0usize;
        let categories = sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                let disciplines = (0..size)
                    .map(|_| {
                        key += 1;
                        Discipline::participation(format!("d{key}"), format!("Disciplina {key}"))
                    })
                    .collect();
                Category::new(format!("Categoría {index}"), disciplines)
            })
            .collect();
        let schools = (0..school_count)
            .map(|index| {
                School::new(
                    format!("21EBH{index:04}X"),
                    format!("ESCUELA {index}"),
                    "LOCALIDAD",
                )
            })
            .collect();
        Schema::new(categories, vec![], vec![], schools).expect("generated schema is valid")
    })
}

proptest! {
    #[test]
    fn assignment_is_total_and_contiguous(schema in arb_schema()) {
        let layout = compile(&schema).expect("layout");
        prop_assert_eq!(layout.columns.len(), schema.discipline_count());
        for (index, plan) in layout.columns.iter().enumerate() {
            prop_assert_eq!(plan.column, FIRST_DISCIPLINE_COL + index as u16);
        }
        prop_assert_eq!(layout.data_rows.len(), schema.schools().len());
        prop_assert_eq!(layout.last_column(),
            FIRST_DISCIPLINE_COL + schema.discipline_count() as u16 - 1);
    }
}
