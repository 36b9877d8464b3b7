use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// Mark a school selects to enter a discipline.
pub const MARK_YES: &str = "Sí";
/// Mark a school selects to stay out of a discipline.
pub const MARK_NO: &str = "No";
/// Header written above the dropdown option list on the hidden sheet.
pub const OPTION_LIST_TITLE: &str = "Participa";

/// Visible data-entry sheet name; also referenced by the generated macros.
pub const GRID_SHEET: &str = "Registro General";
/// Visible participation summary sheet name.
pub const SUMMARY_SHEET: &str = "Resumen";
/// Hidden sheet holding the dropdown option list.
pub const LISTS_SHEET: &str = "Listas";

/// The two dropdown options, in the order they appear on the hidden sheet.
pub const PARTICIPATION_OPTIONS: [&str; 2] = [MARK_NO, MARK_YES];

/// What kind of cell a discipline column holds in the data-entry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Sí/No dropdown answering "does this school enter?".
    Participation,
    /// Free numeric cell holding the participant head count.
    HeadCount,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Participation => "participation",
            ColumnKind::HeadCount => "head count",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive participant bounds for a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// One competition entry, rendered as one grid column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    /// Stable identifier used by bindings; unique across the schema.
    pub key: String,
    /// Display label shown in the merged column header.
    pub name: String,
    pub kind: ColumnKind,
    /// Participant bounds. Required for head-count columns and for the
    /// individual/team members of a pair; optional elsewhere.
    pub bounds: Option<Bounds>,
}

impl Discipline {
    pub fn participation(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: ColumnKind::Participation,
            bounds: None,
        }
    }

    pub fn participation_bounded(
        key: impl Into<String>,
        name: impl Into<String>,
        min: u32,
        max: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: ColumnKind::Participation,
            bounds: Some(Bounds::new(min, max)),
        }
    }

    pub fn head_count(
        key: impl Into<String>,
        name: impl Into<String>,
        min: u32,
        max: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: ColumnKind::HeadCount,
            bounds: Some(Bounds::new(min, max)),
        }
    }
}

/// A named band of disciplines rendered left-to-right under one merged header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub disciplines: Vec<Discipline>,
}

impl Category {
    pub fn new(name: impl Into<String>, disciplines: Vec<Discipline>) -> Self {
        Self {
            name: name.into(),
            disciplines,
        }
    }
}

/// Individual/team variant pair sharing one head-count column.
///
/// References are structural: each field names a discipline key directly,
/// and `Schema::new` rejects the schema when any of them cannot be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairBinding {
    /// Display name used in validation messages (e.g. "Canto").
    pub name: String,
    /// Key of the individual-variant participation discipline.
    pub individual: String,
    /// Key of the team-variant participation discipline.
    pub team: String,
    /// Key of the shared head-count discipline.
    pub count: String,
}

impl PairBinding {
    pub fn new(
        name: impl Into<String>,
        individual: impl Into<String>,
        team: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            individual: individual.into(),
            team: team.into(),
            count: count.into(),
        }
    }
}

/// A participation discipline gating a dedicated head-count column,
/// without an individual/team split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkBinding {
    /// Display name used in validation messages (e.g. "Teatro").
    pub name: String,
    /// Key of the trigger (participation) discipline.
    pub trigger: String,
    /// Key of the head-count discipline.
    pub count: String,
}

impl LinkBinding {
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            count: count.into(),
        }
    }
}

/// One registered school, rendered as one locked grid row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    /// Clave de Centro de Trabajo, the official school identifier.
    pub cct: String,
    pub name: String,
    pub locality: String,
}

impl School {
    pub fn new(
        cct: impl Into<String>,
        name: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            cct: cct.into(),
            name: name.into(),
            locality: locality.into(),
        }
    }
}

/// A validated registration schema: ordered categories, resolved bindings,
/// and the school list.
///
/// Construction is the single resolution point. Every binding reference is
/// checked against the declared disciplines here, and an unresolvable or
/// ill-typed reference fails construction instead of being dropped later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    categories: Vec<Category>,
    pairs: Vec<PairBinding>,
    links: Vec<LinkBinding>,
    schools: Vec<School>,
}

impl Schema {
    pub fn new(
        categories: Vec<Category>,
        pairs: Vec<PairBinding>,
        links: Vec<LinkBinding>,
        schools: Vec<School>,
    ) -> Result<Self> {
        let schema = Self {
            categories,
            pairs,
            links,
            schools,
        };
        schema.validate()?;
        Ok(schema)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn pairs(&self) -> &[PairBinding] {
        &self.pairs
    }

    pub fn links(&self) -> &[LinkBinding] {
        &self.links
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Iterate disciplines in declaration order (the column order).
    pub fn disciplines(&self) -> impl Iterator<Item = &Discipline> {
        self.categories
            .iter()
            .flat_map(|category| category.disciplines.iter())
    }

    /// Total number of discipline columns.
    pub fn discipline_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.disciplines.len())
            .sum()
    }

    /// Look up a discipline by key.
    pub fn discipline(&self, key: &str) -> Option<&Discipline> {
        self.disciplines().find(|discipline| discipline.key == key)
    }

    fn validate(&self) -> Result<()> {
        if self.schools.is_empty() {
            return Err(SchemaError::EmptySchoolList);
        }
        let mut ccts = BTreeSet::new();
        for school in &self.schools {
            if !ccts.insert(school.cct.as_str()) {
                return Err(SchemaError::DuplicateSchool(school.cct.clone()));
            }
        }

        let mut by_key: BTreeMap<&str, &Discipline> = BTreeMap::new();
        for category in &self.categories {
            if category.disciplines.is_empty() {
                return Err(SchemaError::EmptyCategory(category.name.clone()));
            }
            for discipline in &category.disciplines {
                if by_key.insert(discipline.key.as_str(), discipline).is_some() {
                    return Err(SchemaError::DuplicateKey(discipline.key.clone()));
                }
            }
        }

        // Each discipline may back at most one binding role.
        let mut claims: BTreeMap<String, String> = BTreeMap::new();
        let mut claim_key = |key: &str, binding: &str| -> Result<()> {
            if let Some(first) = claims.get(key) {
                return Err(SchemaError::SharedBindingTarget {
                    key: key.to_string(),
                    first: first.clone(),
                    second: binding.to_string(),
                });
            }
            claims.insert(key.to_string(), binding.to_string());
            Ok(())
        };

        for pair in &self.pairs {
            let individual = resolve_pair_member(&by_key, pair, "individual", &pair.individual)?;
            let team = resolve_pair_member(&by_key, pair, "team", &pair.team)?;
            let count = resolve_pair_member(&by_key, pair, "count", &pair.count)?;
            expect_kind(&pair.name, individual, ColumnKind::Participation)?;
            expect_kind(&pair.name, team, ColumnKind::Participation)?;
            expect_kind(&pair.name, count, ColumnKind::HeadCount)?;
            for member in [individual, team, count] {
                if member.bounds.is_none() {
                    return Err(SchemaError::MissingBounds {
                        binding: pair.name.clone(),
                        key: member.key.clone(),
                    });
                }
            }
            claim_key(&pair.individual, &pair.name)?;
            claim_key(&pair.team, &pair.name)?;
            claim_key(&pair.count, &pair.name)?;
        }

        for link in &self.links {
            let trigger = resolve_link_member(&by_key, link, "trigger", &link.trigger)?;
            let count = resolve_link_member(&by_key, link, "count", &link.count)?;
            expect_kind(&link.name, trigger, ColumnKind::Participation)?;
            expect_kind(&link.name, count, ColumnKind::HeadCount)?;
            if count.bounds.is_none() {
                return Err(SchemaError::MissingBounds {
                    binding: link.name.clone(),
                    key: count.key.clone(),
                });
            }
            claim_key(&link.trigger, &link.name)?;
            claim_key(&link.count, &link.name)?;
        }

        Ok(())
    }
}

fn resolve_pair_member<'a>(
    by_key: &BTreeMap<&str, &'a Discipline>,
    pair: &PairBinding,
    role: &'static str,
    key: &str,
) -> Result<&'a Discipline> {
    by_key
        .get(key)
        .copied()
        .ok_or_else(|| SchemaError::UnresolvedPair {
            pair: pair.name.clone(),
            role,
            key: key.to_string(),
        })
}

fn resolve_link_member<'a>(
    by_key: &BTreeMap<&str, &'a Discipline>,
    link: &LinkBinding,
    role: &'static str,
    key: &str,
) -> Result<&'a Discipline> {
    by_key
        .get(key)
        .copied()
        .ok_or_else(|| SchemaError::UnresolvedLink {
            link: link.name.clone(),
            role,
            key: key.to_string(),
        })
}

fn expect_kind(binding: &str, discipline: &Discipline, expected: ColumnKind) -> Result<()> {
    if discipline.kind == expected {
        Ok(())
    } else {
        Err(SchemaError::WrongColumnKind {
            binding: binding.to_string(),
            key: discipline.key.clone(),
            expected: expected.as_str(),
            actual: discipline.kind.as_str(),
        })
    }
}
