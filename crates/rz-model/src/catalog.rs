//! The embedded zone catalog: the school list and competition programme
//! for the current cycle. This is the only data source the generator uses.

use crate::error::Result;
use crate::schema::{Category, Discipline, LinkBinding, PairBinding, School, Schema};

/// Competition cycle the embedded catalog belongs to.
pub const CATALOG_YEAR: u16 = 2026;

/// Build the zone registration schema for the current cycle.
///
/// Binding references are resolved (and the whole catalog is re-validated)
/// by `Schema::new`, so a typo here fails at startup rather than producing
/// a workbook with missing validation.
pub fn zone_catalog() -> Result<Schema> {
    Schema::new(categories(), pairs(), links(), schools())
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "Arte y Cultura",
            vec![
                Discipline::participation("baile", "Baile Trad. (8-16)"),
                Discipline::head_count("baile_num", "Baile - Nº Part.", 8, 16),
                Discipline::participation("danza", "Danza Trad. (4-16)"),
                Discipline::head_count("danza_num", "Danza - Nº Part.", 4, 16),
                Discipline::participation_bounded("canto_solista", "Canto - Solista", 1, 1),
                Discipline::participation_bounded("canto_dueto", "Canto - Dueto", 2, 2),
                Discipline::head_count("canto_num", "Canto - Nº Part.", 1, 2),
                Discipline::participation_bounded("comic_ind", "Cómic - Indiv.", 1, 1),
                Discipline::participation_bounded("comic_eq", "Cómic - Equipo", 2, 3),
                Discipline::head_count("comic_num", "Cómic - Nº Part.", 1, 3),
                Discipline::participation_bounded("foto_ind", "Foto - Indiv.", 1, 1),
                Discipline::participation_bounded("foto_eq", "Foto - Equipo", 2, 3),
                Discipline::head_count("foto_num", "Foto - Nº Part.", 1, 3),
                Discipline::participation_bounded("tiktok_ind", "TikTok - Indiv.", 1, 1),
                Discipline::participation_bounded("tiktok_eq", "TikTok - Equipo", 2, 3),
                Discipline::head_count("tiktok_num", "TikTok - Nº Part.", 1, 3),
                Discipline::participation("teatro", "Teatro (1-10)"),
                Discipline::head_count("teatro_num", "Teatro - Nº Part.", 1, 10),
            ],
        ),
        Category::new(
            "Humanidades y Com.",
            vec![
                Discipline::participation("declamacion", "Declamación (1)"),
                Discipline::participation("filosofia", "Filosofía (1)"),
                Discipline::participation("oratoria", "Oratoria Ensayo (1)"),
                Discipline::participation("spelling_a1", "Spelling Bee - A1"),
                Discipline::participation("spelling_a2", "Spelling Bee - A2"),
                Discipline::participation("spelling_b1", "Spelling Bee - B1"),
            ],
        ),
        Category::new(
            "Ciencia y Tecnología",
            vec![
                Discipline::participation("ciencias", "Enc. Ciencias (2-4)"),
                Discipline::head_count("ciencias_num", "Ciencias - Nº Part.", 2, 4),
                Discipline::participation("matematicas", "Enc. Matemáticas (2-4)"),
                Discipline::head_count("matematicas_num", "Matemáticas - Nº Part.", 2, 4),
                Discipline::participation("fisica", "Enc. Física (2-4)"),
                Discipline::head_count("fisica_num", "Física - Nº Part.", 2, 4),
                Discipline::participation("quimica", "Enc. Química (2-4)"),
                Discipline::head_count("quimica_num", "Química - Nº Part.", 2, 4),
                Discipline::participation("sabores", "Sabores Com. (2-4)"),
                Discipline::head_count("sabores_num", "Sabores - Nº Part.", 2, 4),
            ],
        ),
        Category::new(
            "Tech-Desafíos",
            vec![
                Discipline::participation_bounded("fotomontaje_ind", "Fotomontaje - Ind", 1, 1),
                Discipline::participation_bounded("fotomontaje_eq", "Fotomontaje - Eq", 2, 3),
                Discipline::head_count("fotomontaje_num", "Fotomontaje - Nº Part.", 1, 3),
                Discipline::participation_bounded("humor_ind", "Humor - Ind", 1, 1),
                Discipline::participation_bounded("humor_eq", "Humor - Eq", 2, 3),
                Discipline::head_count("humor_num", "Humor - Nº Part.", 1, 3),
                Discipline::participation_bounded("musica_ia_ind", "Música IA - Ind", 1, 1),
                Discipline::participation_bounded("musica_ia_eq", "Música IA - Eq", 2, 3),
                Discipline::head_count("musica_ia_num", "Música IA - Nº Part.", 1, 3),
                Discipline::participation_bounded("ritmo_ind", "Ritmo - Ind", 1, 1),
                Discipline::participation_bounded("ritmo_eq", "Ritmo - Eq", 2, 3),
                Discipline::head_count("ritmo_num", "Ritmo - Nº Part.", 1, 3),
            ],
        ),
        Category::new(
            "Eventos Externos",
            vec![
                Discipline::participation("olimpiada_mats", "Olimpiada Mats. (1)"),
                Discipline::participation("paec", "Encuentro PAEC (2-20)"),
                Discipline::head_count("paec_num", "PAEC - Nº Part.", 2, 20),
            ],
        ),
    ]
}

fn pairs() -> Vec<PairBinding> {
    vec![
        PairBinding::new("Canto", "canto_solista", "canto_dueto", "canto_num"),
        PairBinding::new("Cómic", "comic_ind", "comic_eq", "comic_num"),
        PairBinding::new("Fotografía", "foto_ind", "foto_eq", "foto_num"),
        PairBinding::new("TikTok", "tiktok_ind", "tiktok_eq", "tiktok_num"),
        PairBinding::new(
            "Fotomontaje",
            "fotomontaje_ind",
            "fotomontaje_eq",
            "fotomontaje_num",
        ),
        PairBinding::new("Humor", "humor_ind", "humor_eq", "humor_num"),
        PairBinding::new("Música IA", "musica_ia_ind", "musica_ia_eq", "musica_ia_num"),
        PairBinding::new("Ritmo", "ritmo_ind", "ritmo_eq", "ritmo_num"),
    ]
}

fn links() -> Vec<LinkBinding> {
    vec![
        LinkBinding::new("Baile", "baile", "baile_num"),
        LinkBinding::new("Danza", "danza", "danza_num"),
        LinkBinding::new("Teatro", "teatro", "teatro_num"),
        LinkBinding::new("Ciencias", "ciencias", "ciencias_num"),
        LinkBinding::new("Matemáticas", "matematicas", "matematicas_num"),
        LinkBinding::new("Física", "fisica", "fisica_num"),
        LinkBinding::new("Química", "quimica", "quimica_num"),
        LinkBinding::new("Sabores", "sabores", "sabores_num"),
        LinkBinding::new("PAEC", "paec", "paec_num"),
    ]
}

fn schools() -> Vec<School> {
    vec![
        School::new(
            "21EBH0088T",
            "ALFONSO DE LA MADRID VIDAURRETA",
            "VENUSTIANO CARRANZA",
        ),
        School::new("21EBH0186U", "AQUILES SERDÁN", "PANTEPEC"),
        School::new("21EBH0903N", "BENITO JUÁREZ GARCÍA", "SAN BARTOLO"),
        School::new("21EBH0464F", "DAVID ALFARO SIQUEIROS", "HUITZILAC"),
        School::new("21EBH0789L", "DAVID ALFARO SIQUEIROS", "JALTOCAN"),
        School::new("21EBH0708K", "DIEGO RIVERA", "EJIDO CAÑADA COLOTLA"),
        School::new("21EBH0608L", "EMILIANO ZAPATA", "SAN DIEGO"),
        School::new("21EBH0200X", "HÉROES DE LA PATRIA", "CORONEL TITO HDEZ."),
        School::new("21EBH0620G", "JAIME SABINES", "AGUA LINDA"),
        School::new(
            "21EBH0681U",
            "JOSÉ IGNACIO GREGORIO COMONFORT",
            "PALMA REAL",
        ),
        School::new("21EBH0201W", "JOSÉ VASCONCELOS", "LAZARO CARDENAS"),
        School::new("21EBH0799S", "JUAN ALDAMA", "NUEVO ZOQUIAPAN"),
        School::new(
            "21EBH07040",
            "LUIS DONALDO COLOSIO MURRIETA",
            "LA CEIBA CHICA",
        ),
        School::new("21EBH0214Z", "MECAPALAPA", "MECAPALAPA"),
        School::new("21EBH0465E", "MOISÉS SÁENZ GARZA", "TECOMATE"),
        School::new("21EBH0130S", "REYES GARCÍA OLIVARES", "FCO. Z. MENA"),
        School::new("21ECT0017T", "TECNOLÓGICO FCO. Z. MENA", "FCO. Z. MENA"),
        School::new("21EBH0682T", "VICENTE SUÁREZ FERRER", "COYOLITO"),
    ]
}
