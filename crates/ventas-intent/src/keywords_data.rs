//! Bundled dictionaries for update-intent detection.
//!
//! Entries may carry accents and capitals; they are normalized once when the
//! matcher is built. Longer phrases come first only for readability.

/// Largest edit distance still accepted as a typo of a short intent word.
pub const MAX_LEVENSHTEIN_DISTANCE: usize = 2;

/// Words shorter than this never take part in fuzzy matching.
pub const MIN_WORD_LENGTH_FOR_FUZZY: usize = 4;

/// Phrases shorter than this are ignored by the substring check.
pub const MIN_PHRASE_LENGTH: usize = 2;

/// Phrases whose presence means "update the sales data now".
pub(crate) const INTENT_PHRASES: &[&str] = &[
    "actualiza la base de datos",
    "actualizar las ventas",
    "actualiza las ventas",
    "actualizar los datos",
    "actualiza los datos",
    "actualiza el dashboard",
    "actualiza el tablero",
    "registra las ventas",
    "importa las ventas",
    "importa los datos",
    "importa el archivo",
    "sube este archivo",
    "actualizar ventas",
    "actualiza ventas",
    "carga las ventas",
    "carga los datos",
    "guarda las ventas",
    "guarda los datos",
    "sube las ventas",
    "sube los datos",
    "sube el archivo",
    "importar ventas",
    "importa ventas",
    "actualízalas",
    "actualízalos",
    "actualízala",
    "actualízalo",
    "actualizar",
    "actualiza",
    "impórtalo",
    "importar",
    "importa",
    "guárdalo",
    "guardar",
    "guarda",
    "súbelos",
    "súbelo",
    "subir",
    "sube",
];

/// Single action verbs used as fuzzy-match targets. Every entry also
/// appears in [`INTENT_PHRASES`].
pub(crate) const SHORT_INTENT_WORDS: &[&str] = &[
    "actualiza",
    "actualizar",
    "actualízalo",
    "sube",
    "subir",
    "súbelo",
    "importa",
    "importar",
    "impórtalo",
    "guarda",
    "guardar",
    "guárdalo",
];

/// Phrases that veto the update intent wherever they appear.
///
/// Every entry is a negated action verb; a bare "no" next to other words
/// (for example "aun nos falta") must not veto.
pub(crate) const NEGATION_PHRASES: &[&str] = &[
    "no es necesario actualizar",
    "no hace falta actualizar",
    "no quiero actualizar",
    "no lo actualices",
    "no la actualices",
    "no los actualices",
    "no las actualices",
    "no actualices",
    "no actualizes",
    "no actualizar",
    "no lo subas",
    "no los subas",
    "no subas",
    "no subir",
    "no lo importes",
    "no importes",
    "no importar",
    "no lo guardes",
    "no guardes",
    "no guardar",
    "no cargues",
];
