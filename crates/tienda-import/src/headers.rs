//! Header resolution: classify raw column headers into core fields,
//! accessory-slot bases, and their sibling metadata columns.
//!
//! Spreadsheet authors are inconsistent with punctuation and accents across
//! a base column and its paired `||Imagen` / `||Ficha Tecnica` columns, so
//! sibling lookup tolerates near-miss naming: exact composed key first, then
//! the composed key with trailing words dropped, then a normalized prefix
//! match. Everything here is pure over the header list so it can be tested
//! with literal fixtures.

/// Fixed core column literals (identity and attribute columns).
pub const CODE_HEADER: &str = "Codigo";
pub const NAME_HEADER: &str = "Articulo";
pub const TYPE_HEADER: &str = "Tipo";
pub const BRAND_HEADER: &str = "Marca";
pub const GROUP_HEADER: &str = "Grupo";
pub const LINE_HEADER: &str = "Linea";
pub const IMAGE_HEADER: &str = "Imagen Articulo";
pub const DATASHEET_HEADER: &str = "Ficha tecnica Articulo";

/// Separator between an accessory-slot base name and its sibling tag.
pub const SIBLING_SEPARATOR: &str = "||";
/// Sibling tag for a slot's image URL column.
pub const IMAGE_TAG: &str = "Imagen";
/// Sibling tag for a slot's datasheet URL column.
pub const DATASHEET_TAG: &str = "Ficha Tecnica";

/// Column indexes of the core fields present in a sheet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreColumns {
    pub code: Option<usize>,
    pub name: Option<usize>,
    pub product_type: Option<usize>,
    pub brand: Option<usize>,
    pub group: Option<usize>,
    pub line: Option<usize>,
    pub image: Option<usize>,
    pub datasheet: Option<usize>,
}

/// One accessory-slot base column plus its resolved sibling columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotColumns {
    /// The base header name, used as the edge's slot name and as the
    /// category of stub products it introduces.
    pub base: String,
    pub value: usize,
    pub image: Option<usize>,
    pub datasheet: Option<usize>,
}

/// Partition of a sheet's headers produced by [`classify_headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    pub core: CoreColumns,
    /// Accessory-slot bases in column order.
    pub slots: Vec<SlotColumns>,
}

/// Classifies `headers` into core columns, accessory-slot bases, and
/// per-base sibling columns.
///
/// Core fields match their fixed literals exactly (post-trim). Any other
/// header not containing [`SIBLING_SEPARATOR`] is an accessory-slot base;
/// sibling-tagged headers are only reachable through a base's resolution
/// and are otherwise ignored.
#[must_use]
pub fn classify_headers(headers: &[String]) -> HeaderPlan {
    let mut core = CoreColumns::default();
    let mut bases: Vec<(usize, &str)> = Vec::new();

    for (idx, raw) in headers.iter().enumerate() {
        let header = raw.trim();
        if header.is_empty() {
            continue;
        }
        let field = match header {
            CODE_HEADER => &mut core.code,
            NAME_HEADER => &mut core.name,
            TYPE_HEADER => &mut core.product_type,
            BRAND_HEADER => &mut core.brand,
            GROUP_HEADER => &mut core.group,
            LINE_HEADER => &mut core.line,
            IMAGE_HEADER => &mut core.image,
            DATASHEET_HEADER => &mut core.datasheet,
            other => {
                if !other.contains(SIBLING_SEPARATOR) {
                    bases.push((idx, other));
                }
                continue;
            }
        };
        if field.is_none() {
            *field = Some(idx);
        }
    }

    let slots = bases
        .into_iter()
        .map(|(value, base)| SlotColumns {
            base: base.to_owned(),
            value,
            image: resolve_sibling(base, IMAGE_TAG, headers),
            datasheet: resolve_sibling(base, DATASHEET_TAG, headers),
        })
        .collect();

    HeaderPlan { core, slots }
}

/// Finds the column holding `<base>||<tag>` metadata for a slot base.
///
/// Matching policy, applied in order:
/// 1. exact composed key `"<base>||<tag>"`;
/// 2. the same with trailing words of the base dropped one at a time;
/// 3. normalized prefix match between the base and the base part of any
///    sibling-tagged header carrying the expected tag.
///
/// With multiple candidates under rule 3 the first in column order wins —
/// a known limitation of the convention, not an error.
#[must_use]
pub fn resolve_sibling(base: &str, tag: &str, headers: &[String]) -> Option<usize> {
    let exact = |candidate: &str| {
        let key = format!("{candidate}{SIBLING_SEPARATOR}{tag}");
        headers.iter().position(|h| h.trim() == key)
    };

    if let Some(idx) = exact(base) {
        return Some(idx);
    }

    let words: Vec<&str> = base.split_whitespace().collect();
    for cut in (1..words.len()).rev() {
        if let Some(idx) = exact(&words[..cut].join(" ")) {
            return Some(idx);
        }
    }

    let base_norm = normalize_header(base);
    let tag_norm = normalize_header(tag);
    headers.iter().position(|h| {
        let Some((sib_base, sib_tag)) = h.trim().split_once(SIBLING_SEPARATOR) else {
            return false;
        };
        if normalize_header(sib_tag) != tag_norm {
            return false;
        }
        let sib_norm = normalize_header(sib_base);
        sib_norm.starts_with(&base_norm) || base_norm.starts_with(&sib_norm)
    })
}

/// Lowercases, strips Spanish accents, and collapses whitespace runs.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    let lowered: String = raw.to_lowercase().chars().map(strip_accent).collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        other => other,
    }
}
