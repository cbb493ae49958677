//! Points of interest, NFC location plates, and the kind → display table.
//!
//! POI kinds form a closed set.  Display attributes (icon, filter label,
//! whether the kind gets a quick-access button) come from a static lookup
//! table rather than per-kind types, and any tag the table does not know is
//! kept as [`PoiKind::Unknown`] with a generic fallback entry.

use crate::Coordinate;

// ── Language / names ──────────────────────────────────────────────────────────

/// UI languages the venue dataset is localized into.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    Es,
    En,
}

/// A name in every supported language.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedName {
    pub es: String,
    pub en: String,
}

impl LocalizedName {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self { es: es.into(), en: en.into() }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}

// ── PoiKind ───────────────────────────────────────────────────────────────────

/// Category of a point of interest.
///
/// Dataset tags are the venue's Spanish codes (`"banos"`, `"salida"`, …);
/// the ISO 7001 pictogram codes used on signage are accepted as aliases
/// (see [`from_tag`](Self::from_tag)).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PoiKind {
    Restroom,
    FirstAid,
    Exit,
    AssemblyPoint,
    TicketBooth,
    Lockers,
    Food,
    Water,
    Recharge,
    /// A tag not in the lookup table; rendered with the fallback attributes.
    Unknown(String),
}

/// Display attributes for a [`PoiKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindAttrs {
    /// Icon identifier for the map renderer.
    pub icon:     &'static str,
    pub label_es: &'static str,
    pub label_en: &'static str,
    /// Shown as a one-tap destination button.
    pub critical: bool,
}

impl KindAttrs {
    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::Es => self.label_es,
            Language::En => self.label_en,
        }
    }
}

const fn attrs(icon: &'static str, label_es: &'static str, label_en: &'static str, critical: bool) -> KindAttrs {
    KindAttrs { icon, label_es, label_en, critical }
}

/// Known kinds in filter-bar order: (tag, kind, attributes).
const KIND_TABLE: [(&str, PoiKind, KindAttrs); 9] = [
    ("banos",      PoiKind::Restroom,      attrs("restroom",       "Baños",     "Restrooms",  true)),
    ("enfermeria", PoiKind::FirstAid,      attrs("first_aid",      "1ros Aux",  "1st Aid",    true)),
    ("salida",     PoiKind::Exit,          attrs("exit",           "Salidas",   "Exits",      true)),
    ("reunion",    PoiKind::AssemblyPoint, attrs("assembly_point", "Reunión",   "Assembly",   true)),
    ("taquilla",   PoiKind::TicketBooth,   attrs("ticket",         "Taquillas", "Tickets",    true)),
    ("lockers",    PoiKind::Lockers,       attrs("locker",         "Lockers",   "Lockers",    true)),
    ("comida",     PoiKind::Food,          attrs("food",           "Comida",    "Food",       true)),
    ("agua",       PoiKind::Water,         attrs("water",          "Agua",      "Water",      false)),
    ("recarga",    PoiKind::Recharge,      attrs("recharge",       "Recarga",   "Recharge",   false)),
];

const FALLBACK_ATTRS: KindAttrs = attrs("info", "Información", "Information", false);

impl PoiKind {
    /// Parse a dataset tag.  Never fails: unrecognised tags become `Unknown`.
    ///
    /// ISO 7001 pictogram codes (`iso7001_restroom`, `iso7001_firstaid`,
    /// `iso7001_exit`) are normalized to their venue kind, so
    /// [`tag`](Self::tag) returns the venue code (`banos`, `enfermeria`,
    /// `salida`) rather than the pictogram.
    pub fn from_tag(tag: &str) -> PoiKind {
        let tag = match tag {
            "iso7001_restroom" => "banos",
            "iso7001_firstaid" => "enfermeria",
            "iso7001_exit"     => "salida",
            other              => other,
        };
        KIND_TABLE
            .iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, kind, _)| kind.clone())
            .unwrap_or_else(|| PoiKind::Unknown(tag.to_owned()))
    }

    /// The canonical dataset tag.
    pub fn tag(&self) -> &str {
        match self {
            PoiKind::Unknown(tag) => tag,
            known => KIND_TABLE
                .iter()
                .find(|(_, kind, _)| kind == known)
                .map(|(tag, _, _)| *tag)
                .unwrap_or_default(),
        }
    }

    pub fn attrs(&self) -> KindAttrs {
        KIND_TABLE
            .iter()
            .find(|(_, kind, _)| kind == self)
            .map(|(_, _, attrs)| *attrs)
            .unwrap_or(FALLBACK_ATTRS)
    }

    /// All known kinds, in filter-bar order.
    pub fn known() -> impl Iterator<Item = PoiKind> {
        KIND_TABLE.into_iter().map(|(_, kind, _)| kind)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PoiKind::Unknown(_))
    }
}

impl From<String> for PoiKind {
    fn from(tag: String) -> Self {
        PoiKind::from_tag(&tag)
    }
}

impl From<PoiKind> for String {
    fn from(kind: PoiKind) -> Self {
        kind.tag().to_owned()
    }
}

impl std::fmt::Display for PoiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ── PointOfInterest ───────────────────────────────────────────────────────────

/// A routing target.  Never mutated by routing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub id:         String,
    pub kind:       PoiKind,
    pub name:       LocalizedName,
    pub location:   Coordinate,
    /// The POI itself is reachable step-free.  Missing in the dataset → `false`.
    pub accessible: bool,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<String>,
        kind: PoiKind,
        name: LocalizedName,
        location: Coordinate,
        accessible: bool,
    ) -> Self {
        Self { id: id.into(), kind, name, location, accessible }
    }
}

// ── Sign ──────────────────────────────────────────────────────────────────────

/// An NFC plate mounted in the venue.  Tapping one fixes the visitor's
/// position to the plate's surveyed coordinate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sign {
    pub code:     String,
    pub name:     LocalizedName,
    pub location: Coordinate,
    pub zone:     String,
}

impl Sign {
    #[inline]
    pub fn location(&self) -> Coordinate {
        self.location
    }
}
