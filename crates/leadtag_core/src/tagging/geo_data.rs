//! Geographic reference data.
//!
//! # Responsibility
//! - Own the versioned state-name and county-name code tables consumed by
//!   the geo normalizer.
//! - Load externally supplied table documents and validate them before
//!   use.
//!
//! # Invariants
//! - Tables are read-only after construction; lookups need no locking.
//! - Every code in a validated table satisfies the tag format.
//! - Keys are stored lowercased, county keys without a "county"/"parish"
//!   suffix.

use crate::model::tag::is_valid_tag_text;
use log::info;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Version label of the bundled dataset.
const BUILTIN_VERSION: &str = "us-2025.1";

/// Full state name (lowercase) -> USPS code.
const STATE_CODES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// County name (lowercase, suffix stripped) -> short code.
///
/// Covers the high-volume markets seen in imports; anything else falls
/// back to the best-effort abbreviation in the normalizer.
const COUNTY_CODES: &[(&str, &str)] = &[
    ("alameda", "ALA"),
    ("bexar", "BEX"),
    ("broward", "BRO"),
    ("clark", "CLK"),
    ("collin", "COL"),
    ("cook", "COK"),
    ("dallas", "DAL"),
    ("denton", "DEN"),
    ("duval", "DUV"),
    ("el paso", "EP"),
    ("fairfax", "FFX"),
    ("fort bend", "FB"),
    ("franklin", "FRA"),
    ("fresno", "FRE"),
    ("fulton", "FUL"),
    ("harris", "HAR"),
    ("hennepin", "HEN"),
    ("hidalgo", "HID"),
    ("hillsborough", "HIL"),
    ("king", "KNG"),
    ("lee", "LEE"),
    ("los angeles", "LA"),
    ("maricopa", "MAR"),
    ("mecklenburg", "MEC"),
    ("miami-dade", "MIA"),
    ("montgomery", "MTG"),
    ("nassau", "NAS"),
    ("oakland", "OAK"),
    ("orange", "ORA"),
    ("palm beach", "PB"),
    ("pima", "PIM"),
    ("pinellas", "PIN"),
    ("polk", "POL"),
    ("riverside", "RIV"),
    ("sacramento", "SAC"),
    ("salt lake", "SL"),
    ("san antonio", "SA"),
    ("san bernardino", "SB"),
    ("san diego", "SD"),
    ("santa clara", "SCL"),
    ("tarrant", "TAR"),
    ("travis", "TRA"),
    ("wake", "WAK"),
    ("wayne", "WAY"),
];

static BUILTIN_TABLE: Lazy<GeoLookupTable> = Lazy::new(|| {
    let states = STATE_CODES
        .iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect();
    let counties = COUNTY_CODES
        .iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect();
    GeoLookupTable {
        version: BUILTIN_VERSION.to_string(),
        states,
        counties,
    }
});

/// Result type for reference-data loading.
pub type ReferenceDataResult<T> = Result<T, ReferenceDataError>;

/// Error raised while loading or validating a geo table document.
#[derive(Debug)]
pub enum ReferenceDataError {
    /// Document file could not be read.
    Io(std::io::Error),
    /// Document is not valid JSON for the table schema.
    Parse(serde_json::Error),
    /// Document carries a blank version label.
    EmptyVersion,
    /// Document carries no state mappings at all.
    EmptyStateTable,
    /// A mapped code fails the tag format.
    InvalidCode {
        table: &'static str,
        name: String,
        code: String,
    },
}

impl Display for ReferenceDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read geo table document: {err}"),
            Self::Parse(err) => write!(f, "invalid geo table document: {err}"),
            Self::EmptyVersion => write!(f, "geo table document has a blank version"),
            Self::EmptyStateTable => write!(f, "geo table document maps no states"),
            Self::InvalidCode { table, name, code } => write!(
                f,
                "geo {table} entry `{name}` maps to `{code}`, which is not a valid tag code"
            ),
        }
    }
}

impl Error for ReferenceDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReferenceDataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReferenceDataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// On-disk document shape for externally supplied tables.
#[derive(Debug, Deserialize)]
struct GeoTableDoc {
    version: String,
    states: BTreeMap<String, String>,
    #[serde(default)]
    counties: BTreeMap<String, String>,
}

/// Versioned, read-only state/county code mappings.
///
/// Injected into [`crate::tagging::geo::GeoNormalizer`] at construction so
/// the dataset can be updated and tested independently of the algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLookupTable {
    version: String,
    states: BTreeMap<String, String>,
    counties: BTreeMap<String, String>,
}

impl GeoLookupTable {
    /// Returns the bundled dataset.
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Parses and validates a table document from JSON text.
    ///
    /// Keys are normalized on load (lowercased, county suffix stripped) so
    /// lookups stay uniform regardless of how the document was authored.
    ///
    /// # Errors
    /// - [`ReferenceDataError::Parse`] for malformed JSON.
    /// - [`ReferenceDataError::EmptyVersion`] / [`ReferenceDataError::EmptyStateTable`]
    ///   for structurally empty documents.
    /// - [`ReferenceDataError::InvalidCode`] when a mapped code fails the
    ///   tag format.
    pub fn from_json(document: &str) -> ReferenceDataResult<Self> {
        let doc: GeoTableDoc = serde_json::from_str(document)?;

        let version = doc.version.trim().to_string();
        if version.is_empty() {
            return Err(ReferenceDataError::EmptyVersion);
        }
        if doc.states.is_empty() {
            return Err(ReferenceDataError::EmptyStateTable);
        }

        let mut states = BTreeMap::new();
        for (name, code) in doc.states {
            let code = code.trim().to_uppercase();
            if !is_valid_tag_text(&code) {
                return Err(ReferenceDataError::InvalidCode {
                    table: "state",
                    name,
                    code,
                });
            }
            states.insert(name.trim().to_lowercase(), code);
        }

        let mut counties = BTreeMap::new();
        for (name, code) in doc.counties {
            let code = code.trim().to_uppercase();
            if !is_valid_tag_text(&code) {
                return Err(ReferenceDataError::InvalidCode {
                    table: "county",
                    name,
                    code,
                });
            }
            counties.insert(normalize_county_key(&name), code);
        }

        let table = Self {
            version,
            states,
            counties,
        };
        info!(
            "event=geo_tables_loaded module=tagging status=ok version={} states={} counties={}",
            table.version,
            table.states.len(),
            table.counties.len()
        );
        Ok(table)
    }

    /// Reads and validates a table document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> ReferenceDataResult<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Returns the dataset version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Looks up a state code by lowercased full name.
    pub fn state_code(&self, normalized_name: &str) -> Option<&str> {
        self.states.get(normalized_name).map(String::as_str)
    }

    /// Looks up a county code by normalized key.
    pub fn county_code(&self, normalized_name: &str) -> Option<&str> {
        self.counties.get(normalized_name).map(String::as_str)
    }
}

/// Normalizes a county name into its table key: trim, lowercase, and strip
/// one trailing `" county"` or `" parish"` suffix.
pub fn normalize_county_key(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    for suffix in [" county", " parish"] {
        if let Some(stripped) = lowered.strip_suffix(suffix) {
            return stripped.trim_end().to_string();
        }
    }
    lowered
}
