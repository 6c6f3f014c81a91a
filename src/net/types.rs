//! Wire DTOs for the exam-bank REST backend.
//!
//! DESIGN
//! ======
//! The backend owns the problem schema, so every problem field is optional
//! here and display fallbacks live next to the type. Count maps keep the
//! key order of the response body, which is why they decode into ordered
//! vectors instead of hash maps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PROBLEMS
// =============================================================================

/// A problem record as returned by `/problems`, `/problems/{id}` and `/search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub id: String,
    /// Problem family (e.g. `"numeracion"`, `"karnaugh"`).
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub metadata: ProblemMetadata,
    #[serde(default)]
    pub statement: ProblemStatement,
    #[serde(default)]
    pub solution: ProblemSolution,
}

/// Descriptive fields shared by all problem types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    #[serde(default)]
    pub title: Option<String>,
    /// 1 (easy) through 5 (hard).
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemStatement {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemSolution {
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Problem {
    /// Card heading: the title, or the id when the title is missing.
    #[must_use]
    pub fn display_title(&self) -> &str {
        non_empty(self.metadata.title.as_deref()).unwrap_or(&self.id)
    }

    #[must_use]
    pub fn display_type(&self) -> &str {
        non_empty(self.problem_type.as_deref()).unwrap_or("desconocido")
    }

    #[must_use]
    pub fn display_difficulty(&self) -> String {
        self.metadata
            .difficulty
            .map_or_else(|| "-".to_owned(), |d| d.to_string())
    }

    #[must_use]
    pub fn display_topic(&self) -> &str {
        non_empty(self.metadata.topic.as_deref()).unwrap_or("-")
    }

    #[must_use]
    pub fn statement_text(&self) -> &str {
        self.statement.text.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn solution_text(&self) -> &str {
        self.solution.explanation.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.metadata.tags.join(", ")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Human-readable label for a known problem type, or the raw value.
#[must_use]
pub fn problem_type_label(raw: &str) -> &str {
    match raw {
        "numeracion" => "Representación Numérica",
        "karnaugh" => "Mapas de Karnaugh",
        "logic" => "Diseño Lógico",
        "msi" => "Circuitos MSI",
        "secuencial" => "Lógica Secuencial",
        other => other,
    }
}

/// Problem types offered by the list and export filters.
pub const KNOWN_PROBLEM_TYPES: [&str; 5] = ["numeracion", "karnaugh", "logic", "msi", "secuencial"];

/// `GET /problems` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProblemList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

/// `GET /problems/{id}` response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProblemEnvelope {
    pub problem: Problem,
}

/// `GET /search` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Problem>,
}

// =============================================================================
// STATS
// =============================================================================

/// One `key: count` entry of a backend count map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountEntry {
    pub key: String,
    pub count: u64,
}

/// Repository statistics from `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RepoStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_ordered_counts")]
    pub by_type: Vec<CountEntry>,
    #[serde(default, deserialize_with = "deserialize_ordered_counts")]
    pub by_difficulty: Vec<CountEntry>,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size_mb: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsEnvelope {
    pub stats: RepoStats,
}

// =============================================================================
// IMPORT / HEALTH
// =============================================================================

/// `POST /import` response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImportSummary {
    #[serde(default)]
    pub imported: u64,
    #[serde(default)]
    pub skipped: u64,
}

impl ImportSummary {
    #[must_use]
    pub fn toast_message(&self) -> String {
        format!("Importados: {}, Saltados: {}", self.imported, self.skipped)
    }
}

/// `GET /health` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub problems_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// FastAPI-style error body (`{"detail": ...}`).
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

/// Signedness/representation of the analyzed fixed-point format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    Unsigned,
    SignedMagnitude,
    TwosComplement,
    OnesComplement,
}

impl Representation {
    pub const ALL: [Self; 4] = [
        Self::Unsigned,
        Self::SignedMagnitude,
        Self::TwosComplement,
        Self::OnesComplement,
    ];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::SignedMagnitude => "signed_magnitude",
            Self::TwosComplement => "twos_complement",
            Self::OnesComplement => "ones_complement",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsigned => "Sin signo",
            Self::SignedMagnitude => "Signo y magnitud",
            Self::TwosComplement => "Complemento a 2",
            Self::OnesComplement => "Complemento a 1",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// `POST /distribution/chart-data` request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DistributionRequest {
    #[serde(rename = "E")]
    pub exponent_bits: u32,
    #[serde(rename = "F")]
    pub fraction_bits: u32,
    pub representation: Representation,
}

/// Descriptive statistics of the analyzed format.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DistributionStatistics {
    pub min: f64,
    pub max: f64,
    pub epsilon: f64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_bits: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_numbers: u64,
    #[serde(default)]
    pub gap_type: String,
}

/// `POST /distribution/chart-data` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DistributionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub statistics: Option<DistributionStatistics>,
    #[serde(default)]
    pub chart_type: Option<String>,
    /// X-axis labels; numbers or strings depending on the chart kind.
    #[serde(default)]
    pub labels: Vec<serde_json::Value>,
    /// Chart.js dataset objects, passed through untouched.
    #[serde(default)]
    pub datasets: Vec<serde_json::Value>,
}

// =============================================================================
// DESERIALIZERS
// =============================================================================

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(raw) => Ok(raw.trim().parse().ok()),
        other => integer_from_value(&other)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_value(&value)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| D::Error::custom("expected non-negative integer"))
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integer_from_value(value: &serde_json::Value) -> Option<i64> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Decode a JSON object of counts into entries in document order.
///
/// Order is only preserved when decoding from text; `serde_json::Value`
/// sorts its keys.
fn deserialize_ordered_counts<'de, D>(deserializer: D) -> Result<Vec<CountEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountsVisitor;

    impl<'de> Visitor<'de> for CountsVisitor {
        type Value = Vec<CountEntry>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping keys to counts")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                let count = integer_from_value(&value)
                    .and_then(|n| u64::try_from(n).ok())
                    .ok_or_else(|| A::Error::custom(format!("invalid count for key {key}")))?;
                entries.push(CountEntry { key, count });
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(CountsVisitor)
}
