pub mod catalog;
mod error;
pub mod graph;
pub mod report;

pub use catalog::{Advisor, Catalog, ComponentGroup, Edit, TopologyRole};
pub use error::{Error, ErrorKind, Result};
pub use graph::{ArchitectureGraph, EdgeKind, GraphEdge, GraphNode, NodeId};
pub use report::{Report, ReportKind, Section};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

// --- Types ---

/// Coarse architecture style that seeds the base component template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
pub enum FocusCategory {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Serverless")]
    Serverless,
    #[serde(rename = "Data Platform")]
    DataPlatform,
    #[serde(rename = "Zero Trust")]
    ZeroTrust,
    #[serde(rename = "E-commerce")]
    ECommerce,
    #[serde(rename = "Microservices")]
    Microservices,
    #[serde(rename = "API Platform")]
    ApiPlatform,
}

impl FocusCategory {
    pub const ALL: [FocusCategory; 7] = [
        FocusCategory::AiMl,
        FocusCategory::Serverless,
        FocusCategory::DataPlatform,
        FocusCategory::ZeroTrust,
        FocusCategory::ECommerce,
        FocusCategory::Microservices,
        FocusCategory::ApiPlatform,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FocusCategory::AiMl => "AI/ML",
            FocusCategory::Serverless => "Serverless",
            FocusCategory::DataPlatform => "Data Platform",
            FocusCategory::ZeroTrust => "Zero Trust",
            FocusCategory::ECommerce => "E-commerce",
            FocusCategory::Microservices => "Microservices",
            FocusCategory::ApiPlatform => "API Platform",
        }
    }

    /// Alternate spellings accepted when parsing.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            FocusCategory::AiMl => &["ai-ml", "ai", "ml"],
            FocusCategory::DataPlatform => &["data & analytics", "data"],
            FocusCategory::ZeroTrust => &["zero-trust"],
            FocusCategory::ECommerce => &["ecommerce"],
            FocusCategory::ApiPlatform => &["api"],
            FocusCategory::Serverless | FocusCategory::Microservices => &[],
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.label()).collect()
    }
}

impl fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FocusCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        FocusCategory::ALL
            .into_iter()
            .find(|f| f.label().to_lowercase() == wanted || f.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| Error::UnknownFocus(s.trim().to_string()))
    }
}

/// One of the six priority sliders. `ALL` is the order threshold edits run in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Latency,
    LoadBalancing,
    CostSensitivity,
    Performance,
    Security,
    Scalability,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Latency,
        Dimension::LoadBalancing,
        Dimension::CostSensitivity,
        Dimension::Performance,
        Dimension::Security,
        Dimension::Scalability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Latency => "Latency",
            Dimension::LoadBalancing => "Load Balancing",
            Dimension::CostSensitivity => "Cloud Cost",
            Dimension::Performance => "Performance",
            Dimension::Security => "Security",
            Dimension::Scalability => "Scalability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unvalidated slider values as they arrive from a caller. Missing fields take the dashboard defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityInput {
    /// Latency priority, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub latency: i64,
    /// Load balancing priority, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub load_balancing: i64,
    /// Cloud cost sensitivity, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub cost_sensitivity: i64,
    /// Performance priority, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub performance: i64,
    /// Security priority, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub security: i64,
    /// Scalability priority, 0-10
    #[schemars(range(min = 0, max = 10))]
    pub scalability: i64,
}

impl Default for PriorityInput {
    fn default() -> Self {
        let p = PriorityVector::default();
        Self {
            latency: p.latency.into(),
            load_balancing: p.load_balancing.into(),
            cost_sensitivity: p.cost_sensitivity.into(),
            performance: p.performance.into(),
            security: p.security.into(),
            scalability: p.scalability.into(),
        }
    }
}

/// Six 0-10 weights. Always in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PriorityInput")]
pub struct PriorityVector {
    latency: u8,
    load_balancing: u8,
    cost_sensitivity: u8,
    performance: u8,
    security: u8,
    scalability: u8,
}

impl PriorityVector {
    pub const MAX: u8 = 10;

    /// Build from values given in `Dimension::ALL` order.
    pub fn from_values(values: [i64; 6]) -> Result<Self> {
        let mut checked = [0u8; 6];
        for ((slot, value), dimension) in checked.iter_mut().zip(values).zip(Dimension::ALL) {
            *slot = match u8::try_from(value) {
                Ok(v) if v <= Self::MAX => v,
                _ => return Err(Error::PriorityOutOfRange { dimension, value }),
            };
        }
        Ok(Self {
            latency: checked[0],
            load_balancing: checked[1],
            cost_sensitivity: checked[2],
            performance: checked[3],
            security: checked[4],
            scalability: checked[5],
        })
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Latency => self.latency,
            Dimension::LoadBalancing => self.load_balancing,
            Dimension::CostSensitivity => self.cost_sensitivity,
            Dimension::Performance => self.performance,
            Dimension::Security => self.security,
            Dimension::Scalability => self.scalability,
        }
    }

    /// Copy with one dimension changed.
    pub fn with(&self, dimension: Dimension, value: i64) -> Result<Self> {
        let mut values = self.values().map(i64::from);
        if let Some(i) = Dimension::ALL.iter().position(|d| *d == dimension) {
            values[i] = value;
        }
        Self::from_values(values)
    }

    pub fn values(&self) -> [u8; 6] {
        Dimension::ALL.map(|d| self.get(d))
    }
}

/// Slider positions the dashboard starts with.
impl Default for PriorityVector {
    fn default() -> Self {
        Self {
            latency: 7,
            load_balancing: 6,
            cost_sensitivity: 5,
            performance: 7,
            security: 8,
            scalability: 8,
        }
    }
}

impl TryFrom<PriorityInput> for PriorityVector {
    type Error = Error;

    fn try_from(input: PriorityInput) -> Result<Self> {
        Self::from_values([
            input.latency,
            input.load_balancing,
            input.cost_sensitivity,
            input.performance,
            input.security,
            input.scalability,
        ])
    }
}

/// Name of one architecture building block. Compared by exact text.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(transparent)]
pub struct ComponentLabel(String);

impl ComponentLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ComponentLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ComponentLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered component list with set membership: no label appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentSequence(Vec<ComponentLabel>);

impl ComponentSequence {
    /// Build from caller-supplied labels. Later duplicates are dropped.
    pub fn from_labels<I, L>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<ComponentLabel>,
    {
        let mut seq = Self(Vec::new());
        for (i, label) in labels.into_iter().enumerate() {
            let label = label.into();
            if label.as_str().trim().is_empty() {
                return Err(Error::BlankLabel(i));
            }
            seq.append(label);
        }
        if seq.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(seq)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentLabel> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ComponentLabel] {
        &self.0
    }

    pub fn contains(&self, label: &ComponentLabel) -> bool {
        self.0.contains(label)
    }

    pub fn position(&self, label: &ComponentLabel) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }

    /// Append unless present. Returns whether the sequence changed.
    pub fn append(&mut self, label: ComponentLabel) -> bool {
        if self.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    /// Insert at `index` (clamped to the end) unless present.
    pub fn insert_at(&mut self, index: usize, label: ComponentLabel) -> bool {
        if self.contains(&label) {
            return false;
        }
        let index = index.min(self.0.len());
        self.0.insert(index, label);
        true
    }

    /// Replace `from` with `to` in place. If `to` is already present the
    /// earlier occurrence wins and `from` is dropped. No-op when `from` is absent.
    pub fn substitute(&mut self, from: &ComponentLabel, to: ComponentLabel) -> bool {
        let Some(at) = self.position(from) else {
            return false;
        };
        if self.contains(&to) {
            self.0.remove(at);
        } else {
            self.0[at] = to;
        }
        true
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|l| l.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ComponentSequence {
    type Item = &'a ComponentLabel;
    type IntoIter = std::slice::Iter<'a, ComponentLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// --- Storage ---

/// Environment variable that points at a catalog file to use instead of the default location.
pub const CATALOG_ENV: &str = "STRATUS_CATALOG";

/// Resolve the global config directory (~/.stratus/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".stratus")
}

/// Catalog file consulted by `load_catalog`: `$STRATUS_CATALOG` if set, else ~/.stratus/catalog.json.
pub fn catalog_path() -> PathBuf {
    match std::env::var_os(CATALOG_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => config_dir().join("catalog.json"),
    }
}

/// Load the active catalog. A missing file means the built-in catalog.
pub fn load_catalog() -> Result<Catalog> {
    let path = catalog_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no catalog override, using built-in catalog");
        let catalog = Catalog::builtin();
        catalog.validate()?;
        return Ok(catalog);
    }
    read_catalog(&path)
}

/// Read and validate a catalog file.
pub fn read_catalog(path: &std::path::Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path).map_err(|source| Error::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| Error::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    catalog.validate()?;
    tracing::info!(path = %path.display(), "loaded catalog override");
    Ok(catalog)
}

/// Write a catalog as pretty JSON.
///
/// Uses a temp file + rename so a reader never sees a half-written catalog.
pub fn write_catalog(path: &std::path::Path, catalog: &Catalog) -> Result<()> {
    let io_err = |source| Error::CatalogIo {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(catalog).map_err(|source| Error::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_parses_labels_and_aliases() {
        assert_eq!("Zero Trust".parse::<FocusCategory>().unwrap(), FocusCategory::ZeroTrust);
        assert_eq!("  ai/ml ".parse::<FocusCategory>().unwrap(), FocusCategory::AiMl);
        assert_eq!(
            "Data & Analytics".parse::<FocusCategory>().unwrap(),
            FocusCategory::DataPlatform
        );
        let err = "Mainframe".parse::<FocusCategory>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn focus_serializes_as_display_label() {
        let json = serde_json::to_string(&FocusCategory::ECommerce).unwrap();
        assert_eq!(json, "\"E-commerce\"");
        for focus in FocusCategory::ALL {
            let back: FocusCategory =
                serde_json::from_str(&serde_json::to_string(&focus).unwrap()).unwrap();
            assert_eq!(back, focus);
        }
    }

    #[test]
    fn priorities_reject_out_of_range() {
        let err = PriorityVector::from_values([7, 6, 5, 7, 11, 7]).unwrap_err();
        assert!(matches!(
            err,
            Error::PriorityOutOfRange {
                dimension: Dimension::Security,
                value: 11
            }
        ));
        let err = PriorityVector::from_values([-1, 6, 5, 7, 8, 7]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(PriorityVector::from_values([0; 6]).is_ok());
        assert!(PriorityVector::from_values([10; 6]).is_ok());
    }

    #[test]
    fn priorities_deserialize_with_validation() {
        let ok: PriorityVector = serde_json::from_str(
            r#"{"latency":7,"loadBalancing":6,"costSensitivity":5,"performance":7,"security":8,"scalability":7}"#,
        )
        .unwrap();
        assert_eq!(ok.get(Dimension::Scalability), 7);
        assert_eq!(ok.get(Dimension::LoadBalancing), 6);

        let bad = serde_json::from_str::<PriorityVector>(
            r#"{"latency":70,"loadBalancing":6,"costSensitivity":5,"performance":7,"security":8,"scalability":7}"#,
        );
        assert!(bad.is_err());

        let partial: PriorityVector = serde_json::from_str(r#"{"security":2}"#).unwrap();
        assert_eq!(partial.get(Dimension::Security), 2);
        assert_eq!(partial.get(Dimension::Scalability), 8);
    }

    #[test]
    fn priority_input_schema_advertises_the_range() {
        let schema = serde_json::to_value(schemars::schema_for!(PriorityInput)).unwrap();
        for field in ["latency", "loadBalancing", "costSensitivity", "performance", "security", "scalability"] {
            let property = &schema["properties"][field];
            assert_eq!(property["minimum"], 0, "{field}");
            assert_eq!(property["maximum"], 10, "{field}");
        }
    }

    #[test]
    fn priority_with_replaces_one_dimension() {
        let p = PriorityVector::default().with(Dimension::Security, 2).unwrap();
        assert_eq!(p.get(Dimension::Security), 2);
        assert_eq!(p.get(Dimension::Latency), 7);
        assert!(PriorityVector::default().with(Dimension::Latency, 12).is_err());
    }

    #[test]
    fn sequence_keeps_first_occurrence() {
        let seq = ComponentSequence::from_labels(["Amazon S3", "AWS Lambda", "Amazon S3"]).unwrap();
        assert_eq!(seq.labels(), vec!["Amazon S3", "AWS Lambda"]);
    }

    #[test]
    fn sequence_rejects_empty_and_blank() {
        assert!(matches!(
            ComponentSequence::from_labels(Vec::<String>::new()),
            Err(Error::EmptySequence)
        ));
        assert!(matches!(
            ComponentSequence::from_labels(["Amazon S3", "  "]),
            Err(Error::BlankLabel(1))
        ));
    }

    #[test]
    fn sequence_edits_respect_membership() {
        let mut seq = ComponentSequence::from_labels(["API Gateway", "Amazon Aurora"]).unwrap();
        assert!(!seq.append("API Gateway".into()));
        assert!(seq.insert_at(99, "Amazon CloudWatch".into()));
        assert_eq!(seq.labels().last(), Some(&"Amazon CloudWatch"));
        assert!(seq.insert_at(0, "Amazon CloudFront".into()));
        assert_eq!(seq.labels()[0], "Amazon CloudFront");

        assert!(seq.substitute(&"Amazon Aurora".into(), "Amazon Aurora + ElastiCache".into()));
        assert!(seq.contains(&"Amazon Aurora + ElastiCache".into()));
        assert!(!seq.substitute(&"Amazon Aurora".into(), "Amazon DynamoDB".into()));

        // Replacement already present: the source is dropped, nothing duplicated.
        assert!(seq.substitute(&"API Gateway".into(), "Amazon CloudWatch".into()));
        assert_eq!(
            seq.labels(),
            vec!["Amazon CloudFront", "Amazon Aurora + ElastiCache", "Amazon CloudWatch"]
        );
    }

    #[test]
    fn labels_compare_by_exact_text() {
        let a = ComponentLabel::from("ECS Fargate/EKS");
        let b = ComponentLabel::from("EKS/ECS with Fargate");
        assert_ne!(a, b);
        assert_eq!(a, "ECS Fargate/EKS");
    }
}
