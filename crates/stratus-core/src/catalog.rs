//! The rule catalog: base templates per focus, keyword triggers, threshold
//! adjustments and the component table that drives grouping and diagram
//! topology. The built-in catalog is the single source of truth unless the
//! user drops a `catalog.json` override into the config directory.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ComponentLabel, ComponentSequence, Dimension, Error, FocusCategory, Result};

/// The simulated architect that owns a rule. Shown in the run trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Advisor {
    DataArchitect,
    SecurityArchitect,
    SolutionArchitect,
    AiArchitect,
}

impl Advisor {
    pub fn title(self) -> &'static str {
        match self {
            Advisor::DataArchitect => "Data Architect Sophia",
            Advisor::SecurityArchitect => "Security Architect Emilia",
            Advisor::SolutionArchitect => "Solution Architect Kumar",
            Advisor::AiArchitect => "AI Architect Amit",
        }
    }
}

impl fmt::Display for Advisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Inventory category. Variant order is the section order of the design document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ComponentGroup {
    Edge,
    Compute,
    Integration,
    Ingestion,
    Storage,
    Analytics,
    MachineLearning,
    Security,
    Observability,
    Other,
}

impl ComponentGroup {
    pub const ALL: [ComponentGroup; 10] = [
        ComponentGroup::Edge,
        ComponentGroup::Compute,
        ComponentGroup::Integration,
        ComponentGroup::Ingestion,
        ComponentGroup::Storage,
        ComponentGroup::Analytics,
        ComponentGroup::MachineLearning,
        ComponentGroup::Security,
        ComponentGroup::Observability,
        ComponentGroup::Other,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            ComponentGroup::Edge => "Edge & Access",
            ComponentGroup::Compute => "Compute",
            ComponentGroup::Integration => "Integration",
            ComponentGroup::Ingestion => "Ingestion",
            ComponentGroup::Storage => "Storage",
            ComponentGroup::Analytics => "Analytics & Transform",
            ComponentGroup::MachineLearning => "Machine Learning",
            ComponentGroup::Security => "Security",
            ComponentGroup::Observability => "Observability",
            ComponentGroup::Other => "Other",
        }
    }
}

/// Part a component plays when the diagram is refined beyond a plain chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum TopologyRole {
    Edge,
    Streaming,
    Storage,
    Training,
    Registry,
    Serving,
    ModelMonitoring,
}

impl TopologyRole {
    /// Position in the train → registry → serve → monitor sub-chain.
    pub fn pipeline_stage(self) -> Option<u8> {
        match self {
            TopologyRole::Training => Some(0),
            TopologyRole::Registry => Some(1),
            TopologyRole::Serving => Some(2),
            TopologyRole::ModelMonitoring => Some(3),
            TopologyRole::Edge | TopologyRole::Streaming | TopologyRole::Storage => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub label: ComponentLabel,
    pub group: ComponentGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TopologyRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub focus: FocusCategory,
    pub components: Vec<ComponentLabel>,
}

impl Template {
    /// Starting sequence for a run.
    pub fn seed(&self) -> ComponentSequence {
        let mut seq = ComponentSequence(Vec::with_capacity(self.components.len()));
        for label in &self.components {
            seq.append(label.clone());
        }
        seq
    }
}

/// A structural change to the accumulator sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Edit {
    /// Append if absent.
    Append(ComponentLabel),
    /// Insert at a fixed position (clamped to the end) if absent.
    InsertAt { index: usize, label: ComponentLabel },
    /// Replace `from` with `to` if `from` is present.
    Substitute { from: ComponentLabel, to: ComponentLabel },
}

impl Edit {
    /// Apply to `seq`. Returns whether anything changed.
    pub fn apply(&self, seq: &mut ComponentSequence) -> bool {
        match self {
            Edit::Append(label) => seq.append(label.clone()),
            Edit::InsertAt { index, label } => seq.insert_at(*index, label.clone()),
            Edit::Substitute { from, to } => seq.substitute(from, to.clone()),
        }
    }

    /// Whether the edit has anything to act on in `seq`. A substitution
    /// whose source is absent does not apply; appends and inserts always do.
    pub fn applies_to(&self, seq: &ComponentSequence) -> bool {
        match self {
            Edit::Append(_) | Edit::InsertAt { .. } => true,
            Edit::Substitute { from, .. } => seq.contains(from),
        }
    }

    fn labels(&self) -> Vec<&ComponentLabel> {
        match self {
            Edit::Append(label) | Edit::InsertAt { label, .. } => vec![label],
            Edit::Substitute { from, to } => vec![from, to],
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Append(label) => write!(f, "append {label}"),
            Edit::InsertAt { index, label } => write!(f, "insert {label} at {index}"),
            Edit::Substitute { from, to } => write!(f, "replace {from} with {to}"),
        }
    }
}

/// Fires when any of `any_of` occurs (case-insensitively) in the use-case text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule {
    pub id: String,
    pub advisor: Advisor,
    pub any_of: Vec<String>,
    pub edits: Vec<Edit>,
    pub rationale: String,
}

impl KeywordRule {
    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        self.any_of.iter().any(|k| text.contains(&k.to_lowercase()))
    }
}

/// Fires when `dimension` meets or exceeds the catalog threshold for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRule {
    pub id: String,
    pub advisor: Advisor,
    pub dimension: Dimension,
    pub edits: Vec<Edit>,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub latency: u8,
    pub load_balancing: u8,
    pub cost_sensitivity: u8,
    pub performance: u8,
    pub security: u8,
    pub scalability: u8,
}

impl Thresholds {
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
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            latency: 7,
            load_balancing: 6,
            cost_sensitivity: 7,
            performance: 7,
            security: 7,
            scalability: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub thresholds: Thresholds,
    pub components: Vec<ComponentSpec>,
    pub templates: Vec<Template>,
    #[serde(default)]
    pub keyword_rules: Vec<KeywordRule>,
    #[serde(default)]
    pub threshold_rules: Vec<ThresholdRule>,
}

impl Catalog {
    pub fn template(&self, focus: FocusCategory) -> Option<&Template> {
        self.templates.iter().find(|t| t.focus == focus)
    }

    pub fn component(&self, label: &ComponentLabel) -> Option<&ComponentSpec> {
        self.components.iter().find(|c| &c.label == label)
    }

    /// Labels missing from the component table fall into `Other`.
    pub fn group_of(&self, label: &ComponentLabel) -> ComponentGroup {
        self.component(label)
            .map(|c| c.group)
            .unwrap_or(ComponentGroup::Other)
    }

    pub fn role_of(&self, label: &ComponentLabel) -> Option<TopologyRole> {
        self.component(label).and_then(|c| c.role)
    }

    pub fn threshold(&self, dimension: Dimension) -> u8 {
        self.thresholds.get(dimension)
    }

    /// Threshold rules for one dimension, in table order.
    pub fn threshold_rules_for(&self, dimension: Dimension) -> impl Iterator<Item = &ThresholdRule> {
        self.threshold_rules
            .iter()
            .filter(move |r| r.dimension == dimension)
    }

    /// Check every structural invariant. Any failure is a configuration error.
    pub fn validate(&self) -> Result<()> {
        for dimension in Dimension::ALL {
            let value = self.thresholds.get(dimension);
            if value > crate::PriorityVector::MAX {
                return Err(Error::ThresholdOutOfRange { dimension, value });
            }
        }

        let mut seen = HashSet::new();
        for spec in &self.components {
            if is_blank(&spec.label) {
                return Err(Error::BlankCatalogLabel {
                    location: "component table".to_string(),
                });
            }
            if !seen.insert(&spec.label) {
                return Err(Error::DuplicateComponent(spec.label.to_string()));
            }
        }

        for focus in FocusCategory::ALL {
            let mut matching = self.templates.iter().filter(|t| t.focus == focus);
            let template = matching.next().ok_or(Error::MissingTemplate(focus))?;
            if matching.next().is_some() {
                return Err(Error::DuplicateTemplate(focus));
            }
            if template.components.is_empty() {
                return Err(Error::EmptyTemplate(focus));
            }
            let mut labels = HashSet::new();
            for label in &template.components {
                if is_blank(label) {
                    return Err(Error::BlankCatalogLabel {
                        location: format!("{focus} template"),
                    });
                }
                if !labels.insert(label) {
                    return Err(Error::DuplicateTemplateLabel {
                        focus,
                        label: label.to_string(),
                    });
                }
            }
        }

        let mut ids = HashSet::new();
        let rules = self
            .keyword_rules
            .iter()
            .map(|r| (&r.id, &r.edits))
            .chain(self.threshold_rules.iter().map(|r| (&r.id, &r.edits)));
        for (id, edits) in rules {
            let invalid = |reason: &str| Error::InvalidRule {
                rule: id.clone(),
                reason: reason.to_string(),
            };
            if id.trim().is_empty() {
                return Err(invalid("rule id is blank"));
            }
            if !ids.insert(id) {
                return Err(invalid("rule id is used more than once"));
            }
            if edits.is_empty() {
                return Err(invalid("rule has no edits"));
            }
            for edit in edits {
                if edit.labels().into_iter().any(is_blank) {
                    return Err(invalid("edit names a blank label"));
                }
                if let Edit::Substitute { from, to } = edit {
                    if from == to {
                        return Err(invalid("substitution replaces a label with itself"));
                    }
                    // Raising a priority must never drop a security control.
                    if self.group_of(from) == ComponentGroup::Security {
                        return Err(invalid("substitution would remove a security component"));
                    }
                }
            }
        }

        for rule in &self.keyword_rules {
            if rule.any_of.is_empty() || rule.any_of.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::InvalidRule {
                    rule: rule.id.clone(),
                    reason: "keyword list is empty or contains a blank keyword".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Human-readable summary of evaluation order, used as server instructions.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str("Selection runs in this order:\n");
        out.push_str("1. Seed with the base template for the chosen focus.\n");
        out.push_str("2. Keyword triggers (case-insensitive substring match on the use case), in table order:\n");
        for rule in &self.keyword_rules {
            out.push_str(&format!(
                "   - {} [{}]: {} -> {}\n",
                rule.id,
                rule.any_of.join(" | "),
                rule.advisor,
                join_edits(&rule.edits)
            ));
        }
        out.push_str("3. Threshold adjustments (priority >= threshold), in dimension order:\n");
        for dimension in Dimension::ALL {
            for rule in self.threshold_rules_for(dimension) {
                out.push_str(&format!(
                    "   - {} [{} >= {}]: {} -> {}\n",
                    rule.id,
                    dimension,
                    self.threshold(dimension),
                    rule.advisor,
                    join_edits(&rule.edits)
                ));
            }
        }
        out.push_str("4. Labels never repeat; the first occurrence keeps its position.\n");
        out
    }

    pub fn builtin() -> Self {
        builtin::catalog()
    }
}

fn is_blank(label: &ComponentLabel) -> bool {
    label.as_str().trim().is_empty()
}

fn join_edits(edits: &[Edit]) -> String {
    edits
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Component labels used by the built-in catalog.
pub mod labels {
    pub const CLOUDFRONT: &str = "Amazon CloudFront";
    pub const ALB: &str = "Application Load Balancer";
    pub const API_GATEWAY: &str = "API Gateway";

    pub const LAMBDA: &str = "AWS Lambda";
    pub const FARGATE: &str = "ECS Fargate/EKS";
    pub const EKS_FARGATE: &str = "EKS/ECS with Fargate";
    pub const SPOT: &str = "EC2 Spot (batch)";
    pub const AUTO_SCALING: &str = "Application Auto Scaling";

    pub const EVENTBRIDGE: &str = "Amazon EventBridge";
    pub const SQS: &str = "Amazon SQS";

    pub const KINESIS: &str = "Kinesis Data Streams";

    pub const S3: &str = "Amazon S3";
    pub const DYNAMODB: &str = "Amazon DynamoDB";
    pub const DYNAMODB_DAX: &str = "Amazon DynamoDB + DAX";
    pub const AURORA: &str = "Amazon Aurora";
    pub const AURORA_CACHED: &str = "Amazon Aurora + ElastiCache";

    pub const GLUE: &str = "AWS Glue (Spark ETL)";
    pub const LAKE_FORMATION: &str = "AWS Lake Formation";
    pub const ATHENA: &str = "Amazon Athena";
    pub const REDSHIFT: &str = "Amazon Redshift";

    pub const FEATURE_STORE: &str = "SageMaker Feature Store";
    pub const TRAINING: &str = "SageMaker Training";
    pub const MODEL_REGISTRY: &str = "SageMaker Model Registry";
    pub const ENDPOINT: &str = "SageMaker Endpoint";
    pub const MODEL_MONITOR: &str = "SageMaker Model Monitor";

    pub const IAM: &str = "AWS IAM";
    pub const KMS: &str = "AWS KMS";
    pub const CLOUDTRAIL: &str = "AWS CloudTrail";
    pub const SECURITY_HUB: &str = "AWS Security Hub";
    pub const CONFIG: &str = "AWS Config";
    pub const MACIE: &str = "Amazon Macie";
    pub const COGNITO: &str = "Amazon Cognito";
    pub const VERIFIED_ACCESS: &str = "AWS Verified Access";

    pub const CLOUDWATCH: &str = "Amazon CloudWatch";
}

mod builtin {
    use super::labels::*;
    use super::*;

    fn component(label: &str, group: ComponentGroup, role: Option<TopologyRole>) -> ComponentSpec {
        ComponentSpec {
            label: label.into(),
            group,
            role,
        }
    }

    fn template(focus: FocusCategory, labels: &[&str]) -> Template {
        Template {
            focus,
            components: labels.iter().map(|l| ComponentLabel::from(*l)).collect(),
        }
    }

    fn append(label: &str) -> Edit {
        Edit::Append(label.into())
    }

    fn insert_at(index: usize, label: &str) -> Edit {
        Edit::InsertAt {
            index,
            label: label.into(),
        }
    }

    fn substitute(from: &str, to: &str) -> Edit {
        Edit::Substitute {
            from: from.into(),
            to: to.into(),
        }
    }

    fn keyword(id: &str, advisor: Advisor, any_of: &[&str], edits: Vec<Edit>, rationale: &str) -> KeywordRule {
        KeywordRule {
            id: id.to_string(),
            advisor,
            any_of: any_of.iter().map(|k| k.to_string()).collect(),
            edits,
            rationale: rationale.to_string(),
        }
    }

    fn threshold(id: &str, advisor: Advisor, dimension: Dimension, edits: Vec<Edit>, rationale: &str) -> ThresholdRule {
        ThresholdRule {
            id: id.to_string(),
            advisor,
            dimension,
            edits,
            rationale: rationale.to_string(),
        }
    }

    pub(super) fn catalog() -> Catalog {
        use Advisor::*;
        use ComponentGroup as G;
        use TopologyRole as R;

        let components = vec![
            component(CLOUDFRONT, G::Edge, Some(R::Edge)),
            component(ALB, G::Edge, None),
            component(API_GATEWAY, G::Edge, None),
            component(LAMBDA, G::Compute, None),
            component(FARGATE, G::Compute, None),
            component(EKS_FARGATE, G::Compute, None),
            component(SPOT, G::Compute, None),
            component(AUTO_SCALING, G::Compute, None),
            component(EVENTBRIDGE, G::Integration, None),
            component(SQS, G::Integration, None),
            component(KINESIS, G::Ingestion, Some(R::Streaming)),
            component(S3, G::Storage, Some(R::Storage)),
            component(DYNAMODB, G::Storage, None),
            component(DYNAMODB_DAX, G::Storage, None),
            component(AURORA, G::Storage, None),
            component(AURORA_CACHED, G::Storage, None),
            component(GLUE, G::Analytics, None),
            component(LAKE_FORMATION, G::Analytics, None),
            component(ATHENA, G::Analytics, None),
            component(REDSHIFT, G::Analytics, None),
            component(FEATURE_STORE, G::MachineLearning, None),
            component(TRAINING, G::MachineLearning, Some(R::Training)),
            component(MODEL_REGISTRY, G::MachineLearning, Some(R::Registry)),
            component(ENDPOINT, G::MachineLearning, Some(R::Serving)),
            component(MODEL_MONITOR, G::MachineLearning, Some(R::ModelMonitoring)),
            component(IAM, G::Security, None),
            component(KMS, G::Security, None),
            component(CLOUDTRAIL, G::Security, None),
            component(SECURITY_HUB, G::Security, None),
            component(CONFIG, G::Security, None),
            component(MACIE, G::Security, None),
            component(COGNITO, G::Security, None),
            component(VERIFIED_ACCESS, G::Security, None),
            component(CLOUDWATCH, G::Observability, None),
        ];

        let templates = vec![
            template(
                FocusCategory::AiMl,
                &[
                    API_GATEWAY,
                    LAMBDA,
                    S3,
                    GLUE,
                    FEATURE_STORE,
                    TRAINING,
                    MODEL_REGISTRY,
                    ENDPOINT,
                    MODEL_MONITOR,
                    CLOUDWATCH,
                ],
            ),
            template(
                FocusCategory::Serverless,
                &[API_GATEWAY, LAMBDA, DYNAMODB, S3, ATHENA, EVENTBRIDGE, CLOUDWATCH],
            ),
            template(
                FocusCategory::DataPlatform,
                &[S3, GLUE, LAKE_FORMATION, ATHENA, REDSHIFT, CLOUDWATCH],
            ),
            template(
                FocusCategory::ZeroTrust,
                &[VERIFIED_ACCESS, COGNITO, API_GATEWAY, LAMBDA, S3, IAM, CLOUDWATCH],
            ),
            template(
                FocusCategory::ECommerce,
                &[API_GATEWAY, FARGATE, AURORA, S3, ATHENA, CLOUDWATCH],
            ),
            template(
                FocusCategory::Microservices,
                &[ALB, EKS_FARGATE, SQS, AURORA, CLOUDWATCH],
            ),
            template(
                FocusCategory::ApiPlatform,
                &[API_GATEWAY, LAMBDA, DYNAMODB, CLOUDWATCH],
            ),
        ];

        let keyword_rules = vec![
            keyword(
                "streaming-ingest",
                DataArchitect,
                &["stream", "real-time", "realtime"],
                vec![append(KINESIS)],
                "Add Kinesis Data Streams for low-latency ingestion.",
            ),
            keyword(
                "feature-store",
                AiArchitect,
                &["recommend", "ml"],
                vec![append(FEATURE_STORE)],
                "Register features in a feature store so models share one definition.",
            ),
            keyword(
                "forecasting",
                AiArchitect,
                &["forecast", "anomaly", "predict"],
                vec![
                    append(TRAINING),
                    append(MODEL_REGISTRY),
                    append(ENDPOINT),
                    append(MODEL_MONITOR),
                ],
                "Use SageMaker for train/serve; Model Monitor for drift.",
            ),
            keyword(
                "sensitive-data",
                SecurityArchitect,
                &["healthcare", "patient", "pii"],
                vec![append(MACIE), append(CLOUDTRAIL)],
                "HIPAA/PII data tagging; Macie + CloudTrail for continuous auditing.",
            ),
            keyword(
                "audit-trail",
                SecurityArchitect,
                &["audit", "compliance"],
                vec![append(CLOUDTRAIL)],
                "Record every API call in CloudTrail for the audit trail.",
            ),
            keyword(
                "analytics",
                DataArchitect,
                &["analytics", "dashboard", "report"],
                vec![append(ATHENA)],
                "Expose curated data through Athena for ad-hoc analytics.",
            ),
            keyword(
                "events",
                SolutionArchitect,
                &["event", "webhook"],
                vec![append(EVENTBRIDGE)],
                "Route domain events through EventBridge.",
            ),
            keyword(
                "async-work",
                SolutionArchitect,
                &["queue", "async", "batch"],
                vec![append(SQS)],
                "Decouple slow work behind an SQS queue.",
            ),
            keyword(
                "global-reach",
                SolutionArchitect,
                &["global", "worldwide", "multi-region"],
                vec![insert_at(0, CLOUDFRONT)],
                "Serve a global audience from CloudFront edge locations.",
            ),
        ];

        let threshold_rules = vec![
            threshold(
                "edge-caching",
                SolutionArchitect,
                Dimension::Latency,
                vec![insert_at(0, CLOUDFRONT)],
                "Put CloudFront in front for edge caching close to users.",
            ),
            threshold(
                "low-latency-ingest",
                DataArchitect,
                Dimension::Latency,
                vec![append(KINESIS)],
                "Add Kinesis Data Streams for low-latency ingestion.",
            ),
            threshold(
                "realtime-inference",
                AiArchitect,
                Dimension::Latency,
                vec![append(ENDPOINT)],
                "Serve predictions from a real-time inference endpoint; batch for nightly jobs.",
            ),
            threshold(
                "load-balancer",
                SolutionArchitect,
                Dimension::LoadBalancing,
                vec![insert_at(1, ALB)],
                "Spread traffic across availability zones with an Application Load Balancer.",
            ),
            threshold(
                "serverless-compute",
                SolutionArchitect,
                Dimension::CostSensitivity,
                vec![substitute(FARGATE, LAMBDA)],
                "Favor serverless to minimize idle cost.",
            ),
            threshold(
                "spot-batch",
                SolutionArchitect,
                Dimension::CostSensitivity,
                vec![append(SPOT)],
                "Run batch compute on spot capacity.",
            ),
            threshold(
                "read-cache",
                DataArchitect,
                Dimension::Performance,
                vec![
                    substitute(AURORA, AURORA_CACHED),
                    substitute(DYNAMODB, DYNAMODB_DAX),
                ],
                "Front hot reads with an in-memory cache.",
            ),
            threshold(
                "parallel-transforms",
                DataArchitect,
                Dimension::Performance,
                vec![append(GLUE), append(LAKE_FORMATION)],
                "Use Glue/Spark for parallel transforms; Lake Formation for governance.",
            ),
            threshold(
                "encryption-keys",
                SecurityArchitect,
                Dimension::Security,
                vec![append(KMS)],
                "Add KMS customer-managed keys for storage and streams.",
            ),
            threshold(
                "audit-logging",
                SecurityArchitect,
                Dimension::Security,
                vec![append(CLOUDTRAIL)],
                "Log every control-plane call to CloudTrail.",
            ),
            threshold(
                "security-posture",
                SecurityArchitect,
                Dimension::Security,
                vec![append(SECURITY_HUB), append(CONFIG)],
                "Guardrails with Config and Security Hub.",
            ),
            threshold(
                "autoscaling",
                SolutionArchitect,
                Dimension::Scalability,
                vec![append(AUTO_SCALING)],
                "Keep services stateless and scale them on target tracking.",
            ),
        ];

        Catalog {
            thresholds: Thresholds::default(),
            components,
            templates,
            keyword_rules,
            threshold_rules,
        }
    }
}
