//! Build tutorial and technical design document for a run.
//!
//! Tutorial steps, in fixed order, and what each does when its labels are missing:
//!
//! | step | labels consulted | when none present |
//! |---|---|---|
//! | Provisioning | storage, compute | generic landing-zone text |
//! | Security baseline | security | generic least-privilege text |
//! | Ingestion | ingestion, integration | batch load into storage |
//! | Transform | analytics | step omitted |
//! | MLOps | machine learning | step omitted |
//! | Serving | edge, compute, serving stage | generic HTTPS endpoint text |
//! | Monitoring | observability, model monitoring | generic metrics/alarms text |
//!
//! Step numbers are consecutive over the steps that render.

use stratus_core::{
    Catalog, ComponentGroup, ComponentLabel, ComponentSequence, Dimension, FocusCategory,
    PriorityVector, Report, ReportKind, Section, TopologyRole,
};

pub(crate) const TUTORIAL_TITLE: &str = "Tutorial: How to Build This Architecture from Scratch";
pub(crate) const DESIGN_DOC_TITLE: &str = "Technical Design Document (TDD)";

struct Inputs<'a> {
    catalog: &'a Catalog,
    free_text: &'a str,
    focus: FocusCategory,
    components: &'a ComponentSequence,
    priorities: &'a PriorityVector,
}

impl Inputs<'_> {
    fn in_groups(&self, groups: &[ComponentGroup]) -> Vec<&ComponentLabel> {
        self.components
            .iter()
            .filter(|l| groups.contains(&self.catalog.group_of(l)))
            .collect()
    }

    fn with_role(&self, role: TopologyRole) -> Vec<&ComponentLabel> {
        self.components
            .iter()
            .filter(|l| self.catalog.role_of(l) == Some(role))
            .collect()
    }

    fn high(&self, dimension: Dimension) -> bool {
        self.priorities.get(dimension) >= self.catalog.threshold(dimension)
    }

    fn use_case(&self) -> String {
        let text = self.free_text.trim();
        if text.is_empty() {
            "(not provided)".to_string()
        } else {
            text.to_string()
        }
    }
}

pub(crate) fn compose(
    catalog: &Catalog,
    free_text: &str,
    focus: FocusCategory,
    components: &ComponentSequence,
    priorities: &PriorityVector,
) -> (Report, Report) {
    let inputs = Inputs {
        catalog,
        free_text,
        focus,
        components,
        priorities,
    };
    (tutorial(&inputs), design_doc(&inputs))
}

fn list(labels: &[&ComponentLabel]) -> String {
    labels
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn tutorial(inputs: &Inputs<'_>) -> Report {
    use ComponentGroup as G;

    let mut steps: Vec<(&str, String)> = Vec::with_capacity(7);

    let storage = inputs.in_groups(&[G::Storage]);
    let compute = inputs.in_groups(&[G::Compute]);
    let mut provisioning = if storage.is_empty() {
        "Set up the landing zone: accounts, a multi-AZ VPC and tagging standards.".to_string()
    } else {
        format!(
            "Set up the landing zone (multi-AZ VPC) and create {} with lifecycle policies.",
            list(&storage)
        )
    };
    if !compute.is_empty() {
        provisioning.push_str(&format!(" Provision {}.", list(&compute)));
    }
    steps.push(("Provisioning", provisioning));

    let security = inputs.in_groups(&[G::Security]);
    let mut baseline = if security.is_empty() {
        "Create least-privilege IAM roles and scoped credentials; encrypt data at rest with service-managed keys.".to_string()
    } else {
        format!(
            "Configure {} with least-privilege roles and scoped tokens.",
            list(&security)
        )
    };
    if inputs.high(Dimension::Security) {
        baseline.push_str(" Enforce customer-managed encryption keys and continuous posture checks.");
    }
    steps.push(("Security baseline", baseline));

    let ingestion = inputs.in_groups(&[G::Ingestion, G::Integration]);
    let ingest = if ingestion.is_empty() {
        let target = storage
            .first()
            .map(|l| l.as_str())
            .unwrap_or("the primary data store");
        format!("Load data in scheduled batches into {target}.")
    } else if inputs.high(Dimension::Latency) {
        format!("Ingest through {}, sized for low-latency delivery.", list(&ingestion))
    } else {
        format!("Ingest through {}.", list(&ingestion))
    };
    steps.push(("Ingestion", ingest));

    let transform = inputs.in_groups(&[G::Analytics]);
    if !transform.is_empty() {
        steps.push((
            "Transform",
            format!(
                "Transform with {} into a curated zone; partition by time and business key.",
                list(&transform)
            ),
        ));
    }

    let ml = inputs.in_groups(&[G::MachineLearning]);
    if !ml.is_empty() {
        steps.push((
            "MLOps",
            format!(
                "Run the model lifecycle on {}: data prep, training, registry, deployment, monitoring.",
                list(&ml)
            ),
        ));
    }

    let mut front: Vec<&ComponentLabel> = inputs.in_groups(&[G::Edge, G::Compute]);
    front.extend(inputs.with_role(TopologyRole::Serving));
    let mut serving = if front.is_empty() {
        "Expose the workload behind an authenticated HTTPS endpoint.".to_string()
    } else {
        format!("Serve traffic through {}.", list(&front))
    };
    if inputs.high(Dimension::Scalability) {
        serving.push_str(" Add target-tracking auto scaling per traffic.");
    }
    steps.push(("Serving", serving));

    let mut watch = inputs.in_groups(&[G::Observability]);
    watch.extend(inputs.with_role(TopologyRole::ModelMonitoring));
    let monitoring = if watch.is_empty() {
        "Enable default service metrics with alarms on latency, errors and cost.".to_string()
    } else {
        format!("Monitor with {}; alert on latency, errors, drift and cost.", list(&watch))
    };
    steps.push(("Monitoring", monitoring));

    let mut steps_section = Section::new("Steps");
    for (n, (title, text)) in steps.into_iter().enumerate() {
        steps_section = steps_section.line(format!("{}) {title}: {text}", n + 1));
    }

    Report::new(
        ReportKind::Tutorial,
        TUTORIAL_TITLE,
        vec![
            Section::new("Use Case")
                .line(inputs.use_case())
                .line(format!("Focus: {}", inputs.focus)),
            steps_section,
        ],
    )
}

fn design_doc(inputs: &Inputs<'_>) -> Report {
    let priorities = Dimension::ALL
        .iter()
        .map(|&d| format!("{}: {}/10", d.label(), inputs.priorities.get(d)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut inventory = Section::new("Component Inventory");
    for group in ComponentGroup::ALL {
        let labels = inputs.in_groups(&[group]);
        if !labels.is_empty() {
            inventory = inventory.line(format!("- {}: {}", group.heading(), list(&labels)));
        }
    }

    let mut sections = vec![
        Section::new("Use Case").line(inputs.use_case()),
        Section::new("Architecture Focus").line(format!("- {}", inputs.focus)),
        Section::new("Non-functional Priorities").line(format!("- {priorities}")),
        inventory,
        Section::new("Data Model & Governance").line(
            "- Raw, processed and curated zones; data tagged for PII; column-level encryption where needed.",
        ),
        Section::new("Security & Zero Trust").line(
            "- Least privilege IAM, VPC endpoints, KMS-encrypted storage & streams, audit via CloudTrail.",
        ),
        Section::new("Observability").line(
            "- Structured logs, metrics and traces for every service; alarms on latency, error rate and spend.",
        ),
    ];
    if !inputs.in_groups(&[ComponentGroup::MachineLearning]).is_empty() {
        sections.push(Section::new("MLOps").line(
            "- Feature store, experiment tracking, model registry, canary/blue-green deployments, continuous monitoring.",
        ));
    }

    Report::new(ReportKind::DesignDoc, DESIGN_DOC_TITLE, sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_core::catalog::labels::*;

    fn seq(labels: &[&str]) -> ComponentSequence {
        ComponentSequence::from_labels(labels.iter().copied()).unwrap()
    }

    fn steps(report: &Report) -> Vec<String> {
        report.section("Steps").unwrap().lines.clone()
    }

    #[test]
    fn tutorial_skips_transform_and_mlops_without_labels() {
        let catalog = Catalog::builtin();
        let p = PriorityVector::from_values([0; 6]).unwrap();
        let (tutorial, _) = compose(
            &catalog,
            "",
            FocusCategory::ApiPlatform,
            &seq(&[API_GATEWAY, LAMBDA, DYNAMODB, CLOUDWATCH]),
            &p,
        );
        let lines = steps(&tutorial);
        let titles: Vec<_> = lines
            .iter()
            .map(|l| l.split(':').next().unwrap().to_string())
            .collect();
        assert_eq!(
            titles,
            vec![
                "1) Provisioning",
                "2) Security baseline",
                "3) Ingestion",
                "4) Serving",
                "5) Monitoring"
            ]
        );
        assert!(lines[2].contains("scheduled batches into Amazon DynamoDB"));
        assert!(lines[1].contains("least-privilege IAM roles"));
        assert_eq!(tutorial.section("Use Case").unwrap().lines[0], "(not provided)");
    }

    #[test]
    fn tutorial_names_present_components() {
        let catalog = Catalog::builtin();
        let p = PriorityVector::from_values([8, 0, 0, 0, 8, 8]).unwrap();
        let (tutorial, _) = compose(
            &catalog,
            "stream processing",
            FocusCategory::AiMl,
            &seq(&[API_GATEWAY, S3, KINESIS, GLUE, TRAINING, ENDPOINT, KMS, CLOUDWATCH]),
            &p,
        );
        let lines = steps(&tutorial);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("create Amazon S3"));
        assert!(lines[1].contains("Configure AWS KMS"));
        assert!(lines[1].contains("customer-managed encryption keys"));
        assert!(lines[2].contains("Kinesis Data Streams, sized for low-latency"));
        assert!(lines[3].starts_with("4) Transform: Transform with AWS Glue (Spark ETL)"));
        assert!(lines[4].starts_with("5) MLOps"));
        assert!(lines[5].contains("API Gateway, SageMaker Endpoint"));
        assert!(lines[5].contains("auto scaling"));
        assert!(lines[6].contains("Amazon CloudWatch"));
    }

    #[test]
    fn design_doc_restates_priorities_and_groups_inventory() {
        let catalog = Catalog::builtin();
        let p = PriorityVector::from_values([7, 6, 5, 7, 8, 7]).unwrap();
        let (_, doc) = compose(
            &catalog,
            "Patient records",
            FocusCategory::ZeroTrust,
            &seq(&[CLOUDFRONT, API_GATEWAY, S3, KMS, CLOUDTRAIL, "Mainframe Bridge"]),
            &p,
        );
        let headings: Vec<_> = doc.sections().iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Use Case",
                "Architecture Focus",
                "Non-functional Priorities",
                "Component Inventory",
                "Data Model & Governance",
                "Security & Zero Trust",
                "Observability",
            ]
        );
        assert_eq!(
            doc.section("Non-functional Priorities").unwrap().lines[0],
            "- Latency: 7/10, Load Balancing: 6/10, Cloud Cost: 5/10, Performance: 7/10, Security: 8/10, Scalability: 7/10"
        );
        assert_eq!(
            doc.section("Component Inventory").unwrap().lines,
            vec![
                "- Edge & Access: Amazon CloudFront, API Gateway",
                "- Storage: Amazon S3",
                "- Security: AWS KMS, AWS CloudTrail",
                "- Other: Mainframe Bridge",
            ]
        );
    }

    #[test]
    fn design_doc_adds_mlops_with_ml_components() {
        let catalog = Catalog::builtin();
        let (_, doc) = compose(
            &catalog,
            "",
            FocusCategory::AiMl,
            &seq(&[S3, FEATURE_STORE]),
            &PriorityVector::default(),
        );
        assert!(doc.section("MLOps").is_some());
    }
}
