use serde::Serialize;
use stratus_core::catalog::Edit;
use stratus_core::{Advisor, Catalog, ComponentSequence, Dimension, FocusCategory, PriorityVector};

/// One line of the advisor trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    pub advisor: Advisor,
    pub rule: String,
    pub rationale: String,
    /// False when the rule fired but every edit was a no-op.
    pub changed: bool,
    /// False when none of the rule's edits had anything to act on, such as a
    /// substitution whose source label is absent. An unchanged but applicable
    /// rule found its labels already in place.
    pub applicable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub components: ComponentSequence,
    pub trace: Vec<TraceEntry>,
}

pub(crate) const BASE_TEMPLATE_RULE: &str = "base-template";

/// Seed → keyword triggers (table order) → threshold edits (dimension order).
pub(crate) fn select(
    catalog: &Catalog,
    seed: &ComponentSequence,
    focus: FocusCategory,
    priorities: &PriorityVector,
    free_text: &str,
) -> Selection {
    let mut components = seed.clone();
    let mut trace = vec![TraceEntry {
        advisor: Advisor::SolutionArchitect,
        rule: BASE_TEMPLATE_RULE.to_string(),
        rationale: format!(
            "Start from the {focus} template ({} components).",
            seed.len()
        ),
        changed: true,
        applicable: true,
    }];

    let text = free_text.to_lowercase();
    for rule in catalog.keyword_rules.iter().filter(|r| r.matches(&text)) {
        let (changed, applicable) = apply_edits(&rule.edits, &mut components);
        tracing::debug!(rule = %rule.id, changed, applicable, "keyword rule fired");
        trace.push(TraceEntry {
            advisor: rule.advisor,
            rule: rule.id.clone(),
            rationale: rule.rationale.clone(),
            changed,
            applicable,
        });
    }

    for dimension in Dimension::ALL {
        let value = priorities.get(dimension);
        let threshold = catalog.threshold(dimension);
        if value < threshold {
            continue;
        }
        for rule in catalog.threshold_rules_for(dimension) {
            let (changed, applicable) = apply_edits(&rule.edits, &mut components);
            tracing::debug!(rule = %rule.id, %dimension, value, threshold, changed, applicable, "threshold rule fired");
            trace.push(TraceEntry {
                advisor: rule.advisor,
                rule: rule.id.clone(),
                rationale: rule.rationale.clone(),
                changed,
                applicable,
            });
        }
    }

    Selection { components, trace }
}

/// Returns `(changed, applicable)` for the rule as a whole.
fn apply_edits(edits: &[Edit], components: &mut ComponentSequence) -> (bool, bool) {
    let mut changed = false;
    let mut applicable = false;
    for edit in edits {
        applicable |= edit.applies_to(components);
        changed |= edit.apply(components);
    }
    (changed, applicable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_core::catalog::labels::*;
    use stratus_core::catalog::{KeywordRule, ThresholdRule};

    fn low() -> PriorityVector {
        PriorityVector::from_values([0; 6]).unwrap()
    }

    fn run(catalog: &Catalog, focus: FocusCategory, p: &PriorityVector, text: &str) -> Selection {
        let seed = catalog.template(focus).unwrap().seed();
        select(catalog, &seed, focus, p, text)
    }

    #[test]
    fn low_priorities_and_no_text_return_the_template() {
        let catalog = Catalog::builtin();
        let sel = run(&catalog, FocusCategory::ApiPlatform, &low(), "");
        assert_eq!(
            sel.components.labels(),
            vec![API_GATEWAY, LAMBDA, DYNAMODB, CLOUDWATCH]
        );
        assert_eq!(sel.trace.len(), 1);
        assert_eq!(sel.trace[0].rule, BASE_TEMPLATE_RULE);
    }

    #[test]
    fn keyword_rules_are_independent() {
        let catalog = Catalog::builtin();
        let sel = run(
            &catalog,
            FocusCategory::ApiPlatform,
            &low(),
            "Real-time STREAM of events with a nightly batch queue",
        );
        let labels = sel.components.labels();
        assert!(labels.contains(&KINESIS));
        assert!(labels.contains(&EVENTBRIDGE));
        assert!(labels.contains(&SQS));
        let rules: Vec<_> = sel.trace.iter().map(|t| t.rule.as_str()).collect();
        assert_eq!(rules, vec![BASE_TEMPLATE_RULE, "streaming-ingest", "events", "async-work"]);
    }

    #[test]
    fn threshold_is_meets_or_exceeds() {
        let catalog = Catalog::builtin();
        let below = low().with(Dimension::Security, 6).unwrap();
        let at = low().with(Dimension::Security, 7).unwrap();
        assert!(!run(&catalog, FocusCategory::Serverless, &below, "")
            .components
            .contains(&KMS.into()));
        assert!(run(&catalog, FocusCategory::Serverless, &at, "")
            .components
            .contains(&KMS.into()));
    }

    #[test]
    fn insert_position_is_fixed_and_later_edits_see_earlier_ones() {
        let catalog = Catalog::builtin();
        // Latency puts CloudFront at 0, then load balancing puts the ALB at 1.
        let p = low()
            .with(Dimension::Latency, 9)
            .unwrap()
            .with(Dimension::LoadBalancing, 9)
            .unwrap();
        let sel = run(&catalog, FocusCategory::Serverless, &p, "");
        let labels = sel.components.labels();
        assert_eq!(&labels[..3], &[CLOUDFRONT, ALB, API_GATEWAY]);
    }

    #[test]
    fn substitution_only_fires_when_source_present() {
        let catalog = Catalog::builtin();
        let p = low().with(Dimension::Performance, 8).unwrap();
        let shop = run(&catalog, FocusCategory::ECommerce, &p, "");
        assert!(shop.components.contains(&AURORA_CACHED.into()));
        assert!(!shop.components.contains(&AURORA.into()));
        // Same position as the label it replaced.
        assert_eq!(shop.components.labels()[2], AURORA_CACHED);

        let data = run(&catalog, FocusCategory::DataPlatform, &p, "");
        let read_cache = data.trace.iter().find(|t| t.rule == "read-cache").unwrap();
        assert!(!read_cache.changed);
        assert!(!read_cache.applicable);
    }

    #[test]
    fn unchanged_rules_tell_missing_sources_from_present_labels() {
        let catalog = Catalog::builtin();
        let p = low()
            .with(Dimension::Performance, 7)
            .unwrap()
            .with(Dimension::Security, 7)
            .unwrap();
        let sel = run(&catalog, FocusCategory::ZeroTrust, &p, "patient records");
        let entry = |id: &str| sel.trace.iter().find(|t| t.rule == id).unwrap();

        // No Aurora or DynamoDB to cache in front of.
        assert!(!entry("read-cache").changed);
        assert!(!entry("read-cache").applicable);
        // CloudTrail already came in with the sensitive-data keyword.
        assert!(!entry("audit-logging").changed);
        assert!(entry("audit-logging").applicable);
        assert!(entry("encryption-keys").changed && entry("encryption-keys").applicable);
    }

    #[test]
    fn performance_and_latency_add_pipeline_and_inference() {
        let catalog = Catalog::builtin();
        let high = PriorityVector::from_values([10; 6]).unwrap();
        let shop = run(&catalog, FocusCategory::ECommerce, &high, "");
        for label in [GLUE, LAKE_FORMATION, ENDPOINT, ATHENA, API_GATEWAY] {
            assert!(shop.components.contains(&label.into()), "{label}");
        }
        let rules: Vec<_> = shop.trace.iter().map(|t| t.rule.as_str()).collect();
        assert!(rules.contains(&"realtime-inference"));
        assert!(rules.contains(&"parallel-transforms"));

        // Just below both thresholds nothing is added.
        let below = PriorityVector::from_values([6, 0, 0, 6, 0, 0]).unwrap();
        let plain = run(&catalog, FocusCategory::ECommerce, &below, "");
        assert!(!plain.components.contains(&GLUE.into()));
        assert!(!plain.components.contains(&ENDPOINT.into()));
    }

    #[test]
    fn serverless_exposes_athena_behind_api_gateway() {
        let catalog = Catalog::builtin();
        let sel = run(&catalog, FocusCategory::Serverless, &low(), "");
        assert_eq!(
            sel.components.labels(),
            vec![API_GATEWAY, LAMBDA, DYNAMODB, S3, ATHENA, EVENTBRIDGE, CLOUDWATCH]
        );
    }

    #[test]
    fn near_duplicate_labels_are_distinct() {
        let catalog = Catalog::builtin();
        let p = low().with(Dimension::CostSensitivity, 9).unwrap();
        let shop = run(&catalog, FocusCategory::ECommerce, &p, "");
        assert!(shop.components.contains(&LAMBDA.into()));
        assert!(!shop.components.contains(&FARGATE.into()));

        // Microservices uses the other spelling, which the substitution does not know.
        let micro = run(&catalog, FocusCategory::Microservices, &p, "");
        assert!(micro.components.contains(&EKS_FARGATE.into()));
        assert!(!micro.components.contains(&LAMBDA.into()));
    }

    #[test]
    fn keyword_edits_run_before_threshold_edits() {
        let mut catalog = Catalog::builtin();
        catalog.keyword_rules = vec![KeywordRule {
            id: "cache-word".into(),
            advisor: Advisor::DataArchitect,
            any_of: vec!["cache".into()],
            edits: vec![Edit::Append(AURORA.into())],
            rationale: String::new(),
        }];
        catalog.threshold_rules = vec![ThresholdRule {
            id: "cache-perf".into(),
            advisor: Advisor::DataArchitect,
            dimension: Dimension::Performance,
            edits: vec![Edit::Substitute {
                from: AURORA.into(),
                to: AURORA_CACHED.into(),
            }],
            rationale: String::new(),
        }];
        let p = low().with(Dimension::Performance, 10).unwrap();
        let sel = run(&catalog, FocusCategory::ApiPlatform, &p, "needs a cache");
        assert!(sel.components.contains(&AURORA_CACHED.into()));
        assert!(!sel.components.contains(&AURORA.into()));
    }
}
