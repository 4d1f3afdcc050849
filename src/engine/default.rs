//! Built-in rule engine: catalog rules plus declarative custom rules.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CustomRuleFile, CustomRuleSpec, ScanConfig};
use crate::rules::types::{FlowScanResult, Occurrence, RuleOutcome, Severity};
use crate::rules::{self, Rule};

use super::parser::{FlowParser, ParsedFlow};
use super::{EngineError, RuleEngine};

/// Default pattern-based rule engine.
#[derive(Debug, Default)]
pub struct DefaultEngine {
    parser: FlowParser,
}

impl DefaultEngine {
    pub fn new() -> Self {
        Self {
            parser: FlowParser::new(),
        }
    }

    fn evaluate_flow(
        &self,
        flow: &ParsedFlow,
        catalog: &[Rule],
        config: Option<&ScanConfig>,
        custom: &[CompiledCustomRule],
    ) -> FlowScanResult {
        let mut outcomes = Vec::new();

        for rule in catalog {
            let settings = config.and_then(|c| c.rules.get(rule.id));
            if settings.is_some_and(|s| s.disabled) {
                continue;
            }

            let details = (rule.check)(flow);
            outcomes.push(RuleOutcome {
                rule_label: rule.label.to_string(),
                rule_description: rule.description.to_string(),
                severity: settings.and_then(|s| s.severity.clone()),
                occurs: !details.is_empty(),
                details,
            });
        }

        for rule in custom {
            let details = rule.check(flow);
            outcomes.push(RuleOutcome {
                rule_label: rule.label.clone(),
                rule_description: rule.description.clone(),
                severity: rule.severity.clone(),
                occurs: !details.is_empty(),
                details,
            });
        }

        FlowScanResult {
            flow_label: flow.label.clone(),
            flow_name: flow.name.clone(),
            flow_type: flow.process_type.clone(),
            source_path: flow.source_path.clone(),
            outcomes,
        }
    }
}

impl RuleEngine for DefaultEngine {
    fn parse(&self, paths: &[PathBuf]) -> Result<Vec<ParsedFlow>, EngineError> {
        paths.iter().map(|p| self.parser.parse_file(p)).collect()
    }

    fn evaluate(
        &self,
        flows: &[ParsedFlow],
        config: Option<&ScanConfig>,
    ) -> Result<Vec<FlowScanResult>, EngineError> {
        let catalog = rules::catalog();
        let custom = match config {
            Some(c) => load_custom_rules(&c.custom_rules)?,
            None => Vec::new(),
        };

        Ok(flows
            .iter()
            .map(|flow| self.evaluate_flow(flow, &catalog, config, &custom))
            .collect())
    }
}

/// A custom rule compiled from a declarative file.
struct CompiledCustomRule {
    label: String,
    description: String,
    element_type: String,
    severity: Option<Severity>,
    patterns: Vec<Regex>,
}

impl CompiledCustomRule {
    fn check(&self, flow: &ParsedFlow) -> Vec<Occurrence> {
        let mut details = Vec::new();
        for (index, line) in flow.content.lines().enumerate() {
            if self.patterns.iter().any(|p| p.is_match(line)) {
                details.push(
                    Occurrence::new(line.trim().to_string(), self.element_type.clone())
                        .with_detail(format!("line {}", index + 1)),
                );
            }
        }
        details
    }
}

fn load_custom_rules(specs: &[CustomRuleSpec]) -> Result<Vec<CompiledCustomRule>, EngineError> {
    specs.iter().map(load_custom_rule).collect()
}

fn load_custom_rule(spec: &CustomRuleSpec) -> Result<CompiledCustomRule, EngineError> {
    // The execution policy rejects these before the engine runs; seeing one
    // here means the engine was called without vetting.
    if spec.expression.is_some() {
        return Err(EngineError::InvalidCustomRule {
            name: spec.name.clone(),
            message: "inline expressions are not supported".to_string(),
        });
    }

    let source = spec
        .source
        .as_deref()
        .ok_or_else(|| EngineError::InvalidCustomRule {
            name: spec.name.clone(),
            message: "missing source".to_string(),
        })?;

    let path = Path::new(source);
    let content = fs::read_to_string(path).map_err(|e| EngineError::InvalidCustomRule {
        name: spec.name.clone(),
        message: format!("cannot read {source}: {e}"),
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let file: CustomRuleFile = match ext.as_str() {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| EngineError::InvalidCustomRule {
                name: spec.name.clone(),
                message: e.to_string(),
            })?
        }
        "json" => serde_json::from_str(&content).map_err(|e| EngineError::InvalidCustomRule {
            name: spec.name.clone(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(EngineError::InvalidCustomRule {
                name: spec.name.clone(),
                message: format!("unsupported rule format .{ext}"),
            });
        }
    };

    let patterns = file
        .patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| EngineError::InvalidCustomRule {
                name: spec.name.clone(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledCustomRule {
        label: file.label,
        description: file.description,
        element_type: file.element_type,
        severity: spec.severity.clone(),
        patterns,
    })
}
