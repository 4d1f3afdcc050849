//! Built-in rule catalog.
//!
//! Each rule is a declarative record with a check function over a parsed
//! flow. Rules carry no inherent severity; severity comes from configuration
//! and defaults to `error` during aggregation.

use crate::engine::ParsedFlow;
use crate::rules::types::Occurrence;
use regex::Regex;

/// A single policy rule.
pub struct Rule {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub check: fn(&ParsedFlow) -> Vec<Occurrence>,
}

/// All built-in rules, in evaluation order.
pub fn catalog() -> Vec<Rule> {
    vec![
        missing_flow_description(),
        inactive_flow_status(),
        outdated_api_version(),
        hardcoded_record_id(),
        copy_api_name(),
        missing_fault_path(),
    ]
}

fn missing_flow_description() -> Rule {
    Rule {
        id: "missing-flow-description",
        label: "Missing Flow Description",
        description: "Flows should describe their purpose so future maintainers understand the automation without reading every element",
        check: |flow| {
            let has_description = Regex::new(r"(?m)^[ \t]{0,4}<description>")
                .unwrap()
                .is_match(&flow.content);
            if has_description {
                Vec::new()
            } else {
                vec![Occurrence::new(flow.name.clone(), "Flow")]
            }
        },
    }
}

fn inactive_flow_status() -> Rule {
    Rule {
        id: "inactive-flow-status",
        label: "Inactive Flow",
        description: "Draft and obsolete flows linger in version control and ship dead automation; activate or delete them",
        check: |flow| match flow.status.as_deref() {
            Some("Draft") | Some("InvalidDraft") | Some("Obsolete") => {
                vec![
                    Occurrence::new(flow.name.clone(), "Flow")
                        .with_detail(flow.status.clone().unwrap_or_default()),
                ]
            }
            _ => Vec::new(),
        },
    }
}

fn outdated_api_version() -> Rule {
    Rule {
        id: "outdated-api-version",
        label: "Outdated API Version",
        description: "Flows pinned to old API versions miss platform fixes and newer engine behavior",
        check: |flow| match flow.api_version {
            Some(version) if version < 50 => {
                vec![
                    Occurrence::new(flow.name.clone(), "apiVersion")
                        .with_detail(version.to_string()),
                ]
            }
            _ => Vec::new(),
        },
    }
}

fn hardcoded_record_id() -> Rule {
    Rule {
        id: "hardcoded-record-id",
        label: "Hardcoded Record Id",
        description: "Record ids baked into a flow break between environments; resolve records by query or input instead",
        check: |flow| {
            let pattern =
                Regex::new(r"<stringValue>([0-9A-Za-z]{18}|[0-9A-Za-z]{15})</stringValue>")
                    .unwrap();
            pattern
                .captures_iter(&flow.content)
                .map(|c| c[1].to_string())
                .filter(|id| looks_like_record_id(id))
                .map(|id| Occurrence::new(id.clone(), "stringValue").with_detail(id))
                .collect()
        },
    }
}

fn copy_api_name() -> Rule {
    Rule {
        id: "copy-api-name",
        label: "Copied Element Name",
        description: "Element names like Copy_1_of_X come from copy-pasting in the builder and say nothing about what the element does",
        check: |flow| {
            let pattern = Regex::new(r"<name>(Copy_[0-9]+_of_[A-Za-z0-9_]+)</name>").unwrap();
            pattern
                .captures_iter(&flow.content)
                .map(|c| Occurrence::new(c[1].to_string(), "name"))
                .collect()
        },
    }
}

fn missing_fault_path() -> Rule {
    Rule {
        id: "missing-fault-path",
        label: "Missing Fault Path",
        description: "Data operations without a fault connector fail with an unhandled flow error instead of a controlled path",
        check: |flow| {
            let mut occurrences = Vec::new();
            for element in [
                "recordCreates",
                "recordUpdates",
                "recordDeletes",
                "recordLookups",
                "actionCalls",
            ] {
                let block = Regex::new(&format!(r"(?s)<{element}>(.*?)</{element}>")).unwrap();
                let name_tag = Regex::new(r"<name>([^<]+)</name>").unwrap();
                for captures in block.captures_iter(&flow.content) {
                    let body = &captures[1];
                    if body.contains("<faultConnector>") {
                        continue;
                    }
                    let name = name_tag
                        .captures(body)
                        .map(|c| c[1].to_string())
                        .unwrap_or_else(|| element.to_string());
                    occurrences.push(Occurrence::new(name, element));
                }
            }
            occurrences
        },
    }
}

/// Record ids mix cases and digits; plain words of the right length do not.
fn looks_like_record_id(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
        && candidate.chars().any(|c| c.is_ascii_uppercase())
        && candidate.chars().any(|c| c.is_ascii_lowercase())
}
