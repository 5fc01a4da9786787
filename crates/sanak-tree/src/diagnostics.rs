//! Structural diagnostics for a loaded family graph
//!
//! The kinship engine tolerates malformed graphs, so these checks report
//! problems without rejecting the document.

use sanak_domain::{ancestors_of, KinshipGraph, Person, PersonId};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Labels may look odd but are still produced
    Warning,
    /// Labels involving these people are unreliable
    Error,
}

impl Severity {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity of the finding
    pub severity: Severity,

    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Run every structural check, in a stable order
pub fn diagnose(people: &[Person], graph: &KinshipGraph) -> Vec<Diagnostic> {
    let known: HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
    let mut findings = Vec::new();

    check_edges(&known, graph, &mut findings);
    check_parent_counts(graph, &mut findings);
    check_cycles(graph, &mut findings);

    findings
}

fn check_edges(known: &HashSet<&str>, graph: &KinshipGraph, findings: &mut Vec<Diagnostic>) {
    let mut reported = HashSet::new();

    for edge in graph.edges() {
        if edge.source == edge.target {
            findings.push(Diagnostic::error(format!(
                "'{}' has a {} relationship with itself",
                edge.source,
                edge.kind.as_str()
            )));
        }

        for id in [&edge.source, &edge.target] {
            if !known.contains(id.as_str()) && reported.insert(id.clone()) {
                findings.push(Diagnostic::warning(format!(
                    "relationship refers to unknown person '{}'",
                    id
                )));
            }
        }
    }
}

fn check_parent_counts(graph: &KinshipGraph, findings: &mut Vec<Diagnostic>) {
    for child in edge_ids(graph) {
        let biological = graph
            .parents_of(child.as_str())
            .iter()
            .filter(|parent| !graph.is_foster_link(parent.as_str(), child.as_str()))
            .count();

        if biological > 2 {
            findings.push(Diagnostic::warning(format!(
                "'{}' has {} biological parents",
                child, biological
            )));
        }
    }
}

fn check_cycles(graph: &KinshipGraph, findings: &mut Vec<Diagnostic>) {
    for id in edge_ids(graph) {
        let in_cycle = graph
            .parents_of(id.as_str())
            .iter()
            .filter(|parent| **parent != id)
            .any(|parent| ancestors_of(parent.as_str(), graph).contains_key(&id));

        if in_cycle {
            findings.push(Diagnostic::error(format!("'{}' is their own ancestor", id)));
        }
    }
}

/// Every id mentioned by an edge, in first-seen order
fn edge_ids(graph: &KinshipGraph) -> Vec<PersonId> {
    let mut seen = HashSet::new();
    graph
        .edges()
        .iter()
        .flat_map(|edge| [&edge.source, &edge.target])
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
