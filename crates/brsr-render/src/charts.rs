//! # Chart Dataset Builders
//!
//! Pure transforms from reconciled section data to labeled series. The
//! datasets are the wire contract with whatever draws the pixels; nothing
//! here knows about colors, canvases, or image formats.
//!
//! Absent or malformed fields read as zero — charts over a half-finished
//! draft render with gaps rather than failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use brsr_core::FieldPath;
use brsr_form::get_path;

/// Error parsing a chart kind from a request path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown chart kind: '{0}'")]
pub struct UnknownChartKind(pub String);

/// The chart surfaces the report UI knows how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Permanent/other employee and worker headcounts by gender (Section A).
    EmployeeComposition,
    /// Turnover percentage per business activity row (Section A).
    TurnoverByActivity,
    /// Policy coverage across the nine principles (Section B).
    PolicyCoverage,
}

impl ChartKind {
    /// Wire name used in chart request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeComposition => "employee_composition",
            Self::TurnoverByActivity => "turnover_by_activity",
            Self::PolicyCoverage => "policy_coverage",
        }
    }
}

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee_composition" => Ok(Self::EmployeeComposition),
            "turnover_by_activity" => Ok(Self::TurnoverByActivity),
            "policy_coverage" => Ok(Self::PolicyCoverage),
            other => Err(UnknownChartKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series name, shown in the legend.
    pub name: String,
    /// One value per label.
    pub values: Vec<f64>,
}

/// A renderable dataset: labels on one axis, one or more series on the
/// other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Chart title.
    pub title: String,
    /// Category labels.
    pub labels: Vec<String>,
    /// The series, legend order.
    pub series: Vec<ChartSeries>,
}

/// Build the requested dataset from the relevant section's data.
///
/// `section_a` feeds the employment and turnover charts; `section_b`
/// feeds policy coverage.
pub fn build(kind: ChartKind, section_a: &Value, section_b: &Value) -> ChartDataset {
    match kind {
        ChartKind::EmployeeComposition => employee_composition(section_a),
        ChartKind::TurnoverByActivity => turnover_by_activity(section_a),
        ChartKind::PolicyCoverage => policy_coverage(section_b),
    }
}

/// Read a numeric leaf, defaulting to zero.
fn number_at(data: &Value, path: &str) -> f64 {
    path.parse::<FieldPath>()
        .ok()
        .and_then(|p| get_path(data, &p).and_then(Value::as_f64))
        .unwrap_or(0.0)
}

/// Permanent/other employees and workers, split by gender.
pub fn employee_composition(section_a: &Value) -> ChartDataset {
    let labels = vec![
        "Permanent employees".to_string(),
        "Other employees".to_string(),
        "Permanent workers".to_string(),
        "Other workers".to_string(),
    ];
    let male = vec![
        number_at(section_a, "sa_employee_details.permanent_male"),
        number_at(section_a, "sa_employee_details.other_male"),
        number_at(section_a, "sa_employee_details.worker_permanent_male"),
        number_at(section_a, "sa_employee_details.worker_other_male"),
    ];
    let female = vec![
        number_at(section_a, "sa_employee_details.permanent_female"),
        number_at(section_a, "sa_employee_details.other_female"),
        number_at(section_a, "sa_employee_details.worker_permanent_female"),
        number_at(section_a, "sa_employee_details.worker_other_female"),
    ];
    ChartDataset {
        title: "Employees and workers".to_string(),
        labels,
        series: vec![
            ChartSeries {
                name: "Male".to_string(),
                values: male,
            },
            ChartSeries {
                name: "Female".to_string(),
                values: female,
            },
        ],
    }
}

/// Turnover percentage contributed by each business activity row.
pub fn turnover_by_activity(section_a: &Value) -> ChartDataset {
    let rows = section_a
        .get("sa_business_activities")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut labels = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let label = row
            .get("main_activity")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Activity {}", i + 1));
        labels.push(label);
        values.push(row.get("turnover_percentage").and_then(Value::as_f64).unwrap_or(0.0));
    }

    ChartDataset {
        title: "Turnover by business activity".to_string(),
        labels,
        series: vec![ChartSeries {
            name: "Turnover %".to_string(),
            values,
        }],
    }
}

/// Which principles are covered by a board-approved policy.
pub fn policy_coverage(section_b: &Value) -> ChartDataset {
    let rows = section_b
        .get("sb_policy_matrix")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let labels: Vec<String> = (1..=9).map(|p| format!("P{p}")).collect();
    let mut has_policy = vec![0.0; 9];
    let mut board_approved = vec![0.0; 9];
    for row in &rows {
        let principle = row.get("principle").and_then(Value::as_u64).unwrap_or(0);
        if !(1..=9).contains(&principle) {
            continue;
        }
        let slot = (principle - 1) as usize;
        if row.get("has_policy").and_then(Value::as_bool).unwrap_or(false) {
            has_policy[slot] = 1.0;
        }
        if row.get("board_approved").and_then(Value::as_bool).unwrap_or(false) {
            board_approved[slot] = 1.0;
        }
    }

    ChartDataset {
        title: "Policy coverage by principle".to_string(),
        labels,
        series: vec![
            ChartSeries {
                name: "Has policy".to_string(),
                values: has_policy,
            },
            ChartSeries {
                name: "Board approved".to_string(),
                values: board_approved,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_composition_reads_counts() {
        let section_a = json!({
            "sa_employee_details": {
                "permanent_male": 120,
                "permanent_female": 80,
                "worker_permanent_male": 300
            }
        });
        let dataset = employee_composition(&section_a);
        assert_eq!(dataset.series[0].values[0], 120.0);
        assert_eq!(dataset.series[1].values[0], 80.0);
        assert_eq!(dataset.series[0].values[2], 300.0);
        // Absent fields read as zero.
        assert_eq!(dataset.series[1].values[3], 0.0);
    }

    #[test]
    fn turnover_by_activity_labels_unnamed_rows() {
        let section_a = json!({
            "sa_business_activities": [
                {"main_activity": "Cement", "turnover_percentage": 70},
                {"main_activity": "", "turnover_percentage": 30}
            ]
        });
        let dataset = turnover_by_activity(&section_a);
        assert_eq!(dataset.labels, vec!["Cement", "Activity 2"]);
        assert_eq!(dataset.series[0].values, vec![70.0, 30.0]);
    }

    #[test]
    fn turnover_chart_over_missing_data_is_empty() {
        let dataset = turnover_by_activity(&json!({}));
        assert!(dataset.labels.is_empty());
        assert!(dataset.series[0].values.is_empty());
    }

    #[test]
    fn policy_coverage_slots_by_principle() {
        let section_b = json!({
            "sb_policy_matrix": [
                {"principle": 1, "has_policy": true, "board_approved": true},
                {"principle": 6, "has_policy": true, "board_approved": false},
                {"principle": 99, "has_policy": true}
            ]
        });
        let dataset = policy_coverage(&section_b);
        assert_eq!(dataset.labels.len(), 9);
        assert_eq!(dataset.series[0].values[0], 1.0);
        assert_eq!(dataset.series[1].values[0], 1.0);
        assert_eq!(dataset.series[0].values[5], 1.0);
        assert_eq!(dataset.series[1].values[5], 0.0);
        // Out-of-range principle rows are ignored.
        assert_eq!(dataset.series[0].values.iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn chart_kind_roundtrips() {
        for kind in [
            ChartKind::EmployeeComposition,
            ChartKind::TurnoverByActivity,
            ChartKind::PolicyCoverage,
        ] {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
        assert!("pie_of_everything".parse::<ChartKind>().is_err());
    }
}
