//! # Section Keys
//!
//! The closed universe of BRSR report sections. A report is Section A
//! (general disclosures), Section B (management and process disclosures),
//! and Section C (principle-wise performance, one subtree per NGRBC
//! principle).
//!
//! The enum serializes to the persisted wire names (`section_a_data`,
//! `sc_p1_ethical_conduct`, …) so it can be used directly as a JSON map
//! key. `from_str` is the only path from untrusted strings into the enum
//! and rejects anything outside the universe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// One named subtree of a BRSR report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKey {
    /// Section A — general disclosures (entity details, activities,
    /// markets, employees, holdings, CSR).
    #[serde(rename = "section_a_data")]
    SectionA,
    /// Section B — management and process disclosures (policy matrix,
    /// governance, director statement).
    #[serde(rename = "section_b_data")]
    SectionB,
    /// Principle 1 — ethics, transparency and accountability.
    #[serde(rename = "sc_p1_ethical_conduct")]
    P1EthicalConduct,
    /// Principle 2 — sustainable and safe goods and services.
    #[serde(rename = "sc_p2_product_sustainability")]
    P2ProductSustainability,
    /// Principle 3 — employee wellbeing, including value chains.
    #[serde(rename = "sc_p3_employee_wellbeing")]
    P3EmployeeWellbeing,
    /// Principle 4 — stakeholder interests and responsiveness.
    #[serde(rename = "sc_p4_stakeholder_engagement")]
    P4StakeholderEngagement,
    /// Principle 5 — human rights.
    #[serde(rename = "sc_p5_human_rights")]
    P5HumanRights,
    /// Principle 6 — environment protection and restoration.
    #[serde(rename = "sc_p6_environment")]
    P6Environment,
    /// Principle 7 — responsible and transparent public policy advocacy.
    #[serde(rename = "sc_p7_policy_advocacy")]
    P7PolicyAdvocacy,
    /// Principle 8 — inclusive growth and equitable development.
    #[serde(rename = "sc_p8_inclusive_growth")]
    P8InclusiveGrowth,
    /// Principle 9 — consumer value and responsible engagement.
    #[serde(rename = "sc_p9_consumer_value")]
    P9ConsumerValue,
}

impl SectionKey {
    /// Every section of a BRSR report, in filing order.
    pub const ALL: [SectionKey; 11] = [
        Self::SectionA,
        Self::SectionB,
        Self::P1EthicalConduct,
        Self::P2ProductSustainability,
        Self::P3EmployeeWellbeing,
        Self::P4StakeholderEngagement,
        Self::P5HumanRights,
        Self::P6Environment,
        Self::P7PolicyAdvocacy,
        Self::P8InclusiveGrowth,
        Self::P9ConsumerValue,
    ];

    /// Return the persisted wire name of this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SectionA => "section_a_data",
            Self::SectionB => "section_b_data",
            Self::P1EthicalConduct => "sc_p1_ethical_conduct",
            Self::P2ProductSustainability => "sc_p2_product_sustainability",
            Self::P3EmployeeWellbeing => "sc_p3_employee_wellbeing",
            Self::P4StakeholderEngagement => "sc_p4_stakeholder_engagement",
            Self::P5HumanRights => "sc_p5_human_rights",
            Self::P6Environment => "sc_p6_environment",
            Self::P7PolicyAdvocacy => "sc_p7_policy_advocacy",
            Self::P8InclusiveGrowth => "sc_p8_inclusive_growth",
            Self::P9ConsumerValue => "sc_p9_consumer_value",
        }
    }

    /// Human-readable section title, as shown on the checklist.
    pub fn title(&self) -> &'static str {
        match self {
            Self::SectionA => "Section A: General Disclosures",
            Self::SectionB => "Section B: Management and Process Disclosures",
            Self::P1EthicalConduct => "Principle 1: Ethical Conduct",
            Self::P2ProductSustainability => "Principle 2: Product Sustainability",
            Self::P3EmployeeWellbeing => "Principle 3: Employee Wellbeing",
            Self::P4StakeholderEngagement => "Principle 4: Stakeholder Engagement",
            Self::P5HumanRights => "Principle 5: Human Rights",
            Self::P6Environment => "Principle 6: Environment",
            Self::P7PolicyAdvocacy => "Principle 7: Policy Advocacy",
            Self::P8InclusiveGrowth => "Principle 8: Inclusive Growth",
            Self::P9ConsumerValue => "Principle 9: Consumer Value",
        }
    }
}

impl FromStr for SectionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSectionKey(s.to_string()))
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
