//! # Section C — Principle-Wise Performance Disclosures
//!
//! One canonical shape per NGRBC principle. Every principle carries an
//! `essential_indicators` subtree (mandatory disclosures) and a
//! `leadership_indicators` subtree (voluntary disclosures). Completion is
//! judged on the essential indicators only.

use serde_json::{json, Value};

use crate::required::RequiredCheck;

/// Principle 1 — ethics, transparency and accountability.
pub fn p1_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "training_coverage": {
                "board_percentage": 0,
                "kmp_percentage": 0,
                "employees_percentage": 0,
                "workers_percentage": 0
            },
            "fines_penalties": [
                {
                    "authority": "",
                    "amount": 0,
                    "brief": "",
                    "appeal_preferred": false
                }
            ],
            "anti_corruption_policy": {
                "has_policy": false,
                "web_link": ""
            },
            "disciplinary_actions": {
                "directors": 0,
                "kmps": 0,
                "employees": 0,
                "workers": 0
            },
            "conflict_of_interest_complaints": {
                "received": 0,
                "resolved": 0
            }
        },
        "leadership_indicators": {
            "awareness_programmes": [
                {
                    "audience": "",
                    "topics": "",
                    "coverage_percentage": 0
                }
            ],
            "conflict_of_interest_process": ""
        }
    })
}

/// Principle 2 — sustainable and safe goods and services.
pub fn p2_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "rd_capex_percentages": {
                "rd_percentage": 0,
                "capex_percentage": 0,
                "improvement_details": ""
            },
            "sustainable_sourcing": {
                "has_procedures": false,
                "sourced_sustainably_percentage": 0
            },
            "reclamation_processes": {
                "plastics": "",
                "e_waste": "",
                "hazardous_waste": "",
                "other_waste": ""
            },
            "epr_applicable": false
        },
        "leadership_indicators": {
            "lca_conducted": [
                {
                    "product_service": "",
                    "nic_code": "",
                    "turnover_percentage": 0,
                    "boundary": "",
                    "results_public": false
                }
            ],
            "recycled_input_percentage": 0
        }
    })
}

/// Principle 3 — employee wellbeing.
pub fn p3_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "wellbeing_measures": {
                "health_insurance_percentage": 0,
                "accident_insurance_percentage": 0,
                "maternity_benefits_percentage": 0,
                "paternity_benefits_percentage": 0,
                "daycare_percentage": 0
            },
            "retirement_benefits": {
                "pf_coverage_percentage": 0,
                "gratuity_coverage_percentage": 0,
                "esi_coverage_percentage": 0
            },
            "accessibility_of_workplaces": false,
            "equal_opportunity_policy": {
                "has_policy": false,
                "web_link": ""
            },
            "safety_incidents": {
                "ltifr": 0,
                "recordable_injuries": 0,
                "fatalities": 0,
                "high_consequence_injuries": 0
            }
        },
        "leadership_indicators": {
            "life_insurance_extended": false,
            "transition_assistance_programmes": ""
        }
    })
}

/// Principle 4 — stakeholder interests and responsiveness.
pub fn p4_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "stakeholder_identification_process": "",
            "stakeholder_groups": [
                {
                    "group": "",
                    "vulnerable_marginalized": false,
                    "channels": "",
                    "engagement_frequency": "",
                    "purpose": ""
                }
            ]
        },
        "leadership_indicators": {
            "board_consultation_process": "",
            "vulnerable_group_actions": ""
        }
    })
}

/// Principle 5 — human rights.
pub fn p5_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "hr_training": {
                "employees_trained_percentage": 0,
                "workers_trained_percentage": 0
            },
            "minimum_wages": {
                "employees_equal_or_above_percentage": 0,
                "workers_equal_or_above_percentage": 0
            },
            "remuneration": {
                "median_male_bod": 0,
                "median_female_bod": 0,
                "median_male_kmp": 0,
                "median_female_kmp": 0
            },
            "hr_complaints": {
                "received": 0,
                "resolved": 0,
                "mechanism": ""
            },
            "posh_complaints": {
                "received": 0,
                "resolved": 0
            }
        },
        "leadership_indicators": {
            "hr_due_diligence_scope": "",
            "accessibility_for_disabled": false
        }
    })
}

/// Principle 6 — environment protection and restoration.
pub fn p6_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "energy": {
                "electricity_consumption": 0,
                "fuel_consumption": 0,
                "other_sources": 0,
                "intensity_per_turnover": 0
            },
            "water": {
                "withdrawal_surface": 0,
                "withdrawal_ground": 0,
                "withdrawal_third_party": 0,
                "total_consumption": 0,
                "intensity_per_turnover": 0
            },
            "emissions": {
                "scope1_total": 0,
                "scope2_total": 0,
                "intensity_per_turnover": 0
            },
            "waste": {
                "plastic_generated": 0,
                "e_waste_generated": 0,
                "hazardous_generated": 0,
                "recycled": 0,
                "disposed": 0
            },
            "zld_implemented": false
        },
        "leadership_indicators": {
            "scope3_total": 0,
            "biodiversity_impact_details": "",
            "green_credits_generated": 0
        }
    })
}

/// Principle 7 — responsible and transparent public policy advocacy.
pub fn p7_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "trade_affiliations_count": 0,
            "trade_affiliations": [
                {
                    "name": "",
                    "reach": ""
                }
            ],
            "anti_competitive_actions": [
                {
                    "authority": "",
                    "brief": "",
                    "corrective_action": ""
                }
            ]
        },
        "leadership_indicators": {
            "public_policy_positions": [
                {
                    "policy_advocated": "",
                    "method": "",
                    "board_review_frequency": "",
                    "web_link": ""
                }
            ]
        }
    })
}

/// Principle 8 — inclusive growth and equitable development.
pub fn p8_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "social_impact_assessments": [
                {
                    "project": "",
                    "sia_notification_no": "",
                    "date": "",
                    "conducted_by_external": false,
                    "results_public": false
                }
            ],
            "rehabilitation_projects": [
                {
                    "project": "",
                    "state": "",
                    "district": "",
                    "families_affected": 0,
                    "amounts_paid": 0
                }
            ],
            "community_grievance_mechanism": "",
            "input_sourcing": {
                "directly_from_msme_percentage": 0,
                "directly_from_district_percentage": 0
            }
        },
        "leadership_indicators": {
            "csr_aspirational_districts": [
                {
                    "state": "",
                    "district": "",
                    "amount_spent": 0
                }
            ],
            "ip_benefit_sharing": ""
        }
    })
}

/// Principle 9 — consumer value and responsible engagement.
pub fn p9_default_shape() -> Value {
    json!({
        "essential_indicators": {
            "consumer_complaint_mechanism": "",
            "product_information_turnover_percentage": 0,
            "consumer_complaints": {
                "data_privacy_received": 0,
                "data_privacy_resolved": 0,
                "advertising_received": 0,
                "advertising_resolved": 0,
                "delivery_received": 0,
                "delivery_resolved": 0
            },
            "product_recalls": {
                "voluntary_count": 0,
                "forced_count": 0,
                "reasons": ""
            },
            "cyber_security_policy": {
                "has_policy": false,
                "web_link": ""
            }
        },
        "leadership_indicators": {
            "product_information_channels": "",
            "consumer_survey_conducted": false
        }
    })
}

/// One `essential_indicators` check per principle — a principle counts as
/// complete once any essential disclosure has been meaningfully filled.
macro_rules! essential_required {
    ($name:ident) => {
        pub const $name: &[RequiredCheck] = &[RequiredCheck::any_truthy(
            "essential_indicators",
            "Essential indicators",
        )];
    };
}

essential_required!(P1_REQUIRED);
essential_required!(P2_REQUIRED);
essential_required!(P3_REQUIRED);
essential_required!(P4_REQUIRED);
essential_required!(P5_REQUIRED);
essential_required!(P6_REQUIRED);
essential_required!(P7_REQUIRED);
essential_required!(P8_REQUIRED);
essential_required!(P9_REQUIRED);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_principle_has_both_indicator_subtrees() {
        let shapes = [
            p1_default_shape(),
            p2_default_shape(),
            p3_default_shape(),
            p4_default_shape(),
            p5_default_shape(),
            p6_default_shape(),
            p7_default_shape(),
            p8_default_shape(),
            p9_default_shape(),
        ];
        for (i, shape) in shapes.iter().enumerate() {
            assert!(
                shape["essential_indicators"].is_object(),
                "principle {} missing essential_indicators",
                i + 1
            );
            assert!(
                shape["leadership_indicators"].is_object(),
                "principle {} missing leadership_indicators",
                i + 1
            );
        }
    }

    #[test]
    fn p6_energy_block_is_zeroed() {
        let shape = p6_default_shape();
        assert_eq!(
            shape["essential_indicators"]["energy"]["electricity_consumption"],
            0
        );
    }

    #[test]
    fn p1_fines_template_row_exists() {
        let shape = p1_default_shape();
        let rows = shape["essential_indicators"]["fines_penalties"]
            .as_array()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["appeal_preferred"], false);
    }
}
