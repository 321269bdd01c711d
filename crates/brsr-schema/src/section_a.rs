//! # Section A — General Disclosures
//!
//! Entity details, business activities, products/services, markets served,
//! employee and worker details, holding/subsidiary/associate companies,
//! CSR applicability, and transparency/grievance disclosures.

use serde_json::{json, Value};

use crate::required::RequiredCheck;

/// Canonical default shape for `section_a_data`.
pub fn default_shape() -> Value {
    json!({
        "sa_entity_details": {
            "cin": "",
            "name": "",
            "year_of_incorporation": 0,
            "registered_office_address": "",
            "corporate_address": "",
            "email": "",
            "telephone": "",
            "website": "",
            "financial_year": "",
            "paid_up_capital": 0,
            "reporting_boundary": ""
        },
        "sa_stock_exchanges": [""],
        "sa_business_activities": [
            {
                "main_activity": "",
                "business_description": "",
                "turnover_percentage": 0
            }
        ],
        "sa_products_services": [
            {
                "product_service": "",
                "nic_code": "",
                "turnover_contributed": 0
            }
        ],
        "sa_markets_served": {
            "locations": {
                "national_states": 0,
                "international_countries": 0
            },
            "exports_percentage": 0,
            "customer_types": ""
        },
        "sa_employee_details": {
            "permanent_male": 0,
            "permanent_female": 0,
            "other_male": 0,
            "other_female": 0,
            "worker_permanent_male": 0,
            "worker_permanent_female": 0,
            "worker_other_male": 0,
            "worker_other_female": 0,
            "differently_abled_male": 0,
            "differently_abled_female": 0
        },
        "sa_participation_of_women": {
            "board_total": 0,
            "board_women": 0,
            "kmp_total": 0,
            "kmp_women": 0
        },
        "sa_turnover_rate": {
            "permanent_employees": 0,
            "permanent_workers": 0
        },
        "sa_holding_companies": [
            {
                "name": "",
                "cin_or_country": "",
                "relationship": "",
                "percentage_held": 0
            }
        ],
        "sa_csr": {
            "applicable": false,
            "turnover": 0,
            "net_worth": 0
        },
        "sa_transparency": {
            "grievance_mechanism": "",
            "complaints_received": 0,
            "complaints_resolved": 0
        }
    })
}

/// Required-field checks for Section A.
pub const REQUIRED: &[RequiredCheck] = &[
    RequiredCheck::filled("sa_entity_details.cin", "Corporate identity number"),
    RequiredCheck::filled("sa_entity_details.name", "Name of the listed entity"),
    RequiredCheck::filled("sa_entity_details.financial_year", "Financial year"),
    RequiredCheck::filled("sa_business_activities", "Business activities"),
    RequiredCheck::filled("sa_products_services", "Products and services"),
    RequiredCheck::any_truthy("sa_markets_served", "Markets served"),
    RequiredCheck::any_truthy("sa_employee_details", "Employee and worker details"),
];
