//! Fixed catalogs of services, industries, and inquiry select options.
//!
//! These are the enumerated sets the site renders and the inquiry form draws
//! from. The service titles double as the labels carried in the submitted
//! `services` list.

/// One consulting offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// One industry vertical with its highlight bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Systems Integrations",
        blurb: "Connect ERPs, MES, LIMS, and devices for real-time data flow.",
    },
    Service {
        title: "Project Management Apps",
        blurb: "Custom workflows, dashboards, and role-based operations.",
    },
    Service {
        title: "AI Workflows & Automations",
        blurb: "Predictive, rules-driven, and LLM-powered automations.",
    },
    Service {
        title: "Custom Chatbots",
        blurb: "Domain-trained assistants for teams and customers.",
    },
];

pub const INDUSTRIES: [Industry; 2] = [
    Industry {
        title: "Manufacturing",
        bullets: &[
            "ERP/MES integrations",
            "Predictive maintenance",
            "Quality automation",
        ],
    },
    Industry {
        title: "Healthcare",
        bullets: &[
            "EHR/EMR integrations",
            "Clinical workflows",
            "HIPAA-ready foundations",
        ],
    },
];

/// Budget select options as `(value, label)` pairs. The empty value is the
/// unselected sentinel.
pub const BUDGET_OPTIONS: [(&str, &str); 3] = [
    ("< $10k", "Less than $10k"),
    ("$10k–$50k", "$10k–$50k"),
    ("> $50k", "More than $50k"),
];

pub const TIMELINE_OPTIONS: [&str; 3] = ["ASAP", "This quarter", "This year"];

/// Whether a label names a cataloged service.
pub fn is_known_service(label: &str) -> bool {
    SERVICES.iter().any(|service| service.title == label)
}

/// Industry preselected on an empty inquiry draft.
pub fn default_industry() -> &'static str {
    INDUSTRIES[0].title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_titles_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_known_service_membership() {
        assert!(is_known_service("Custom Chatbots"));
        assert!(!is_known_service("Quantum Consulting"));
        assert!(!is_known_service(""));
    }

    #[test]
    fn test_default_industry_is_first_entry() {
        assert_eq!(default_industry(), "Manufacturing");
    }
}
