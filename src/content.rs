use crate::state::rotation::METRIC_COUNT;

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Step {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct SpecGroup {
    pub title: &'static str,
    pub items: [&'static str; 3],
}

pub const METRICS: [Metric; METRIC_COUNT] = [
    Metric { value: "<50ms", label: "Query Latency", desc: "Instant record access" },
    Metric { value: "300+", label: "Patients Managed", desc: "Across 10 clinics" },
    Metric { value: "80%", label: "Deployment Reduction", desc: "15min → 3min" },
];

// (value, label)
pub const STATS: &[(&str, &str)] = &[
    ("5", "Surgeons"),
    ("10", "Clinics"),
    ("300+", "Patients"),
    ("2GB+", "Secure Storage"),
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Lightning Performance",
        desc: "Sub-50ms query latency ensures patient records load instantly. AWS RDS with read replicas eliminates wait times during high-traffic hours.",
    },
    Feature {
        icon: "🔒",
        title: "Bank-Grade Security",
        desc: "AWS S3 server-side encryption (SSE-S3) protects 2GB+ of medical documents. HIPAA-compliant infrastructure you can trust.",
    },
    Feature {
        icon: "🔄",
        title: "Zero Downtime",
        desc: "Dockerized microservices with automated GitHub Actions CI/CD. Deploy updates in 3 minutes without interrupting operations.",
    },
    Feature {
        icon: "🏥",
        title: "Multi-Clinic Orchestration",
        desc: "Centralize operations for 5+ surgeons across multiple locations. One dashboard, complete visibility.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        title: "Request a Demo",
        desc: "Tell us about your practice, your clinics and the surgeons you schedule for.",
    },
    Step {
        title: "Discovery Call",
        desc: "We walk through your current patient workflow and map it onto ClinicalOps.",
    },
    Step {
        title: "Guided Migration",
        desc: "Records and documents move into encrypted storage while your clinics keep running.",
    },
    Step {
        title: "Go Live",
        desc: "Every location works from one dashboard, with updates shipped in minutes.",
    },
];

pub const TECH_SPECS: &[SpecGroup] = &[
    SpecGroup {
        title: "Backend",
        items: [
            "Spring Boot Application Server",
            "AWS RDS MySQL with Read Replicas",
            "Automated Backup & Recovery",
        ],
    },
    SpecGroup {
        title: "Security",
        items: [
            "AWS S3 Server-Side Encryption (SSE-S3)",
            "HIPAA-Compliant Data Storage",
            "Role-Based Access Control",
        ],
    },
    SpecGroup {
        title: "DevOps",
        items: [
            "Docker Containerization",
            "GitHub Actions CI/CD Pipeline",
            "Zero-Downtime Deployments",
        ],
    },
];

/// Staggered entrance delay for the feature card at `index`.
pub fn feature_animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_cards_stagger_by_a_tenth_of_a_second() {
        assert_eq!(feature_animation_delay(0), "animation-delay: 0.0s;");
        assert_eq!(feature_animation_delay(1), "animation-delay: 0.1s;");
        assert_eq!(feature_animation_delay(3), "animation-delay: 0.3s;");
    }

    #[test]
    fn spec_groups_are_populated() {
        for group in TECH_SPECS {
            assert!(!group.title.is_empty());
            assert!(group.items.iter().all(|item| !item.is_empty()));
        }
    }
}
