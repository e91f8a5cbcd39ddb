//! Static page content
//!
//! Every card list on the page is rendered straight from these slices, one
//! card per entry and in the order written here.

/// In-page navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// "Why choose us" highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Talent and consulting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

/// Payroll offering with its bullet points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollOffering {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub name: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Footer contact line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email(&'static str),
    Location(&'static str),
}

pub const COMPANY: &str = "Webeltek";
pub const LOGO_SRC: &str = "/webeltek-logo.jpg";
pub const HERO_VIDEO_SRC: &str = "/bg-video.mp4";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Services", href: "#services" },
    NavItem { label: "Industries", href: "#industries" },
    NavItem { label: "FAQ", href: "#faq" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Section ids rendered by the home page, top to bottom.
pub const SECTION_IDS: &[&str] = &["home", "about", "services", "industries", "faq", "contact"];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Proven Expertise",
        description: "Specialists across network, data, cloud, and security with project-tested experience.",
    },
    Highlight {
        title: "Quality First",
        description: "Multi-stage technical screening and culture-fit checks reduce churn.",
    },
    Highlight {
        title: "Speed & Scale",
        description: "Elastic recruiting and delivery to match your hiring velocity.",
    },
    Highlight {
        title: "Compliance Built-in",
        description: "On-time payroll, tax handling, and audit-ready documentation.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Data Center",
        description: "Build and operate resilient infra: DC ops, cabling, monitoring, L2/L3.",
    },
    Service {
        title: "Telecom",
        description: "RAN, 4G/5G, core, OSS/BSS, field rollout, NOC/SOC staffing.",
    },
    Service {
        title: "Data Science",
        description: "ML engineering, MLOps, analytics, dashboarding, model governance.",
    },
    Service {
        title: "Cybersecurity",
        description: "Pen-testing, IR, SIEM/SOAR, IAM, GRC, risk assessments.",
    },
    Service {
        title: "Network Management",
        description: "Enterprise LAN/WAN, SD-WAN, load balancing, troubleshooting.",
    },
    Service {
        title: "Cloud & DevOps",
        description: "AWS/Azure/GCP, CI/CD, SRE, finops, container orchestration.",
    },
    Service {
        title: "Finance IT",
        description: "Core banking, payments, risk, compliance, data warehousing.",
    },
    Service {
        title: "Healthcare IT",
        description: "EHR/EMR, PACS, HL7/FHIR, imaging, telemedicine platforms.",
    },
    Service {
        title: "SAP Solutions",
        description: "ECC/S4HANA, BW/4HANA, integrations, migrations, support.",
    },
];

pub const PAYROLL: &[PayrollOffering] = &[
    PayrollOffering {
        title: "Payroll Processing",
        points: &[
            "Precise, prompt salary runs",
            "Multi-cycle & multi-country support",
            "Benefits & reimbursements",
        ],
    },
    PayrollOffering {
        title: "Tax & Compliance",
        points: &["Accurate payroll taxes", "On-time filings", "Audit-ready records"],
    },
    PayrollOffering {
        title: "Dynamic Reporting",
        points: &["Custom dashboards", "Exports (CSV/XLS/PDF)", "Cost & variance views"],
    },
    PayrollOffering {
        title: "Security & Access",
        points: &["Role-based access", "Data protection & backups", "Self-service updates"],
    },
    PayrollOffering {
        title: "Employee Portal",
        points: &["Payslips, leaves, overtime", "Attendance tracking", "Mobile-friendly access"],
    },
    PayrollOffering {
        title: "Timekeeping Integration",
        points: &["API-first approach", "Plug-ins for HRIS/ATS", "Dedicated support team"],
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Telecom",
        blurb: "Network rollout, optimization, testing, and operations.",
    },
    Industry {
        name: "Healthcare",
        blurb: "EHR/EMR, imaging, interoperability, patient data security.",
    },
    Industry {
        name: "Data Center",
        blurb: "Facility ops, hardware, networking, observability.",
    },
    Industry {
        name: "Finance",
        blurb: "Core systems, payments, risk & fraud, data governance.",
    },
    Industry {
        name: "Data Science",
        blurb: "Predictive models, MLOps, analytics engineering.",
    },
    Industry {
        name: "Cloud",
        blurb: "Migration, modernization, DevOps/SRE, cost controls.",
    },
];

/// Sub-heading under "Industries We Serve".
pub const INDUSTRY_TAGLINE: &[&str] = &[
    "Telecom",
    "Healthcare",
    "Data Center",
    "Finance",
    "Data Science",
    "Cloud",
    "SAP",
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do you ensure the right technical fit?",
        answer: "We combine role scoping with multi-stage technical screenings, practical assessments, and stakeholder interviews to validate both skill and culture fit.",
    },
    FaqEntry {
        question: "Can you support temporary, contract-to-hire, and full-time roles?",
        answer: "Yes. We deliver flexible engagement models—contract, C2H, and permanent hiring—backed by on-time payroll and compliant documentation.",
    },
    FaqEntry {
        question: "How fast can you staff a role?",
        answer: "For common roles, shortlists are typically shared within days. Niche roles may take longer, but we keep you updated with clear milestones.",
    },
    FaqEntry {
        question: "Do you operate internationally?",
        answer: "We support clients across India and internationally via digital delivery, remote teams, and on-site deployments where needed.",
    },
    FaqEntry {
        question: "How does your payroll service integrate with our systems?",
        answer: "We’re API-first. We integrate with leading HRIS/ATS/timekeeping tools and can export custom reports in CSV/XLS/PDF.",
    },
];

/// "Company" column of the footer.
pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Services", href: "#services" },
    NavItem { label: "Industries", href: "#industries" },
    NavItem { label: "FAQ", href: "#faq" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel::Email("info@webeltek.com"),
    ContactChannel::Location("Electronic City, Bengaluru"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate {what}: {key}");
        }
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(NAV_ITEMS.len(), 6);
        assert_eq!(HIGHLIGHTS.len(), 4);
        assert_eq!(SERVICES.len(), 9);
        assert_eq!(PAYROLL.len(), 6);
        assert_eq!(INDUSTRIES.len(), 6);
        assert_eq!(FAQ.len(), 5);
    }

    #[test]
    fn test_card_keys_are_unique() {
        assert_unique(NAV_ITEMS.iter().map(|n| n.href), "nav href");
        assert_unique(HIGHLIGHTS.iter().map(|h| h.title), "highlight");
        assert_unique(SERVICES.iter().map(|s| s.title), "service");
        assert_unique(PAYROLL.iter().map(|p| p.title), "payroll card");
        assert_unique(INDUSTRIES.iter().map(|i| i.name), "industry");
        assert_unique(FAQ.iter().map(|f| f.question), "faq question");
        for offering in PAYROLL {
            assert_unique(offering.points.iter().copied(), offering.title);
        }
    }

    #[test]
    fn test_nav_targets_rendered_sections() {
        let ids: Vec<_> = NAV_ITEMS
            .iter()
            .map(|n| n.href.strip_prefix('#').unwrap())
            .collect();
        assert_eq!(ids, SECTION_IDS);

        for link in FOOTER_LINKS {
            let id = link.href.strip_prefix('#').unwrap();
            assert!(SECTION_IDS.contains(&id), "footer link to unknown section {id}");
        }
    }

    #[test]
    fn test_every_payroll_card_has_points() {
        for offering in PAYROLL {
            assert_eq!(offering.points.len(), 3, "{}", offering.title);
        }
    }
}
