//! Static site copy. Everything here is immutable configuration the pages map
//! over; nothing in this module changes at runtime.

pub struct ServiceSummary {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceSummary] = &[
    ServiceSummary {
        icon: "🛒",
        title: "E-Commerce & Online Retail",
        description: "Complete e-commerce solutions including online storefronts, payment processing, and order management.",
    },
    ServiceSummary {
        icon: "🚚",
        title: "Logistics & Delivery",
        description: "End-to-end logistics services with nationwide coverage and real-time tracking capabilities.",
    },
    ServiceSummary {
        icon: "🌍",
        title: "Import & Export",
        description: "Seamless international trade services with customs clearance and global shipping networks.",
    },
    ServiceSummary {
        icon: "🤝",
        title: "Agency & Distribution",
        description: "Strategic distribution partnerships and agency services for brands seeking Nigerian market presence.",
    },
];

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 500, suffix: "+", label: "Happy Clients" },
    Stat { value: 50, suffix: "K+", label: "Deliveries Made" },
    Stat { value: 36, suffix: "", label: "States Covered" },
    Stat { value: 99, suffix: "%", label: "Customer Satisfaction" },
];

pub struct IconPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_CHOOSE_US: &[IconPoint] = &[
    IconPoint {
        icon: "⚡",
        title: "Technology-Driven",
        description: "Cutting-edge systems for real-time tracking and seamless operations.",
    },
    IconPoint {
        icon: "📍",
        title: "Nationwide Reach",
        description: "Extensive network covering all 36 states and FCT in Nigeria.",
    },
    IconPoint {
        icon: "🛡️",
        title: "Legal Compliance",
        description: "Fully registered under CAMA 2020 with adherence to global standards.",
    },
    IconPoint {
        icon: "📈",
        title: "Customer-Focused",
        description: "Dedicated support and tailored solutions for every client.",
    },
];

pub const CORE_VALUES: &[IconPoint] = &[
    IconPoint {
        icon: "🏆",
        title: "Excellence",
        description: "We strive for excellence in every service we deliver, setting high standards for quality and performance.",
    },
    IconPoint {
        icon: "👥",
        title: "Customer Focus",
        description: "Our customers are at the heart of everything we do. We listen, adapt, and deliver solutions that exceed expectations.",
    },
    IconPoint {
        icon: "⚖️",
        title: "Integrity",
        description: "We operate with transparency and honesty, building trust through ethical business practices and legal compliance.",
    },
    IconPoint {
        icon: "💡",
        title: "Innovation",
        description: "We embrace technology and innovation to continuously improve our services and stay ahead of industry trends.",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2020",
        title: "Company Founded",
        description: "MMM Worldwide was incorporated under CAMA 2020, establishing our legal foundation for operations.",
    },
    Milestone {
        year: "2021",
        title: "Nationwide Expansion",
        description: "Extended our logistics network to cover all 36 states and FCT in Nigeria.",
    },
    Milestone {
        year: "2022",
        title: "Technology Integration",
        description: "Launched our proprietary tracking and management systems for enhanced service delivery.",
    },
    Milestone {
        year: "2023",
        title: "International Partnerships",
        description: "Established strategic partnerships with global logistics and e-commerce platforms.",
    },
    Milestone {
        year: "2024",
        title: "Credit Facility Launch",
        description: "Introduced innovative credit and financing solutions to empower businesses and individuals.",
    },
    Milestone {
        year: "2025",
        title: "Digital Transformation",
        description: "Rolled out AI-powered systems for faster approvals and enhanced customer experience.",
    },
    Milestone {
        year: "2026",
        title: "Pan-African Expansion",
        description: "Expanding operations beyond Nigeria to serve customers across the African continent.",
    },
];

pub struct ServiceDetail {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [(&'static str, &'static str)],
    pub highlights: &'static [&'static str],
}

pub const SERVICE_DETAILS: &[ServiceDetail] = &[
    ServiceDetail {
        id: "ecommerce",
        icon: "🛒",
        title: "E-Commerce & Online Retail Services",
        description: "Complete digital commerce solutions to help businesses thrive in the online marketplace.",
        features: &[
            ("🏪", "Online storefront development and management"),
            ("💳", "Secure payment processing integration"),
            ("📦", "Order management and fulfillment"),
            ("📊", "Analytics and performance tracking"),
        ],
        highlights: &[
            "Multi-channel selling capabilities",
            "Inventory management systems",
            "Customer relationship tools",
            "Mobile-optimized platforms",
        ],
    },
    ServiceDetail {
        id: "logistics",
        icon: "🚚",
        title: "Logistics & Delivery Services",
        description: "End-to-end logistics solutions with nationwide coverage and real-time tracking.",
        features: &[
            ("📍", "Nationwide delivery network (36 states + FCT)"),
            ("📦", "Warehousing and inventory storage"),
            ("🚚", "Same-day and next-day delivery options"),
            ("⚙️", "Real-time tracking and notifications"),
        ],
        highlights: &[
            "Fleet management optimization",
            "Last-mile delivery expertise",
            "Cold chain logistics",
            "Secure handling protocols",
        ],
    },
    ServiceDetail {
        id: "import-export",
        icon: "🌍",
        title: "Importation & Exportation Services",
        description: "Seamless international trade facilitation with expert customs handling.",
        features: &[
            ("🚢", "Sea freight and ocean shipping"),
            ("✈️", "Air freight and express cargo"),
            ("🏭", "Customs clearance and documentation"),
            ("🌍", "Global shipping network access"),
        ],
        highlights: &[
            "Trade compliance expertise",
            "Duty and tariff optimization",
            "Door-to-door international delivery",
            "Cargo insurance options",
        ],
    },
    ServiceDetail {
        id: "distribution",
        icon: "🤝",
        title: "Agency & Distribution Services",
        description: "Strategic partnerships helping brands establish and grow their presence in Nigeria.",
        features: &[
            ("🤝", "Brand representation and agency"),
            ("🏪", "Retail distribution networks"),
            ("🏭", "Regional warehousing solutions"),
            ("📊", "Market analysis and insights"),
        ],
        highlights: &[
            "Exclusive distribution agreements",
            "Market entry strategy support",
            "Channel partner management",
            "Sales force deployment",
        ],
    },
    ServiceDetail {
        id: "support",
        icon: "🎧",
        title: "Ancillary & Support Services",
        description: "Comprehensive support services to enhance your core business operations.",
        features: &[
            ("🎧", "24/7 customer support services"),
            ("⚙️", "Business process outsourcing"),
            ("📊", "Consulting and advisory services"),
            ("📦", "Returns management and processing"),
        ],
        highlights: &[
            "Quality assurance protocols",
            "Training and development",
            "Technology integration support",
            "Performance optimization",
        ],
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Consultation",
        description: "We understand your unique business needs and challenges.",
    },
    ProcessStep {
        step: "02",
        title: "Strategy",
        description: "We develop a customized solution tailored to your requirements.",
    },
    ProcessStep {
        step: "03",
        title: "Implementation",
        description: "We execute the plan with precision and attention to detail.",
    },
    ProcessStep {
        step: "04",
        title: "Support",
        description: "We provide ongoing support and optimization for continued success.",
    },
];

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "📍",
        title: "Our Location",
        details: &["Lagos, Nigeria", "West Africa"],
    },
    ContactInfo {
        icon: "📞",
        title: "Phone Number",
        details: &["+234 803 859 2620"],
    },
    ContactInfo {
        icon: "✉️",
        title: "Email Address",
        details: &["info@mmmworldwide.com", "support@mmmworldwide.com"],
    },
    ContactInfo {
        icon: "🕐",
        title: "Business Hours",
        details: &["Monday - Friday: 8AM - 6PM", "Saturday: 9AM - 2PM"],
    },
];

/// Options for the contact form's subject dropdown. The form also accepts
/// free text through the "Other" flow, the rules only bound its length.
pub const SUBJECT_OPTIONS: &[&str] = &[
    "General Inquiry",
    "Partnership Opportunity",
    "E-Commerce Services",
    "Logistics Services",
    "Import/Export Services",
    "Customer Support",
    "Other",
];

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const FOOTER_COMPANY_LINKS: &[FooterLink] = &[
    FooterLink { name: "About Us", href: "/about" },
    FooterLink { name: "Our Services", href: "/services" },
    FooterLink { name: "Our Mission", href: "/about#mission" },
    FooterLink { name: "Contact Us", href: "/contact" },
];

pub const FOOTER_SERVICE_LINKS: &[FooterLink] = &[
    FooterLink { name: "E-Commerce Solutions", href: "/services#ecommerce" },
    FooterLink { name: "Logistics & Delivery", href: "/services#logistics" },
    FooterLink { name: "Import & Export", href: "/services#import-export" },
    FooterLink { name: "Distribution Services", href: "/services#distribution" },
];

pub const FOOTER_LEGAL_LINKS: &[FooterLink] = &[
    FooterLink { name: "Privacy Policy", href: "#" },
    FooterLink { name: "Terms of Service", href: "#" },
    FooterLink { name: "Cookie Policy", href: "#" },
];

pub const SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink { name: "Facebook", href: "#" },
    FooterLink { name: "Twitter", href: "#" },
    FooterLink { name: "LinkedIn", href: "#" },
    FooterLink { name: "Instagram", href: "#" },
];

pub const WHATSAPP_NUMBER: &str = "2348038592620";
pub const WHATSAPP_MESSAGE: &str = "Hello! I'm interested in MMM Worldwide services.";

pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}
