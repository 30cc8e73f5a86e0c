//! Compiled-in portfolio content.

use std::borrow::Cow;

use crate::filter::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub blurb: &'static str,
    pub link: &'static str,
}

impl Project {
    /// Title and every tag, case-insensitively.
    pub const SEARCH_FIELDS: &'static [Field<Project>] =
        &[Field::text(project_title), Field::text(project_tags)];
}

fn project_title(p: &Project) -> Vec<Cow<'_, str>> {
    vec![Cow::Borrowed(p.title)]
}

fn project_tags(p: &Project) -> Vec<Cow<'_, str>> {
    p.tags.iter().map(|t| Cow::Borrowed(*t)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub org: &'static str,
    pub year: u16,
}

impl Certification {
    /// Title and org case-insensitively, the year as typed.
    pub const SEARCH_FIELDS: &'static [Field<Certification>] = &[
        Field::text(certification_title),
        Field::text(certification_org),
        Field::exact(certification_year),
    ];
}

fn certification_title(c: &Certification) -> Vec<Cow<'_, str>> {
    vec![Cow::Borrowed(c.title)]
}

fn certification_org(c: &Certification) -> Vec<Cow<'_, str>> {
    vec![Cow::Borrowed(c.org)]
}

fn certification_year(c: &Certification) -> Vec<Cow<'_, str>> {
    vec![Cow::Owned(c.year.to_string())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// A point on the career timeline. `year` is fractional so milestones within
/// one year keep their order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub year: f32,
    pub label: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub title: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub duties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub site_title: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub resume: &'static str,
    pub links: &'static [Link],
}

pub const PROFILE: Profile = Profile {
    site_title: "DA • AI/ML Portfolio",
    headline: "6 Years Global Experience | Data Analyst | Data Science | AI & Machine Learning Enthusiast | Generative AI Application Builder | SQL, Pandas, NumPy, Oracle DB Developer | FastAPI/Flask | Pinecone, Weaviate, FAISS (for GenAI search apps) | Data Analytics | Power BI | Advanced Excel | Crystal Reports Expertise | Python, Seaborn, Matplotlib | PL/SQL Developer | Web Scraping",
    tagline: "Transforming Data into Actionable Insights & Building Scalable AI Solutions",
    email: "youremail@example.com",
    resume: "/resume.pdf",
    links: &[
        Link {
            label: "LinkedIn",
            href: "https://www.linkedin.com/",
        },
        Link {
            label: "GitHub",
            href: "https://github.com/",
        },
        Link {
            label: "Email",
            href: "mailto:youremail@example.com",
        },
    ],
};

/// In-page navigation, `(label, section id)`.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Education", "education"),
    ("Experience", "experience"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Certifications", "certifications"),
    ("Contact", "contact"),
];

pub const SPECIALTIES: &[(&str, &str)] = &[
    (
        "Data Analytics & BI",
        "Transforming raw data into actionable insights through Power BI, Crystal Reports, Advanced Excel, and Python visualizations (Matplotlib, Seaborn).",
    ),
    (
        "SQL & Database Development",
        "Designing and optimizing complex SQL queries, stored procedures, triggers, and database schemas for high-performance financial applications.",
    ),
    (
        "AI & Generative AI",
        "Developing intelligent apps with Python, FastAPI, Flask, Streamlit, and integrating LLMs (ChatGPT, HuggingFace, LangChain) with vector databases like Pinecone, Weaviate, and FAISS for next-gen search & automation solutions.",
    ),
    (
        "Core Banking Support",
        "Hands-on experience in requirements gathering, process analysis, MIS reporting, and database optimization for enterprise-grade banking systems.",
    ),
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Data & Database",
        skills: &["SQL", "PL/SQL", "Oracle DB", "Data Modeling"],
    },
    SkillGroup {
        name: "Visualization",
        skills: &["Power BI", "Crystal Reports", "Seaborn", "Matplotlib"],
    },
    SkillGroup {
        name: "AI/ML & GenAI",
        skills: &[
            "Python",
            "Pandas",
            "NumPy",
            "HuggingFace",
            "LangChain",
            "Pinecone",
            "Weaviate",
            "FAISS",
            "FastAPI",
            "Flask",
            "Streamlit",
        ],
    },
    SkillGroup {
        name: "Banking Solutions",
        skills: &["Core Banking", "MIS Reports", "Data Analytics"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Loan Performance Analysis",
        tags: &["SQL", "Python", "Power BI"],
        blurb: "Analyzed loan portfolios to identify delinquency patterns and optimized risk metrics; interactive KPI dashboards.",
        link: "#",
    },
    Project {
        title: "Branch-wise Profit & Loss Prediction Dashboard",
        tags: &["Forecasting", "Python", "Power BI"],
        blurb: "Predictive modeling for P&L with feature-engineered macro & seasonal signals; deployed for management review.",
        link: "#",
    },
    Project {
        title: "Clean Cash Analysis",
        tags: &["ETL", "SQL", "Excel"],
        blurb: "Automated ingestion and reconciliation workflows to flag anomalies in cash cycles.",
        link: "#",
    },
    Project {
        title: "Zone-wise Sales Forecasting",
        tags: &["Time Series", "Python", "Streamlit"],
        blurb: "ARIMA/Prophet-based forecasts with what-if analysis embedded into a Streamlit app.",
        link: "#",
    },
    Project {
        title: "Customer Review Sentiment Analysis (Food Shop)",
        tags: &["NLP", "HuggingFace", "LangChain"],
        blurb: "Fine-tuned transformers for sentiment trends and aspect mining from multi-source reviews.",
        link: "#",
    },
    Project {
        title: "Bulk Email Automation with AI",
        tags: &["Generative AI", "FastAPI", "LangChain"],
        blurb: "Context-aware email generation & scheduling; integrated vector search using Pinecone.",
        link: "#",
    },
    Project {
        title: "Email Data Analytics (Response Time & Trends)",
        tags: &["Analytics", "Python", "Dashboards"],
        blurb: "Response time SLAs & trend analytics with anomaly detection and executive summaries.",
        link: "#",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Advanced Power BI Custom Visuals with d3.js",
        org: "LinkedIn",
        year: 2023,
    },
    Certification {
        title: "Python for Data Science & ML",
        org: "LinkedIn",
        year: 2022,
    },
    Certification {
        title: "SQL Data Reporting & Analysis",
        org: "LinkedIn",
        year: 2021,
    },
    Certification {
        title: "Career Essentials in Data Analysis",
        org: "Microsoft",
        year: 2024,
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: 2019.9,
        label: "Joined Leads Corporation Ltd",
        level: 1,
    },
    Milestone {
        year: 2020.5,
        label: "Core Banking & Data Analytics",
        level: 2,
    },
    Milestone {
        year: 2021.5,
        label: "Crystal Reports & Power BI",
        level: 3,
    },
    Milestone {
        year: 2022.5,
        label: "Performance Tuning & SQL Automation",
        level: 4,
    },
    Milestone {
        year: 2023.2,
        label: "Joined Meghna Bank PLC",
        level: 5,
    },
    Milestone {
        year: 2024.2,
        label: "GenAI Apps & Vector Search",
        level: 6,
    },
    Milestone {
        year: 2025.0,
        label: "Assistant Officer – DA & Python Dev",
        level: 7,
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        title: "B.Sc. in Computer Science and Engineering – Dhaka International University",
        year: 2020,
    },
    Education {
        title: "Diploma in Computer Engineering – Jhenaidah Polytechnic Institute",
        year: 2016,
    },
];

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "Leads Corporation Ltd",
        title: "Senior Software Engineer | Core Banking & Data Analytics",
        period: "Nov 2019 – Feb 2023",
        duties: &[
            "Gathered requirements for core banking systems (transactions, account management, loan disbursement, compliance).",
            "Analyzed workflows and integrated them into new core banking solutions.",
            "Developed optimized SQL queries, stored procedures, views, and functions to automate banking operations.",
            "Designed and managed database objects (tables, indexes, partitions) for efficient data retrieval.",
            "Enhanced database performance via indexing, restructuring, and partitioning.",
            "Integrated SQL scripts into banking applications for real-time data access.",
            "Built Power BI dashboards for KPIs, customer behavior, and regulatory reports.",
            "Designed dynamic Crystal Reports for customer activity and operational performance.",
            "Conducted data cleaning & preprocessing to ensure accuracy.",
        ],
    },
    Role {
        company: "Meghna Bank PLC",
        title: "Assistant Officer (Data Analyst & Python Developer)",
        period: "Feb 2023 – Present",
        duties: &[
            "Built MIS reports and provided end-to-end support for general banking operations.",
            "Designed Power BI & Streamlit dashboards with predictive analytics (loans, sales, risks).",
            "Automated workflows using Python scripts for reporting, forecasting, and preprocessing.",
            "Implemented AI/ML models for trend prediction & risk forecasting.",
            "Developed Generative AI apps using LLMs, LangChain, Pinecone, Weaviate, FAISS.",
            "Created optimized SQL queries, triggers, and stored procedures to streamline workflows.",
            "Built Crystal Reports for finance, customers, and operations.",
            "Supported core banking solution software implementation.",
        ],
    },
];
