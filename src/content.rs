//! Static portfolio content.
//!
//! Compiled in and read-only. Views render it; nothing mutates it.

pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub about: &'static [&'static str],
    pub focus_areas: &'static [&'static str],
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub company_description: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub link: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub relationship: &'static str,
}

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct BlogPost {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PERSONAL: PersonalInfo = PersonalInfo {
    name: "Pratik Desai",
    title: "Senior Software Engineer",
    tagline: "Building scalable systems at the intersection of Fintech, Payments & Cybersecurity",
    location: "Pune, India",
    email: "pratikvilasdesai@gmail.com",
    phone: "+91-7588113838",
    website: "https://pratikdesai.dev",
    about: &[
        "From Mechanical Engineering to scaling payment systems processing millions of transactions - my journey has been anything but conventional. I thrive at the intersection of complex technical challenges and business impact.",
        "Over 7+ years, I've evolved from a curious engineer to a founding team member at a startup, and now to building enterprise-grade security platforms. At TartanHq, I was there from day zero - turning ideas into a revenue-generating platform in just 3 months. At Mastercard, I architected solutions reaching 10M+ users across Africa.",
        "Today at Securonix, I'm scaling SIEM infrastructure from 1M to 2M+ transactions per second. What drives me? The challenge of building systems that are not just technically elegant but create real business value.",
        "Beyond code, I'm a National Level Taekwondo player who has won multiple gold medals and represented Maharashtra State. Music is my other passion - as a guitarist and vocalist, I've been part of an indie-rock band performing at venues like Hard Rock Cafe and Blue Frog.",
    ],
    focus_areas: &["Fintech", "Payments", "Cybersecurity", "Distributed Systems"],
};

pub const SOCIAL: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/pratikvdesai/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/pratikdesai74",
    },
    SocialLink {
        label: "LeetCode",
        url: "https://leetcode.com/u/pratikvilasdesai/",
    },
    SocialLink {
        label: "Medium",
        url: "https://medium.com/@pratikvilasdesai",
    },
    SocialLink {
        label: "GeeksforGeeks",
        url: "https://auth.geeksforgeeks.org/user/pratikvilasdesai",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Senior Software Engineer",
        company: "Securonix",
        company_description: "Cybersecurity | SIEM | UEBA Platform",
        period: "Jan 2026 - Present",
        location: "Remote",
        highlights: &[
            "Scaling high-throughput SIEM platform from 1M to 2M+ TPS through system redesign and performance optimization",
            "Built a fully local, cloud-parity dev environment for distributed systems, reducing developer setup and testing time",
            "Designing next-gen alerting, tracing, and logging for large-scale security analytics",
        ],
        tech: &["Java", "Spring Boot", "Kafka", "Spark", "Hadoop", "HBase", "Redis", "AWS", "Kubernetes"],
    },
    Experience {
        role: "Product Engineer",
        company: "Mastercard",
        company_description: "Fintech | Digital Payments",
        period: "Mar 2024 - Dec 2025",
        location: "Pune, India",
        highlights: &[
            "Engineered multi-region resiliency for instant clearing product, onboarding 5+ clients",
            "Architected contactless payment solution for Africa expansion targeting 10M+ users",
            "Designed event-driven library accelerating financial auth processing by 30%",
            "Implemented JUnit integration tests reducing database-related issues by 30%",
        ],
        tech: &["Java", "Spring Boot", "Kafka", "PostgreSQL", "AWS", "PCF", "gRPC", "Splunk"],
    },
    Experience {
        role: "Founding Software Engineer",
        company: "TartanHq",
        company_description: "AI-Powered Enterprise APIs | B2B SaaS Startup",
        period: "Jul 2021 - Mar 2024",
        location: "Bangalore, India",
        highlights: &[
            "Joined as founding engineer, playing day-0 role in product development",
            "Built Perks platform from ground up, acquiring real customers in 3 months",
            "Implemented HRMS Connect onboarding 30,000 users, generating $66,000/month revenue",
            "Led optimized cart feature development, reducing user dropout by 20%",
            "Achieved 50% AWS cost reduction through efficient resource management",
            "Migrated payment service from Monolithic to Microservice architecture",
        ],
        tech: &["Java", "Spring Boot", "Kafka", "Redis", "MySQL", "DynamoDB", "AWS", "Docker", "Kubernetes"],
    },
    Experience {
        role: "Software Engineer (Backend)",
        company: "Volante Technologies",
        company_description: "Enterprise Banking | Payment Infrastructure",
        period: "Feb 2019 - Jul 2021",
        location: "Pune, India",
        highlights: &[
            "Engineered Direct Cover and bulk payment features for VolPay - recognized as top payment platform by IBS Intelligence Award",
            "Designed configurable approval process enhancing workflow efficiency and security",
            "Integrated advanced security protocols, reducing fraud incidents by 15%",
        ],
        tech: &["Java", "Spring Boot", "MySQL", "SQL Server", "Kafka", "React", "Docker", "AWS"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Payment Wallet System",
        description: "Distributed multi-service payment wallet with real-time notifications and high-performance transactions.",
        long_description: "Engineered a distributed Multi-Service Payment Wallet system using Java Spring Boot, Spring Security, Kafka, and Redis. Improved transaction processing efficiency by 20% (P95 latency: 200ms to 160ms) and reduced SMS notification latency by 30%.",
        link: Some("https://github.com/pratikdesai74/payment_wallet"),
        tech: &["Java", "Spring Boot", "Kafka", "Redis", "Spring Security"],
        metrics: &[
            Metric { label: "Latency Reduction", value: "20%" },
            Metric { label: "P95 Latency", value: "160ms" },
        ],
    },
    Project {
        title: "TalkToPDF",
        description: "RAG-based document interaction tool enabling natural language querying of PDF documents.",
        long_description: "Built a RAG-based document interaction tool using LangChain, Claude AI/OpenAI, and vector databases. Implemented semantic search with context-aware retrieval for natural language PDF querying with multi-document support.",
        link: Some("https://github.com/pratikdesai74/talkToPDF"),
        tech: &["Python", "LangChain", "Claude AI", "OpenAI", "Streamlit", "Vector DB"],
        metrics: &[
            Metric { label: "Documents", value: "Multi" },
            Metric { label: "OCR Support", value: "Yes" },
        ],
    },
    Project {
        title: "Perks Benefits Platform",
        description: "Enterprise benefits platform built from ground up, generating significant monthly revenue.",
        long_description: "Created Perks from the ground up at TartanHq, successfully bringing in real customers within just 3 months. Implemented HRMS Connect to onboard 30,000 concurrent users.",
        link: Some("https://www.perks.tech/"),
        tech: &["Java", "Spring Boot", "Redis", "AWS", "Microservices"],
        metrics: &[
            Metric { label: "Monthly Revenue", value: "$66K" },
            Metric { label: "Users", value: "30K+" },
        ],
    },
    Project {
        title: "Marvel - Class Management System",
        description: "Full-stack web application to manage private class operations with cost-optimized infrastructure.",
        long_description: "Built a comprehensive class management platform handling attendance tracking, notes distribution, and video content delivery. Initially hosted on Raspberry Pi with GitHub Actions CI/CD, later migrated to on-premise server with Google Cloud reverse proxy.",
        link: Some("https://github.com/desaiclasses/marvel"),
        tech: &["Java", "Spring Boot", "Docker", "Raspberry Pi", "GitHub Actions", "GCP", "Nginx"],
        metrics: &[
            Metric { label: "Hosting Cost", value: "Minimal" },
            Metric { label: "Infrastructure", value: "Self-Hosted" },
        ],
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        items: &["Java", "Python", "TypeScript", "JavaScript", "SQL", "Bash"],
    },
    SkillGroup {
        title: "Backend & Frameworks",
        items: &["Spring Boot", "Spring Security", "Hibernate", "JUnit", "gRPC", "REST APIs"],
    },
    SkillGroup {
        title: "Cloud & DevOps",
        items: &["AWS", "GCP", "Docker", "Kubernetes", "Jenkins", "CI/CD", "GitHub Actions"],
    },
    SkillGroup {
        title: "Databases",
        items: &["PostgreSQL", "MySQL", "Redis", "MongoDB", "DynamoDB", "HBase"],
    },
    SkillGroup {
        title: "Messaging & Streaming",
        items: &["Apache Kafka", "Nats.io", "AWS SQS", "Event-Driven Architecture"],
    },
    SkillGroup {
        title: "Tools & Monitoring",
        items: &["Git", "Splunk", "Dynatrace", "JIRA", "SonarQube", "Postman"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Hiren Savalia",
        role: "Team Lead HoAT Delivery",
        company: "Bank of America | Mastercard | Oracle",
        quote: "Pratik is an exceptional backend engineer with deep expertise in Java, Spring, and building scalable, reliable systems. What stands out most about Pratik is not just his technical strength, but his positive attitude and willingness to go the extra mile for the team.",
        relationship: "Managed Pratik at TartanHQ",
    },
    Testimonial {
        name: "Manas Mallik",
        role: "CTO & Director of Engineering",
        company: "AI & Distributed Systems Leader | LLM Architect",
        quote: "Pratik has an innate ability to analyze complex systems and identify optimal solutions. He possesses a keen eye for identifying potential bottlenecks and takes a proactive approach to optimize performance.",
        relationship: "Senior to Pratik",
    },
    Testimonial {
        name: "Jatin Garg",
        role: "Senior Software Engineer",
        company: "Agoda",
        quote: "Pratik is a highly skilled developer who consistently exceeded expectations. They are a quick learner, highly motivated, and always willing to take on new challenges.",
        relationship: "Worked with Pratik on the same team",
    },
    Testimonial {
        name: "Animesh Dhokare",
        role: "Senior SDE",
        company: "Qualys | Data Platform | Fintech | Payments",
        quote: "I highly recommend Pratik as a skilled and passionate software engineer. He has a strong understanding of Data Structures and Algorithms, as well as a dedicated work ethic.",
        relationship: "Senior to Pratik",
    },
    Testimonial {
        name: "Sai Kranthi",
        role: "CTO",
        company: "Upshot Global Inc.",
        quote: "Pratik is a productive and focused Engineer. I loved working with him and would recommend him to any team if you're looking for a team player, problem solver and practically wants to get things done.",
        relationship: "Worked with Pratik on the same team",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Scaler",
        degree: "Specialized in Software Development & Problem Solving",
        year: "2022",
    },
    Education {
        institution: "CDAC ACTS, Pune",
        degree: "Post Graduate Diploma",
        year: "2019",
    },
    Education {
        institution: "Shivaji University, Kolhapur",
        degree: "BE/B.Tech/BS",
        year: "2014",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[Achievement {
    title: "IBS Intelligence Award",
    description: "Received for Volpay product development for Goldman Sachs",
    year: "2021",
}];

pub const STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: "7+" },
    Stat { label: "Companies", value: "4" },
    Stat { label: "Revenue Generated", value: "$66K/mo" },
    Stat { label: "Users Impacted", value: "10M+" },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Scalable Payment Systems with Event-Driven Architecture",
        description: "Lessons learned from designing and implementing high-throughput payment systems that process millions of transactions.",
        date: "2024",
        read_time: "8 min read",
        tags: &["System Design", "Kafka", "Payments"],
        link: "https://medium.com/@pratikvilasdesai",
    },
    BlogPost {
        title: "From Monolith to Microservices: A Practical Migration Guide",
        description: "A step-by-step approach to migrating legacy systems to microservices without disrupting business operations.",
        date: "2024",
        read_time: "12 min read",
        tags: &["Microservices", "Architecture", "Best Practices"],
        link: "https://medium.com/@pratikvilasdesai",
    },
    BlogPost {
        title: "RAG Systems: Building AI-Powered Document Intelligence",
        description: "How I built TalkToPDF - a RAG-based tool for natural language document querying using LangChain and vector databases.",
        date: "2024",
        read_time: "10 min read",
        tags: &["AI/ML", "LangChain", "RAG"],
        link: "https://medium.com/@pratikvilasdesai",
    },
];

/// Page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Testimonials,
    Blog,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Testimonials,
        Section::Blog,
        Section::Contact,
        Section::Footer,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Testimonials => "Testimonials",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }
}

/// Sections listed in the navigation bar, bound to keys 1..=6.
pub const NAV_ITEMS: [Section; 6] = [
    Section::About,
    Section::Experience,
    Section::Projects,
    Section::Skills,
    Section::Testimonials,
    Section::Contact,
];
