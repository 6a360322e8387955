use super::*;

pub static RESUME: ResumeData = ResumeData {
    personal_info: PersonalInfo {
        name: "MONIL GANDHI",
        alias: Some("Febatrone"),
        role: "Computer Engineering Student | Cybersecurity Enthusiast",
        location: "Vadodara, Gujarat, India",
        email: "monilgandhi11@gmail.com",
        github: "github.com/monil72004",
        linkedin: "linkedin.com/in/monilgandhi0",
        summary: "Tech-driven Computer Engineering student with hands-on experience in Python, \
                  Blockchain, and ERP systems. Passionate about cybersecurity and networking, with \
                  practical knowledge of Ethical hacking and Wireshark. Actively pursuing top \
                  certifications like Network+. Known for leading events, solving real-world \
                  problems, and building secure digital solutions with a team-first mindset.",
    },
    highlights: Highlights {
        education: "B.Tech",
        project_tech: "Blockchain",
        focus_area: "Security",
        location_city: "Vadodara",
    },
    skills: &[
        SkillCategory {
            category: "Languages & Tools",
            items: &["Python", "C", "HTML", "CSS", "SQL", "Oracle DB", "VS Code"],
        },
        SkillCategory {
            category: "Operating Systems",
            items: &["Linux (Ubuntu/Kali)", "Windows"],
        },
        SkillCategory {
            category: "Cybersecurity & Networking",
            items: &["Network Security", "Ethical Hacking (Basics)", "Wireshark"],
        },
        SkillCategory {
            category: "Other Skills",
            items: &[
                "Odoo Framework",
                "Problem Solving",
                "Teamwork",
                "Analytical Thinking",
                "MS Office",
            ],
        },
    ],
    experience: &[Experience {
        role: "Software Intern",
        company: "Konsultoo Software Consulting PVT. LTD",
        duration: "April 2023 - June 2023",
        details: &[
            "Worked on the 'Santna Leather Care' project using the Odoo framework.",
            "Gained hands-on experience in Python development and ERP integration.",
            "Developed modules integrating CRM, e-commerce, accounting, and project management.",
        ],
    }],
    education: &[
        Education {
            degree: "Bachelor's in Computer Science",
            institution: "Parul University",
            year: "2024 - 2027",
            status: EducationStatus::InProgress,
            kind: EducationKind::Degree,
        },
        Education {
            degree: "Diploma in Blockchain Technology",
            institution: "Parul University",
            year: "2024 - 2025",
            status: EducationStatus::Completed,
            kind: EducationKind::Diploma,
        },
        Education {
            degree: "Diploma in Computer Engineering",
            institution: "Parul University",
            year: "2021 - 2024",
            status: EducationStatus::Completed,
            kind: EducationKind::Diploma,
        },
        Education {
            degree: "SSC Board",
            institution: "Vidyut Board Vidyalaya",
            year: "2020 - 2021",
            status: EducationStatus::Completed,
            kind: EducationKind::School,
        },
    ],
    projects: &[Project {
        title: "Healthcare Management System using Blockchain",
        description: &[
            "Built a secure, decentralized medical records system using Ethereum and Solidity.",
            "Implemented smart contracts for automated patient consent and access control.",
            "Enhanced data privacy, transparency, and interoperability in healthcare systems.",
        ],
        tech: &["Ethereum", "Solidity", "Blockchain"],
        link: None,
    }],
    certifications: &[
        "Introduction to Cybersecurity",
        "Investment Risk Management",
        "Automate Cybersecurity Tasks with Python (Ongoing)",
        "CompTIA Network+ (Ongoing)",
    ],
    awards: &[
        "Worked in student committee Startup Meet Ecosystem 2022",
        "Student Ambassador",
        "Institute Innovation Club - Organized and completed over 30 events",
        "Lead Coordinator in Vadodara Startup Festival",
    ],
};
