//! Static page content and the small amount of logic derived from it
//! (navigation targets, outbound links, icons).

mod data;

pub use data::RESUME;

#[derive(Clone, Copy, Debug)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub alias: Option<&'static str>,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub summary: &'static str,
}

/// The four hero tiles.
#[derive(Clone, Copy, Debug)]
pub struct Highlights {
    pub education: &'static str,
    pub project_tech: &'static str,
    pub focus_area: &'static str,
    pub location_city: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationStatus {
    Completed,
    InProgress,
}

impl EducationStatus {
    pub fn label(self) -> &'static str {
        match self {
            EducationStatus::Completed => "Completed",
            EducationStatus::InProgress => "In Progress",
        }
    }

    /// Fill of the progress bar shown next to the entry.
    pub fn progress_pct(self) -> u8 {
        match self {
            EducationStatus::Completed => 100,
            EducationStatus::InProgress => 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationKind {
    Degree,
    Diploma,
    School,
    Course,
}

impl EducationKind {
    pub fn icon(self) -> &'static str {
        match self {
            EducationKind::Degree => "graduation-cap",
            EducationKind::Diploma => "award",
            EducationKind::School => "school",
            EducationKind::Course => "book-open",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub status: EducationStatus,
    pub kind: EducationKind,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub highlights: Highlights,
    pub skills: &'static [SkillCategory],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub certifications: &'static [&'static str],
    pub awards: &'static [&'static str],
}

/// Navigation entries, in menu order.
pub const NAV_ITEMS: [&str; 5] = ["About", "Experience", "Skills", "Projects", "Education"];

/// Id of the section a navigation entry scrolls to.
pub fn section_id(nav_item: &str) -> String {
    nav_item.to_ascii_lowercase()
}

impl PersonalInfo {
    pub fn compose_mail_url(&self) -> String {
        format!("https://mail.google.com/mail/?view=cm&fs=1&to={}", self.email)
    }

    pub fn github_url(&self) -> String {
        with_scheme(self.github)
    }

    pub fn linkedin_url(&self) -> String {
        with_scheme(self.linkedin)
    }

    /// Text of the background wordmark: the alias, else the name.
    pub fn wordmark(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }
}

fn with_scheme(host_path: &str) -> String {
    if host_path.starts_with("https://") || host_path.starts_with("http://") {
        host_path.to_string()
    } else {
        format!("https://{host_path}")
    }
}
