//! Static portfolio content: the built-in profile and an optional TOML override.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse content file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub grade: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tools: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub activity: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub contact_blurb: String,
    #[serde(default)]
    pub footer: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl PortfolioContent {
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Sushant Patil".into(),
                headline: "Computer Science Student & Full-Stack Developer".into(),
                summary: "Aspiring computer science professional seeking an opportunity to apply my skills in software development, machine learning, and full-stack technologies. Interested in contributing to innovative projects, improving technical expertise, and growing within a forward-thinking organization.".into(),
                location: "Kolhapur, Maharashtra".into(),
                email: "sushantpatil6217@gmail.com".into(),
                phone: "+91 9975806217".into(),
                linkedin: "https://linkedin.com/in/thesushpatil".into(),
                github: "https://github.com/thesushpatil".into(),
            },
            education: vec![
                EducationEntry {
                    institution: "Tatyasaheb Kore Institute Of Engineering & Technology".into(),
                    degree: "BTech in Computer Science".into(),
                    grade: "CGPA: 8.51".into(),
                    period: "2022 – 2026".into(),
                },
                EducationEntry {
                    institution: "S. M. Lohia College, Kolhapur".into(),
                    degree: "HSC".into(),
                    grade: "Percentage: 78.33".into(),
                    period: "2021 – 2022".into(),
                },
                EducationEntry {
                    institution: "S. M. Lohia Highschool, Kolhapur".into(),
                    degree: "SSC".into(),
                    grade: "Percentage: 93.40".into(),
                    period: "2019 – 2020".into(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Programming Languages".into(),
                    skills: strings(&["Python", "Java", "C/C++", "JavaScript", "HTML", "CSS"]),
                },
                SkillCategory {
                    title: "Libraries/Frameworks".into(),
                    skills: strings(&["Django", "Bootstrap", "Angular", "React", "NumPy", "TensorFlow"]),
                },
                SkillCategory {
                    title: "Tools / Platforms".into(),
                    skills: strings(&["Git and Github", "Linux", "Postman", "Jupyter Notebook", "Google Colab"]),
                },
                SkillCategory {
                    title: "Databases".into(),
                    skills: strings(&["MySQL", "PostgreSQL"]),
                },
            ],
            projects: vec![
                Project {
                    title: "Personal Expenditure Management".into(),
                    description: "Personal Budget Management, Expense Tracking, Financial Planning, Savings Identification, Spending Reduction, Data-Driven Decision Making, Goal Achievement.".into(),
                    tools: strings(&["Python", "Django", "JavaScript", "HTML"]),
                    link: None,
                },
                Project {
                    title: "Handwritten Digit Recognition".into(),
                    description: "TensorFlow-based deep learning model for MNIST digit recognition, achieving accuracy [0.97%] by applying Dense layers, ReLU, categorical cross-entropy, and the SGD optimizer.".into(),
                    tools: strings(&["Python", "TensorFlow", "NumPy"]),
                    link: None,
                },
                Project {
                    title: "Digital Clock".into(),
                    description: "Encompasses various aspects of time, date, timer management and calendar management. Displays real-time current date and time, Generates calendar for user-specified months and years.".into(),
                    tools: strings(&["C", "DSA"]),
                    link: None,
                },
            ],
            certifications: vec![
                Certification {
                    name: "FrontEnd Developer Certificate".into(),
                    provider: "Meta".into(),
                    year: "2025".into(),
                },
                Certification {
                    name: "BackEnd Developer Certificate".into(),
                    provider: "Meta".into(),
                    year: "2025".into(),
                },
                Certification {
                    name: "Angular Developer Certificate".into(),
                    provider: "Infosys".into(),
                    year: "2025".into(),
                },
                Certification {
                    name: "Python Professional Certificate".into(),
                    provider: "Meta".into(),
                    year: "2025".into(),
                },
            ],
            activities: vec![
                Activity {
                    activity: "Smart India Hackathon".into(),
                    year: "2024".into(),
                },
                Activity {
                    activity: "Build with AI, Google Developer Group".into(),
                    year: "2025".into(),
                },
                Activity {
                    activity: "Pune FOSS".into(),
                    year: "2025".into(),
                },
                Activity {
                    activity: "Technical Co-Head, TLUG".into(),
                    year: "2025".into(),
                },
            ],
            contact_blurb: "I'm always interested in new opportunities and collaborations. Feel free to reach out if you'd like to discuss projects, opportunities, or just say hello!".into(),
            footer: "© 2025 Sushant Patil. Lots of ☕ and ❤️".into(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile.name must not be empty".into()));
        }
        if !shared::domain::looks_like_email(&self.profile.email) {
            return Err(ContentError::Invalid(format!(
                "profile.email '{}' is not an email address",
                self.profile.email
            )));
        }
        let links = [
            ("profile.linkedin", Some(&self.profile.linkedin)),
            ("profile.github", Some(&self.profile.github)),
        ]
        .into_iter()
        .chain(
            self.projects
                .iter()
                .map(|project| ("projects.link", project.link.as_ref())),
        );
        for (key, link) in links {
            if let Some(link) = link {
                Url::parse(link).map_err(|err| {
                    ContentError::Invalid(format!("{key} '{link}' is not a valid url: {err}"))
                })?;
            }
        }
        if let Some(empty) = self.skills.iter().find(|c| c.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "skill category with {} skills has no title",
                empty.skills.len()
            )));
        }
        Ok(())
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
