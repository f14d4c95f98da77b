//! The site owner's knowledge base.
//!
//! Slash commands answer from this data without calling the provider.
//! A deployment can replace it wholesale through `FolioConfig::profile`.

use serde::{Deserialize, Serialize};

use crate::command::Intent;
use crate::payload::{AboutCard, ContactCard, ExperienceItem, Payload, ProjectItem, SkillGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub about: AboutCard,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub contact: ContactCard,
    pub resume_url: String,
}

impl Profile {
    /// The fixed payload answering `intent`
    pub fn payload_for(&self, intent: Intent) -> Payload {
        match intent {
            Intent::About => Payload::About(self.about.clone()),
            Intent::Experience => Payload::Experience {
                items: self.experience.clone(),
            },
            Intent::Projects => Payload::Projects {
                items: self.projects.clone(),
            },
            Intent::Skills => Payload::Skills {
                groups: self.skills.clone(),
            },
            Intent::Contact => Payload::Contact(self.contact.clone()),
            Intent::Resume => Payload::Link {
                label: "Download my resume".to_string(),
                url: self.resume_url.clone(),
            },
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            about: AboutCard {
                name: "Harpreet Singh".to_string(),
                headline: "I love building scalable backend systems and web3 products".to_string(),
                summary: DEFAULT_SUMMARY.to_string(),
                highlights: strings(&["Solidity", "Next.js", "Stripe", "Zapier", "OpenAI"]),
            },
            skills: vec![
                group("Frontend", &["React", "Next.js", "TypeScript", "Tailwind"]),
                group("Backend", &["Node.js", "Express", "Python", "Django", "GraphQL"]),
                group("Infra & DB", &["PostgreSQL", "MongoDB", "Redis", "Docker", "AWS"]),
                group("Testing & Tooling", &["Jest", "CI/CD", "Performance"]),
            ],
            experience: vec![
                ExperienceItem {
                    role: "Senior Software Developer".to_string(),
                    company: "TechCorp".to_string(),
                    period: "2022 – Present".to_string(),
                    bullets: strings(&[
                        "Microservices serving 100k+ users",
                        "40% performance improvement",
                    ]),
                },
                ExperienceItem {
                    role: "Full Stack Developer".to_string(),
                    company: "StartupXYZ".to_string(),
                    period: "2021 – 2022".to_string(),
                    bullets: strings(&["React/Node delivery", "CI/CD time cut by 60%"]),
                },
            ],
            projects: vec![
                ProjectItem {
                    title: "E-commerce Platform".to_string(),
                    description: "Full-stack commerce app with payments and inventory".to_string(),
                    tech: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                    github: Some("https://github.com/harpreetsingh".to_string()),
                    demo: None,
                },
                ProjectItem {
                    title: "Task Management App".to_string(),
                    description: "Real-time collaboration board".to_string(),
                    tech: strings(&["Next.js", "Socket.io", "PostgreSQL", "Redis"]),
                    github: Some("https://github.com/harpreetsingh".to_string()),
                    demo: None,
                },
            ],
            contact: ContactCard {
                email: "harpreet@example.com".to_string(),
                phone: None,
                location: None,
                linkedin: Some("https://linkedin.com/in/harpreet-singh".to_string()),
                github: Some("https://github.com/harpreetsingh".to_string()),
                twitter: None,
                website: None,
            },
            resume_url: "https://drive.google.com/file/d/1ueDR1rZ2hCgi_Ahy6WMe2uGCaWKbBr4Y/view?usp=drivesdk".to_string(),
        }
    }
}

const DEFAULT_SUMMARY: &str = "Hi! I'm Harpreet Singh, a software developer who builds \
scalable backend systems and web3 products with Solidity, Next.js, Stripe, Zapier and OpenAI.

When I'm not coding I explore new tech, contribute to open source, or share what I learn.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(name: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        name: name.to_string(),
        skills: strings(skills),
    }
}
