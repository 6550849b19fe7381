//! Structured resume record — the JSON shape the builder frontend submits —
//! and its rendering into the single plain-text document fed to the model.
//!
//! Every wire field is optional: absent fields deserialize to empty strings
//! or empty lists and render as blanks, never as errors.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredResume {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub summary: String,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub position_of_responsibility: Vec<PositionOfResponsibility>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree_name: String,
    pub institution: String,
    pub location: String,
    pub start_year: String,
    pub end_year: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub job_title: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub demo_link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PositionOfResponsibility {
    pub position: String,
    pub organization: String,
    pub duration: String,
    pub contributions: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub conference: String,
    pub date: String,
    pub authors: String,
    pub link: String,
}

impl StructuredResume {
    /// Renders the record as a fixed-section plain-text document.
    ///
    /// Section order is a contract: header, summary, skills, education,
    /// work experience, projects, then the optional sections
    /// (certifications, achievements, positions of responsibility,
    /// publications), each emitted only when its first entry's
    /// discriminating field is non-empty.
    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();

        text.push_str(&format!("Name: {}\n", self.name));
        text.push_str(&format!("Email: {}\n", self.email));
        text.push_str(&format!("Phone: {}\n", self.mobile));
        text.push_str(&format!("Location: {}\n", self.location));
        text.push_str(&format!("LinkedIn: {}\n", self.linkedin));
        text.push_str(&format!("GitHub: {}\n", self.github));
        text.push_str(&format!("Portfolio: {}\n\n", self.portfolio));

        text.push_str(&format!("Summary:\n{}\n\n", self.summary));

        text.push_str(&format!(
            "Technical Skills: {}\n",
            self.skills.technical.join(", ")
        ));
        text.push_str(&format!(
            "Soft Skills: {}\n\n",
            self.skills.soft_skills.join(", ")
        ));

        text.push_str("Education:\n");
        for edu in &self.education {
            text.push_str(&format!(
                "- {} at {}, {}\n",
                edu.degree_name, edu.institution, edu.location
            ));
            text.push_str(&format!(
                "  {} - {}, CGPA: {}\n",
                edu.start_year, edu.end_year, edu.cgpa
            ));
        }
        text.push('\n');

        text.push_str("Work Experience:\n");
        for job in &self.work_experience {
            text.push_str(&format!("- {} at {}\n", job.job_title, job.company_name));
            text.push_str(&format!("  {} - {}\n", job.start_date, job.end_date));
            text.push_str(&format!("  Responsibilities: {}\n", job.responsibilities));
        }
        text.push('\n');

        text.push_str("Projects:\n");
        for project in &self.projects {
            text.push_str(&format!("- {}\n", project.title));
            text.push_str(&format!("  Description: {}\n", project.description));
            text.push_str(&format!(
                "  Tech Stack: {}\n",
                project.tech_stack.join(", ")
            ));
            if !project.demo_link.is_empty() {
                text.push_str(&format!("  Demo: {}\n", project.demo_link));
            }
        }
        text.push('\n');

        if self.certifications.first().is_some_and(|c| !c.name.is_empty()) {
            text.push_str("Certifications:\n");
            for cert in &self.certifications {
                text.push_str(&format!("- {}", cert.name));
                if !cert.link.is_empty() {
                    text.push_str(&format!(" ({})", cert.link));
                }
                text.push('\n');
            }
            text.push('\n');
        }

        if self.achievements.first().is_some_and(|a| !a.title.is_empty()) {
            text.push_str("Achievements:\n");
            for ach in &self.achievements {
                text.push_str(&format!("- {}: {}\n", ach.title, ach.description));
            }
            text.push('\n');
        }

        if self
            .position_of_responsibility
            .first()
            .is_some_and(|p| !p.position.is_empty())
        {
            text.push_str("Positions of Responsibility:\n");
            for pos in &self.position_of_responsibility {
                text.push_str(&format!(
                    "- {} at {}, {}\n",
                    pos.position, pos.organization, pos.duration
                ));
                text.push_str(&format!("  {}\n", pos.contributions));
            }
            text.push('\n');
        }

        if self.publications.first().is_some_and(|p| !p.title.is_empty()) {
            text.push_str("Publications:\n");
            for publication in &self.publications {
                text.push_str(&format!(
                    "- {}, {}, {}\n",
                    publication.title, publication.conference, publication.date
                ));
                text.push_str(&format!("  Authors: {}\n", publication.authors));
                if !publication.link.is_empty() {
                    text.push_str(&format!("  Link: {}\n", publication.link));
                }
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> StructuredResume {
        StructuredResume {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mobile: "+44 1234 567890".to_string(),
            location: "London".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
            github: "github.com/ada".to_string(),
            portfolio: "ada.dev".to_string(),
            summary: "Engineer with a focus on analytical engines.".to_string(),
            skills: Skills {
                technical: vec!["Rust".to_string(), "SQL".to_string()],
                soft_skills: vec!["Communication".to_string()],
            },
            education: vec![Education {
                degree_name: "BSc Mathematics".to_string(),
                institution: "University of London".to_string(),
                location: "London".to_string(),
                start_year: "2015".to_string(),
                end_year: "2018".to_string(),
                cgpa: "9.1".to_string(),
            }],
            work_experience: vec![WorkExperience {
                job_title: "Backend Engineer".to_string(),
                company_name: "Difference Engine Ltd".to_string(),
                start_date: "Jan 2019".to_string(),
                end_date: "Present".to_string(),
                responsibilities: "Built number-crunching services.".to_string(),
            }],
            projects: vec![Project {
                title: "Bernoulli Runner".to_string(),
                description: "Computes Bernoulli numbers.".to_string(),
                tech_stack: vec!["Rust".to_string(), "Tokio".to_string()],
                demo_link: "https://example.com/demo".to_string(),
            }],
            certifications: vec![Certification {
                name: "AWS Solutions Architect".to_string(),
                link: "https://aws.example.com".to_string(),
            }],
            achievements: vec![Achievement {
                title: "First programmer".to_string(),
                description: "Wrote the first published algorithm.".to_string(),
            }],
            position_of_responsibility: vec![PositionOfResponsibility {
                position: "Team Lead".to_string(),
                organization: "Analytical Society".to_string(),
                duration: "2020-2021".to_string(),
                contributions: "Led a team of five.".to_string(),
            }],
            publications: vec![Publication {
                title: "Notes on the Analytical Engine".to_string(),
                conference: "Scientific Memoirs".to_string(),
                date: "1843".to_string(),
                authors: "A. Lovelace".to_string(),
                link: "https://example.com/notes".to_string(),
            }],
        }
    }

    #[test]
    fn test_section_order_is_fixed() {
        let text = sample_resume().to_plain_text();
        let markers = [
            "Name:",
            "Summary:",
            "Technical Skills:",
            "Education:",
            "Work Experience:",
            "Projects:",
            "Certifications:",
            "Achievements:",
            "Positions of Responsibility:",
            "Publications:",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| text.find(m).unwrap_or_else(|| panic!("missing section {m}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "sections out of order:\n{text}");
    }

    #[test]
    fn test_optional_sections_gated_on_first_entry() {
        let mut resume = sample_resume();
        resume.certifications = vec![];
        resume.publications = vec![Publication::default()];
        let text = resume.to_plain_text();
        assert!(!text.contains("Certifications:"));
        assert!(!text.contains("Publications:"));
        assert!(text.contains("Achievements:"));
        assert!(text.contains("Positions of Responsibility:"));
    }

    #[test]
    fn test_demo_link_rendered_only_when_present() {
        let mut resume = sample_resume();
        resume.projects[0].demo_link = String::new();
        let text = resume.to_plain_text();
        assert!(!text.contains("Demo:"));
    }

    #[test]
    fn test_absent_fields_deserialize_to_empty() {
        let resume: StructuredResume = serde_json::from_str("{}").unwrap();
        assert!(resume.name.is_empty());
        assert!(resume.education.is_empty());
        // Rendering an empty record still produces the mandatory sections
        let text = resume.to_plain_text();
        assert!(text.contains("Summary:"));
        assert!(text.contains("Education:"));
        assert!(!text.contains("Certifications:"));
    }

    #[test]
    fn test_deserializes_camel_case_wire_names() {
        let json = r#"{
            "name": "Ada",
            "skills": {"technical": ["Rust"], "softSkills": ["Teamwork"]},
            "workExperience": [{"jobTitle": "Engineer", "companyName": "Acme"}],
            "positionOfResponsibility": [{"position": "Lead"}]
        }"#;
        let resume: StructuredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.skills.soft_skills, vec!["Teamwork"]);
        assert_eq!(resume.work_experience[0].job_title, "Engineer");
        assert_eq!(resume.position_of_responsibility[0].position, "Lead");
    }
}
