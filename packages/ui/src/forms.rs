//! Edit-form state and validation for the list editors.
//!
//! Forms hold raw user input (the tech list is one comma-separated string) and
//! only become store input after [`ProjectForm::to_draft`] /
//! [`SkillForm::to_draft`] pass validation. The store never sees a blank title
//! or name.

use store::{models::clamp_level, Project, ProjectDraft, Skill, SkillDraft};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(())
}

/// Split a comma-separated tech list, trimming entries and dropping empty ones.
pub fn parse_tech_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tech_list(tech: &[String]) -> String {
    tech.join(", ")
}

/// Parse the value of the level slider.
pub fn parse_level(input: &str) -> Option<u8> {
    input.trim().parse::<u8>().ok().map(clamp_level)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    /// Comma-separated, as typed
    pub tech: String,
    pub link: String,
    pub github: String,
    pub image: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech: join_tech_list(&project.tech),
            link: project.link.clone(),
            github: project.github.clone(),
            image: project.image.clone(),
        }
    }

    pub fn to_draft(&self) -> Result<ProjectDraft, FormError> {
        required("Title", &self.title)?;
        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            tech: parse_tech_list(&self.tech),
            link: self.link.clone(),
            github: self.github.clone(),
            image: self.image.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillForm {
    pub name: String,
    pub level: u8,
}

impl Default for SkillForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 50,
        }
    }
}

impl SkillForm {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
        }
    }

    pub fn to_draft(&self) -> Result<SkillDraft, FormError> {
        required("Skill name", &self.name)?;
        Ok(SkillDraft {
            name: self.name.clone(),
            level: clamp_level(self.level),
        })
    }
}
