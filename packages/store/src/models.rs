//! # Portfolio document model
//!
//! The whole site is one aggregate, [`Portfolio`], persisted as a single JSON
//! record. Field names match the record layout on disk / in local storage, so
//! the serde derives are the wire format.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Hero`] | Banner at the top of the page: name, role title and tagline. |
//! | [`About`] | Bio paragraph plus an optional profile image URL. |
//! | [`Project`] | One card in the projects grid. Ordered; insertion order is display order. |
//! | [`Skill`] | A named skill with a proficiency `level` in `0..=100`. |
//! | [`Contact`] | Email and social links, each optional (empty string = hidden). |
//!
//! Entities in a sequence carry a store-assigned `id`. Callers create them from
//! a [`ProjectDraft`] / [`SkillDraft`] (no id) and edit them with a
//! [`ProjectPatch`] / [`SkillPatch`], which overwrite only the fields that are
//! `Some`.
//!
//! Optional URL fields default to empty when missing from a persisted record;
//! everything else is required, and a record missing one of them is treated as
//! malformed by [`crate::PortfolioStore`].

use serde::{Deserialize, Deserializer, Serialize};

/// Highest skill level; levels are percentages.
pub const MAX_LEVEL: u8 = 100;

/// The full portfolio document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    /// Role, e.g. "Full Stack Developer"
    pub title: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    /// Profile image URL, empty when unset
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Live URL
    pub link: String,
    /// Source repository URL
    pub github: String,
    /// Screenshot URL, empty when unset
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Any JSON number is accepted on load and clamped into `0..=MAX_LEVEL`.
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

/// A project as submitted by a caller, before the store assigns an id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
    pub github: String,
    pub image: String,
}

/// A skill as submitted by a caller, before the store assigns an id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
}

/// Field-wise update for a [`Project`]. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

/// Field-wise update for a [`Skill`]. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
}

/// Clamp a level into `0..=MAX_LEVEL`.
pub fn clamp_level(level: u8) -> u8 {
    level.min(MAX_LEVEL)
}

/// Round a stored level to the nearest whole percent within bounds. NaN is 0.
fn level_from_number(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_LEVEL)) as u8
}

fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(level_from_number)
}

impl Project {
    pub(crate) fn from_draft(id: String, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            tech: draft.tech,
            link: draft.link,
            github: draft.github,
            image: draft.image,
        }
    }

    /// Shallow merge: overwrite every field the patch carries.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(tech) = patch.tech {
            self.tech = tech;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(github) = patch.github {
            self.github = github;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

impl Skill {
    pub(crate) fn from_draft(id: String, draft: SkillDraft) -> Self {
        Self {
            id,
            name: draft.name,
            level: clamp_level(draft.level),
        }
    }

    /// Shallow merge: overwrite every field the patch carries.
    pub fn apply(&mut self, patch: SkillPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(level) = patch.level {
            self.level = clamp_level(level);
        }
    }
}

impl From<ProjectDraft> for ProjectPatch {
    /// A patch that replaces every editable field, as the edit form does.
    fn from(draft: ProjectDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            tech: Some(draft.tech),
            link: Some(draft.link),
            github: Some(draft.github),
            image: Some(draft.image),
        }
    }
}

impl From<SkillDraft> for SkillPatch {
    fn from(draft: SkillDraft) -> Self {
        Self {
            name: Some(draft.name),
            level: Some(draft.level),
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech.clone(),
            link: project.link.clone(),
            github: project.github.clone(),
            image: project.image.clone(),
        }
    }
}

impl From<&Skill> for SkillDraft {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
        }
    }
}

impl Portfolio {
    /// Bring a loaded document back inside the model's bounds.
    pub(crate) fn normalized(mut self) -> Self {
        for skill in &mut self.skills {
            skill.level = clamp_level(skill.level);
        }
        self
    }
}

impl Default for Portfolio {
    /// The fixed document used on first run and after a reset.
    fn default() -> Self {
        Self {
            hero: Hero {
                name: "Your Name".to_string(),
                title: "Full Stack Developer".to_string(),
                tagline: "Building modern web experiences with clean code and creative design."
                    .to_string(),
            },
            about: About {
                bio: "I am a passionate developer with experience in building web applications. \
                      I love turning ideas into reality through code."
                    .to_string(),
                image: String::new(),
            },
            projects: vec![Project {
                id: "1".to_string(),
                title: "Sample Project".to_string(),
                description:
                    "A sample project to showcase your work. Edit this from the admin panel."
                        .to_string(),
                tech: vec!["React".to_string(), "Node.js".to_string(), "CSS".to_string()],
                link: "#".to_string(),
                github: "#".to_string(),
                image: String::new(),
            }],
            skills: vec![
                default_skill("1", "React", 90),
                default_skill("2", "JavaScript", 85),
                default_skill("3", "CSS", 80),
                default_skill("4", "Node.js", 75),
            ],
            contact: Contact {
                email: "hello@example.com".to_string(),
                github: "https://github.com".to_string(),
                linkedin: "https://linkedin.com".to_string(),
                twitter: String::new(),
            },
        }
    }
}

fn default_skill(id: &str, name: &str, level: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_shape() {
        let doc = Portfolio::default();
        assert_eq!(doc.hero.name, "Your Name");
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.projects[0].tech, vec!["React", "Node.js", "CSS"]);
        assert_eq!(doc.skills.len(), 4);
        assert_eq!(doc.skills[3].name, "Node.js");
        assert_eq!(doc.skills[3].level, 75);
        assert!(doc.contact.twitter.is_empty());
    }

    #[test]
    fn test_project_patch_is_shallow() {
        let mut project = Portfolio::default().projects.remove(0);
        project.apply(ProjectPatch {
            title: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(project.title, "X");
        assert_eq!(project.id, "1");
        assert_eq!(project.tech, vec!["React", "Node.js", "CSS"]);
        assert_eq!(project.link, "#");
    }

    #[test]
    fn test_skill_level_clamped() {
        let skill = Skill::from_draft(
            "a".to_string(),
            SkillDraft {
                name: "Rust".to_string(),
                level: 250,
            },
        );
        assert_eq!(skill.level, MAX_LEVEL);

        let mut skill = skill;
        skill.apply(SkillPatch {
            level: Some(101),
            ..Default::default()
        });
        assert_eq!(skill.level, 100);
        skill.apply(SkillPatch {
            level: Some(0),
            ..Default::default()
        });
        assert_eq!(skill.level, 0);
    }

    #[test]
    fn test_saved_level_accepts_any_number() {
        let parse = |level: &str| {
            let raw = format!(r#"{{"id": "1", "name": "Go", "level": {level}}}"#);
            serde_json::from_str::<Skill>(&raw).unwrap().level
        };
        assert_eq!(parse("70"), 70);
        assert_eq!(parse("256"), 100);
        assert_eq!(parse("-5"), 0);
        assert_eq!(parse("85.0"), 85);
        assert_eq!(parse("84.6"), 85);
        let word = r#"{"id": "1", "name": "Go", "level": "high"}"#;
        assert!(serde_json::from_str::<Skill>(word).is_err());
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{
            "hero": {"name": "A", "title": "B", "tagline": "C"},
            "about": {"bio": "bio"},
            "projects": [{"id": "7", "title": "T", "description": "D",
                          "tech": [], "link": "", "github": ""}],
            "skills": [],
            "contact": {"email": "a@b.c"}
        }"#;
        let doc: Portfolio = serde_json::from_str(json).unwrap();
        assert!(doc.about.image.is_empty());
        assert!(doc.projects[0].image.is_empty());
        assert_eq!(doc.contact.email, "a@b.c");
        assert!(doc.contact.linkedin.is_empty());
    }

    #[test]
    fn test_draft_from_entity_roundtrip() {
        let project = Portfolio::default().projects.remove(0);
        let draft = ProjectDraft::from(&project);
        assert_eq!(Project::from_draft(project.id.clone(), draft), project);
    }
}
