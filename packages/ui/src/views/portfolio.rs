use chrono::Datelike;
use dioxus::prelude::*;
use store::{Contact, Project, Skill};

use crate::context::use_portfolio;
use crate::icons::{FaArrowDown, FaArrowUpRightFromSquare, FaEnvelope, FaFolderOpen};
use crate::brand_icons::{FaGithub, FaLinkedin, FaTwitter};
use crate::views::EmptyState;
use crate::Icon;

const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

/// Target of a project's Live or Code button. Empty strings and the `#`
/// placeholder the default document uses hide the button.
pub fn project_link(url: &str) -> Option<&str> {
    if url.is_empty() || url == "#" {
        None
    } else {
        Some(url)
    }
}

/// Target of a contact link: shown whenever it is non-empty, passed through as is.
pub fn contact_link(url: &str) -> Option<&str> {
    (!url.is_empty()).then_some(url)
}

/// The public page: every section rendered from the current document.
#[component]
pub fn PortfolioView() -> Element {
    let portfolio = use_portfolio();
    let doc = portfolio.with(|doc| doc.clone());
    let hero = doc.hero;
    let about = doc.about;
    let year = chrono::Local::now().year();

    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }
        div {
            class: "page-wrapper",

            section {
                class: "hero",
                id: "hero",
                div {
                    class: "hero-content",
                    p { class: "hero-greeting", "// hello world" }
                    h1 { class: "hero-name", "{hero.name}" }
                    p { class: "hero-title", "{hero.tagline}" }
                    a {
                        href: "#projects",
                        class: "hero-cta",
                        "View My Work "
                        Icon { icon: FaArrowDown, width: 16, height: 16 }
                    }
                }
            }

            section {
                class: "section",
                id: "about",
                SectionTitle { lead: "About", accent: "Me" }
                p { class: "section-subtitle", "{hero.title}" }
                div {
                    class: "about-content",
                    if !about.image.is_empty() {
                        img { class: "about-image", src: "{about.image}", alt: "{hero.name}" }
                    }
                    p { class: "about-bio", "{about.bio}" }
                }
            }

            section {
                class: "section",
                id: "projects",
                SectionTitle { lead: "My", accent: "Projects" }
                p { class: "section-subtitle", "Things I've built and worked on" }
                if doc.projects.is_empty() {
                    EmptyState { message: "No projects yet. Add some from the admin panel!" }
                } else {
                    div {
                        class: "projects-grid",
                        for project in doc.projects {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                }
            }

            section {
                class: "section",
                id: "skills",
                SectionTitle { lead: "My", accent: "Skills" }
                p { class: "section-subtitle", "Technologies and tools I work with" }
                if doc.skills.is_empty() {
                    EmptyState { message: "No skills added yet. Add them from the admin panel!" }
                } else {
                    div {
                        class: "skills-grid",
                        for skill in doc.skills {
                            SkillBar { key: "{skill.id}", skill: skill.clone() }
                        }
                    }
                }
            }

            section {
                class: "section",
                id: "contact",
                SectionTitle { lead: "Get In", accent: "Touch" }
                p { class: "section-subtitle", "Feel free to reach out" }
                ContactLinks { contact: doc.contact }
            }

            footer {
                class: "footer",
                "© {year} {hero.name}. Built with Dioxus."
            }
        }
    }
}

#[component]
fn SectionTitle(lead: String, accent: String) -> Element {
    rsx! {
        h2 {
            class: "section-title",
            "{lead} "
            span { class: "accent", "{accent}" }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let live = project_link(&project.link).map(str::to_string);
    let code = project_link(&project.github).map(str::to_string);

    rsx! {
        div {
            class: "project-card",
            div {
                class: "project-card-image",
                if project.image.is_empty() {
                    Icon { icon: FaFolderOpen, width: 48, height: 48 }
                } else {
                    img { src: "{project.image}", alt: "{project.title}" }
                }
            }
            div {
                class: "project-card-body",
                h3 { class: "project-card-title", "{project.title}" }
                p { class: "project-card-desc", "{project.description}" }
                div {
                    class: "project-tech",
                    for (i, tech) in project.tech.iter().enumerate() {
                        span { key: "{i}", class: "tech-tag", "{tech}" }
                    }
                }
                div {
                    class: "project-links",
                    if let Some(href) = live {
                        ExternalLink {
                            href,
                            Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                            " Live"
                        }
                    }
                    if let Some(href) = code {
                        ExternalLink {
                            href,
                            Icon { icon: FaGithub, width: 14, height: 14 }
                            " Code"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillBar(skill: Skill) -> Element {
    rsx! {
        div {
            class: "skill-item",
            div {
                class: "skill-header",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{skill.level}%" }
            }
            div {
                class: "skill-bar",
                div { class: "skill-bar-fill", style: "width: {skill.level}%" }
            }
        }
    }
}

#[component]
fn ContactLinks(contact: Contact) -> Element {
    let email = contact.email.clone();

    rsx! {
        div {
            class: "contact-links",
            if !email.is_empty() {
                a {
                    class: "contact-link",
                    href: "mailto:{email}",
                    Icon { icon: FaEnvelope, width: 18, height: 18 }
                    " {email}"
                }
            }
            if let Some(href) = contact_link(&contact.github).map(str::to_string) {
                ExternalLink {
                    href,
                    class: "contact-link",
                    Icon { icon: FaGithub, width: 18, height: 18 }
                    " GitHub"
                }
            }
            if let Some(href) = contact_link(&contact.linkedin).map(str::to_string) {
                ExternalLink {
                    href,
                    class: "contact-link",
                    Icon { icon: FaLinkedin, width: 18, height: 18 }
                    " LinkedIn"
                }
            }
            if let Some(href) = contact_link(&contact.twitter).map(str::to_string) {
                ExternalLink {
                    href,
                    class: "contact-link",
                    Icon { icon: FaTwitter, width: 18, height: 18 }
                    " Twitter"
                }
            }
        }
    }
}

/// Anchor to an outside URL, opened in a new tab. The URL is passed through as is.
#[component]
fn ExternalLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}
