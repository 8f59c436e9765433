//! Demo content for a fresh installation.

use chrono::{TimeZone, Utc};

use super::Repository;
use crate::errors::AppError;
use crate::i18n::Bilingual;
use crate::models::{
    AboutData, BlogPost, CreateBlogPostRequest, CreateProjectRequest, CreateTimelineRequest,
    EducationItem, HomeContent, PersonalInfo, Project, SavePortfolioRequest, TimelineEntry,
};

/// Everything `replace_content` writes.
#[derive(Debug, Clone)]
pub struct SeedContent {
    pub portfolio: SavePortfolioRequest,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
}

/// Wipe portfolio, timeline, projects and blog posts and load the demo set.
pub async fn seed_database(repo: &Repository) -> Result<(), AppError> {
    let content = demo_content();
    repo.replace_content(&content).await?;
    tracing::info!(
        timeline = content.timeline.len(),
        projects = content.projects.len(),
        posts = content.posts.len(),
        "Seeded demo content"
    );
    Ok(())
}

fn text(en: &str, no: &str) -> Bilingual<String> {
    Bilingual::new(en.to_string(), no.to_string())
}

fn list(en: &[&str], no: &[&str]) -> Bilingual<Vec<String>> {
    Bilingual::new(
        en.iter().map(|s| s.to_string()).collect(),
        no.iter().map(|s| s.to_string()).collect(),
    )
}

fn education(degree: &str, institution: &str, period: &str, thesis: Option<&str>) -> EducationItem {
    EducationItem {
        degree: degree.to_string(),
        institution: institution.to_string(),
        period: period.to_string(),
        thesis: thesis.map(str::to_string),
    }
}

pub fn demo_content() -> SeedContent {
    let portfolio = SavePortfolioRequest {
        personal_info: PersonalInfo {
            name: "Kari Nordmann".to_string(),
            title: text("Audit Associate", "Revisor"),
            email: "kari@example.com".to_string(),
            linkedin: "https://www.linkedin.com/in/example/".to_string(),
            github: "https://github.com/example".to_string(),
            profile_image: "https://example.com/profile.jpg".to_string(),
            birthdate: "1 January 1999".to_string(),
        },
        home: Bilingual::new(
            HomeContent {
                greeting: "Hi, I'm Kari.".to_string(),
                description: "I work with financial audits and enjoy data analysis. Welcome to my portfolio!".to_string(),
            },
            HomeContent {
                greeting: "Hei! Jeg heter Kari.".to_string(),
                description: "Jeg jobber med finansiell revisjon og liker dataanalyse. Velkommen til min portefølje!".to_string(),
            },
        ),
        about: AboutData {
            education: Bilingual::new(
                vec![
                    education(
                        "MSc Financial Economics",
                        "NTNU",
                        "2023–2025",
                        Some("Volatility and expected stock returns"),
                    ),
                    education("BSc Economics", "NTNU", "2020–2023", None),
                ],
                vec![
                    education(
                        "Master i finansiell økonomi",
                        "NTNU",
                        "2023–2025",
                        Some("Volatilitet og forventet aksjeavkastning"),
                    ),
                    education("Bachelor i samfunnsøkonomi", "NTNU", "2020–2023", None),
                ],
            ),
            skills: list(
                &["Python (data analysis)", "Excel", "Financial modeling"],
                &["Python (dataanalyse)", "Excel", "Finansiell modellering"],
            ),
            languages: list(
                &["Norwegian (native)", "English (fluent)"],
                &["Norsk (morsmål)", "Engelsk (flytende)"],
            ),
            interests: list(&["Hiking", "Quantitative finance"], &["Friluftsliv", "Kvantitativ finans"]),
        },
    };

    let timeline = vec![
        TimelineEntry::from_request(CreateTimelineRequest {
            year: "2025–Present".to_string(),
            title: text("Audit Associate", "Revisor"),
            company: text("Example Audit AS", "Example Audit AS"),
            description: text(
                "Financial audits and compliance reviews",
                "Finansiell revisjon og compliance-vurderinger",
            ),
            order: 3,
        }),
        TimelineEntry::from_request(CreateTimelineRequest {
            year: "2023–2024".to_string(),
            title: text("Treasurer", "Økonomiansvarlig"),
            company: text("University Swimming Club", "Universitetets svømmeklubb"),
            description: text("Budgeting and bookkeeping", "Budsjettering og regnskap"),
            order: 2,
        }),
        TimelineEntry::from_request(CreateTimelineRequest {
            year: "2021–2023".to_string(),
            title: text("Teaching Assistant", "Læringsassistent"),
            company: text("NTNU", "NTNU"),
            description: text("Statistics and mathematics", "Statistikk og matematikk"),
            order: 1,
        }),
    ];

    let projects = vec![
        Project::from_request(CreateProjectRequest {
            title: text("Stock Volatility Analysis", "Aksjevolatilitetsanalyse"),
            description: text(
                "Empirical study of how volatility relates to returns",
                "Empirisk studie av sammenhengen mellom volatilitet og avkastning",
            ),
            technologies: vec!["Python".to_string(), "Pandas".to_string()],
            github: "https://github.com/example/volatility".to_string(),
            live_url: None,
            featured: true,
            order: 1,
        }),
        Project::from_request(CreateProjectRequest {
            title: text("Audit Automation Scripts", "Skript for revisjonsautomatisering"),
            description: text(
                "Macros and scripts that speed up recurring audit work",
                "Makroer og skript som effektiviserer gjentakende revisjonsarbeid",
            ),
            technologies: vec!["Python".to_string(), "VBA".to_string()],
            github: "https://github.com/example/audit-tools".to_string(),
            live_url: None,
            featured: false,
            order: 2,
        }),
    ];

    let posts = vec![
        BlogPost::from_request(CreateBlogPostRequest {
            title: text("Understanding Financial Risk", "Forstå finansiell risiko"),
            excerpt: text(
                "A short tour of modern risk measures",
                "En kort gjennomgang av moderne risikomål",
            ),
            content: text(
                "Risk analysis has changed a lot over the past decades...",
                "Risikoanalyse har endret seg mye de siste tiårene...",
            ),
            slug: text("financial-risk", "finansiell-risiko"),
            category: text("Finance", "Finans"),
            read_time: "5 min".to_string(),
            published: true,
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single(),
        }),
        BlogPost::from_request(CreateBlogPostRequest {
            title: text("Python for Auditors", "Python for revisorer"),
            excerpt: text(
                "Automating the boring parts of an audit",
                "Automatiser de kjedelige delene av revisjonen",
            ),
            content: text(
                "Most audit checklists contain steps a script can do...",
                "De fleste sjekklister inneholder steg et skript kan gjøre...",
            ),
            slug: text("python-for-auditors", "python-for-revisorer"),
            category: text("Technology", "Teknologi"),
            read_time: "7 min".to_string(),
            published: true,
            published_at: Utc.with_ymd_and_hms(2024, 2, 20, 9, 0, 0).single(),
        }),
    ];

    SeedContent {
        portfolio,
        timeline,
        projects,
        posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Lang, Localize};

    #[test]
    fn test_demo_content_is_fully_translated() {
        let content = demo_content();
        let info = &content.portfolio.personal_info;
        assert_eq!(info.title.missing(), None);
        assert_eq!(content.portfolio.home.missing(), None);
        assert_eq!(content.portfolio.about.education.missing(), None);

        for lang in Lang::ALL {
            for entry in &content.timeline {
                entry.localize(lang).unwrap();
            }
            for project in &content.projects {
                project.localize(lang).unwrap();
            }
            for post in &content.posts {
                post.localize(lang).unwrap();
                post.detail(lang).unwrap();
            }
        }
    }

    #[test]
    fn test_demo_posts_are_published() {
        let content = demo_content();
        assert!(content.posts.iter().all(|p| p.published && p.published_at.is_some()));
    }
}
