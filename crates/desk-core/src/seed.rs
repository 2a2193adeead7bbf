//! Sample articles used when the persisted collection is absent or unreadable.

use crate::entities::Article;

/// Storage key the article collection is persisted under.
pub const ARTICLES_KEY: &str = "cms_articles";

/// The three built-in sample articles, newest first.
#[must_use]
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".into(),
            headline: "City Council Approves New Public Park Initiative".into(),
            author: "Joe Doe".into(),
            body: "The City Council has officially approved a new initiative to develop a public \
                   park in the downtown area. The project, aimed at increasing green space and \
                   promoting outdoor activities, was passed unanimously during Tuesday night’s \
                   meeting. According to officials, the park will feature walking trails, a \
                   playground, picnic areas, and community gardens. Construction is expected to \
                   begin later this year, with a planned opening in late 2026. Residents \
                   expressed strong support for the project, calling it a much-needed addition \
                   to the neighborhood."
                .into(),
            publication_date: "2025-05-16".into(),
            published: true,
            images: vec![],
        },
        Article {
            id: "2".into(),
            headline: "Local Farmers Market Expands to Saturday Evenings".into(),
            author: "Ana Rodríguez".into(),
            body: "Great news for fresh food lovers: the Local FarmersMarket is expanding its hours!"
                .into(),
            publication_date: "2025-05-15".into(),
            published: false,
            images: vec![],
        },
        Article {
            id: "3".into(),
            headline: "High School Robotics Team Wins State Championship".into(),
            author: "Carlos Mendoza".into(),
            body: "The local high school robotics team has brought home the state championship \
                   trophy."
                .into(),
            publication_date: "2025-05-14".into(),
            published: true,
            images: vec![],
        },
    ]
}
