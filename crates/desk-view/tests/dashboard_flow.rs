//! End-to-end flows through the shell, dashboard, and editor drawer.

use pretty_assertions::assert_eq;

use desk_core::entities::ArticleFields;
use desk_core::enums::{Field, StatusFilter};
use desk_core::seed::ARTICLES_KEY;
use desk_editor::SubmitOutcome;
use desk_store::{ArticleOps, ArticleStore, MemoryKeyedStore};
use desk_view::{App, Dashboard, LiveSite, Preview, Route};

fn app() -> App<MemoryKeyedStore> {
    let mut app = App::new(Dashboard::default());
    app.mount(ArticleStore::open(MemoryKeyedStore::new(), ARTICLES_KEY));
    app
}

fn filler(n: usize) -> ArticleFields {
    ArticleFields {
        headline: format!("Filler story {n}"),
        author: "Wire Service".into(),
        body: "Body".into(),
        publication_date: "2025-04-01".into(),
        published: n % 2 == 0,
        images: vec![],
    }
}

#[test]
fn create_from_drawer_lands_on_first_row() {
    let mut app = app();
    let (dashboard, store) = app.dashboard_and_store();

    dashboard.open_create();
    let editor = dashboard.editor_mut();
    editor.set_text(Field::Headline, "Bridge reopens after repairs");
    editor.set_text(Field::Author, "Lena Fischer");
    editor.set_text(Field::Body, "Traffic resumes on Monday.");
    editor.set_text(Field::PublicationDate, "2025-07-01");
    let outcome = dashboard.submit_editor(store).unwrap();

    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert!(!dashboard.editor().is_open());
    let view = dashboard.view(store.articles());
    assert_eq!(view.items[0].headline, "Bridge reopens after repairs");
    assert_eq!(view.range_label(), "1-4 of 4");
    assert_eq!(app.revision(), 1);
}

#[test]
fn paging_through_twenty_five_articles() {
    let mut app = app();
    let (dashboard, store) = app.dashboard_and_store();
    for article in store.articles().to_vec() {
        store.delete(&article.id).unwrap();
    }
    for n in 0..25 {
        store.add(filler(n)).unwrap();
    }

    let sizes: Vec<usize> = (0..4)
        .map(|_| {
            let len = dashboard.view(store.articles()).items.len();
            dashboard.next_page(store.articles());
            len
        })
        .collect();

    assert_eq!(sizes, [10, 10, 5, 5]);
    assert_eq!(dashboard.page(), 3);
    let last = dashboard.view(store.articles());
    assert_eq!(last.range_label(), "21-25 of 25");
    assert!(!last.has_next());
    assert!(last.has_prev());

    dashboard.set_search("story 1");
    assert_eq!(dashboard.page(), 1);
    // "story 1" and "story 10".."story 19"
    assert_eq!(dashboard.view(store.articles()).total_items, 11);
}

#[test]
fn robotics_search_across_filters() {
    let mut app = app();
    let dashboard = app.dashboard_mut();
    dashboard.set_search("robotics");

    for status in [StatusFilter::All, StatusFilter::Published] {
        app.dashboard_mut().set_status(status);
        let view = app.dashboard().view(app.store().articles());
        let headlines: Vec<_> = view.items.iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(headlines, ["High School Robotics Team Wins State Championship"]);
    }

    app.dashboard_mut().set_status(StatusFilter::Unpublished);
    assert!(app.dashboard().view(app.store().articles()).items.is_empty());
}

#[test]
fn view_mode_publish_toggle_from_drawer() {
    let mut app = app();
    let (dashboard, store) = app.dashboard_and_store();
    let before = store.find("2").unwrap().clone();

    assert!(dashboard.open_view(store, "2"));
    dashboard.editor_mut().set_published(true);
    dashboard.submit_editor(store).unwrap();

    let after = store.find("2").unwrap();
    assert!(after.published);
    assert_eq!(after.headline, before.headline);
    assert_eq!(after.body, before.body);
}

#[test]
fn preview_round_trip() {
    let mut app = app();
    app.store_mut().goto_article("1");

    let Route::LiveSite(site) = app.route() else {
        panic!("expected live site route");
    };
    let articles = app.store().snapshot();
    let Preview::Article(preview) = site.render(&articles) else {
        panic!("expected article preview");
    };
    assert_eq!(preview.byline, "By Joe Doe");
    assert_eq!(preview.date, "16/05/2025");

    app.store_mut().delete("1").unwrap();
    let articles = app.store().snapshot();
    assert!(matches!(
        LiveSite::new("1").render(&articles),
        Preview::NotFound { id: "1" }
    ));

    app.go_back();
    assert_eq!(app.route(), Route::Dashboard);
}
