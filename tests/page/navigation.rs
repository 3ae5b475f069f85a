use portfolio_page::dom::{ScrollAction, ScrollBehavior, ScrollBlock};

use crate::helpers::spawn_page;

#[tokio::test]
async fn navigating_to_a_section_scrolls_it_to_the_top() {
    // GIVEN
    let mut app = spawn_page().await;
    let services = app
        .page
        .document()
        .get_element_by_id("services")
        .expect("The page has no services section");

    // WHEN
    let found = app.page.navigate_to("services");

    // THEN
    assert!(found);
    assert_eq!(
        app.page.document().window().scroll_actions(),
        &[ScrollAction::IntoView {
            target: services,
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }]
    );
}

#[tokio::test]
async fn navigating_to_an_unknown_section_has_no_effect() {
    // GIVEN
    let mut app = spawn_page().await;
    app.page.scroll_window(450.0);

    // WHEN
    let found = app.page.navigate_to("pricing");

    // THEN
    assert!(!found);
    assert!(app.page.document().window().scroll_actions().is_empty());
    assert_eq!(app.page.document().window().scroll_y, 450.0);
}
