use portfolio_page::listeners::{HOVER_BACKGROUND, IDLE_BACKGROUND, OPEN_CLASS};

use crate::helpers::spawn_page;

#[tokio::test]
async fn header_is_restyled_past_one_hundred_pixels() {
    // GIVEN
    let mut app = spawn_page().await;
    let header = app.nodes.header;

    // WHEN
    app.page.scroll_window(101.0);

    // THEN
    let style = &app.page.document().element(header).style;
    assert_eq!(style.get("background"), Some("rgba(255, 255, 255, 0.98)"));
    assert_eq!(style.get("box-shadow"), Some("0 2px 20px rgba(0, 0, 0, 0.1)"));

    // WHEN
    app.page.scroll_window(40.0);

    // THEN
    let style = &app.page.document().element(header).style;
    assert_eq!(style.get("background"), Some("rgba(255, 255, 255, 0.95)"));
    assert_eq!(style.get("box-shadow"), Some("none"));
}

#[tokio::test]
async fn content_cards_fade_in_once_when_they_scroll_into_view() {
    // GIVEN
    let mut app = spawn_page().await;
    let cards = app.nodes.cards.clone();
    for card in &cards {
        assert_eq!(app.page.document().element(*card).style.get("opacity"), Some("0"));
    }
    let options = app.page.fade_in_options().clone();

    // WHEN
    app.page
        .report_intersections(vec![options.entry(cards[0], 200.0, 300.0, 900.0)]);
    app.page
        .report_intersections(vec![options.entry(cards[0], -2000.0, 300.0, 900.0)]);

    // THEN
    let revealed = &app.page.document().element(cards[0]).style;
    assert_eq!(revealed.get("opacity"), Some("1"));
    assert_eq!(revealed.get("transform"), Some("translateY(0)"));
    assert_eq!(
        app.page.document().element(cards[1]).style.get("opacity"),
        Some("0")
    );
}

#[tokio::test]
async fn mobile_menu_toggle_follows_the_viewport_width() {
    // GIVEN
    let mut app = spawn_page().await;
    let toggle = app.page.mobile_menu_toggle();
    let links = app.nodes.nav_links;
    assert_eq!(
        app.page.document().element(toggle).style.get("display"),
        Some("none")
    );

    // WHEN
    app.page.resize_window(375);
    app.page.click(toggle);

    // THEN
    let document = app.page.document();
    assert_eq!(document.element(toggle).style.get("display"), Some("block"));
    assert!(document.element(links).class_list.contains(OPEN_CLASS));

    // WHEN
    app.page.resize_window(1440);

    // THEN
    let document = app.page.document();
    assert_eq!(document.element(toggle).style.get("display"), Some("none"));
    assert!(!document.element(links).class_list.contains(OPEN_CLASS));
}

#[tokio::test]
async fn scroll_to_top_button_appears_and_returns_to_the_top() {
    // GIVEN
    let mut app = spawn_page().await;
    let button = app.page.scroll_to_top_button();

    // WHEN
    app.page.scroll_window(1200.0);

    // THEN
    assert_eq!(
        app.page.document().element(button).style.get("display"),
        Some("block")
    );

    // WHEN
    app.page.hover(button, true);
    assert_eq!(
        app.page.document().element(button).style.get("background"),
        Some(HOVER_BACKGROUND)
    );
    app.page.hover(button, false);
    app.page.click(button);
    app.page.scroll_window(0.0);

    // THEN
    let document = app.page.document();
    assert_eq!(document.window().scroll_y, 0.0);
    assert_eq!(document.element(button).style.get("background"), Some(IDLE_BACKGROUND));
    assert_eq!(document.element(button).style.get("display"), Some("none"));
}

#[tokio::test]
async fn clicking_the_scroll_button_leaves_the_menu_alone() {
    // GIVEN
    let mut app = spawn_page().await;
    let button = app.page.scroll_to_top_button();
    app.page.resize_window(375);

    // WHEN
    app.page.click(button);

    // THEN
    assert!(!app
        .page
        .document()
        .element(app.nodes.nav_links)
        .class_list
        .contains(OPEN_CLASS));
}
