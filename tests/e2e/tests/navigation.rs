use std::time::Duration;

use e2e::browser::Browser;
use e2e::test_server::TestServer;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("page-config"), "Should embed the page config");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_header_hides_on_scroll_down_and_returns_on_scroll_up() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");

    let has_class = |class: &str| format!("document.querySelector('.navbar').classList.contains('{class}')");

    assert!(page.eval_bool(&has_class("visible")).unwrap());

    page.scroll_to(600).unwrap();
    page.wait_for(&has_class("hidden"), Duration::from_secs(2))
        .expect("header should hide after scrolling down");

    page.scroll_to(400).unwrap();
    page.wait_for(&has_class("visible"), Duration::from_secs(2))
        .expect("header should return after scrolling up");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_back_to_top_button_follows_scroll() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");

    let opacity = "document.querySelector('.back-to-top').style.opacity === '1'";
    page.scroll_to(800).unwrap();
    page.wait_for(opacity, Duration::from_secs(2))
        .expect("back-to-top should appear past the threshold");

    page.click(".back-to-top").unwrap();
    page.wait_for("window.scrollY === 0", Duration::from_secs(3))
        .expect("clicking back-to-top should return to the top");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_mobile_menu_opens_and_closes_on_outside_click() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch_with_width(400).expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");

    page.eval("toggleMobileMenu(); true").unwrap();
    assert!(page
        .eval_bool("document.querySelector('.nav-links').classList.contains('active')")
        .unwrap());
    assert!(page
        .eval_bool("document.querySelector('.mobile-menu-backdrop') !== null")
        .unwrap());

    page.eval("document.querySelector('.hero').click(); true").unwrap();
    assert!(!page
        .eval_bool("document.querySelector('.nav-links').classList.contains('active')")
        .unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_anchor_click_lands_below_header() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");

    page.click(".nav-links a[href=\"#experience\"]").unwrap();
    page.wait_for(
        "Math.abs(document.getElementById('experience').getBoundingClientRect().top \
         - document.querySelector('.navbar').offsetHeight) < 2",
        Duration::from_secs(3),
    )
    .expect("section should settle just below the header");

    page.wait_for(
        "document.querySelector('.nav-links a[href=\"#experience\"]').classList.contains('active')",
        Duration::from_secs(2),
    )
    .expect("scrollspy should highlight the link");
}
