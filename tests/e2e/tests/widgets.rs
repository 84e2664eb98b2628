use std::time::Duration;

use e2e::browser::{Browser, Page};
use e2e::test_server::TestServer;

/// Replaces the clipboard with a recorder so copies work without permissions.
const FAKE_CLIPBOARD: &str = r#"
    window.copied = [];
    Object.defineProperty(navigator, 'clipboard', {
        configurable: true,
        value: { writeText: (text) => { window.copied.push(text); return Promise.resolve(); } },
    });
    true
"#;

fn open(browser: &Browser, url: &str) -> Page {
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(url).expect("Failed to load page");
    page
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_counter_runs_once_and_ends_on_target() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = open(&browser, &server.url());

    let number = "document.querySelector('.stat-number')";
    page.wait_for(
        &format!("{number}.textContent === '+98' && {number}.classList.contains('animated')"),
        Duration::from_secs(5),
    )
    .expect("counter should finish on its target");

    page.eval(&format!(
        "window.counterWrites = 0; \
         new MutationObserver(() => window.counterWrites++) \
             .observe({number}, {{ childList: true, characterData: true, subtree: true }}); \
         true"
    ))
    .unwrap();

    page.scroll_to(3000).unwrap();
    std::thread::sleep(Duration::from_millis(300));
    page.scroll_to(0).unwrap();
    std::thread::sleep(Duration::from_millis(500));

    assert_eq!(page.eval_string(&format!("{number}.textContent")).unwrap(), "+98");
    assert!(page.eval_bool("window.counterWrites === 0").unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_contact_copy_flashes_then_restores() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = open(&browser, &server.url());
    page.eval("localStorage.clear(); true").unwrap();
    page.eval(FAKE_CLIPBOARD).unwrap();

    let item = "document.querySelector('.contact-item')";
    page.eval(&format!("{item}.click(); true")).unwrap();
    page.wait_for(
        &format!("{item}.textContent === 'تم النسخ!'"),
        Duration::from_secs(1),
    )
    .expect("confirmation should replace the text");
    assert_eq!(
        page.eval_string(&format!("{item}.style.color")).unwrap(),
        "rgb(16, 185, 129)"
    );

    page.eval(&format!("{item}.click(); true")).unwrap();
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(
        page.eval_string("JSON.stringify(window.copied)").unwrap(),
        r#"["+971 50 000 0000"]"#
    );

    page.wait_for(
        &format!("{item}.textContent === '+971 50 000 0000' && {item}.style.color === ''"),
        Duration::from_secs(3),
    )
    .expect("original text and color should come back");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_reveal_is_not_reversed() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = open(&browser, &server.url());

    let card = "document.querySelector('.project-card')";
    assert_eq!(page.eval_string(&format!("{card}.style.opacity")).unwrap(), "0");

    page.eval("document.getElementById('projects').scrollIntoView(); true")
        .unwrap();
    page.wait_for(
        &format!("{card}.style.opacity === '1'"),
        Duration::from_secs(2),
    )
    .expect("card should appear once scrolled into view");

    page.scroll_to(0).unwrap();
    std::thread::sleep(Duration::from_millis(500));
    assert_eq!(page.eval_string(&format!("{card}.style.opacity")).unwrap(), "1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_body_fades_in_after_boot() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = open(&browser, &server.url());

    page.wait_for(
        "document.body.style.opacity === '1' \
         && document.body.style.transition.includes('opacity')",
        Duration::from_secs(2),
    )
    .expect("body should fade in even when the module boots after load");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_toggle_without_switch_label_changes_nothing() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = open(&browser, &format!("{}/no-switch.html", server.url()));
    page.eval("localStorage.clear(); true").unwrap();

    page.eval("toggleLanguage(); true").unwrap();

    assert_eq!(page.eval_string("document.documentElement.lang").unwrap(), "ar");
    assert_eq!(page.find_element(".hero-title").unwrap(), "مستشار التميز المؤسسي");
    assert_eq!(page.find_element("h4").unwrap(), "شرطة دبي");
    assert!(page
        .eval_bool("localStorage.getItem('preferredLang') === null")
        .unwrap());
}
