use e2e::browser::Browser;
use e2e::test_server::TestServer;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_toggle_switches_document_to_english_and_back() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");
    page.eval("localStorage.clear(); true").unwrap();

    let arabic_title = page.find_element(".hero-title").unwrap();

    page.eval("toggleLanguage(); true").unwrap();
    assert_eq!(page.eval_string("document.documentElement.lang").unwrap(), "en");
    assert_eq!(page.eval_string("document.documentElement.dir").unwrap(), "ltr");
    assert_eq!(page.find_element("#lang-text").unwrap(), "AR");
    assert_eq!(page.find_element(".nav-brand").unwrap(), "Moein Najem");
    assert_eq!(page.find_element(".hero-title").unwrap(), "Organizational Excellence Consultant");

    page.eval("toggleLanguage(); true").unwrap();
    assert_eq!(page.eval_string("document.documentElement.lang").unwrap(), "ar");
    assert_eq!(page.find_element(".hero-title").unwrap(), arabic_title);
    assert!(page
        .eval_bool("document.querySelectorAll('[data-original-ar]').length === 0")
        .unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_dictionary_translates_unpaired_text() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");
    page.eval("localStorage.clear(); true").unwrap();

    page.eval("toggleLanguage(); true").unwrap();
    assert_eq!(
        page.find_element(".stat-label").unwrap(),
        "Project Success Rate"
    );
    assert_eq!(
        page.eval_string("document.querySelector('.stat-label').getAttribute('data-original-ar')")
            .unwrap(),
        "نسبة نجاح المشاريع"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_saved_preference_is_restored_on_reload() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");
    page.eval("localStorage.clear(); true").unwrap();

    page.eval("toggleLanguage(); true").unwrap();
    assert_eq!(
        page.eval_string("localStorage.getItem('preferredLang')").unwrap(),
        "en"
    );

    page.reload().unwrap();
    assert_eq!(page.eval_string("document.documentElement.lang").unwrap(), "en");
    assert_eq!(page.find_element("#lang-text").unwrap(), "AR");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "needs Chrome and a wasm-pack bundle in site/pkg"]
async fn test_list_items_keep_their_links() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(&server.url()).expect("Failed to load page");
    page.eval("localStorage.clear(); true").unwrap();

    page.eval("toggleLanguage(); true").unwrap();
    assert_eq!(
        page.find_element(".nav-links li:first-child a").unwrap(),
        "Home"
    );
    assert!(page
        .eval_bool("document.querySelectorAll('.nav-links li > a').length === 5")
        .unwrap());
    assert!(page
        .eval_bool("document.querySelector('.nav-links li').hasAttribute('data-original-ar') === false")
        .unwrap());
}
