use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::launch_with_width(1280)
    }

    /// Narrow widths put the page into its mobile layout.
    pub fn launch_with_width(width: u32) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((width, 900)))
            .build()
            .map_err(|err| anyhow::anyhow!("invalid launch options: {err}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    /// Navigates and waits until the wasm module has booted.
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        self.wait_for("window.pageReady === true", Duration::from_secs(10))
            .context("page never finished booting")
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn eval(&self, expression: &str) -> Result<Value> {
        let result = self.tab.evaluate(expression, true)?;
        Ok(result.value.unwrap_or(Value::Null))
    }

    pub fn eval_string(&self, expression: &str) -> Result<String> {
        match self.eval(expression)? {
            Value::String(text) => Ok(text),
            other => anyhow::bail!("`{expression}` returned {other}, not a string"),
        }
    }

    pub fn eval_bool(&self, expression: &str) -> Result<bool> {
        self.eval(expression)?
            .as_bool()
            .with_context(|| format!("`{expression}` did not return a boolean"))
    }

    /// Polls `expression` until it evaluates to `true`.
    pub fn wait_for(&self, expression: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.eval_bool(expression).unwrap_or(false) {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        anyhow::bail!("timed out waiting for `{expression}`")
    }

    pub fn scroll_to(&self, offset: u32) -> Result<()> {
        self.eval(&format!(
            "window.scrollTo({{ top: {offset}, behavior: 'instant' }}); true"
        ))?;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        self.tab.reload(true, None)?;
        self.tab.wait_until_navigated()?;
        self.wait_for("window.pageReady === true", Duration::from_secs(10))
    }
}
