//! Chromium driver over the DevTools protocol.
//!
//! [`CdpDriver`] implements [`HubDriver`] against a real browser via
//! chromiumoxide. Element queries run as JavaScript produced by
//! [`Selector`]; clicks and fills go through the page's own event system so
//! the app reacts exactly as it would to a user.
//!
//! ```ignore
//! let driver = CdpDriver::launch(DriverConfig::default().no_sandbox()).await?;
//! let mut page = StudentPage::new(driver);
//! page.navigate().await?;
//! ```

use crate::driver::{DriverConfig, ElementHandle, HubDriver};
use crate::result::{HubError, HubResult};
use crate::selector::Selector;
use crate::wait::WaitOptions;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Element projection returned by the find query
#[derive(Debug, Deserialize)]
struct RawElement {
    tag: String,
    text: String,
    value: Option<String>,
}

/// JS returning the selector's first match as `{tag, text, value}` or null
fn projection_js(selector: &Selector) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return null; \
         return {{ tag: el.tagName.toLowerCase(), \
         text: (el.textContent || '').trim(), \
         value: 'value' in el ? String(el.value) : null }}; }})()",
        selector.to_query()
    )
}

/// JS clicking the selector's first match; false when nothing matches
fn click_js(selector: &Selector) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
        selector.to_query()
    )
}

/// JS writing a form control's value through the native setter.
///
/// Frameworks that track controlled inputs ignore direct `el.value`
/// assignment; going through the prototype setter and dispatching `input`
/// and `change` makes the app observe the edit.
fn fill_js(selector: &Selector, value: &str) -> String {
    format!(
        "(() => {{ const el = {query}; if (!el) return false; \
         const proto = el instanceof HTMLTextAreaElement ? HTMLTextAreaElement.prototype \
         : el instanceof HTMLSelectElement ? HTMLSelectElement.prototype \
         : HTMLInputElement.prototype; \
         Object.getOwnPropertyDescriptor(proto, 'value').set.call(el, {value:?}); \
         el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
         el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
         return true; }})()",
        query = selector.to_query(),
    )
}

/// JS selecting an option by its visible label
fn select_option_js(selector: &Selector, label: &str) -> String {
    format!(
        "(() => {{ const el = {query}; if (!el) return 'no-element'; \
         const option = Array.from(el.options).find(o => o.textContent.trim() === {label:?}); \
         if (!option) return 'no-option'; \
         Object.getOwnPropertyDescriptor(HTMLSelectElement.prototype, 'value').set.call(el, option.value); \
         el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
         return 'ok'; }})()",
        query = selector.to_query(),
    )
}

/// Driver over a launched Chromium instance.
///
/// Owns the browser process, its event handler task, and one page. Closing
/// the driver shuts the browser down; a dropped driver leaves process
/// cleanup to the OS.
#[derive(Debug)]
pub struct CdpDriver {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
    config: DriverConfig,
    url: String,
}

impl CdpDriver {
    /// Launch a Chromium instance and open a blank page.
    ///
    /// The executable comes from the config, the `CHROMIUM_PATH` variable,
    /// or auto-detection, in that order.
    ///
    /// # Errors
    ///
    /// `BrowserNotFound` when no executable could be located,
    /// `BrowserLaunch` when the process fails to start.
    pub async fn launch(config: DriverConfig) -> HubResult<Self> {
        let executable = config
            .executable_path
            .clone()
            .or_else(|| std::env::var("CHROMIUM_PATH").ok());

        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport_width, config.viewport_height);
        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = &executable {
            builder = builder.chrome_executable(path);
        }
        let cdp_config = builder.build().map_err(|message| {
            if executable.is_none() {
                // Auto-detection is the only thing that fails without a path
                HubError::BrowserNotFound
            } else {
                HubError::BrowserLaunch { message }
            }
        })?;

        let (browser, mut handler) =
            Browser::launch(cdp_config)
                .await
                .map_err(|e| HubError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| HubError::Page {
                message: e.to_string(),
            })?;

        info!(headless = config.headless, "browser launched");
        Ok(Self {
            browser,
            handler_task,
            page,
            config,
            url: String::from("about:blank"),
        })
    }

    /// The driver's configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    async fn eval<T: DeserializeOwned>(&self, js: String) -> HubResult<T> {
        let result = self
            .page
            .evaluate(js)
            .await
            .map_err(|e| HubError::Page {
                message: e.to_string(),
            })?;
        Ok(result.into_value()?)
    }
}

#[async_trait]
impl HubDriver for CdpDriver {
    async fn goto(&mut self, url: &str) -> HubResult<()> {
        info!(url, "navigating");
        let navigation = self.page.goto(url);
        match tokio::time::timeout(self.config.navigation_timeout, navigation).await {
            Err(_) => Err(HubError::NavigationTimeout {
                url: url.to_string(),
                ms: self.config.navigation_timeout.as_millis() as u64,
            }),
            Ok(Err(e)) => Err(HubError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Ok(Ok(_)) => {
                self.url = url.to_string();
                Ok(())
            }
        }
    }

    async fn current_url(&self) -> HubResult<String> {
        Ok(self.url.clone())
    }

    async fn find(&self, selector: &Selector) -> HubResult<ElementHandle> {
        let raw: Option<RawElement> = self.eval(projection_js(selector)).await?;
        raw.map_or_else(
            || Err(HubError::not_found(selector.to_string())),
            |raw| {
                Ok(ElementHandle {
                    id: selector.to_string(),
                    tag_name: raw.tag,
                    text_content: Some(raw.text),
                    value: raw.value,
                })
            },
        )
    }

    async fn texts(&self, selector: &Selector) -> HubResult<Vec<String>> {
        self.eval(selector.to_texts_query()).await
    }

    async fn count(&self, selector: &Selector) -> HubResult<usize> {
        self.eval(selector.to_count_query()).await
    }

    async fn text(&self, selector: &Selector) -> HubResult<String> {
        let handle = self.find(selector).await?;
        Ok(handle.text().to_string())
    }

    async fn is_present(&self, selector: &Selector) -> HubResult<bool> {
        Ok(self.count(selector).await? > 0)
    }

    async fn click(&mut self, selector: &Selector) -> HubResult<()> {
        debug!(%selector, "click");
        let clicked: bool = self.eval(click_js(selector)).await?;
        if clicked {
            Ok(())
        } else {
            Err(HubError::not_found(selector.to_string()))
        }
    }

    async fn fill(&mut self, selector: &Selector, value: &str) -> HubResult<()> {
        debug!(%selector, value, "fill");
        let filled: bool = self.eval(fill_js(selector, value)).await?;
        if filled {
            Ok(())
        } else {
            Err(HubError::not_found(selector.to_string()))
        }
    }

    async fn select_option(&mut self, selector: &Selector, label: &str) -> HubResult<()> {
        debug!(%selector, label, "select option");
        let outcome: String = self.eval(select_option_js(selector, label)).await?;
        match outcome.as_str() {
            "ok" => Ok(()),
            "no-option" => Err(HubError::not_found(format!(
                "option {label:?} in {selector}"
            ))),
            _ => Err(HubError::not_found(selector.to_string())),
        }
    }

    async fn wait_for(
        &mut self,
        selector: &Selector,
        options: WaitOptions,
    ) -> HubResult<ElementHandle> {
        let deadline = tokio::time::Instant::now() + options.timeout();
        loop {
            match self.find(selector).await {
                Ok(handle) => return Ok(handle),
                Err(HubError::ElementNotFound { .. }) => {}
                Err(other) => return Err(other),
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(HubError::Timeout {
                    ms: options.timeout_ms,
                    waiting_for: selector.to_string(),
                });
            }
            tokio::time::sleep(options.poll_interval()).await;
        }
    }

    async fn wait_for_absent(
        &mut self,
        selector: &Selector,
        options: WaitOptions,
    ) -> HubResult<()> {
        let deadline = tokio::time::Instant::now() + options.timeout();
        loop {
            if !self.is_present(selector).await? {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(HubError::Timeout {
                    ms: options.timeout_ms,
                    waiting_for: format!("{selector} to disappear"),
                });
            }
            tokio::time::sleep(options.poll_interval()).await;
        }
    }

    async fn close(&mut self) -> HubResult<()> {
        debug!("closing browser");
        self.browser
            .close()
            .await
            .map_err(|e| HubError::Page {
                message: e.to_string(),
            })?;
        self.handler_task.abort();
        Ok(())
    }
}
