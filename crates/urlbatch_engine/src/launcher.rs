use urlbatch_logging::{urlbatch_debug, urlbatch_warn};

/// Opens a URL somewhere the user can see it. Failures are not reported back.
pub trait BrowserLauncher: Send + Sync {
    fn launch(&self, url: &str);
}

/// Launches a configured browser, or whatever the system opens URLs with.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    browser: Option<String>,
}

impl ProcessLauncher {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }

    fn opener_name(&self) -> &str {
        self.browser.as_deref().unwrap_or("the system opener")
    }
}

impl BrowserLauncher for ProcessLauncher {
    fn launch(&self, url: &str) {
        let result = match &self.browser {
            Some(browser) => open::with_detached(url, browser.as_str()),
            None => open::that_detached(url),
        };
        let opener = self.opener_name();
        match result {
            Ok(()) => urlbatch_debug!("Handed {} to {}", url, opener),
            Err(err) => urlbatch_warn!("Failed to open {} with {}: {}", url, opener, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_opener_in_use() {
        let system = ProcessLauncher::default();
        assert_eq!(system.opener_name(), "the system opener");
        let firefox = ProcessLauncher::new(Some("firefox".into()));
        assert_eq!(firefox.opener_name(), "firefox");
    }

    #[test]
    fn missing_browser_is_not_fatal() {
        let launcher = ProcessLauncher::new(Some("/nonexistent/urlbatch-test-browser".into()));
        launcher.launch("https://example.com");
    }
}
