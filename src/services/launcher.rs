//! Opening links and documents outside the terminal.

/// Opens a URL in a new browsing context.
pub trait ResourceOpener: std::fmt::Debug {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Hands URLs to the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        tracing::info!("Opening {}", url);
        open::that(url)
    }
}

/// Open `url`, logging instead of failing. Opening a link is never fatal.
pub fn open_or_log(opener: &dyn ResourceOpener, url: &str) -> bool {
    match opener.open(url) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct FailingOpener {
        attempts: RefCell<Vec<String>>,
    }

    impl ResourceOpener for FailingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.attempts.borrow_mut().push(url.to_string());
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn test_open_failure_is_swallowed() {
        let opener = FailingOpener::default();
        assert!(!open_or_log(&opener, "https://example.com/resume.pdf"));
        assert_eq!(
            opener.attempts.borrow().as_slice(),
            ["https://example.com/resume.pdf"]
        );
    }
}
