use url::Url;

/// Turns a raw resource reference from a document into a resolvable location.
pub trait ResourceLocator: Send + Sync {
    /// `None` when the reference cannot be resolved.
    fn locate(&self, raw: &str) -> Option<String>;
}

/// Accepts absolute URLs. Anything else is left to the local-file fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFallbackLocator;

impl ResourceLocator for FileFallbackLocator {
    fn locate(&self, raw: &str) -> Option<String> {
        let url = Url::parse(raw.trim()).ok()?;
        // Drive letters parse as one-character schemes.
        if url.scheme().len() == 1 {
            return None;
        }
        Some(url.to_string())
    }
}

/// Resolves references against a base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlLocator {
    base: Url,
}

impl BaseUrlLocator {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self { base: Url::parse(base)? })
    }
}

impl ResourceLocator for BaseUrlLocator {
    fn locate(&self, raw: &str) -> Option<String> {
        self.base.join(raw.trim()).ok().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_fallback_locator() {
        let locator = FileFallbackLocator;
        assert_eq!(locator.locate("https://example.com/a.svg").as_deref(), Some("https://example.com/a.svg"));
        assert_eq!(locator.locate("a.svg"), None);
        assert_eq!(locator.locate("C:/icons/a.svg"), None);
    }

    #[test]
    fn test_base_url_locator() {
        let locator = BaseUrlLocator::new("http://styles.example.com/root/").unwrap();
        assert_eq!(locator.locate("img/a.png").as_deref(), Some("http://styles.example.com/root/img/a.png"));
    }
}
