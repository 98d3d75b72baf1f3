/// The browser address bar, as far as section tracking cares about it.
pub trait AddressBar {
    /// Current fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<&str>;

    /// Replace the fragment in place. Must not scroll and must not add a
    /// history entry.
    fn replace_fragment(&mut self, fragment: &str);
}

/// In-process address bar used by the desktop front end and tests.
///
/// Keeps the history stack as hrefs. Replacing the fragment rewrites the
/// current entry in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryAddressBar {
    path: String,
    fragment: Option<String>,
    history: Vec<String>,
    replacements: usize,
}

impl MemoryAddressBar {
    /// Build from a location such as `/` or `/index.html#skills`.
    pub fn new(location: &str) -> Self {
        let (path, fragment) = match location.split_once('#') {
            Some((path, fragment)) if !fragment.is_empty() => (path, Some(fragment.to_string())),
            Some((path, _)) => (path, None),
            None => (location, None),
        };
        let mut bar = Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            fragment,
            history: Vec::new(),
            replacements: 0,
        };
        bar.history.push(bar.href());
        bar
    }

    pub fn href(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{}", self.path, fragment),
            None => self.path.clone(),
        }
    }

    /// Visited entries, oldest first. The last one is the current location.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// How many times the fragment was replaced in place.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryAddressBar {
    fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        self.fragment = (!fragment.is_empty()).then(|| fragment.to_string());
        self.replacements += 1;
        let href = self.href();
        match self.history.last_mut() {
            Some(current) => *current = href,
            None => self.history.push(href),
        }
    }
}
