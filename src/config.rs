//! Façade configuration.

/// Options consumed once at façade construction.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skip the automatic hydrate dispatch at construction; hydration then
    /// only happens via an explicit `hydrate()` call.
    pub manual_hydration: bool,
    /// Never stamp outgoing actions as persist-worthy. Note that `persist()`
    /// dispatches are gated by this too.
    pub manual_persistence: bool,
    /// Action discriminants that never trigger a write, regardless of other
    /// settings.
    pub blacklist: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manual_hydration(mut self) -> Self {
        self.manual_hydration = true;
        self
    }

    pub fn with_manual_persistence(mut self) -> Self {
        self.manual_persistence = true;
        self
    }

    pub fn with_blacklist<I, T>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.blacklist = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `kind` is exempted from persistence.
    pub fn is_blacklisted(&self, kind: &str) -> bool {
        self.blacklist.iter().any(|k| k.as_str() == kind)
    }
}
