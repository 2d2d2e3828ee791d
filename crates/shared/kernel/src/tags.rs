use appflow_domain::CfnTag;
use std::collections::BTreeMap;

/// Priority of tags given in the initial properties.
pub const INITIAL_PRIORITY: u32 = 0;
/// Priority of tags applied through [`TagManager::add`].
pub const DEFAULT_PRIORITY: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    priority: u32,
}

/// Standard key/value tags of a taggable resource.
///
/// Tags render sorted by key. A write or removal only takes effect when its priority is at
/// least the priority of the tag already stored under that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagManager {
    tags: BTreeMap<String, Entry>,
    removed: BTreeMap<String, u32>,
}

impl TagManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the manager with the tags declared in the resource properties.
    #[must_use]
    pub fn from_initial(tags: impl IntoIterator<Item = CfnTag>) -> Self {
        let mut manager = Self::new();
        for tag in tags {
            manager.set_tag(tag.key, tag.value, INITIAL_PRIORITY);
        }
        manager
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_tag(key, value, DEFAULT_PRIORITY);
    }

    /// Sets `key`; ignored when a higher priority already owns the key.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>, priority: u32) {
        let key = key.into();
        if self.removed.get(&key).is_some_and(|&p| p > priority) {
            return;
        }
        if self.tags.get(&key).is_some_and(|entry| entry.priority > priority) {
            return;
        }
        self.removed.remove(&key);
        self.tags.insert(key, Entry { value: value.into(), priority });
    }

    /// Removes `key`; ignored when a higher priority set it.
    pub fn remove_tag(&mut self, key: &str, priority: u32) {
        if self.tags.get(key).is_some_and(|entry| entry.priority > priority) {
            return;
        }
        self.tags.remove(key);
        self.removed.insert(key.to_owned(), priority);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|entry| entry.value.as_str())
    }

    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Tags as CloudFormation expects them, sorted by key.
    #[must_use]
    pub fn render(&self) -> Vec<CfnTag> {
        self.tags.iter().map(|(key, entry)| CfnTag::new(key.clone(), entry.value.clone())).collect()
    }

    /// [`Self::render`], or `None` when there is nothing to render.
    #[must_use]
    pub fn render_optional(&self) -> Option<Vec<CfnTag>> {
        self.has_tags().then(|| self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sorted_by_key() {
        let mut tags =
            TagManager::from_initial([CfnTag::new("team", "data"), CfnTag::new("env", "prod")]);
        tags.add("cost-center", "42");
        let keys: Vec<_> = tags.render().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, ["cost-center", "env", "team"]);
    }

    #[test]
    fn lower_priority_never_overrides() {
        let mut tags = TagManager::new();
        tags.set_tag("env", "prod", 200);
        tags.set_tag("env", "dev", 100);
        assert_eq!(tags.get("env"), Some("prod"));

        tags.set_tag("env", "stage", 200);
        assert_eq!(tags.get("env"), Some("stage"));
    }

    #[test]
    fn removal_respects_priority() {
        let mut tags = TagManager::new();
        tags.set_tag("env", "prod", 200);
        tags.remove_tag("env", 100);
        assert_eq!(tags.get("env"), Some("prod"));

        tags.remove_tag("env", 300);
        assert!(tags.get("env").is_none());
        tags.set_tag("env", "dev", 100);
        assert!(tags.get("env").is_none(), "a higher priority removal wins");
        assert!(tags.render_optional().is_none());
    }
}
