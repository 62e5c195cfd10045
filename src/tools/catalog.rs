use crate::config::SketchpadConfig;

/// A sticker the user can pick
#[derive(Debug, Clone, PartialEq)]
pub struct StickerEntry {
    pub content: String,
    pub label: String,
}

impl StickerEntry {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            label: content.clone(),
            content,
        }
    }
}

/// Ordered, append-only list of stickers
#[derive(Debug, Clone)]
pub struct StickerCatalog {
    entries: Vec<StickerEntry>,
    default_custom: String,
}

impl StickerCatalog {
    pub fn new(entries: Vec<StickerEntry>, default_custom: impl Into<String>) -> Self {
        Self {
            entries,
            default_custom: default_custom.into(),
        }
    }

    pub fn from_config(config: &SketchpadConfig) -> Self {
        let entries = config
            .stickers
            .iter()
            .map(|sticker| StickerEntry {
                content: sticker.content.clone(),
                label: sticker
                    .label
                    .clone()
                    .unwrap_or_else(|| sticker.content.clone()),
            })
            .collect();
        Self::new(entries, config.default_custom_sticker.clone())
    }

    pub fn entries(&self) -> &[StickerEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&StickerEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_custom(&self) -> &str {
        &self.default_custom
    }

    /// Append a user sticker. `None` means the prompt was cancelled.
    pub fn add_custom(&mut self, input: Option<&str>) -> usize {
        let content = match input.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => {
                log::debug!("Empty custom sticker, using {}", self.default_custom);
                self.default_custom.clone()
            }
        };
        log::info!("Custom sticker added: {content}");
        self.entries.push(StickerEntry::new(content));
        self.entries.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_config() {
        let catalog = StickerCatalog::from_config(&SketchpadConfig::default());
        let contents: Vec<_> = catalog.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, ["💀", "🎃", "👻"]);
    }

    #[test]
    fn test_add_custom_appends() {
        let mut catalog = StickerCatalog::new(vec![StickerEntry::new("💀")], "🙂");
        let index = catalog.add_custom(Some("★"));
        assert_eq!(index, 1);
        assert_eq!(catalog.get(1), Some(&StickerEntry::new("★")));
    }

    #[test]
    fn test_blank_or_cancelled_uses_default() {
        let mut catalog = StickerCatalog::new(Vec::new(), "🙂");
        catalog.add_custom(Some("   "));
        catalog.add_custom(None);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.entries().iter().all(|e| e.content == "🙂"));
    }
}
