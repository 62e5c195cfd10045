use crate::config::SketchpadConfig;

mod catalog;

pub use catalog::{StickerCatalog, StickerEntry};

/// What a pointer-down on the canvas will create
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMode {
    /// Draw marker lines of the given thickness
    Marker { thickness: f32 },
    /// Stamp the given glyph
    Sticker { content: String },
}

/// One marker thickness button
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPreset {
    pub label: String,
    pub thickness: f32,
}

impl Default for MarkerPreset {
    fn default() -> Self {
        Self {
            label: "Thin".to_owned(),
            thickness: 2.0,
        }
    }
}

/// The single active palette control.
///
/// Marker and sticker mode are one enum so exactly one of them is ever selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Marker(usize),
    Sticker(usize),
}

/// Marker presets, the sticker catalog and the current selection
#[derive(Debug, Clone)]
pub struct Palette {
    presets: Vec<MarkerPreset>,
    catalog: StickerCatalog,
    selection: Selection,
}

impl Palette {
    /// Build a palette from presets and a catalog, with the first preset selected.
    ///
    /// An empty preset list gets a single thin marker so there is always something to select.
    pub fn new(mut presets: Vec<MarkerPreset>, catalog: StickerCatalog) -> Self {
        if presets.is_empty() {
            log::warn!("No marker presets given, falling back to a thin marker");
            presets.push(MarkerPreset::default());
        }
        Self {
            presets,
            catalog,
            selection: Selection::Marker(0),
        }
    }

    pub fn from_config(config: &SketchpadConfig) -> Self {
        let presets = config
            .marker_presets
            .iter()
            .map(|preset| MarkerPreset {
                label: preset.label.clone(),
                thickness: preset.thickness,
            })
            .collect();
        Self::new(presets, StickerCatalog::from_config(config))
    }

    pub fn presets(&self) -> &[MarkerPreset] {
        &self.presets
    }

    pub fn catalog(&self) -> &StickerCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selected(&self, selection: Selection) -> bool {
        self.selection == selection
    }

    /// Select a marker preset. Out of range indices are ignored.
    pub fn select_marker(&mut self, index: usize) -> bool {
        match self.presets.get(index) {
            Some(preset) => {
                log::info!("Marker selected: {} ({})", preset.label, preset.thickness);
                self.selection = Selection::Marker(index);
                true
            }
            None => {
                log::warn!("No marker preset at index {index}");
                false
            }
        }
    }

    /// Select a catalog sticker. Out of range indices are ignored.
    pub fn select_sticker(&mut self, index: usize) -> bool {
        match self.catalog.get(index) {
            Some(entry) => {
                log::info!("Sticker selected: {}", entry.content);
                self.selection = Selection::Sticker(index);
                true
            }
            None => {
                log::warn!("No sticker at index {index}");
                false
            }
        }
    }

    /// Add a user-entered sticker; blank or cancelled input becomes the default glyph.
    /// Returns the index of the new catalog entry.
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> usize {
        self.catalog.add_custom(input)
    }

    /// The tool a pointer-down would use right now
    pub fn current_tool(&self) -> ToolMode {
        match self.selection {
            Selection::Marker(index) => ToolMode::Marker {
                thickness: self.presets[index].thickness,
            },
            Selection::Sticker(index) => ToolMode::Sticker {
                content: self.catalog.entries()[index].content.clone(),
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_first_marker() {
        let palette = Palette::default();
        assert_eq!(palette.selection(), Selection::Marker(0));
        assert_eq!(palette.current_tool(), ToolMode::Marker { thickness: 2.0 });
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut palette = Palette::default();
        assert!(palette.select_sticker(0));
        assert!(palette.is_selected(Selection::Sticker(0)));
        assert!(!palette.is_selected(Selection::Marker(0)));

        assert!(palette.select_marker(1));
        assert!(palette.is_selected(Selection::Marker(1)));
        assert!(!palette.is_selected(Selection::Sticker(0)));
        assert_eq!(palette.current_tool(), ToolMode::Marker { thickness: 6.0 });
    }

    #[test]
    fn test_empty_presets_fall_back_to_thin_marker() {
        let catalog = StickerCatalog::from_config(&SketchpadConfig::default());
        let palette = Palette::new(Vec::new(), catalog);
        assert_eq!(palette.presets(), &[MarkerPreset::default()]);
        assert_eq!(palette.current_tool(), ToolMode::Marker { thickness: 2.0 });
    }

    #[test]
    fn test_out_of_range_selection_keeps_current() {
        let mut palette = Palette::default();
        assert!(!palette.select_marker(9));
        assert!(!palette.select_sticker(9));
        assert_eq!(palette.selection(), Selection::Marker(0));
    }
}
