use serde::Serialize;

use crate::binding::resolve_bindings;
use crate::catalog::ThemeCatalog;
use crate::error::Result;
use crate::palette::Palette;
use crate::table::{ColorTable, build_color_table};
use crate::tree::{PropertyTree, assemble_ui_tree};
use crate::variant::{ThemeMetadata, ThemeVariant};

/// A generated `.theme.json` document.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    pub dark: bool,
    pub author: String,
    pub editor_scheme: String,
    pub parent_theme: String,
    pub colors: ColorTable,
    pub ui: PropertyTree,
}

impl ThemeDocument {
    /// Assemble a document from a palette and a catalog.
    ///
    /// Fails when a derived rule or UI binding names a role that neither the
    /// palette nor the derived entries provide.
    pub fn generate(
        palette: &Palette,
        metadata: ThemeMetadata,
        catalog: &ThemeCatalog,
    ) -> Result<Self> {
        let colors = build_color_table(palette, &catalog.derived)?;
        let flat = resolve_bindings(&catalog.ui, &colors)?;
        let ui = assemble_ui_tree(flat);
        tracing::debug!(
            theme = %metadata.name,
            colors = colors.len(),
            ui_leaves = ui.leaf_count(),
            "assembled theme document"
        );
        Ok(Self {
            name: metadata.name,
            dark: metadata.dark,
            author: metadata.author,
            editor_scheme: metadata.editor_scheme,
            parent_theme: metadata.parent_theme,
            colors,
            ui,
        })
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Generate the document for `variant` with its default metadata.
pub fn generate_theme(
    palette: &Palette,
    variant: ThemeVariant,
    catalog: &ThemeCatalog,
) -> Result<ThemeDocument> {
    ThemeDocument::generate(palette, ThemeMetadata::for_variant(variant), catalog)
}
