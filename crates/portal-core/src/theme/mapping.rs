//! Static table translating backend theme options into style targets.
//!
//! The backend speaks in semantic option names (`corPrimaria`, `fontFamilia`,
//! ...). Each known option resolves to exactly one [`StyleTarget`]. Cosmetic
//! and box-model options become CSS custom properties on the document root;
//! typography is written as a plain style property. The kind of write is
//! stored per entry here rather than inferred from the name.

use std::fmt;

/// Where a theme value lands in the document's visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTarget {
    /// A custom property such as `--primary-color`.
    CustomProperty(&'static str),
    /// A direct style property such as `font-family`.
    StyleProperty(&'static str),
}

impl StyleTarget {
    /// The property name passed to the style declaration.
    pub fn property_name(&self) -> &'static str {
        match self {
            StyleTarget::CustomProperty(name) | StyleTarget::StyleProperty(name) => name,
        }
    }

    /// Whether this target is a custom (`--*`) property.
    pub fn is_custom(&self) -> bool {
        matches!(self, StyleTarget::CustomProperty(_))
    }
}

impl fmt::Display for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_name())
    }
}

/// One row of the mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeMapping {
    /// Semantic option name as sent by the backend.
    pub option: &'static str,
    /// Resolved target in the document.
    pub target: StyleTarget,
}

const fn custom(option: &'static str, property: &'static str) -> ThemeMapping {
    ThemeMapping {
        option,
        target: StyleTarget::CustomProperty(property),
    }
}

const fn style(option: &'static str, property: &'static str) -> ThemeMapping {
    ThemeMapping {
        option,
        target: StyleTarget::StyleProperty(property),
    }
}

static THEME_MAPPINGS: &[ThemeMapping] = &[
    // Colors
    custom("corPrimaria", "--primary-color"),
    custom("corSecundaria", "--secondary-color"),
    custom("corDestaque", "--accent-color"),
    custom("corFundo", "--background-color"),
    custom("corSuperficie", "--surface-color"),
    custom("corTexto", "--text-color"),
    custom("corTextoSecundario", "--text-muted-color"),
    custom("corBorda", "--border-color"),
    custom("corSucesso", "--success-color"),
    custom("corAlerta", "--warning-color"),
    custom("corErro", "--error-color"),
    // Box model
    custom("raioBorda", "--border-radius"),
    custom("larguraBorda", "--border-width"),
    custom("espacamento", "--spacing"),
    custom("sombra", "--shadow"),
    custom("tamanhoFonte", "--font-size"),
    // Typography
    style("fontFamilia", "font-family"),
];

/// All known mappings, in table order.
pub fn entries() -> &'static [ThemeMapping] {
    THEME_MAPPINGS
}

/// Resolve a backend option name. Unknown names yield `None`.
pub fn lookup(option: &str) -> Option<StyleTarget> {
    THEME_MAPPINGS
        .iter()
        .find(|mapping| mapping.option == option)
        .map(|mapping| mapping.target)
}
