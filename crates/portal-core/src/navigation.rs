//! Navigation resolver.
//!
//! Turns the current path plus the two static link groups into
//! render-ready entries with their active flag and layout classes. Both
//! surfaces (desktop and mobile) get the same items in the same order; only
//! the class attributes differ.

use serde::{Deserialize, Serialize};

/// A static navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Route path; must match the route table exactly to ever be active.
    pub path: &'static str,
    /// Glyph rendered before the label.
    pub icon: &'static str,
    pub label: &'static str,
}

impl NavigationItem {
    pub const fn new(path: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { path, icon, label }
    }
}

/// Which of the two link groups an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavGroup {
    /// Case follow-up: dashboard, processes, documents.
    Left,
    /// Service desk: intake, schedule, profile.
    Right,
}

impl NavGroup {
    pub fn items(&self) -> &'static [NavigationItem] {
        match self {
            NavGroup::Left => LEFT_GROUP,
            NavGroup::Right => RIGHT_GROUP,
        }
    }
}

pub static LEFT_GROUP: &[NavigationItem] = &[
    NavigationItem::new("/dashboard", "🏠", "Início"),
    NavigationItem::new("/processos", "⚖", "Processos"),
    NavigationItem::new("/documentos", "📁", "Documentos"),
];

pub static RIGHT_GROUP: &[NavigationItem] = &[
    NavigationItem::new("/pre-atendimento", "💬", "Pré-atendimento"),
    NavigationItem::new("/agenda", "📅", "Agenda"),
    NavigationItem::new("/perfil", "👤", "Perfil"),
];

/// How an item path is compared with the current path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// String equality. Sub-routes are not active.
    #[default]
    Exact,
    /// Also active for sub-routes, at `/` segment boundaries.
    Prefix,
}

impl MatchStrategy {
    pub fn is_active(&self, item_path: &str, current_path: &str) -> bool {
        match self {
            MatchStrategy::Exact => item_path == current_path,
            MatchStrategy::Prefix => {
                if item_path == current_path {
                    return true;
                }
                let base = item_path.trim_end_matches('/');
                // The root would otherwise prefix every path.
                if base.is_empty() {
                    return false;
                }
                current_path
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Physical layout the links are rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Desktop,
    Mobile,
}

impl Surface {
    fn link_class(&self) -> &'static str {
        match self {
            Surface::Desktop => "nav-link",
            Surface::Mobile => "nav-link nav-link--mobile",
        }
    }

    /// Class of the container holding one group
    pub fn group_class(&self, group: NavGroup) -> &'static str {
        match (self, group) {
            (Surface::Desktop, NavGroup::Left) => "nav-group nav-group--left",
            (Surface::Desktop, NavGroup::Right) => "nav-group nav-group--right",
            (Surface::Mobile, NavGroup::Left) => "mobile-nav-group mobile-nav-group--left",
            (Surface::Mobile, NavGroup::Right) => "mobile-nav-group mobile-nav-group--right",
        }
    }
}

/// A navigation item annotated for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub item: NavigationItem,
    pub active: bool,
    pub class: String,
}

/// Both groups, resolved for one surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNavigation {
    pub surface: Surface,
    pub left: Vec<ResolvedItem>,
    pub right: Vec<ResolvedItem>,
}

impl ResolvedNavigation {
    /// All entries, left group first
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedItem> {
        self.left.iter().chain(self.right.iter())
    }

    pub fn active_paths(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.item.path)
            .collect()
    }
}

/// Pure resolver over the static groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationResolver {
    strategy: MatchStrategy,
}

impl NavigationResolver {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn resolve(&self, current_path: &str, surface: Surface) -> ResolvedNavigation {
        ResolvedNavigation {
            surface,
            left: self.resolve_group(LEFT_GROUP, current_path, surface),
            right: self.resolve_group(RIGHT_GROUP, current_path, surface),
        }
    }

    fn resolve_group(
        &self,
        items: &[NavigationItem],
        current_path: &str,
        surface: Surface,
    ) -> Vec<ResolvedItem> {
        items
            .iter()
            .map(|item| {
                let active = self.strategy.is_active(item.path, current_path);
                let class = if active {
                    format!("{} active", surface.link_class())
                } else {
                    surface.link_class().to_string()
                };
                ResolvedItem {
                    item: *item,
                    active,
                    class,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_one_item_active_for_intake() {
        let resolver = NavigationResolver::default();
        for surface in [Surface::Desktop, Surface::Mobile] {
            let nav = resolver.resolve("/pre-atendimento", surface);
            assert_eq!(nav.active_paths(), vec!["/pre-atendimento"]);
        }
    }

    #[test]
    fn test_exact_match_ignores_sub_routes() {
        let nav = NavigationResolver::default().resolve("/processos/123", Surface::Desktop);
        assert!(nav.active_paths().is_empty());
    }

    #[test]
    fn test_unknown_path_has_no_active_item() {
        let nav = NavigationResolver::default().resolve("/login", Surface::Mobile);
        assert!(nav.iter().all(|entry| !entry.active));
    }

    #[test]
    fn test_surfaces_share_items_and_order() {
        let resolver = NavigationResolver::default();
        let desktop = resolver.resolve("/agenda", Surface::Desktop);
        let mobile = resolver.resolve("/agenda", Surface::Mobile);

        let desktop_items: Vec<_> = desktop.iter().map(|e| (e.item, e.active)).collect();
        let mobile_items: Vec<_> = mobile.iter().map(|e| (e.item, e.active)).collect();
        assert_eq!(desktop_items, mobile_items);
        assert_ne!(desktop.left[0].class, mobile.left[0].class);
    }

    #[test]
    fn test_active_class_is_appended() {
        let nav = NavigationResolver::default().resolve("/dashboard", Surface::Desktop);
        assert_eq!(nav.left[0].class, "nav-link active");
        assert_eq!(nav.left[1].class, "nav-link");
    }

    #[test]
    fn test_group_paths_are_unique() {
        let mut seen = HashSet::new();
        for item in LEFT_GROUP.iter().chain(RIGHT_GROUP.iter()) {
            assert!(seen.insert(item.path), "duplicate path {}", item.path);
        }
    }

    #[test]
    fn test_prefix_strategy_respects_segments() {
        let prefix = MatchStrategy::Prefix;
        assert!(prefix.is_active("/processos", "/processos"));
        assert!(prefix.is_active("/processos", "/processos/123"));
        assert!(!prefix.is_active("/processos", "/processos-arquivados"));
        assert!(!prefix.is_active("/", "/processos"));
        assert!(prefix.is_active("/", "/"));
    }

    #[test]
    fn test_prefix_resolver_marks_section() {
        let nav = NavigationResolver::new(MatchStrategy::Prefix)
            .resolve("/documentos/pasta/9", Surface::Desktop);
        assert_eq!(nav.active_paths(), vec!["/documentos"]);
    }

    #[test]
    fn test_match_strategy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: MatchStrategy,
        }
        let w: Wrapper = toml::from_str(r#"strategy = "prefix""#).unwrap();
        assert_eq!(w.strategy, MatchStrategy::Prefix);
    }
}
