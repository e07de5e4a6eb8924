//! Sidebar with the navigation groups of the back office

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [NavItem],
}

const fn item(path: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { path, label, icon }
}

pub static MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "sales",
        label: "Sales",
        items: &[
            item("/orders", "Orders", "orders"),
            item("/analytics", "Sales analytics", "analytics"),
        ],
    },
    MenuGroup {
        id: "catalog",
        label: "Catalog",
        items: &[
            item("/inventory", "Inventory", "inventory"),
            item("/forecast", "Forecast", "forecast"),
            item("/bulk-update", "Bulk update", "bulk"),
            item("/mutations", "Product mutations", "mutations"),
        ],
    },
    MenuGroup {
        id: "integrations",
        label: "Integrations",
        items: &[
            item("/stores", "Stores", "stores"),
            item("/webhooks", "Webhooks", "webhooks"),
            item("/sync", "Sync control", "sync"),
        ],
    },
];

/// Every navigable page, in menu order.
pub fn nav_items() -> impl Iterator<Item = &'static NavItem> {
    MENU_GROUPS.iter().flat_map(|g| g.items.iter())
}

/// Label of the page at `path`, if it is in the menu.
pub fn label_for_path(path: &str) -> Option<&'static str> {
    let path = path.trim_end_matches('/');
    nav_items().find(|i| i.path == path).map(|i| i.label)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {MENU_GROUPS
                .iter()
                .map(|group| view! {
                    <div class="sidebar__group" data-group=group.id>
                        <div class="sidebar__group-label">{group.label}</div>
                        {group
                            .items
                            .iter()
                            .map(|nav| view! {
                                <A href=nav.path attr:class="sidebar__item">
                                    <span class="sidebar__icon">{icon(nav.icon)}</span>
                                    <span class="sidebar__label">{nav.label}</span>
                                </A>
                            })
                            .collect_view()}
                    </div>
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_listed_once() {
        let mut paths: Vec<&str> = nav_items().map(|i| i.path).collect();
        assert_eq!(paths.len(), 9);
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn test_label_for_path() {
        assert_eq!(label_for_path("/orders"), Some("Orders"));
        assert_eq!(label_for_path("/sync/"), Some("Sync control"));
        assert_eq!(label_for_path("/nope"), None);
    }
}
