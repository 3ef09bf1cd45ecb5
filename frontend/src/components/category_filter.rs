use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CategoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CategoryQuery {
    /// The active filter, with "all" and blanks folded into `None`.
    pub fn selected(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all")
            .map(str::to_string)
    }
}

/// Reads `?category=` from the current location.
#[hook]
pub fn use_category() -> Option<String> {
    let location = use_location();
    location
        .and_then(|l| l.query::<CategoryQuery>().ok())
        .and_then(|q| q.selected())
}

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub route: Route,
    /// `(value, label)` pairs. The "all" entry clears the filter.
    pub categories: &'static [(&'static str, &'static str)],
    pub current: Option<String>,
}

#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let navigator = use_navigator();

    html! {
        <div class="category-filter">
            { for props.categories.iter().map(|(value, label)| {
                let active = match props.current.as_deref() {
                    Some(current) => current == *value,
                    None => *value == "all",
                };
                let onclick = {
                    let navigator = navigator.clone();
                    let route = props.route.clone();
                    let value = *value;
                    Callback::from(move |_: MouseEvent| {
                        let Some(navigator) = navigator.as_ref() else { return };
                        if value == "all" {
                            navigator.push(&route);
                        } else {
                            let query = CategoryQuery { category: Some(value.to_string()) };
                            if let Err(e) = navigator.push_with_query(&route, &query) {
                                log::warn!("Failed to apply category filter: {}", e);
                            }
                        }
                    })
                };
                html! {
                    <button type="button" class={classes!("category-chip", active.then_some("active"))} {onclick}>
                        { *label }
                    </button>
                }
            }) }
            <style>
                {r#"
                .category-filter { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 3rem; }
                .category-chip { padding: 0.75rem 1.5rem; border: none; border-radius: 9999px; background: #fff; color: #64748b; font-weight: 500; cursor: pointer; transition: all 0.2s; }
                .category-chip:hover { background: #f1f5f9; }
                .category-chip.active { background: #64B847; color: #fff; box-shadow: 0 10px 20px -10px rgba(0,0,0,0.3); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_blank_mean_no_filter() {
        let query = |c: Option<&str>| CategoryQuery { category: c.map(str::to_string) };
        assert_eq!(query(None).selected(), None);
        assert_eq!(query(Some("all")).selected(), None);
        assert_eq!(query(Some(" ")).selected(), None);
        assert_eq!(query(Some("urban")).selected(), Some("urban".to_string()));
    }
}
