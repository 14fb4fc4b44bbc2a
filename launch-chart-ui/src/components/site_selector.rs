//! Searchable dropdown for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use launch_data::SiteChoice;

pub const SEARCH_PLACEHOLDER: &str = "Select a Launch Site here";

/// Choices whose label contains `query`, ignoring case.
///
/// The currently selected choice is always kept so the dropdown never shows a
/// value it does not list.
pub fn matching_choices(query: &str, selected: &str) -> Vec<SiteChoice> {
    let needle = query.trim().to_lowercase();
    SiteChoice::options()
        .filter(|choice| {
            needle.is_empty()
                || choice.option_key() == selected
                || choice.label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Launch site dropdown: "All Sites" followed by each of the four sites,
/// narrowed by the search box above it.
/// Writes the option key (`ALL`, `OPT1`..`OPT4`) to `selected_site`.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let selected = (state.selected_site)();
    let options: Vec<(&'static str, &'static str)> = matching_choices(&query(), &selected)
        .into_iter()
        .map(|choice| (choice.option_key(), choice.label()))
        .collect();

    let on_search = move |evt: Event<FormData>| {
        query.set(evt.value());
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::debug!("site selector changed to {}", value);
        state.selected_site.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-dropdown",
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            input {
                r#type: "search",
                id: "site-search",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{query}",
                style: "width: 80%; padding: 3px; margin-bottom: 4px; font-size: 16px;",
                oninput: on_search,
            }
            select {
                id: "site-dropdown",
                style: "width: 80%; padding: 3px; font-size: 20px; text-align-last: center;",
                onchange: on_change,
                for (opt, label) in options.into_iter() {
                    option {
                        value: "{opt}",
                        selected: opt == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_data::LaunchSite;

    #[test]
    fn empty_search_lists_every_choice() {
        assert_eq!(matching_choices("", "ALL").len(), 5);
        assert_eq!(matching_choices("   ", "ALL").len(), 5);
    }

    #[test]
    fn search_matches_labels_ignoring_case() {
        let found = matching_choices("ccafs", "OPT3");
        assert_eq!(
            found,
            vec![
                SiteChoice::Site(LaunchSite::CcafsLc40),
                SiteChoice::Site(LaunchSite::KscLc39a),
                SiteChoice::Site(LaunchSite::CcafsSlc40),
            ]
        );
    }

    #[test]
    fn selected_choice_survives_a_non_matching_search() {
        let found = matching_choices("VAFB", "ALL");
        assert_eq!(
            found,
            vec![SiteChoice::All, SiteChoice::Site(LaunchSite::VafbSlc4e)]
        );
    }
}
