use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_list_tab() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::List);
    assert_eq!(state.health, HealthView::Unknown);
    assert!(!state.theme.is_dark());
}

// =============================================================
// Tab selection
// =============================================================

#[test]
fn selecting_a_tab_makes_it_the_only_visible_one() {
    let mut state = UiState::default();
    state.select_tab(Tab::Export);
    for tab in Tab::ALL {
        assert_eq!(state.is_visible(tab), tab == Tab::Export);
    }
}

#[test]
fn list_and_stats_tabs_trigger_loads() {
    let mut state = UiState::default();
    assert_eq!(state.select_tab(Tab::List), Some(TabLoad::Problems));
    assert_eq!(state.select_tab(Tab::Stats), Some(TabLoad::Stats));
}

#[test]
fn other_tabs_trigger_no_load() {
    let mut state = UiState::default();
    for tab in [Tab::Search, Tab::Export, Tab::Import, Tab::Distribution] {
        assert_eq!(state.select_tab(tab), None);
    }
}

#[test]
fn reselecting_current_tab_reloads() {
    let mut state = UiState::default();
    state.select_tab(Tab::Stats);
    assert_eq!(state.select_tab(Tab::Stats), Some(TabLoad::Stats));
}

// =============================================================
// Tab ids + labels
// =============================================================

#[test]
fn tab_ids_are_distinct() {
    for (i, a) in Tab::ALL.iter().enumerate() {
        for (j, b) in Tab::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.id(), b.id());
            }
        }
    }
    assert_eq!(Tab::default().id(), "list");
}

#[test]
fn tab_labels_are_distinct() {
    for (i, a) in Tab::ALL.iter().enumerate() {
        for (j, b) in Tab::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
