use super::*;
use crate::content::SERVICES;
use crate::util::history::MemoryHistory;

fn hash_candidates() -> Vec<String> {
    let mut out: Vec<String> = vec![
        String::new(),
        "#".to_owned(),
        "nonexistent".to_owned(),
        "#nonexistent".to_owned(),
        "CUSTOM-DESIGNS".to_owned(),
        " custom-designs".to_owned(),
        "custom-designs/".to_owned(),
        "custom".to_owned(),
        "##custom-designs".to_owned(),
        "seo-performance?x=1".to_owned(),
    ];
    for service in &SERVICES {
        out.push(service.id.to_owned());
        out.push(format!("#{}", service.id));
    }
    out
}

// =============================================================
// Route resolution
// =============================================================

#[test]
fn route_from_fragment_only_accepts_catalog_ids() {
    for raw in hash_candidates() {
        let route = Route::from_fragment(&raw);
        let expected = find_service(strip_hash(&raw));
        assert_eq!(route.service(), expected, "hash {raw:?}");
    }
}

#[test]
fn route_fragment_round_trips_service_ids() {
    assert_eq!(Route::Home.fragment(), None);
    for service in &SERVICES {
        assert_eq!(Route::Service(service).fragment(), Some(service.id));
    }
}

// =============================================================
// History change
// =============================================================

#[test]
fn on_history_change_tracks_any_hash() {
    for raw in hash_candidates() {
        let mut state = RouterState::default();
        let history = MemoryHistory::with_fragment(&raw);
        state.on_history_change(&history);
        let expected = find_service(strip_hash(&raw)).map(|s| s.id);
        assert_eq!(state.active_service(), expected, "hash {raw:?}");
    }
}

#[test]
fn doubled_hash_marker_resolves_home() {
    let mut state = RouterState::default();
    state.on_history_change(&MemoryHistory::with_fragment("##custom-designs"));
    assert!(state.is_home());

    let startup = RouterState::startup(&MemoryHistory::with_fragment("##custom-designs"));
    assert!(startup.is_home());
    assert_eq!(startup.scroll_top_seq, 0);
}

#[test]
fn route_from_id_does_not_strip() {
    assert_eq!(Route::from_id("#custom-designs"), Route::Home);
    assert_eq!(Route::from_id("custom-designs").fragment(), Some("custom-designs"));
    assert_eq!(Route::from_id(""), Route::Home);
}

#[test]
fn on_history_change_never_pushes() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();
    state.open_detail("custom-designs", &mut history);
    assert!(history.back());
    state.on_history_change(&history);
    assert_eq!(history.len(), 2);
    assert!(state.is_home());
}

#[test]
fn back_and_forward_follow_history() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();
    state.open_detail("responsive-layouts", &mut history);
    state.close_detail(&mut history);

    assert!(history.back());
    state.on_history_change(&history);
    assert_eq!(state.active_service(), Some("responsive-layouts"));

    assert!(history.back());
    state.on_history_change(&history);
    assert!(state.is_home());

    assert!(history.forward());
    state.on_history_change(&history);
    assert_eq!(state.active_service(), Some("responsive-layouts"));
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn open_detail_pushes_hash_and_requests_scroll_top() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();

    assert!(state.open_detail("seo-performance", &mut history));
    assert_eq!(state.active_service(), Some("seo-performance"));
    assert_eq!(history.fragment(), "seo-performance");
    assert_eq!(history.len(), 2);
    assert_eq!(state.scroll_top_seq, 1);
}

#[test]
fn open_detail_unknown_id_is_ignored() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();

    assert!(!state.open_detail("nonexistent", &mut history));
    assert!(state.is_home());
    assert_eq!(history.len(), 1);
    assert_eq!(state.scroll_top_seq, 0);
}

#[test]
fn open_then_close_returns_home_with_empty_hash() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();

    state.open_detail("custom-designs", &mut history);
    state.open_detail("responsive-layouts", &mut history);
    assert!(history.back());
    state.on_history_change(&history);
    state.close_detail(&mut history);

    assert_eq!(state.active_service(), None);
    assert_eq!(state.current_route(), Route::Home);
    assert_eq!(history.fragment(), "");
}

#[test]
fn close_detail_to_queues_anchor_once() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();
    state.open_detail("custom-designs", &mut history);

    state.close_detail_to(Section::Contact, &mut history);
    assert!(state.is_home());
    assert_eq!(state.take_pending_anchor(), Some(Section::Contact));
    assert_eq!(state.take_pending_anchor(), None);
}

#[test]
fn opening_a_detail_drops_queued_anchor() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();
    state.close_detail_to(Section::Contact, &mut history);
    state.open_detail("custom-designs", &mut history);
    assert_eq!(state.pending_anchor, None);
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_with_service_hash_opens_detail_scrolled_to_top() {
    let history = MemoryHistory::with_fragment("#custom-designs");
    let state = RouterState::startup(&history);
    assert_eq!(state.active_service(), Some("custom-designs"));
    assert_eq!(state.scroll_top_seq, 1);
}

#[test]
fn startup_with_unknown_hash_shows_home() {
    let history = MemoryHistory::with_fragment("#nonexistent");
    let state = RouterState::startup(&history);
    assert_eq!(state.active_service(), None);
    assert!(state.is_home());
    assert_eq!(state.scroll_top_seq, 0);
}

#[test]
fn startup_does_not_push_history() {
    let history = MemoryHistory::with_fragment("#seo-performance");
    let _state = RouterState::startup(&history);
    assert_eq!(history.len(), 1);
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_only_on_home() {
    let mut history = MemoryHistory::new();
    let mut state = RouterState::default();
    assert_eq!(state.anchor_target(Section::Portfolio), Some("portfolio"));

    state.open_detail("custom-designs", &mut history);
    assert_eq!(state.anchor_target(Section::Portfolio), None);
}
