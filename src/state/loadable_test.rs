use super::*;

#[test]
fn default_slot_is_idle() {
    let slot = Loadable::<u32>::default();
    assert_eq!(slot.status, LoadStatus::Idle);
    assert!(slot.value().is_none());
    assert!(!slot.is_loading());
}

#[test]
fn begin_then_settle_ok_loads_value() {
    let mut slot = Loadable::default();
    let token = slot.begin();
    assert!(slot.is_loading());
    assert!(slot.settle(token, Ok(vec![1, 2])));
    assert_eq!(slot.value(), Some(&vec![1, 2]));
}

#[test]
fn settle_err_records_message() {
    let mut slot = Loadable::<u32>::default();
    let token = slot.begin();
    assert!(slot.settle(token, Err("Error al cargar problemas".to_owned())));
    assert_eq!(slot.status, LoadStatus::Failed("Error al cargar problemas".to_owned()));
}

#[test]
fn stale_response_is_discarded() {
    let mut slot = Loadable::default();
    let first = slot.begin();
    let second = slot.begin();

    // Newer response lands first, then the slow older one.
    assert!(slot.settle(second, Ok("new")));
    assert!(!slot.settle(first, Ok("old")));
    assert_eq!(slot.value(), Some(&"new"));
}

#[test]
fn stale_response_does_not_end_newer_loading() {
    let mut slot = Loadable::<&str>::default();
    let first = slot.begin();
    let _second = slot.begin();
    assert!(!slot.settle(first, Err("boom".to_owned())));
    assert!(slot.is_loading());
}

#[test]
fn clear_invalidates_in_flight_request() {
    let mut slot = Loadable::default();
    let token = slot.begin();
    slot.clear();
    assert!(!slot.is_current(token));
    assert!(!slot.settle(token, Ok(5)));
    assert_eq!(slot.status, LoadStatus::Idle);
}
