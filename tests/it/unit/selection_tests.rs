//! Selection and property-change event arity.

use std::cell::Cell;
use std::rc::Rc;

use crate::helpers::TestSessionBuilder;

fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[test]
fn moving_selection_emits_one_deselect_and_one_select() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((0.0, 0.0))
        .with_fixture((100.0, 0.0))
        .build();
    let ids = session.scene.ids();
    let (a, b) = (ids[0].clone(), ids[1].clone());

    let (selects, deselects) = counter();
    let s = selects.clone();
    session
        .events
        .selected
        .subscribe(move |_| s.set(s.get() + 1));
    let d = deselects.clone();
    session
        .events
        .deselected
        .subscribe(move |_| d.set(d.get() + 1));

    session.scene.primary_click(&a, &session.events);
    assert_eq!((selects.get(), deselects.get()), (1, 0));

    session.scene.primary_click(&b, &session.events);
    assert_eq!((selects.get(), deselects.get()), (2, 1));
    assert_eq!(session.scene.selected_id(), Some(&b));
    assert!(!session.scene.find_by_id(&a).unwrap().is_selected());
}

#[test]
fn same_value_property_write_is_silent() {
    let mut session = TestSessionBuilder::new().with_fixture((0.0, 0.0)).build();
    let id = session.scene.ids()[0].clone();

    let changes = Rc::new(Cell::new(0));
    let c = changes.clone();
    session
        .events
        .property_changed
        .subscribe(move |_| c.set(c.get() + 1));

    let events = &session.events;
    let element = session.scene.find_by_id_mut(&id).unwrap();
    // Template default is channel "1"
    assert!(!element.set_prop("channel", "1", events));
    assert_eq!(changes.get(), 0);

    assert!(element.set_prop("channel", "2", events));
    assert_eq!(changes.get(), 1);
}

#[test]
fn lock_change_publishes_lock_event() {
    let mut session = TestSessionBuilder::new()
        .with_pipe("Electric 1", 10.0, (50.0, 50.0))
        .build();
    let id = session.scene.ids()[0].clone();

    let locked_states: Rc<std::cell::RefCell<Vec<bool>>> = Rc::default();
    let l = locked_states.clone();
    session
        .events
        .lock_changed
        .subscribe(move |ev| l.borrow_mut().push(ev.locked));

    let events = &session.events;
    let element = session.scene.find_by_id_mut(&id).unwrap();
    element.double_click(events);
    element.double_click(events);
    assert_eq!(*locked_states.borrow(), vec![true, false]);
}
