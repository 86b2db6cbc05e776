use rhiredesk::core::notify::{Level, NotificationCenter};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_publish_reaches_subscribers_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut center = NotificationCenter::new();

    let a = Rc::clone(&log);
    center.subscribe(move |n| a.borrow_mut().push(format!("a:{}", n.message)));
    let b = Rc::clone(&log);
    center.subscribe(move |n| b.borrow_mut().push(format!("b:{}", n.message)));

    center.success("saved");

    assert_eq!(*log.borrow(), vec!["a:saved", "b:saved"]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let count = Rc::new(RefCell::new(0));
    let mut center = NotificationCenter::new();

    let c = Rc::clone(&count);
    let id = center.subscribe(move |_| *c.borrow_mut() += 1);

    center.info("one");
    assert!(center.unsubscribe(id));
    assert!(!center.unsubscribe(id));
    center.info("two");

    assert_eq!(*count.borrow(), 1);
    assert_eq!(center.subscriber_count(), 0);
}

#[test]
fn test_toasts_are_kept_until_dismissed() {
    let mut center = NotificationCenter::new();
    let first = center.error("failed");
    let second = center.success("done");

    assert_ne!(first, second);
    assert_eq!(center.toasts().len(), 2);
    assert_eq!(center.toasts()[0].level, Level::Error);

    assert!(center.dismiss(first));
    assert!(!center.dismiss(first));
    assert_eq!(center.toasts().len(), 1);
    assert_eq!(center.toasts()[0].message, "done");
}

#[test]
fn test_loading_flags() {
    let mut center = NotificationCenter::new();
    assert!(!center.is_page_loading());

    center.start_page_loading();
    assert!(center.is_page_loading());
    center.stop_page_loading();
    assert!(!center.is_page_loading());

    center.start_submit("candidate-form");
    assert!(center.is_submitting("candidate-form"));
    assert!(!center.is_submitting("position-form"));
    center.stop_submit("candidate-form");
    assert!(!center.is_submitting("candidate-form"));
}
