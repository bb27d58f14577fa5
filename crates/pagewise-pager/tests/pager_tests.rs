use pagewise_pager::{ControlKind, Pager, PagerConfig, WindowConfig, length_changed};
use std::cell::RefCell;
use std::rc::Rc;

fn words(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("item-{i}")).collect()
}

#[test]
fn test_out_of_range_requests_leave_state_untouched() {
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    let mut pager = Pager::new(words(25), PagerConfig::default(), move |_: &[String]| {
        *counter.borrow_mut() += 1;
    })
    .unwrap();

    assert!(pager.mount());
    assert_eq!(*calls.borrow(), 1);
    let before = pager.descriptor().cloned();

    assert!(!pager.set_page(0));
    assert!(!pager.set_page(4));
    assert_eq!(pager.descriptor().cloned(), before);
    assert_eq!(*calls.borrow(), 1);

    assert!(pager.set_page(3));
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn test_callback_receives_inclusive_slice() {
    let pages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pages);
    let mut pager = Pager::new(words(25), PagerConfig::default(), move |page: &[String]| {
        sink.borrow_mut().push(page.to_vec());
    })
    .unwrap();

    pager.mount();
    pager.set_page(3);

    let pages = pages.borrow();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 10);
    assert_eq!(pages[1], words(25)[20..25].to_vec());
    assert_eq!(pager.descriptor().unwrap().end_index, 24);
}

#[test]
fn test_length_change_resets_to_initial_page() {
    let config = PagerConfig::default().with_page_size(2).with_initial_page(1);
    let mut pager = Pager::new(words(5), config, |_: &[String]| {}).unwrap();

    pager.mount();
    assert!(pager.set_page(3));
    assert_eq!(pager.current_page(), Some(3));

    assert!(length_changed(&words(8), pager.items()));
    assert!(pager.update_items(words(8)));
    assert_eq!(pager.current_page(), Some(1));
    assert_eq!(pager.total_pages(), Some(4));
}

#[test]
fn test_same_length_replacement_keeps_page() {
    let config = PagerConfig::default().with_page_size(2);
    let mut pager = Pager::new(words(5), config, |_: &[String]| {}).unwrap();

    pager.mount();
    pager.set_page(3);

    let replacement: Vec<String> = (0..5).map(|i| format!("other-{i}")).collect();
    assert!(!pager.update_items(replacement));
    assert_eq!(pager.current_page(), Some(3));
    assert_eq!(pager.current_items(), &["other-4".to_string()]);
}

#[test]
fn test_items_arriving_after_empty_mount() {
    let mut pager = Pager::new(Vec::<String>::new(), PagerConfig::default(), |_: &[String]| {})
        .unwrap();

    assert!(!pager.mount());
    assert!(pager.descriptor().is_none());

    assert!(pager.update_items(words(12)));
    assert_eq!(pager.current_page(), Some(1));
    assert_eq!(pager.total_pages(), Some(2));
}

#[test]
fn test_emptying_the_collection() {
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    let mut pager = Pager::new(words(30), PagerConfig::default(), move |page: &[String]| {
        sink.borrow_mut().push(page.len());
    })
    .unwrap();

    pager.mount();
    assert!(pager.update_items(Vec::new()));
    assert_eq!(pager.total_pages(), Some(0));
    assert_eq!(*emitted.borrow(), vec![10, 0]);
    assert!(!pager.set_page(1));
    assert!(pager.controls().is_none());
}

#[test]
fn test_controls_follow_the_pager() {
    let mut pager = Pager::new(words(200), PagerConfig::default(), |_: &[String]| {}).unwrap();
    assert!(pager.controls().is_none());

    pager.mount();
    let controls = pager.controls().unwrap();
    let next = controls.find(ControlKind::Next).unwrap();
    assert!(next.is_actionable());

    let target = next.target.unwrap();
    assert!(pager.set_page(target));
    assert_eq!(pager.current_page(), Some(2));

    let last = pager.controls().unwrap().find(ControlKind::Last).unwrap().target.unwrap();
    assert!(pager.set_page(last));
    assert!(pager.controls().unwrap().find(ControlKind::Next).unwrap().disabled);
}

#[test]
fn test_custom_window_config() {
    let window = WindowConfig::builder()
        .max_buttons(4usize)
        .leading_threshold(2usize)
        .centered_before(1usize)
        .centered_after(1usize)
        .build()
        .unwrap();
    let config = PagerConfig::builder().window(window).build().unwrap();
    let mut pager = Pager::new(words(100), config, |_: &[String]| {}).unwrap();

    pager.mount();
    pager.set_page(5);
    assert_eq!(pager.descriptor().unwrap().pages, vec![4, 5, 6]);
}
