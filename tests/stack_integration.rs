//! Stack container tests.

use rlstage::Stack;

#[test]
fn push_pop_is_lifo() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn peek_does_not_remove() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), None);

    stack.push("root");
    stack.push("top");

    assert_eq!(stack.peek(), Some(&"top"));
    assert_eq!(stack.len(), 2);
}

#[test]
fn iter_top_down_starts_at_the_top() {
    let mut stack = Stack::new();
    stack.push("bottom");
    stack.push("middle");
    stack.push("top");

    let order: Vec<&str> = stack.iter_top_down().copied().collect();
    assert_eq!(order, vec!["top", "middle", "bottom"]);
}

#[test]
fn default_is_empty() {
    let stack: Stack<u32> = Stack::default();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}
