use super::*;

#[test]
fn next_slide_wraps() {
    assert_eq!(next_slide(0, 3), 1);
    assert_eq!(next_slide(2, 3), 0);
}

#[test]
fn next_slide_handles_empty_deck() {
    assert_eq!(next_slide(5, 0), 0);
}

#[test]
fn every_slide_has_copy() {
    for slide in &SLIDES {
        assert!(!slide.title.is_empty());
        assert!(slide.question.ends_with('?'));
        assert!(!slide.answer.is_empty());
    }
}
