use super::*;

#[test]
fn split_stat_uses_first_colon() {
    assert_eq!(split_stat("85%: Adoption rate"), ("85%", "Adoption rate"));
    assert_eq!(split_stat("Ratio: 3:1 overall"), ("Ratio", "3:1 overall"));
    assert_eq!(split_stat("  42  "), ("42", ""));
    assert_eq!(split_stat("x:"), ("x", ""));
}

#[test]
fn tags_flow_left_to_right() {
    let boxes = tag_cloud_boxes(&[100.0, 50.0], 1280.0, 400.0, 24.0);
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0], Rect::new(80.0, 400.0, 212.0, 440.0));
    assert_eq!(boxes[1], Rect::new(224.0, 400.0, 306.0, 440.0));
}

#[test]
fn tags_wrap_at_right_padding() {
    // 80 + 500 + 12 = 592; a second 500-wide tag would end past 1280 - 80 = 1200.
    let boxes = tag_cloud_boxes(&[468.0, 468.0, 10.0], 1280.0, 0.0, 24.0);
    assert_eq!(boxes[0].y0, 0.0);
    assert_eq!(boxes[1].y0, 0.0);
    assert_eq!(boxes[1].x0, 592.0);
    assert_eq!(boxes[2].x0, 1104.0);
    assert_eq!(boxes[2].y0, 0.0);

    let boxes = tag_cloud_boxes(&[468.0, 468.0, 100.0], 1280.0, 0.0, 24.0);
    assert_eq!(boxes[2].x0, PADDING_X);
    assert_eq!(boxes[2].y0, 40.0 + 12.0);
}

#[test]
fn no_tags_no_boxes() {
    assert!(tag_cloud_boxes(&[], 1280.0, 0.0, 24.0).is_empty());
}
