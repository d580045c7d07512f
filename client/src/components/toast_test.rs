use super::*;

#[test]
fn toast_class_reflects_notice_kind() {
    assert_eq!(toast_class(NoticeKind::Success), "toast toast--success");
    assert_eq!(toast_class(NoticeKind::Error), "toast toast--error");
}

#[test]
fn auto_dismiss_is_five_seconds() {
    assert_eq!(AUTO_DISMISS_MS, 5_000);
}
