use super::*;

#[test]
fn delete_prompt_texts() {
    let prompt = ConfirmPrompt::delete_item();
    assert_eq!(prompt.title, "Konfirmasi Hapus");
    assert_eq!(prompt.confirm_label, "Ya, Hapus!");
    assert_eq!(prompt.cancel_label, "Batal");
}

#[test]
fn auto_confirm_answers_fixed_value() {
    let prompt = ConfirmPrompt::delete_item();
    assert!(tokio_test::block_on(AutoConfirm(true).confirm(&prompt)));
    assert!(!tokio_test::block_on(AutoConfirm(false).confirm(&prompt)));
}

#[test]
fn affirmative_answers() {
    for answer in ["y", "Y", "ya", "YES", " yes\n"] {
        assert!(is_affirmative(answer), "{answer:?} should confirm");
    }
    for answer in ["", "n", "no", "tidak", "yess"] {
        assert!(!is_affirmative(answer), "{answer:?} should cancel");
    }
}
