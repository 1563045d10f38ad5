use super::*;

#[test]
fn delete_community_copy_quotes_the_name() {
    let copy = confirm_copy(&ConfirmKind::DeleteCommunity { name: "Rustaceans".to_owned() });
    assert_eq!(copy.title, "Delete community");
    assert_eq!(copy.message, "This permanently deletes \"Rustaceans\" and every post in it.");
    assert_eq!(copy.confirm_label, "Delete");
}

#[test]
fn delete_post_copy_quotes_the_title() {
    let copy = confirm_copy(&ConfirmKind::DeletePost { title: "Borrow checker notes".to_owned() });
    assert_eq!(copy.title, "Delete post");
    assert_eq!(copy.message, "This permanently deletes \"Borrow checker notes\".");
    assert_eq!(copy.confirm_label, "Delete");
}

#[test]
fn discard_draft_copy_is_fixed() {
    let copy = confirm_copy(&ConfirmKind::DiscardDraft);
    assert_eq!(copy.title, "Discard draft");
    assert_eq!(copy.message, "This throws away your saved draft.");
    assert_eq!(copy.confirm_label, "Discard");
}
