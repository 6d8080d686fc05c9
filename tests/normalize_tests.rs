use shiftledger::core::normalize::normalize_tag;

#[test]
fn strips_case_fillers_and_joiner() {
    assert_eq!(
        normalize_tag("Kissing_Cousins / X"),
        normalize_tag("kissingcousinsx")
    );
    assert_eq!(normalize_tag("Kissing_Cousins / X"), "kissingcousins");
}

#[test]
fn idempotent() {
    let once = normalize_tag("Bronwin OFTV & MCarter OFTV");
    assert_eq!(normalize_tag(&once), once);
}

#[test]
fn plain_tags_pass_through_lowercased() {
    assert_eq!(normalize_tag("IslaFree"), "islafree");
    assert_eq!(normalize_tag("islafree"), "islafree");
}

#[test]
fn total_on_degenerate_input() {
    assert_eq!(normalize_tag(""), "");
    assert_eq!(normalize_tag(" _/&x X"), "");
}
