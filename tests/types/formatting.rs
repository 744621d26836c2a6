use outcome_rail::Outcome;

#[test]
fn display_renders_payload_debug_form() {
    assert_eq!(Outcome::<i32, ()>::success(5).to_string(), "Success(5)");
    assert_eq!(Outcome::<(), &str>::failure("boom").to_string(), "Failure(\"boom\")");
    assert_eq!(Outcome::<Option<u8>, ()>::success(Some(1)).to_string(), "Success(Some(1))");
}

#[test]
fn display_omits_absent_payload() {
    assert_eq!(Outcome::<Option<i32>, ()>::success(None).to_string(), "Success()");
    assert_eq!(Outcome::<(), ()>::success(()).to_string(), "Success()");
    assert_eq!(Outcome::<(), Option<&str>>::failure(None).to_string(), "Failure()");
    assert_eq!(Outcome::<(), ()>::failure(()).to_string(), "Failure()");
}

#[test]
fn display_does_not_treat_none_string_as_absent() {
    assert_eq!(Outcome::<&str, ()>::success("None").to_string(), "Success(\"None\")");
}

#[test]
fn display_keeps_enum_variant_named_none() {
    #[derive(Debug)]
    enum Quota {
        None,
        Limited(u32),
    }

    assert_eq!(Outcome::<(), Quota>::failure(Quota::None).to_string(), "Failure(None)");
    assert_eq!(Outcome::<(), Quota>::failure(Quota::Limited(3)).to_string(), "Failure(Limited(3))");
}

#[test]
fn display_keeps_unit_struct_payload() {
    #[derive(Debug)]
    struct Empty;

    assert_eq!(Outcome::<Empty, ()>::success(Empty).to_string(), "Success(Empty)");
    assert_eq!(Outcome::<Option<()>, ()>::success(Some(())).to_string(), "Success(Some(()))");
}

#[test]
fn display_ignores_tags() {
    let tagged: Outcome<i32, ()> = Outcome::success_with(1, ["a"]);

    assert_eq!(tagged.to_string(), "Success(1)");
}

#[test]
fn debug_shows_tags_and_handled_state() {
    let outcome: Outcome<i32, ()> = Outcome::success_with(1, ["a"]);
    outcome.on_any_success(|_, _| {});

    let rendered = format!("{outcome:?}");
    assert!(rendered.starts_with("Success"));
    assert!(rendered.contains("value: 1"));
    assert!(rendered.contains("types: [Tag(\"a\")]"));
    assert!(rendered.contains("handled: true"));
}
