use outcome_rail::{Outcome, Tags};

#[test]
fn and_then_short_circuits_after_failure() {
    let mut second_ran = false;

    let chained = Outcome::<i32, i32>::success(1)
        .and_then(|v, _| Outcome::<i32, i32>::failure(v + 1))
        .and_then(|v, _| {
            second_ran = true;
            Outcome::success(v)
        });

    assert!(!second_ran);
    assert_eq!(chained.error(), Some(&2));
}

#[test]
fn and_then_passes_value_and_tags() {
    let chained = Outcome::<i32, ()>::success_with(2, ["input"]).and_then(|v, types: Tags| {
        assert_eq!(types.as_slice(), &["input"]);
        Outcome::success_with(v * 10, ["scaled"])
    });

    assert_eq!(chained.value(), Some(&20));
    assert_eq!(chained.types(), &["scaled"]);
}

#[test]
fn and_then_keeps_failure_tags_and_handled_state() {
    let failed: Outcome<i32, &str> = Outcome::failure_with("boom", ["io"]);
    failed.on_any_failure(|_, _| {});

    let passed = failed.and_then(|v, _| Outcome::<String, &str>::success(v.to_string()));

    assert_eq!(passed.error(), Some(&"boom"));
    assert_eq!(passed.types(), &["io"]);
    assert!(passed.is_handled());
}

#[test]
fn or_else_keeps_success_handled_state() {
    let handled: Outcome<i32, &str> = Outcome::success_with(5, ["kept"]);
    handled.on_any_success(|_, _| {});

    let passed = handled.or_else(|_, _| Outcome::<i32, ()>::success(0));

    assert_eq!(passed.value(), Some(&5));
    assert!(passed.is_handled());
    assert!(!Outcome::<i32, &str>::success(5).or_else(|_, _| Outcome::<i32, ()>::success(0)).is_handled());
}

#[test]
fn map_and_map_err_keep_handled_state() {
    let success: Outcome<i32, ()> = Outcome::success(4);
    success.on_any_success(|_, _| {});
    assert!(success.map(|v| v * 2).is_handled());

    let failure: Outcome<(), i32> = Outcome::failure(404);
    failure.on_any_failure(|_, _| {});
    assert!(failure.map_err(|code| code + 1).is_handled());

    assert!(!Outcome::<i32, ()>::success(4).map(|v| v * 2).is_handled());
    assert!(!Outcome::<(), i32>::failure(404).map_err(|code| code + 1).is_handled());
}

#[test]
fn catch_recovers_failure() {
    let recovered = Outcome::<String, String>::failure("x".to_string())
        .catch(|e, _| Outcome::<String, ()>::success(e + "!"));

    assert_eq!(recovered.value().map(String::as_str), Some("x!"));
}

#[test]
fn or_else_is_inert_on_success() {
    let mut ran = false;
    let untouched = Outcome::<i32, &str>::success_with(5, ["kept"]).or_else(|_, _| {
        ran = true;
        Outcome::<i32, ()>::success(0)
    });

    assert!(!ran);
    assert_eq!(untouched.value(), Some(&5));
    assert_eq!(untouched.types(), &["kept"]);
}

#[test]
fn or_else_receives_failure_tags() {
    let recovered = Outcome::<u8, &str>::failure_with("timeout", ["retryable"]).or_else(|e, types| {
        if types.iter().any(|t| t == "retryable") {
            Outcome::<u8, &str>::success(1)
        } else {
            Outcome::failure(e)
        }
    });

    assert_eq!(recovered.into_value(), Some(1));
}

#[test]
fn pipeline_recovers_then_continues() {
    fn step(v: i32) -> Outcome<i32, String> {
        if v > 2 {
            Outcome::failure_with(format!("{v} too large"), ["limit"])
        } else {
            Outcome::success(v + 1)
        }
    }

    let result = Outcome::<i32, String>::success(1)
        .and_then(|v, _| step(v))
        .and_then(|v, _| step(v))
        .and_then(|v, _| step(v))
        .catch(|e, _| Outcome::<i32, String>::success(e.len() as i32))
        .and_then(|v, _| Outcome::<i32, String>::success(v * 2));

    assert_eq!(result.into_value(), Some(22));
}

#[test]
fn map_and_map_err_keep_tags() {
    let mapped = Outcome::<i32, ()>::success_with(4, ["n"]).map(|v| v * 2);
    assert_eq!(mapped.value(), Some(&8));
    assert_eq!(mapped.types(), &["n"]);

    let mapped_err = Outcome::<(), i32>::failure_with(404, ["http"]).map_err(|code| format!("HTTP {code}"));
    assert_eq!(mapped_err.error().map(String::as_str), Some("HTTP 404"));
    assert_eq!(mapped_err.types(), &["http"]);
}

#[test]
fn fold_collapses_both_variants() {
    let describe = |o: Outcome<u8, &str>| o.fold(|v| format!("ok:{v}"), |e| format!("err:{e}"));

    assert_eq!(describe(Outcome::success(1)), "ok:1");
    assert_eq!(describe(Outcome::failure("bad")), "err:bad");
}

#[test]
fn collect_stops_at_first_failure() {
    let mut visited = 0;
    let inputs = [1, 2, -3, 4, -5];

    let collected: Outcome<Vec<i32>, String> = inputs
        .iter()
        .map(|&n| {
            visited += 1;
            if n > 0 {
                Outcome::success(n)
            } else {
                Outcome::failure_with(format!("negative {n}"), ["sign"])
            }
        })
        .collect();

    assert_eq!(visited, 3);
    assert_eq!(collected.error().map(String::as_str), Some("negative -3"));
    assert_eq!(collected.types(), &["sign"]);
}
