use outcome_rail::{call_dyn, tags, ContractError, DynService, Outcome, Service};
use std::any::Any;

struct UpdateName {
    current: Option<String>,
    new_name: String,
}

impl From<(Option<&str>, &str)> for UpdateName {
    fn from((current, new_name): (Option<&str>, &str)) -> Self {
        Self { current: current.map(str::to_owned), new_name: new_name.to_owned() }
    }
}

impl Service for UpdateName {
    type Value = String;
    type Error = String;

    fn run(self) -> Outcome<String, String> {
        let Some(current) = self.current else {
            return Outcome::failure_with("missing user".to_string(), ["not_found"]);
        };
        if self.new_name.trim().is_empty() {
            return Outcome::failure_with(format!("cannot rename {current}"), ["validation"]);
        }
        Outcome::success_with(self.new_name, ["renamed"])
    }
}

#[test]
fn call_builds_and_runs_service() {
    let renamed = UpdateName::call((Some("ana"), "bea"));

    assert_eq!(renamed.value().map(String::as_str), Some("bea"));
    assert_eq!(renamed.types(), &["renamed"]);
}

#[test]
fn service_outcome_drives_reactive_dispatch() {
    let mut status = 0;

    UpdateName::call((None::<&str>, "bea"))
        .on_success(tags![], |_, _| status = 200)
        .on_failure(tags!["validation"], |_, _| status = 422)
        .on_failure(tags!["not_found"], |_, _| status = 404)
        .on_failure(tags![], |_, _| status = 500);

    assert_eq!(status, 404);
}

#[test]
fn service_outcome_chains_into_next_step() {
    let shouted = UpdateName::call((Some("ana"), "bea"))
        .and_then(|name, _| Outcome::<String, String>::success(name.to_uppercase()));

    assert_eq!(shouted.into_value(), Some("BEA".to_string()));
}

#[test]
fn service_name_defaults_to_type_name() {
    assert!(UpdateName::name().ends_with("UpdateName"));
}

struct Echo(i32);

impl DynService for Echo {
    fn run_dyn(&mut self) -> Option<Box<dyn Any>> {
        Some(Box::new(Outcome::<i32, String>::success_with(self.0, ["echo"])))
    }
}

struct Forgetful;

impl DynService for Forgetful {}

struct Liar;

impl DynService for Liar {
    fn name(&self) -> &'static str {
        "liar"
    }

    fn run_dyn(&mut self) -> Option<Box<dyn Any>> {
        Some(Box::new("not an outcome"))
    }
}

#[test]
fn call_dyn_returns_matching_outcome() {
    let outcome = call_dyn::<i32, String>(&mut Echo(9)).unwrap();

    assert_eq!(outcome.value(), Some(&9));
    assert_eq!(outcome.types(), &["echo"]);
}

#[test]
fn call_dyn_reports_missing_run() {
    let err = call_dyn::<(), ()>(&mut Forgetful).unwrap_err();

    assert!(matches!(err, ContractError::NotImplemented { .. }));
    assert!(err.service().unwrap().ends_with("Forgetful"));
    assert!(err.to_string().contains("must implement its run method"));
}

#[test]
fn call_dyn_rejects_non_outcome() {
    let err = call_dyn::<(), ()>(&mut Liar).unwrap_err();

    assert_eq!(err, ContractError::ContractViolation { service: "liar" });
    assert_eq!(err.to_string(), "service `liar` must return an Outcome");
}

#[test]
fn call_dyn_rejects_outcome_of_other_types() {
    let err = call_dyn::<i32, &'static str>(&mut Echo(1)).unwrap_err();

    assert!(matches!(err, ContractError::ContractViolation { .. }));
}

#[test]
fn contract_errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(ContractError::UnwrapOnFailure);

    assert_eq!(err.to_string(), "failure outcomes do not have a value");
    assert_eq!(ContractError::UnwrapOnFailure.service(), None);
}
