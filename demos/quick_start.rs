use outcome_rail::{tags, Outcome, Service};

struct Withdraw {
    balance: u32,
    amount: u32,
}

impl From<(u32, u32)> for Withdraw {
    fn from((balance, amount): (u32, u32)) -> Self {
        Self { balance, amount }
    }
}

impl Service for Withdraw {
    type Value = u32;
    type Error = String;

    fn run(self) -> Outcome<u32, String> {
        if self.amount == 0 {
            return Outcome::failure_with("amount must be positive".to_string(), ["validation"]);
        }
        match self.balance.checked_sub(self.amount) {
            Some(left) => Outcome::success_with(left, ["withdrawn"]),
            None => Outcome::failure_with(format!("short by {}", self.amount - self.balance), ["funds"]),
        }
    }
}

fn report(outcome: &Outcome<u32, String>) {
    outcome
        .on_success(tags!["withdrawn"], |left, _| println!("  ok, {left} left"))
        .on_failure(tags!["validation"], |e, _| println!("  rejected: {e}"))
        .on_failure(tags!["funds"], |e, tag| println!("  declined ({}): {e}", tag.map_or("?", |t| t.as_str())))
        .on_failure(tags![], |e, _| println!("  unexpected: {e}"));
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Reactive dispatch: the first matching clause wins.
    println!("\n1. Dispatch:");
    for (balance, amount) in [(100, 30), (100, 0), (10, 25)] {
        report(&Withdraw::call((balance, amount)));
    }

    // 2. Chaining: a failure skips the rest until something recovers it.
    println!("\n2. Chaining:");
    let settled = Withdraw::call((10, 25))
        .and_then(|left, _| Withdraw::call((left, 5)))
        .catch(|e, types| {
            println!("  recovering from {e} {:?}", types.as_slice());
            Outcome::<u32, String>::success(0)
        })
        .map(|left| left * 100);
    println!("  {settled}");

    // 3. Collecting: stops at the first failure.
    println!("\n3. Collecting:");
    let all: Outcome<Vec<u32>, String> =
        [(50, 10), (5, 10), (20, 1)].into_iter().map(Withdraw::call).collect();
    println!("  {all}, tags {:?}", all.types());
}
