use log::debug;
use matheval::{Evaluator, Variables};

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::new();

    let samples = [
        ("423 * 2 + 30 - 4 + 3 * 10", "902"),
        ("423 * (2 + (30 - 4) + 3) - 10", "13103"),
        ("(11 - 15 / 5) * 4 - 12", "20"),
        ("109 - (7 * 3 - 15) / 3", "107"),
        ("89 * (52 / 13 + 6) + 18", "908"),
        ("(14.6 + 8.8) * 0.5 - (26.7 - 12.9) / 0.3", "-34.3"),
        ("0.2 * (34.2 - 2.5 / 0.1) + 0.04 * 0.1", "1.844"),
    ];
    for (expression, expected) in samples {
        match evaluator.evaluate(expression) {
            Ok(result) => println!("{expression} = {result} (expected {expected})"),
            Err(err) => println!("{expression}: {err}"),
        }
    }

    let with_variables: [(&str, Variables, &str); 3] = [
        (
            "89 * (a / 13 + 6) + b",
            Variables::from([("a".to_string(), 52.0), ("b".to_string(), 18.0)]),
            "908",
        ),
        (
            "(14.6 + a) * 0.5 - (b - 12.9) / 0.3",
            Variables::from([("a".to_string(), 8.8), ("b".to_string(), 26.7)]),
            "-34.3",
        ),
        (
            "0.2 * (a - 2.5 / b) + c * 0.1",
            Variables::from([
                ("a".to_string(), 34.2),
                ("b".to_string(), 0.1),
                ("c".to_string(), 0.04),
            ]),
            "1.844",
        ),
    ];
    for (expression, variables, expected) in with_variables {
        debug!("variables: {variables:?}");
        match evaluator.evaluate_expression(expression, &variables) {
            Ok(result) => println!("{expression} = {result} (expected {expected})"),
            Err(err) => println!("{expression}: {err}"),
        }
    }
}
