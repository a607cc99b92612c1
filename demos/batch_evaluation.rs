use matheval::{Evaluator, Variables};

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        Variables::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        Variables::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
        Variables::from([("price".to_string(), 95.5)]),
    ];

    let expression = "price * volume / (volume - 1000)";

    match Evaluator::new().evaluate_batch(expression, &contexts) {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                println!("Result {}: {:?}", i, result);
            }
        }
        Err(err) => println!("Error: {}", err),
    }
}
