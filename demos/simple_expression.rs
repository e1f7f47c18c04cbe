use exprcalc::api::{handle_calculate, handle_compute, handle_usage};
use exprcalc::{compute_expression, CalcService, InMemoryUsageStats};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let result = compute_expression(expr).unwrap();
    debug!("pipeline result: {result}");
    println!("{expr} = {result}");

    let service = CalcService::new(InMemoryUsageStats::new());

    let response = handle_compute(&service, r#"{"expression": "2+-3"}"#);
    println!("compute -> {} {}", response.status, response.body);

    let response = handle_compute(&service, r#"{"expression": "10/0"}"#);
    println!("compute -> {} {}", response.status, response.body);

    let response = handle_calculate(r#"{"a": 8, "b": 2, "op": "div"}"#);
    println!("calculate -> {} {}", response.status, response.body);

    let response = handle_usage(&service);
    println!("usage -> {} {}", response.status, response.body);
}
