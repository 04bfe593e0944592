use super::*;

fn depth(n: u32) -> u32 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
}

#[test]
fn returns_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
}

#[test]
fn passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("nope"));
    assert_eq!(result, Err("nope"));
}

#[test]
fn deep_recursion_completes() {
    assert_eq!(depth(200_000), 200_000);
}
