#[macro_use(problem)]
extern crate common;
extern crate iterators;

use iterators::multiples::sum_multiples;

fn compute(multiple1: i64, multiple2: i64, max: i64) -> i64 {
    sum_multiples(multiple1, multiple2, max)
}

fn solve() -> String {
    compute(3, 5, 1000).to_string()
}

problem!(
    "233168",
    solve,
    "The sum of all multiples of 3 or 5 below 1000 is"
);
