//! Per-function temp pool boundary, across several pool sizes at once
//! instead of one hand-picked size per test.

use islxform::transform::ContextStacks;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(islxform::transform::DEFAULT_TEMP_POOL_SIZE)]
fn temp_names_increase_until_pool_exhausted(#[case] pool_size: usize) {
    let mut stacks = ContextStacks::new();
    stacks.push_function(pool_size, false);

    for i in 1..=pool_size {
        assert!(!stacks.cur_function_mut().is_exhausted());
        assert_eq!(stacks.cur_function_mut().take_temp_name(), format!("t{i}"));
    }
    assert!(stacks.cur_function_mut().is_exhausted());

    let popped = stacks.pop_function();
    assert_eq!(popped.temp_index(), pool_size);
}
