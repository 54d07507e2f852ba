pub mod tests_yield;
