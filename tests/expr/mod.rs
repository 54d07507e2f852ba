pub mod tests_operator_remap;
pub mod tests_ternary;
