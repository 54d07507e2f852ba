pub mod tests_switch_goto;
