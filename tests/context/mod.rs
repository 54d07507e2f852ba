pub mod tests_temp_pool;
