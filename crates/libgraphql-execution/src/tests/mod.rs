mod test_utils;
mod variables_tests;
