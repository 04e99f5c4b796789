mod manage_tests;
mod support;
