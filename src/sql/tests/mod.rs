mod statement_tests;
mod utility;
