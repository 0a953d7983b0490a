mod fragments_tests;
mod page_tests;
