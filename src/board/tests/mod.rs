//! Unit tests for the board domain, store, and drag reconciliation.


mod domain_tests;
