pub mod parser;


// Integration tests are in the workspace-level tests/ crate
