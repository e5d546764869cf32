pub mod kernel_tests;
pub mod verify_tests;
pub mod determinism_tests;
