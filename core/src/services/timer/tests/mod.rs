mod tokio_scheduler_tests;
mod virtual_clock_tests;
