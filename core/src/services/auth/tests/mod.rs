mod mocks;
mod redirect_tests;
