mod entity_match_tests;
mod otp_code_tests;
