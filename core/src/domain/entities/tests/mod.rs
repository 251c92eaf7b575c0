mod otp_entry_tests;
mod user_tests;
