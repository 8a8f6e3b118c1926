//! OTP store implementations

mod file_store;
mod memory;

pub use file_store::FileOtpStore;
pub use memory::MemoryOtpStore;
