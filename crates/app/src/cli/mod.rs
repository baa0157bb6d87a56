pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Book, Init, Navigate, Routes, Session, Version};
