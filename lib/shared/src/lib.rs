pub mod attempt;
pub mod auth;
pub mod card;
pub mod content;
pub mod exam;
pub mod profile;
pub mod result;
pub mod storage;
