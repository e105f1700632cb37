//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, PHC string format)
//! - Cookie management
//! - Persistence gateway (process-wide PostgreSQL pool)

pub mod cookie;
pub mod db;
pub mod password;
