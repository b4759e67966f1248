//! # qb-core
//!
//! Core types for the quizbank question bank.
//!
//! This crate provides the types shared across all quizbank crates:
//! - Entity structs for users, questions, tags, images, progress and statistics
//! - Closed-set enums (exam type, exam stage, subject, difficulty, answer option)
//! - Cross-cutting error types
//! - Field validation helpers shared by entity payloads

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;
