//! Gateway between browser clients and the NASA open APIs, plus a
//! chat-completion service for photo Q&A and weather summaries. Validates
//! requests, enforces origin and per-IP rate limits, injects server-held
//! credentials and normalizes upstream JSON into a stable client contract.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod limiter;
pub mod middleware;
pub mod normalize;
pub mod prompts;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validate;
