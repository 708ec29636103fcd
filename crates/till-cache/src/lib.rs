//! # till-cache: Time-Expiring Key-Value Cache
//!
//! Storage for short-lived state such as customer carts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cache Layer Architecture                             │
//! │                                                                         │
//! │  Cart Aggregator (till-cart)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CacheProvider trait                          │   │
//! │  │   get::<V>(key) → Option<V>   set(key, &v, ttl)   remove(key)   │   │
//! │  └───────────────┬──────────────────────────────┬──────────────────┘   │
//! │                  │                              │                       │
//! │  ┌───────────────▼───────────────┐  ┌──────────▼──────────────────┐    │
//! │  │  MemoryCacheProvider          │  │  RedisCacheProvider          │    │
//! │  │  HashMap + tokio Instant      │  │  JSON payloads, SET EX       │    │
//! │  └───────────────────────────────┘  └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Semantics Shared by Every Provider
//! - Miss, expired entry and wrong-typed value all read as `Ok(None)`
//! - `set` overwrites unconditionally and restarts the TTL
//! - `remove` on a missing key succeeds
//! - Storage failures surface as [`CacheError`]; nothing is retried here

pub mod error;
pub mod memory;
pub mod provider;
pub mod redis_cache;

pub use error::{CacheError, CacheResult};
pub use memory::MemoryCacheProvider;
pub use provider::{CacheProvider, CacheValue};
pub use redis_cache::RedisCacheProvider;
