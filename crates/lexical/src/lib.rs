//! Lexical feature encoding for book descriptions.
//!
//! This crate turns free text into fixed-length numeric vectors without any
//! model inference. The encoding is a coarse fingerprint: letter-frequency
//! counts plus presence flags for a small list of genre/theme words, then
//! L2-normalized so the vectors can be compared with cosine similarity.
//!
//! Substring containment is intentional: "romances" lights up the "romance"
//! flag, compound or negated phrasing does not get special treatment. Treat
//! the output as a deterministic fingerprint, not semantic understanding.
//!
//! ```
//! use lexical::{encode, LexicalConfig};
//!
//! let cfg = LexicalConfig::default();
//! let vector = encode("A sweeping fantasy adventure about friendship.", &cfg);
//! assert_eq!(vector.len(), cfg.dimensions);
//! ```

pub mod config;
pub mod encoder;

pub use crate::config::LexicalConfig;
pub use crate::encoder::{encode, l2_normalize_in_place};
