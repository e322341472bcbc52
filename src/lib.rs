//! Resume parser library
//!
//! Turns OCR or extracted resume text into a structured [`Document`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use processing::{parse_resume, Document, ResumeParser};
