//! Output sinks for rendered widget markup.
//!
//! # Submodules
//!
//! - [`html`]: writes the markup to a file or to stdout
//!
//! ```text
//! news_widget --base-url https://api.example.com              # stdout
//! news_widget --base-url https://api.example.com -o out.html  # file
//! ```

pub mod html;
