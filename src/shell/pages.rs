//! Static pages of the view shell.

use std::fmt;
use std::str::FromStr;

/// Top-level pages the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero text, the catalog and the active tool.
    #[default]
    Home,
    About,
    Contact,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::About => write!(f, "about"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "contact" => Ok(Self::Contact),
            other => Err(format!("unknown page '{}'", other)),
        }
    }
}

pub const HERO: &str = r#"
AI-Powered YouTube SEO Toolkit

Explode your channel growth with a suite of 25+ professional tools.
Rank #1 on YouTube with AI-generated titles, keywords, tags, and deep channel analysis.
"#;

pub const ABOUT: &str = r#"
About YT SEO Tools

Welcome to the Free YouTube SEO Toolkit. Our mission is to democratize
channel growth for creators everywhere.

Whether you are a beginner looking for your first 1,000 subscribers or a
seasoned pro optimizing for millions of views, the suite of 25+ AI-powered
tools is designed to give you an unfair advantage.

  * Generate viral-worthy titles in seconds.
  * Spy on competitors with deep analytics.
  * Write full scripts and descriptions instantly.
  * Download and analyze high-res thumbnails.

Built with the latest in generative AI, so your content is optimized for
the YouTube algorithm.
"#;

pub const CONTACT_EMAIL: &str = "vishalku875906@gmail.com";

/// Contact page text.
pub fn contact() -> String {
    format!(
        "\nGet in Touch\n\n\
         Have questions, suggestions, or need support? We'd love to hear from you.\n\
         Reach out to us directly via email.\n\n  \
         Email us at: {}\n\n\
         We typically reply within 24-48 hours.\n",
        CONTACT_EMAIL
    )
}
