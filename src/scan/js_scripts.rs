//! JavaScript evaluation scripts
//!
//! The per-section capture scripts return the section's inner markup plus
//! its script children in one evaluation, or `null` when the document has
//! no such section.

/// Capture the head section and its scripts.
pub const HEAD_CAPTURE_SCRIPT: &str = r#"
    (() => {
        const section = document.head;
        if (!section) return null;
        return {
            html: section.innerHTML,
            scripts: Array.from(section.querySelectorAll('script')).map(s => ({
                content: s.innerHTML || '',
                src: s.getAttribute('src')
            }))
        };
    })()
"#;

/// Capture the body section and its scripts.
pub const BODY_CAPTURE_SCRIPT: &str = r#"
    (() => {
        const section = document.body;
        if (!section) return null;
        return {
            html: section.innerHTML,
            scripts: Array.from(section.querySelectorAll('script')).map(s => ({
                content: s.innerHTML || '',
                src: s.getAttribute('src')
            }))
        };
    })()
"#;
