//! What the page's content container shows.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentView {
    Frame(String),
    Image(String),
    Video(String),
    Empty,
}

impl ContentView {
    /// Inner markup for the container.
    pub fn markup(&self) -> String {
        match self {
            ContentView::Frame(url) => format!(r#"<iframe src="{}"></iframe>"#, escape_attr(url)),
            ContentView::Image(src) => {
                format!(r#"<img src="{}" alt="圖片內容">"#, escape_attr(src))
            }
            ContentView::Video(src) => {
                format!(r#"<video controls src="{}"></video>"#, escape_attr(src))
            }
            ContentView::Empty => String::new(),
        }
    }

    /// CSS `display` value for the container.
    pub fn display(&self) -> &'static str {
        match self {
            ContentView::Empty => "none",
            _ => "block",
        }
    }
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
