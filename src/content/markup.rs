use serde::Deserialize;

/// How interpolated field values are written into templates.
///
/// `Raw` inserts author text verbatim, so JSON fields may carry their own
/// markup. `Escaped` entity-encodes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Raw,
    Escaped,
}

/// String builder for slot templates. Literal template text goes through
/// [`MarkupWriter::raw`], field values through [`MarkupWriter::text`].
#[derive(Debug)]
pub struct MarkupWriter {
    buf: String,
    policy: Interpolation,
}

impl MarkupWriter {
    pub fn new(policy: Interpolation) -> Self {
        Self {
            buf: String::new(),
            policy,
        }
    }

    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn text(&mut self, value: &str) -> &mut Self {
        match self.policy {
            Interpolation::Raw => self.buf.push_str(value),
            Interpolation::Escaped => escape_into(&mut self.buf, value),
        }
        self
    }

    /// Open `<tag class="class">`, write `value`, close the tag.
    pub fn element(&mut self, tag: &str, class: &str, value: &str) -> &mut Self {
        self.raw("<")
            .raw(tag)
            .raw(" class=\"")
            .raw(class)
            .raw("\">")
            .text(value)
            .raw("</")
            .raw(tag)
            .raw(">")
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

fn escape_into(buf: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c),
        }
    }
}
