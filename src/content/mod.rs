//! JSON-driven content slots.
//!
//! A [`Slot`] pairs a page anchor with a JSON document and an item template.
//! [`load`] fetches the document, renders every item in source order and
//! replaces the anchor's content with the result, or with the slot's static
//! fallback when anything goes wrong.

pub mod markup;
pub mod partials;
pub mod slots;

use crate::diag::console_error;
use crate::error::LoadError;
use markup::{Interpolation, MarkupWriter};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Source of raw documents (JSON payloads and HTML partials).
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError>;
}

/// The page being filled. Anchors are looked up by element id.
pub trait Page {
    fn contains(&self, anchor: &str) -> bool;
    /// Replace the anchor's content. Returns `false` when the anchor is absent.
    fn replace_content(&self, anchor: &str, markup: &str) -> bool;
}

/// An item type that knows how to render itself as one markup fragment.
pub trait Template: DeserializeOwned {
    fn render(&self, index: usize, out: &mut MarkupWriter);
}

/// Where the item list lives inside the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemSource {
    /// The document itself is the list.
    Root,
    /// A named top-level field holds the list.
    Field(&'static str),
}

/// Behaviour wired onto freshly rendered slot content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Cards toggle their `flipped` class on click.
    FlipCards,
}

type RenderFn = fn(&[Value], Interpolation) -> Result<String, serde_json::Error>;

#[derive(Clone)]
pub struct Slot {
    pub id: &'static str,
    pub source: String,
    pub items: ItemSource,
    /// Class of a `<div>` wrapped around the rendered items.
    pub wrapper: Option<&'static str>,
    pub fallback: Option<&'static str>,
    pub on_render: Option<Interaction>,
    render_items: RenderFn,
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Slot {
    pub fn new<T: Template>(
        id: &'static str,
        source: impl Into<String>,
        items: ItemSource,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            items,
            wrapper: None,
            fallback: None,
            on_render: None,
            render_items: render_all::<T>,
        }
    }

    pub fn wrapped(mut self, class: &'static str) -> Self {
        self.wrapper = Some(class);
        self
    }

    pub fn with_fallback(mut self, markup: &'static str) -> Self {
        self.fallback = Some(markup);
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.on_render = Some(interaction);
        self
    }

    /// Render a list of raw items. Any item that does not match the
    /// template's shape fails the whole list.
    pub fn render(
        &self,
        items: &[Value],
        policy: Interpolation,
    ) -> Result<String, serde_json::Error> {
        let body = (self.render_items)(items, policy)?;
        Ok(match self.wrapper {
            Some(class) => format!("<div class=\"{class}\">{body}</div>"),
            None => body,
        })
    }

    /// Pull the item list out of a parsed document. `Ok(None)` means the
    /// expected field is absent, which is a soft empty state. A `null`
    /// document has no fields to look in and is malformed.
    pub fn extract(&self, doc: Value) -> Result<Option<Vec<Value>>, LoadError> {
        let list = match self.items {
            ItemSource::Root => doc,
            ItemSource::Field(name) => match doc {
                Value::Object(mut map) => match map.remove(name) {
                    None | Some(Value::Null) => return Ok(None),
                    Some(v) => v,
                },
                Value::Null => {
                    return Err(LoadError::Malformed(format!(
                        "{}: document is null, expected an object with `{name}`",
                        self.id
                    )));
                }
                _ => return Ok(None),
            },
        };
        match list {
            Value::Array(items) => Ok(Some(items)),
            other => Err(LoadError::Malformed(format!(
                "{}: expected a list of items, found {}",
                self.id,
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn render_all<T: Template>(
    items: &[Value],
    policy: Interpolation,
) -> Result<String, serde_json::Error> {
    let parsed = items
        .iter()
        .map(|item| T::deserialize(item))
        .collect::<Result<Vec<T>, _>>()?;
    let mut out = MarkupWriter::new(policy);
    for (index, item) in parsed.iter().enumerate() {
        item.render(index, &mut out);
    }
    Ok(out.finish())
}

/// What a single [`load`] call ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Items were rendered into the anchor.
    Rendered(usize),
    /// The items field was absent; nothing was written.
    Empty,
    /// The anchor is not on this page; nothing was written.
    NoAnchor,
    /// Loading failed and the fallback markup was written.
    Fallback,
    /// Loading failed and the slot has no fallback.
    Failed,
}

/// Load one slot. Never panics and never propagates failure: errors are
/// logged and resolved with the slot's fallback.
pub async fn load<F: Fetch, P: Page>(
    slot: &Slot,
    fetch: &F,
    page: &P,
    policy: Interpolation,
) -> Outcome {
    match fetch_and_render(slot, fetch, page, policy).await {
        Ok(outcome) => outcome,
        Err(err) => {
            console_error!("Failed to load {}: {err}", slot.id);
            match slot.fallback {
                Some(markup) if page.replace_content(slot.id, markup) => Outcome::Fallback,
                Some(_) => Outcome::NoAnchor,
                None => Outcome::Failed,
            }
        }
    }
}

async fn fetch_and_render<F: Fetch, P: Page>(
    slot: &Slot,
    fetch: &F,
    page: &P,
    policy: Interpolation,
) -> Result<Outcome, LoadError> {
    let body = fetch.fetch_text(&slot.source).await?;
    let doc: Value = serde_json::from_str(&body)?;
    let Some(items) = slot.extract(doc)? else {
        return Ok(Outcome::Empty);
    };
    if !page.contains(slot.id) {
        return Ok(Outcome::NoAnchor);
    }
    let markup = slot.render(&items, policy)?;
    page.replace_content(slot.id, &markup);
    Ok(Outcome::Rendered(items.len()))
}
