//! Item shapes for the JSON documents behind each content slot.
//! Every field is required; an item missing one fails the whole slot.

use serde::{Deserialize, Deserializer, Serialize, de};

/// One numbered how-to-play step (`merge-instructions.json`, field `steps`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// Player testimonial (`player-reviews.json`, field `reviews`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub player: String,
    pub comment: String,
    /// Star count on a five-star scale. Not range-checked. Authored files
    /// sometimes quote it (`"4"`), which is accepted.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rating: f64,
}

fn number_or_numeric_string<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    match Raw::deserialize(d)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("rating {s:?} is not a number"))),
    }
}

/// Purchasable upgrade (`upgrade-options.json`, document root is the list).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Game update entry (`enhancement-news.json`, field `enhancements`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enhancement {
    pub icon: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Two-sided player diary card (`player-stories.json`, field `stories`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub player: String,
    pub date: String,
    pub title: String,
    pub content: String,
    pub achievement: String,
    /// Text shown on the flipped side of the card.
    pub back_content: String,
}

/// Contact channel (`contact-details.json`, field `contact`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub icon: String,
    pub title: String,
    pub value: String,
}

/// Payload of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub message: String,
}
