//! The site's content slots: anchors, sources, templates and fallbacks.

use super::markup::MarkupWriter;
use super::{Interaction, ItemSource, Slot, Template};
use crate::config::SiteConfig;
use crate::model::{ContactEntry, Enhancement, Review, Step, Story, Upgrade};
use crate::util::{initial, rating_glyphs};

pub const INSTRUCTIONS: &str = "merge-instructions";
pub const REVIEWS: &str = "player-reviews";
pub const UPGRADES: &str = "upgrade-options";
pub const NEWS: &str = "enhancement-news";
pub const STORIES: &str = "player-stories";
pub const CONTACT: &str = "contact-details";

/// Every slot the site knows about, with sources resolved against the
/// configured data directory.
pub fn catalogue(config: &SiteConfig) -> Vec<Slot> {
    vec![
        Slot::new::<Step>(
            INSTRUCTIONS,
            config.data_path("merge-instructions.json"),
            ItemSource::Field("steps"),
        )
        .with_fallback(INSTRUCTIONS_FALLBACK),
        Slot::new::<Review>(
            REVIEWS,
            config.data_path("player-reviews.json"),
            ItemSource::Field("reviews"),
        )
        .with_fallback(REVIEWS_FALLBACK),
        Slot::new::<Upgrade>(
            UPGRADES,
            config.data_path("upgrade-options.json"),
            ItemSource::Root,
        ),
        Slot::new::<Enhancement>(
            NEWS,
            config.data_path("enhancement-news.json"),
            ItemSource::Field("enhancements"),
        )
        .wrapped("enhancement-grid"),
        Slot::new::<Story>(
            STORIES,
            config.data_path("player-stories.json"),
            ItemSource::Field("stories"),
        )
        .wrapped("diaries-grid")
        .with_interaction(Interaction::FlipCards),
        Slot::new::<ContactEntry>(
            CONTACT,
            config.data_path("contact-details.json"),
            ItemSource::Field("contact"),
        )
        .wrapped("contact-page-grid")
        .with_fallback(CONTACT_FALLBACK),
    ]
}

impl Template for Step {
    fn render(&self, index: usize, out: &mut MarkupWriter) {
        out.raw("<div class=\"instruction-step\">")
            .raw(&format!("<div class=\"step-number\">{}</div>", index + 1))
            .raw("<div class=\"step-content\"><h3>")
            .text(&self.title)
            .raw("</h3><p>")
            .text(&self.description)
            .raw("</p></div></div>");
    }
}

impl Template for Review {
    fn render(&self, _index: usize, out: &mut MarkupWriter) {
        out.raw("<div class=\"review-card\">")
            .element("div", "review-avatar", initial(&self.player))
            .element("h4", "review-name", &self.player)
            .raw("<p class=\"review-text\">\"")
            .text(&self.comment)
            .raw("\"</p>")
            .raw(&format!(
                "<div class=\"review-rating\">{}</div>",
                rating_glyphs(self.rating)
            ))
            .raw("</div>");
    }
}

impl Template for Upgrade {
    fn render(&self, _index: usize, out: &mut MarkupWriter) {
        out.raw("<div class=\"upgrade-card\">")
            .element("h3", "upgrade-title", &self.title)
            .element("p", "upgrade-description", &self.description)
            .raw("<ul class=\"upgrade-features\">");
        for feature in &self.features {
            out.raw("<li>").text(feature).raw("</li>");
        }
        out.raw("</ul></div>");
    }
}

impl Template for Enhancement {
    fn render(&self, _index: usize, out: &mut MarkupWriter) {
        out.raw("<div class=\"enhancement-card\"><div class=\"enhancement-header\">")
            .element("div", "enhancement-icon", &self.icon)
            .raw("<div class=\"enhancement-meta\">")
            .element("h3", "enhancement-title", &self.title)
            .element("span", "enhancement-date", &self.date)
            .raw("</div></div>")
            .element("p", "enhancement-description", &self.description)
            .raw("<div class=\"enhancement-tags\">");
        for tag in &self.tags {
            out.element("span", "enhancement-tag", tag);
        }
        out.raw("</div></div>");
    }
}

impl Template for Story {
    fn render(&self, index: usize, out: &mut MarkupWriter) {
        out.raw(&format!("<div class=\"diary-card\" data-story-index=\"{index}\">"))
            .raw("<div class=\"diary-card-front\"><div class=\"diary-header\">")
            .element("div", "diary-avatar", initial(&self.player))
            .raw("<div class=\"diary-meta\">")
            .element("h4", "diary-player", &self.player)
            .element("span", "diary-date", &self.date)
            .raw("</div></div><div class=\"diary-content\">")
            .element("h3", "diary-title", &self.title)
            .element("p", "diary-text", &self.content)
            .raw("</div><div class=\"diary-achievement\">")
            .raw("<span class=\"achievement-badge\">🏆</span>")
            .element("span", "achievement-text", &self.achievement)
            .raw("</div><div class=\"flip-hint\">Click to read more</div></div>")
            .raw("<div class=\"diary-card-back\">")
            .element("p", "diary-back-text", &self.back_content)
            .raw("<div class=\"flip-hint\">Click to go back</div></div></div>");
    }
}

impl Template for ContactEntry {
    fn render(&self, _index: usize, out: &mut MarkupWriter) {
        out.raw("<div class=\"contact-page-card\">")
            .element("div", "contact-page-icon", &self.icon)
            .raw("<div class=\"contact-page-content\"><h3>")
            .text(&self.title)
            .raw("</h3><p>")
            .text(&self.value)
            .raw("</p></div></div>");
    }
}

pub const INSTRUCTIONS_FALLBACK: &str = concat!(
    "<div class=\"instruction-step\"><div class=\"step-number\">1</div>",
    "<div class=\"step-content\"><h3>Find Similar Fish</h3>",
    "<p>Look for fish of the same type and level to merge together.</p></div></div>",
    "<div class=\"instruction-step\"><div class=\"step-number\">2</div>",
    "<div class=\"step-content\"><h3>Drag and Drop</h3>",
    "<p>Drag one fish onto another similar fish to start the merge process.</p></div></div>",
    "<div class=\"instruction-step\"><div class=\"step-number\">3</div>",
    "<div class=\"step-content\"><h3>Watch Evolution</h3>",
    "<p>See your fish evolve into a more powerful and valuable species!</p></div></div>",
    "<div class=\"instruction-step\"><div class=\"step-number\">4</div>",
    "<div class=\"step-content\"><h3>Build Your School</h3>",
    "<p>Create a powerful fish school by merging multiple creatures together.</p></div></div>",
    "<div class=\"instruction-step\"><div class=\"step-number\">5</div>",
    "<div class=\"step-content\"><h3>Discover Rare Species</h3>",
    "<p>Unlock legendary fish through strategic merging combinations.</p></div></div>",
    "<div class=\"instruction-step\"><div class=\"step-number\">6</div>",
    "<div class=\"step-content\"><h3>Master the Ocean</h3>",
    "<p>Become the ultimate fish master by completing your collection.</p></div></div>",
);

pub const REVIEWS_FALLBACK: &str = concat!(
    "<div class=\"review-card\"><div class=\"review-avatar\">A</div>",
    "<h4 class=\"review-name\">Alex</h4>",
    "<p class=\"review-text\">",
    "\"Amazing game! I love merging fish and building my collection.\"</p>",
    "<div class=\"review-rating\">★★★★★</div></div>",
    "<div class=\"review-card\"><div class=\"review-avatar\">S</div>",
    "<h4 class=\"review-name\">Sarah</h4>",
    "<p class=\"review-text\">\"Great strategy game with beautiful underwater graphics.\"</p>",
    "<div class=\"review-rating\">★★★★☆</div></div>",
    "<div class=\"review-card\"><div class=\"review-avatar\">M</div>",
    "<h4 class=\"review-name\">Mike</h4>",
    "<p class=\"review-text\">\"Addictive gameplay! Can't stop playing this game.\"</p>",
    "<div class=\"review-rating\">★★★★★</div></div>",
);

pub const CONTACT_FALLBACK: &str = concat!(
    "<div class=\"contact-page-grid\">",
    "<div class=\"contact-page-card\"><div class=\"contact-page-icon\">📧</div>",
    "<div class=\"contact-page-content\"><h3>Email</h3>",
    "<p>info@ThrillSphereGaming.com</p></div></div>",
    "<div class=\"contact-page-card\"><div class=\"contact-page-icon\">📞</div>",
    "<div class=\"contact-page-content\"><h3>Phone</h3>",
    "<p>+61 7 1166 8920</p></div></div>",
    "<div class=\"contact-page-card\"><div class=\"contact-page-icon\">📍</div>",
    "<div class=\"contact-page-content\"><h3>Location</h3>",
    "<p>7 Jacaranda Avenue, Kingaroy QLD 4610, Australia</p></div></div>",
    "</div>",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::markup::Interpolation;
    use crate::content::testing::{MemoryPage, StaticFetch};
    use crate::content::{Outcome, load};
    use futures::executor::block_on;
    use serde_json::json;

    fn slot(id: &str) -> Slot {
        catalogue(&SiteConfig::default())
            .into_iter()
            .find(|s| s.id == id)
            .unwrap()
    }

    #[test]
    fn catalogue_covers_every_slot_once() {
        let ids: Vec<_> = catalogue(&SiteConfig::default()).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![INSTRUCTIONS, REVIEWS, UPGRADES, NEWS, STORIES, CONTACT]);
        assert_eq!(slot(REVIEWS).source, "data/player-reviews.json");
    }

    #[test]
    fn single_review_renders_one_card() {
        let fetch = StaticFetch::with(
            "data/player-reviews.json",
            r#"{"reviews":[{"player":"Alex","comment":"Great!","rating":4}]}"#,
        );
        let page = MemoryPage::with_anchor(REVIEWS, "");
        let outcome = block_on(load(&slot(REVIEWS), &fetch, &page, Interpolation::Raw));
        assert_eq!(outcome, Outcome::Rendered(1));
        let html = page.content(REVIEWS).unwrap();
        assert_eq!(html.matches("class=\"review-card\"").count(), 1);
        assert!(html.contains("<div class=\"review-avatar\">A</div>"));
        assert!(html.contains("\"Great!\""));
        assert!(html.contains("★★★★☆"));
    }

    #[test]
    fn review_fallback_matches_template_output() {
        let reviews = [
            ("Alex", "Amazing game! I love merging fish and building my collection.", 5),
            ("Sarah", "Great strategy game with beautiful underwater graphics.", 4),
            ("Mike", "Addictive gameplay! Can't stop playing this game.", 5),
        ];
        let items: Vec<_> = reviews
            .iter()
            .map(|(p, c, r)| json!({"player": p, "comment": c, "rating": r}))
            .collect();
        assert_eq!(
            slot(REVIEWS).render(&items, Interpolation::Raw).unwrap(),
            REVIEWS_FALLBACK
        );
    }

    #[test]
    fn instruction_fallback_matches_template_output() {
        let steps = [
            (
                "Find Similar Fish",
                "Look for fish of the same type and level to merge together.",
            ),
            (
                "Drag and Drop",
                "Drag one fish onto another similar fish to start the merge process.",
            ),
            (
                "Watch Evolution",
                "See your fish evolve into a more powerful and valuable species!",
            ),
            (
                "Build Your School",
                "Create a powerful fish school by merging multiple creatures together.",
            ),
            (
                "Discover Rare Species",
                "Unlock legendary fish through strategic merging combinations.",
            ),
            (
                "Master the Ocean",
                "Become the ultimate fish master by completing your collection.",
            ),
        ];
        let items: Vec<_> = steps
            .iter()
            .map(|(t, d)| json!({"title": t, "description": d}))
            .collect();
        assert_eq!(
            slot(INSTRUCTIONS).render(&items, Interpolation::Raw).unwrap(),
            INSTRUCTIONS_FALLBACK
        );
    }

    #[test]
    fn contact_fallback_matches_template_output() {
        let cards = [
            ("📧", "Email", "info@ThrillSphereGaming.com"),
            ("📞", "Phone", "+61 7 1166 8920"),
            ("📍", "Location", "7 Jacaranda Avenue, Kingaroy QLD 4610, Australia"),
        ];
        let items: Vec<_> = cards
            .iter()
            .map(|(i, t, v)| json!({"icon": i, "title": t, "value": v}))
            .collect();
        assert_eq!(
            slot(CONTACT).render(&items, Interpolation::Raw).unwrap(),
            CONTACT_FALLBACK
        );
    }

    #[test]
    fn unreachable_reviews_show_fallback() {
        let page = MemoryPage::with_anchor(REVIEWS, "");
        let fetch = StaticFetch::default();
        let outcome = block_on(load(&slot(REVIEWS), &fetch, &page, Interpolation::Raw));
        assert_eq!(outcome, Outcome::Fallback);
        assert_eq!(page.content(REVIEWS).unwrap(), REVIEWS_FALLBACK);
    }

    #[test]
    fn upgrades_read_from_document_root() {
        let fetch = StaticFetch::with(
            "data/upgrade-options.json",
            r#"[{"title":"Bigger Tank","description":"More room",
                 "features":["+10 slots","Faster merges"]}]"#,
        );
        let page = MemoryPage::with_anchor(UPGRADES, "");
        block_on(load(&slot(UPGRADES), &fetch, &page, Interpolation::Raw));
        assert_eq!(
            page.content(UPGRADES).unwrap(),
            "<div class=\"upgrade-card\"><h3 class=\"upgrade-title\">Bigger Tank</h3>\
             <p class=\"upgrade-description\">More room</p><ul class=\"upgrade-features\">\
             <li>+10 slots</li><li>Faster merges</li></ul></div>"
        );
    }

    #[test]
    fn upgrades_failure_leaves_container_alone() {
        let page = MemoryPage::with_anchor(UPGRADES, "static");
        let fetch = StaticFetch::default();
        let outcome = block_on(load(&slot(UPGRADES), &fetch, &page, Interpolation::Raw));
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(page.content(UPGRADES).unwrap(), "static");
    }

    #[test]
    fn news_is_wrapped_and_keeps_tag_order() {
        let items = vec![json!({
            "icon": "🐠", "title": "Reef Update", "date": "2024-05-01",
            "description": "New biome", "tags": ["map", "fish", "event"]
        })];
        let html = slot(NEWS).render(&items, Interpolation::Raw).unwrap();
        assert!(html.starts_with(
            "<div class=\"enhancement-grid\"><div class=\"enhancement-card\">"
        ));
        assert!(html.ends_with("</div></div>"));
        let map = html.find(">map<").unwrap();
        let fish = html.find(">fish<").unwrap();
        let event = html.find(">event<").unwrap();
        assert!(map < fish && fish < event);
    }

    #[test]
    fn stories_are_indexed_and_flippable() {
        let story = |p: &str| {
            json!({
                "player": p, "date": "today", "title": "t", "content": "c",
                "achievement": "a", "backContent": "back"
            })
        };
        let s = slot(STORIES);
        assert_eq!(s.on_render, Some(Interaction::FlipCards));
        let html = s.render(&[story("Nina"), story("Omar")], Interpolation::Raw).unwrap();
        assert!(html.contains("data-story-index=\"0\""));
        assert!(html.contains("data-story-index=\"1\""));
        assert!(html.contains("<div class=\"diary-avatar\">O</div>"));
        assert!(html.contains("<p class=\"diary-back-text\">back</p>"));
    }

    #[test]
    fn escaped_policy_neutralises_author_markup() {
        let items = vec![json!({
            "player": "<b>Eve</b>", "comment": "<script>x()</script>", "rating": 1
        })];
        let html = slot(REVIEWS).render(&items, Interpolation::Escaped).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x()&lt;/script&gt;"));
        assert!(html.contains("★☆☆☆☆"));
    }

    #[test]
    fn raw_policy_passes_author_markup_through() {
        let items = vec![json!({"icon": "<img src=x>", "title": "T", "value": "V"})];
        let html = slot(CONTACT).render(&items, Interpolation::Raw).unwrap();
        assert!(html.contains("<div class=\"contact-page-icon\"><img src=x></div>"));
    }

    #[test]
    fn quoted_rating_still_renders_stars() {
        let items = vec![json!({"player": "Alex", "comment": "Great!", "rating": "4"})];
        let html = slot(REVIEWS).render(&items, Interpolation::Raw).unwrap();
        assert!(html.contains("<div class=\"review-rating\">★★★★☆</div>"));
    }

    #[test]
    fn null_reviews_document_shows_fallback() {
        let fetch = StaticFetch::with("data/player-reviews.json", "null");
        let page = MemoryPage::with_anchor(REVIEWS, "");
        let outcome = block_on(load(&slot(REVIEWS), &fetch, &page, Interpolation::Raw));
        assert_eq!(outcome, Outcome::Fallback);
        assert_eq!(page.content(REVIEWS).unwrap(), REVIEWS_FALLBACK);
    }

    #[test]
    fn review_missing_rating_is_rejected() {
        let items = vec![json!({"player": "Alex", "comment": "Great!"})];
        assert!(slot(REVIEWS).render(&items, Interpolation::Raw).is_err());
    }
}
