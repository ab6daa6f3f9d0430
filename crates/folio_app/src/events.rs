//! Page events
//!
//! Everything the host environment can tell the page, in a serializable form
//! so event streams can be recorded and replayed.

use folio_content::ContactForm;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The viewport was scrolled by the user
    Scroll { offset: f32 },
    /// A nav link was clicked
    Navigate { section: String },
    /// The header's "Get in Touch" button
    GetInTouch,
    /// The scroll-to-top button
    ScrollToTop,
    ToggleTheme,
    ToggleMenu,
    /// One animation frame of `dt` seconds elapsed
    Frame { dt: f32 },
    /// Run animation frames until the viewport comes to rest
    Settle,
    Resize { viewport_height: f32 },
    /// Select a skill category, or show all skills with `null`
    FilterSkills {
        #[serde(default)]
        category: Option<String>,
    },
    /// Select a project category, or show all projects with `null`
    FilterProjects {
        #[serde(default)]
        category: Option<String>,
    },
    SubmitContact(ContactForm),
}

/// Side effects the host environment must carry out
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEffect {
    /// Open a link with the platform handler (mail client for `mailto:`)
    OpenLink { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_script_parses() {
        let events: Vec<PageEvent> = serde_json::from_str(
            r#"[
                {"type": "scroll", "offset": 120.5},
                {"type": "navigate", "section": "skills"},
                {"type": "frame", "dt": 0.016},
                {"type": "settle"},
                {"type": "filter_skills", "category": "NVIDIA Tools"},
                {"type": "filter_skills"},
                {"type": "filter_projects", "category": "Edge Computing"},
                {"type": "submit_contact", "name": "Ada", "email": "ada@example.com",
                 "subject": "Hi", "message": "Hello"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0], PageEvent::Scroll { offset: 120.5 });
        assert_eq!(
            events[1],
            PageEvent::Navigate {
                section: "skills".into()
            }
        );
        assert_eq!(events[3], PageEvent::Settle);
        assert_eq!(events[5], PageEvent::FilterSkills { category: None });
        assert_eq!(
            events[6],
            PageEvent::FilterProjects {
                category: Some("Edge Computing".into())
            }
        );
        assert_eq!(
            events[7],
            PageEvent::SubmitContact(ContactForm::new("Ada", "ada@example.com", "Hi", "Hello"))
        );
    }

    #[test]
    fn test_effect_serializes_tagged() {
        let effect = PageEffect::OpenLink {
            url: "mailto:a@b".into(),
        };
        assert_eq!(
            serde_json::to_string(&effect).unwrap(),
            r#"{"type":"open_link","url":"mailto:a@b"}"#
        );
    }
}
