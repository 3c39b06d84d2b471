//! HTML rendering of card view models.

use vocab_core::{Section, ViewModel};

/// Which face of the flashcard a view is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    fn class(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// Render one card face.
pub fn render_card(view: &ViewModel, side: Side) -> String {
    let mut class = String::from("flashcard");
    if let Some(category) = &view.category {
        class.push(' ');
        class.push_str(&escape(category));
    }
    if side == Side::Back {
        class.push_str(" flipped");
    }

    let mut html = format!("<div class=\"{}\">", class);
    html.push_str(&format!("<div class=\"{} active\">", side.class()));
    for section in &view.sections {
        render_section(&mut html, section);
    }
    if let Some(audio) = &view.audio {
        html.push_str(&format!(
            "<button class=\"audio\" data-src=\"{}\">&#128264;</button>",
            escape(audio)
        ));
    }
    html.push_str("</div></div>");
    html
}

/// Render the card list, or `empty_message` when there is nothing to show.
pub fn render_list(views: &[ViewModel], empty_message: &str) -> String {
    if views.is_empty() {
        return format!("<p>{}</p>", escape(empty_message));
    }

    let mut html = String::new();
    for (idx, view) in views.iter().enumerate() {
        let class = match &view.category {
            Some(category) => format!("card-item {}", escape(category)),
            None => "card-item".to_string(),
        };
        html.push_str(&format!("<div class=\"{}\" data-index=\"{}\">", class, idx));
        for section in &view.sections {
            render_section(&mut html, section);
        }
        html.push_str("</div>");
    }
    html
}

/// Render autocomplete suggestions.
pub fn render_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .map(|s| {
            let s = escape(s);
            format!("<div data-value=\"{}\">{}</div>", s, s)
        })
        .collect()
}

fn render_section(html: &mut String, section: &Section) {
    match section {
        Section::Heading { text } => {
            html.push_str(&format!("<div class=\"heading\">{}</div>", escape(text)));
        }
        Section::Field { label, value } => {
            html.push_str(&format!(
                "<div class=\"field\"><span class=\"label\">{}</span> <span class=\"value\">{}</span></div>",
                escape(label),
                escape(value)
            ));
        }
        Section::List { label, items } => {
            html.push_str(&format!("<div class=\"list\"><b>{}</b><ul>", escape(label)));
            for item in items {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul></div>");
        }
        Section::Table {
            label,
            columns,
            rows,
        } => {
            html.push_str(&format!(
                "<div class=\"table\"><b>{}</b><table><thead><tr>",
                escape(label)
            ));
            for column in columns {
                html.push_str(&format!("<th>{}</th>", escape(column)));
            }
            html.push_str("</tr></thead><tbody>");
            for row in rows {
                html.push_str("<tr>");
                for cell in row {
                    html.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody></table></div>");
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(sections: Vec<Section>) -> ViewModel {
        ViewModel {
            category: Some("noun".to_string()),
            audio: None,
            sections,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
        assert_eq!(escape("huis"), "huis");
    }

    #[test]
    fn test_render_front() {
        let html = render_card(
            &view(vec![Section::Heading { text: "huis".into() }]),
            Side::Front,
        );
        assert_eq!(
            html,
            "<div class=\"flashcard noun\"><div class=\"front active\"><div class=\"heading\">huis</div></div></div>"
        );
    }

    #[test]
    fn test_render_back_table() {
        let html = render_card(
            &view(vec![Section::Table {
                label: "Forms".into(),
                columns: vec!["Form".into(), "Value".into()],
                rows: vec![vec!["Past".into(), "liep".into()]],
            }]),
            Side::Back,
        );
        assert!(html.starts_with("<div class=\"flashcard noun flipped\"><div class=\"back active\">"));
        assert!(html.contains("<th>Form</th><th>Value</th>"));
        assert!(html.contains("<tr><td>Past</td><td>liep</td></tr>"));
    }

    #[test]
    fn test_render_audio_button() {
        let mut v = view(vec![]);
        v.audio = Some("audio/huis.mp3".into());
        let html = render_card(&v, Side::Front);
        assert!(html.contains("data-src=\"audio/huis.mp3\""));
    }

    #[test]
    fn test_render_escapes_content() {
        let html = render_card(
            &view(vec![Section::Field {
                label: "Notes".into(),
                value: "<script>".into(),
            }]),
            Side::Back,
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[], "No flashcards found."), "<p>No flashcards found.</p>");
    }

    #[test]
    fn test_render_list_items() {
        let views = vec![
            view(vec![Section::Heading { text: "huis".into() }]),
            view(vec![Section::Heading { text: "boom".into() }]),
        ];
        let html = render_list(&views, "");
        assert!(html.contains("data-index=\"0\""));
        assert!(html.contains("data-index=\"1\""));
        assert!(html.contains("<div class=\"card-item noun\""));
    }

    #[test]
    fn test_render_suggestions() {
        let html = render_suggestions(&["liep".to_string(), "lopen".to_string()]);
        assert_eq!(
            html,
            "<div data-value=\"liep\">liep</div><div data-value=\"lopen\">lopen</div>"
        );
    }
}
