use crate::core::{Fragment, Project};
use crate::utils::html;
use std::borrow::Cow;

/// Turns projects into markup fragments.
///
/// Text fields go into the markup as written. With `escape_markup` on, they
/// are HTML-escaped instead. The price is always emitted verbatim because it
/// carries the strike-through markup for the original price.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer {
    escape_markup: bool,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CardRenderer {
    pub fn new(escape_markup: bool) -> Self {
        Self { escape_markup }
    }

    pub(crate) fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_markup {
            html::escape(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    pub(crate) fn tech_tags(&self, project: &Project) -> String {
        project
            .technologies
            .iter()
            .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, self.text(tech)))
            .collect()
    }

    pub fn render_card(&self, project: &Project) -> Fragment {
        Fragment::new(format!(
            r#"<div class="project-card fade-in-up" data-project-id="{id}">
    <div class="project-image">
        <i class="{image}"></i>
    </div>
    <div class="project-content">
        <h3>{title}</h3>
        <p>{description}</p>
        <div class="project-tech">{tags}</div>
        <div class="project-price">{price}</div>
        <div class="project-actions">
            <button class="btn btn-primary btn-small" onclick="viewProject({id})">View Details</button>
            <a href="{order_link}" target="_blank" class="btn btn-secondary btn-small">Order Now</a>
        </div>
    </div>
</div>"#,
            id = project.id,
            image = self.text(&project.image),
            title = self.text(&project.title),
            description = self.text(&project.description),
            tags = self.tech_tags(project),
            price = project.price,
            order_link = self.text(&project.order_link),
        ))
    }
}
