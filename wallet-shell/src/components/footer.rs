//! Fixed attribution footer.

use leptos::prelude::*;

use crate::layout::footer::{FooterModel, StaticLink};

#[component]
fn ExternalLink(link: StaticLink) -> impl IntoView {
    view! {
        <a href=link.url target="_blank" rel="noopener noreferrer" style="text-decoration: underline;">
            {link.label}
        </a>
    }
}

#[component]
pub fn Footer(model: FooterModel) -> impl IntoView {
    let FooterModel { author, program } = model;

    view! {
        <footer
            class="footer"
            style="position: fixed; bottom: 0; left: 0; right: 0; padding: 0.5rem; text-align: center;"
        >
            <p class="footer__text" style="font-size: 0.75rem;">
                {FooterModel::MADE_BY}" "
                <ExternalLink link=author/>
                " "{FooterModel::PROGRAM_PREFIX}" "
                <ExternalLink link=program/>
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectInfo;

    #[test]
    fn test_renders_attribution_links() {
        let model = FooterModel::project(&ProjectInfo::default());
        let html = Owner::new().with(|| view! { <Footer model=model.clone()/> }.to_html());

        assert!(html.contains(FooterModel::MADE_BY));
        assert!(html.contains(FooterModel::PROGRAM_PREFIX));
        assert!(html.contains(&model.author.url));
        assert!(html.contains(&model.program.url));
    }
}
