//! Presentation Shell
//!
//! Page chrome shared by every route: the header with subtitle, menu toggle
//! and navigation, the footer with social links, and the HTML document
//! that wraps them.

pub mod assets;
pub mod document;

pub use assets::{AssetResolver, DEFAULT_ASSET_PREFIX};
pub use document::{DocumentParts, DocumentRenderer, ShellError};

use crate::interaction::MenuState;
use crate::pages::{el, Node, Page, Resolved, RouteTable, ShellWidget};

/// Title shown in the header
pub const MAIN_TITLE: &str = "Análisis Económico de Chile";

/// Document title
pub const DOCUMENT_TITLE: &str = "Informe Económico de Chile";

/// Footer links: icon asset and target
pub const SOCIAL_LINKS: [(&str, &str); 6] = [
    (
        "icons/whatsapp.png",
        "https://wa.me/56933293943?text=Hola%20Miguel",
    ),
    (
        "icons/email.png",
        "mailto:mortizcoilla@gmail.com?subject=Contacto%20desde%20la%20página%20web&body=Hola%20Miguel,",
    ),
    ("icons/github.png", "https://github.com/mortizcoilla"),
    ("icons/linkedin.png", "https://www.linkedin.com/in/mortizcoilla"),
    (
        "icons/microsoft.png",
        "https://learn.microsoft.com/es-mx/users/mortizcoilla",
    ),
    ("icons/coursera.png", "https://www.coursera.org/learner/mortizcoilla"),
];

/// Header with title, subtitle, menu button and navigation
pub fn header(routes: &RouteTable, resolved: &Resolved, menu: MenuState) -> Node {
    let links = Page::all().iter().map(|page| {
        let class = if *page == resolved.page {
            "nav-link active"
        } else {
            "nav-link"
        };
        el("a")
            .attr("href", routes.href(*page))
            .class(class)
            .child(page.nav_label())
    });

    el("header")
        .class("header")
        .child(
            el("div")
                .class("header-content")
                .child(
                    el("div")
                        .class("header-title-container")
                        .child(el("h1").class("main-title").child(MAIN_TITLE))
                        .child(
                            el("h2")
                                .id(ShellWidget::Subtitle.dom_id())
                                .class("subtitle")
                                .child(resolved.subtitle),
                        ),
                )
                .child(
                    el("button")
                        .attr("type", "button")
                        .class("menu-toggle")
                        .id(ShellWidget::MenuToggle.dom_id())
                        .child("☰"),
                ),
        )
        .child(
            el("nav")
                .class(menu.class_name())
                .id(ShellWidget::NavMenu.dom_id())
                .children(links),
        )
        .into()
}

/// Footer with the social links
pub fn footer(assets: &AssetResolver) -> Node {
    let links = SOCIAL_LINKS.iter().map(|(icon, href)| {
        el("a")
            .attr("href", *href)
            .attr("target", "_blank")
            .child(
                el("img")
                    .attr("src", assets.asset_url(icon))
                    .class("social-icon"),
            )
    });

    el("footer")
        .class("footer")
        .child(el("div").class("social-links").children(links))
        .into()
}

/// Inline notice shown in place of a page that failed to compose
pub fn composition_error(detail: Option<&str>) -> Node {
    let mut notice = el("div")
        .class("content-section error-section")
        .child(el("p").class("error-text").child("No fue posible construir esta página."));

    if let Some(detail) = detail {
        notice = notice.child(el("pre").class("error-detail").child(detail));
    }

    el("div").class("page-content").child(notice).into()
}
