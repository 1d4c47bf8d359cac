//! HTML document rendering
//!
//! The skeleton of every page is a minijinja template; header, content and
//! footer arrive as already-escaped markup trees. URL values are escaped
//! with the markup escaper so they keep their slashes.

use minijinja::{context, Environment};
use thiserror::Error;

use super::DOCUMENT_TITLE;
use crate::pages::markup::escape;
use crate::pages::{Node, ShellWidget};

/// Plotly bundle loaded by every page
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="{{ stylesheet|safe }}">
    <script src="{{ plotly|safe }}"></script>
</head>
<body data-session="{{ session_id|safe }}" data-callbacks="{{ callbacks|safe }}">
    <div class="main-container">
        {{ header|safe }}
        <div id="{{ content_id }}">
            {{ content|safe }}
        </div>
        {{ footer|safe }}
    </div>
    <script>
    (function () {
        var body = document.body;
        var session = body.dataset.session;
        var callbacks = body.dataset.callbacks;

        function post(name, payload) {
            return fetch(callbacks + '/' + name, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(payload)
            });
        }

        function draw(node) {
            var figure = JSON.parse(node.dataset.figure || '{"data":[],"layout":{}}');
            Plotly.react(node, figure.data, figure.layout, { responsive: true });
        }

        document.querySelectorAll('.graph').forEach(draw);

        var clicks = 0;
        var toggle = document.getElementById('menu-toggle');
        var nav = document.getElementById('nav-menu');
        if (toggle && nav) {
            toggle.addEventListener('click', function () {
                clicks += 1;
                post('menu-toggle', { session_id: session, n_clicks: clicks })
                    .then(function (response) { return response.ok ? response.json() : null; })
                    .then(function (state) { if (state) { nav.className = state.class_name; } });
            });
        }

        document.querySelectorAll('select.indicator-dropdown').forEach(function (select) {
            select.addEventListener('change', function () {
                var page = select.dataset.page;
                post('indicator', { session_id: session, page: page, value: select.value })
                    .then(function (response) { return response.status === 200 ? response.json() : null; })
                    .then(function (output) {
                        if (!output) { return; }
                        var graph = document.getElementById(page + '-indicator-graph');
                        graph.dataset.figure = JSON.stringify(output.chart.figure);
                        draw(graph);
                        var analysis = document.getElementById(page + '-indicator-analysis');
                        var paragraphs = output.analysis.split(/\n\s*\n/).map(function (text) {
                            var p = document.createElement('p');
                            p.textContent = text.trim();
                            return p;
                        });
                        analysis.replaceChildren.apply(analysis, paragraphs);
                    });
            });
        });
    })();
    </script>
</body>
</html>
"#;

/// Shell rendering errors
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Pieces assembled into one document
#[derive(Debug)]
pub struct DocumentParts<'a> {
    pub header: &'a Node,
    pub content: &'a Node,
    pub footer: &'a Node,
    pub session_id: &'a str,
    pub stylesheet: &'a str,
    /// URL prefix of the callback endpoints
    pub callbacks: &'a str,
}

/// Renders full HTML documents
#[derive(Debug)]
pub struct DocumentRenderer {
    env: Environment<'static>,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self, ShellError> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, parts: &DocumentParts<'_>) -> Result<String, ShellError> {
        let template = self.env.get_template("page.html")?;

        let html = template.render(context! {
            title => DOCUMENT_TITLE,
            stylesheet => escape(parts.stylesheet),
            plotly => escape(PLOTLY_CDN),
            session_id => escape(parts.session_id),
            callbacks => escape(parts.callbacks),
            content_id => ShellWidget::PageContent.dom_id(),
            header => parts.header.render(),
            content => parts.content.render(),
            footer => parts.footer.render(),
        })?;

        Ok(html)
    }
}
