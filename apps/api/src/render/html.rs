//! HTML serialisation of rendered documents and of the interview Q&A sheet.
//!
//! Output is a standalone Letter-width page so the same markup serves the live
//! preview and the export capture. All interpolated text is HTML-escaped.

use minijinja::{context, AutoEscape, Environment};

use crate::ai::schema::QaPair;
use crate::render::document::Document;

/// Element id of the resume page root.
pub const RESUME_ROOT_ID: &str = "resume-preview";
/// Element id of the interview Q&A sheet root.
pub const QA_ROOT_ID: &str = "qa-card";

const RESUME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
  body { margin: 0; background: #fff; color: #1f2937; }
  .page { width: 8.5in; min-height: 11in; box-sizing: border-box; }
  .typeface-sans { font-family: "Inter", "Helvetica Neue", Arial, sans-serif; }
  .typeface-serif { font-family: "EB Garamond", Georgia, "Times New Roman", serif; }
  .layout-singleColumn { padding: 0.45in; }
  .layout-centered { padding: 0.6in; text-align: left; }
  .layout-sidebar { display: flex; }
  .column-sidebar { width: 33%; background: #f1f5f9; padding: 0.45in 0.3in; }
  .column-main { flex: 1; }
  .layout-sidebar .column-main { padding: 0.45in 0.4in; }
  .masthead { text-align: center; border-bottom: 2px solid #d1d5db; padding-bottom: 12px; margin-bottom: 12px; }
  .layout-centered .masthead { border-bottom: none; letter-spacing: 0.08em; }
  .column-sidebar .masthead { border-bottom: none; }
  .masthead h1 { margin: 0; font-size: 30px; }
  .contact { display: flex; flex-wrap: wrap; justify-content: center; gap: 4px 16px; margin-top: 6px; font-size: 12px; color: #6b7280; }
  .contact .sep { margin: 0 -8px; }
  .objective { font-size: 13px; color: #4b5563; text-align: center; margin: 8px 0; }
  .objective-pullQuote { border-top: 2px solid #111827; border-bottom: 2px solid #111827; padding: 4px 0; color: #111827; }
  section { margin-bottom: 14px; }
  h2 { font-size: 17px; margin: 0 0 8px; padding-bottom: 3px; border-bottom: 1px solid #c7d2fe; color: #3f51b5; }
  .layout-centered h2 { text-transform: uppercase; letter-spacing: 0.15em; color: #111827; border-bottom: 2px solid #111827; }
  .column-sidebar h2 { font-size: 12px; text-transform: uppercase; letter-spacing: 0.2em; border: none; }
  .entry { margin-bottom: 10px; font-size: 13px; }
  .entry-head { display: flex; justify-content: space-between; align-items: baseline; gap: 12px; }
  .entry h3 { margin: 0; font-size: 14px; }
  .meta { font-size: 11px; color: #6b7280; }
  .location { font-size: 11px; font-style: italic; color: #6b7280; }
  .entry ul { margin: 4px 0 0; padding-left: 18px; font-size: 11px; color: #4b5563; }
  .delimited { font-size: 13px; color: #4b5563; }
  .layout-centered .delimited { text-align: center; }
  a { color: #3f51b5; text-decoration: none; }
</style>
</head>
<body>
<div id="{{ root_id }}" class="page layout-{{ doc.layout }} typeface-{{ doc.typeface }} template-{{ doc.template }}">
{% for column in doc.columns %}
<div class="column column-{{ column.role }}">
{% for block in column.blocks %}
{% if block.kind == "masthead" %}
  <header class="masthead">
    <h1>{{ block.name }}</h1>
    {% if block.contact %}
    <div class="contact">
      {% for item in block.contact %}
        {% if not loop.first and block.separator %}<span class="sep">{{ block.separator }}</span>{% endif %}
        {% if item.type == "link" %}<a href="{{ item.link.href }}">{{ item.link.text }}</a>{% else %}<span>{{ item.text }}</span>{% endif %}
      {% endfor %}
    </div>
    {% endif %}
  </header>
{% elif block.kind == "objective" %}
  <p class="objective objective-{{ block.style }}">{{ block.text }}</p>
{% elif block.kind == "section" %}
  <section>
    <h2>{{ block.title }}</h2>
    {% if block.body.type == "entries" %}
      {% for entry in block.body.entries %}
      <div class="entry">
        <div class="entry-head">
          <h3>{{ entry.title }}</h3>
          {% if entry.meta %}<span class="meta">{{ entry.meta }}</span>{% endif %}
          {% if entry.link %}<a class="meta" href="{{ entry.link.href }}">{{ entry.link.text }}</a>{% endif %}
        </div>
        {% if entry.subtitle or entry.location %}
        <div class="entry-head">
          <span>{{ entry.subtitle or "" }}</span>
          {% if entry.location %}<span class="location">{{ entry.location }}</span>{% endif %}
        </div>
        {% endif %}
        {% if entry.bullets %}
        <ul>{% for bullet in entry.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>
        {% endif %}
      </div>
      {% endfor %}
    {% elif block.body.type == "contact" %}
      <div class="contact-list">
      {% for item in block.body.items %}
        {% if item.type == "link" %}<p><a href="{{ item.link.href }}">{{ item.link.text }}</a></p>{% else %}<p>{{ item.text }}</p>{% endif %}
      {% endfor %}
      </div>
    {% elif block.body.type == "delimited" %}
      <p class="delimited">{{ block.body.text }}</p>
    {% endif %}
  </section>
{% endif %}
{% endfor %}
</div>
{% endfor %}
</div>
</body>
</html>
"#;

const QA_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Interview preparation: {{ topic }}</title>
<style>
  body { margin: 0; background: #fff; color: #1f2937; font-family: "Inter", "Helvetica Neue", Arial, sans-serif; }
  .sheet { width: 8.5in; box-sizing: border-box; padding: 0.5in; }
  h1 { font-size: 24px; margin: 0 0 16px; }
  .qa { border-bottom: 1px solid #e5e7eb; padding: 10px 0; }
  .question { font-weight: 600; font-size: 14px; margin: 0 0 6px; }
  .answer { font-size: 13px; color: #4b5563; white-space: pre-wrap; margin: 0; }
</style>
</head>
<body>
<div id="{{ root_id }}" class="sheet">
  <h1>Interview questions: {{ topic }}</h1>
  {% for pair in pairs %}
  <div class="qa">
    <p class="question">{{ loop.index }}. {{ pair.question }}</p>
    <p class="answer">{{ pair.answer }}</p>
  </div>
  {% endfor %}
</div>
</body>
</html>
"#;

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
}

/// Serialises a rendered resume document into a standalone HTML page.
pub fn to_html(doc: &Document) -> Result<String, minijinja::Error> {
    environment().render_str(
        RESUME_PAGE,
        context! {
            doc => doc,
            root_id => RESUME_ROOT_ID,
            title => "Resume",
        },
    )
}

/// Serialises the interview Q&A list with every answer expanded.
pub fn qa_html(topic: &str, pairs: &[QaPair]) -> Result<String, minijinja::Error> {
    environment().render_str(
        QA_PAGE,
        context! {
            topic => topic,
            pairs => pairs,
            root_id => QA_ROOT_ID,
        },
    )
}
