//! HTML rendering for the single-page form.

use std::fmt::Write;

use crate::types::{FeedbackKind, PasswordEvaluation};

/// What the page shows below the form after a submission.
#[derive(Debug, Clone)]
pub struct PageResult {
    pub masked: String,
    pub evaluation: PasswordEvaluation,
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Password Strength Checker</title>
<style>
body { font-family: sans-serif; max-width: 36rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: .5rem; }
input[type=password] { flex: 1; padding: .4rem; }
.result { margin-top: 1.5rem; padding: 1rem; border-radius: .4rem; background: #f4f4f4; }
.label.very-weak { color: #c0392b; }
.label.weak { color: #e67e22; }
.label.medium { color: #d4ac0d; }
.label.strong { color: #27ae60; }
.label.very-strong { color: #1e8449; }
.feedback li.pass { color: #1e8449; }
.feedback li.fail { color: #c0392b; }
.feedback li.warning { color: #b9770e; font-weight: bold; }
</style>
</head>
<body>
<h1>Password Strength Checker</h1>
<form method="post" action="/">
<input type="password" name="password" placeholder="Enter a password" autocomplete="off" autofocus>
<button type="submit">Check</button>
</form>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Renders the whole page, with the result block when present.
pub fn render(result: Option<&PageResult>) -> String {
    let mut html = String::with_capacity(HEAD.len() + TAIL.len() + 512);
    html.push_str(HEAD);
    if let Some(result) = result {
        render_result(&mut html, result);
    }
    html.push_str(TAIL);
    html
}

fn render_result(html: &mut String, result: &PageResult) {
    let evaluation = &result.evaluation;
    let strength = evaluation.strength();

    // Writing into a String cannot fail.
    let _ = writeln!(html, r#"<section class="result">"#);
    let _ = writeln!(
        html,
        r#"<p>Password: <code class="masked">{}</code></p>"#,
        escape_html(&result.masked)
    );
    let _ = writeln!(
        html,
        r#"<p>Strength: <strong class="label {}">{}</strong></p>"#,
        strength.slug(),
        escape_html(strength.label())
    );
    let _ = writeln!(html, r#"<p>Score: <span class="score">{}</span>/100</p>"#, evaluation.score);
    let _ = writeln!(html, r#"<ul class="feedback">"#);
    for line in &evaluation.feedback {
        let class = match line.kind {
            FeedbackKind::Pass => "pass",
            FeedbackKind::Fail => "fail",
            FeedbackKind::Warning => "warning",
        };
        let _ = writeln!(
            html,
            r#"<li class="{class}">{} {}</li>"#,
            line.kind.marker(),
            escape_html(line.message)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(html, "</section>");
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
