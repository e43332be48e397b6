//! HTML views
//!
//! Pure rendering: every function takes the data to display plus the
//! pending flash messages and substitutes them into markup. No logic
//! beyond substitution lives here.

pub mod auth;
pub mod catalog;
pub mod loans;
pub mod pages;

use maud::{html, Markup, DOCTYPE};

use crate::session::{Flash, SessionClaims};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; }\
nav { background: #343a40; padding: 0.6em 1em; }\
nav a { color: #fff; margin-right: 1em; text-decoration: none; }\
nav span { color: #adb5bd; margin-right: 1em; }\
main { padding: 1em; max-width: 60em; }\
table { border-collapse: collapse; width: 100%; margin: 0.5em 0; }\
th, td { border: 1px solid #dee2e6; padding: 0.4em 0.6em; text-align: left; }\
form.inline { margin: 1em 0; }\
input, select { margin: 0.2em 0.4em 0.2em 0; padding: 0.3em; }\
.alert { padding: 0.6em 1em; margin: 0.5em 0; border-radius: 4px; }\
.alert-success { background: #d4edda; color: #155724; }\
.alert-info { background: #d1ecf1; color: #0c5460; }\
.alert-warning { background: #fff3cd; color: #856404; }\
.alert-danger { background: #f8d7da; color: #721c24; }";

/// Shared page chrome: navigation bar, flash alerts, then the page body.
pub fn layout(
    title: &str,
    session: Option<&SessionClaims>,
    flashes: &[Flash],
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Librarium" }
                style { (STYLE) }
            }
            body {
                (navbar(session))
                main {
                    @for flash in flashes {
                        div class={ "alert alert-" (flash.level.as_str()) } {
                            (flash.message)
                        }
                    }
                    (content)
                }
            }
        }
    }
}

fn navbar(session: Option<&SessionClaims>) -> Markup {
    html! {
        nav {
            a href="/" { "Home" }
            @if let Some(user) = session {
                a href="/students" { "Students" }
                a href="/books" { "Books" }
                a href="/issue" { "Issue / Return" }
                a href="/dashboard" { "Dashboard" }
                span { (user.name) " (" (user.role) ")" }
                a href="/logout" { "Logout" }
            } @else {
                a href="/login" { "Login" }
                a href="/register" { "Register" }
            }
        }
    }
}

/// Dash placeholder for outer-join fields with no matching row.
pub fn opt_text(value: &Option<String>) -> Markup {
    html! {
        @if let Some(v) = value { (v) } @else { "-" }
    }
}
