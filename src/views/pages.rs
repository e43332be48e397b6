//! Dashboard pages

use maud::{html, Markup};

use crate::{
    models::loan::DashboardStats,
    session::{Flash, SessionClaims},
};

use super::layout;

/// Public landing page with the library counters.
pub fn home(
    session: Option<&SessionClaims>,
    flashes: &[Flash],
    stats: &DashboardStats,
) -> Markup {
    let content = html! {
        h1 { "Librarium" }
        table {
            thead { tr {
                th { "Total books" }
                th { "Issued books" }
                th { "Students" }
            } }
            tbody { tr {
                td { (stats.total_books) }
                td { (stats.issued_books) }
                td { (stats.students) }
            } }
        }
    };
    layout("Home", session, flashes, content)
}

/// Static protected page shown after login.
pub fn dashboard(session: &SessionClaims, flashes: &[Flash]) -> Markup {
    let content = html! {
        h1 { "Dashboard" }
        p { "Signed in as " b { (session.name) } " with the " (session.role) " role." }
        ul {
            li { a href="/students" { "Manage students" } }
            li { a href="/books" { "Manage books" } }
            li { a href="/issue" { "Issue and return books" } }
        }
    };
    layout("Dashboard", Some(session), flashes, content)
}
