//! Login and registration forms

use maud::{html, Markup};

use crate::session::Flash;

use super::layout;

pub fn login_page(flashes: &[Flash]) -> Markup {
    let content = html! {
        h1 { "Login" }
        form method="POST" action="/login" {
            input name="username" type="text" placeholder="Username" required;
            input name="password" type="password" placeholder="Password" required;
            button { "Login" }
        }
        p { "No account yet? " a href="/register" { "Register" } }
    };
    layout("Login", None, flashes, content)
}

pub fn register_page(flashes: &[Flash]) -> Markup {
    let content = html! {
        h1 { "Register" }
        form method="POST" action="/register" {
            input name="name" type="text" placeholder="Full name" required;
            input name="email" type="email" placeholder="Email" required;
            input name="username" type="text" placeholder="Username" required;
            input name="password" type="password" placeholder="Password" required;
            select name="role" {
                option value="student" { "Student" }
                option value="librarian" { "Librarian" }
            }
            button { "Register" }
        }
        p { "Already registered? " a href="/login" { "Login" } }
    };
    layout("Register", None, flashes, content)
}
