//! Student and book listing pages

use maud::{html, Markup};

use crate::{
    models::{book::Book, student::Student},
    session::{Flash, SessionClaims},
};

use super::{layout, opt_text};

pub fn students_page(
    session: &SessionClaims,
    flashes: &[Flash],
    students: &[Student],
) -> Markup {
    let content = html! {
        h1 { "Students" }
        @if session.require_librarian().is_ok() {
            form class="inline" method="POST" action="/add_student" {
                input name="name" type="text" placeholder="Name" required;
                input name="roll_no" type="text" placeholder="Roll no";
                input name="course" type="text" placeholder="Course";
                input name="contact" type="text" placeholder="Contact";
                button { "Add student" }
            }
        }
        table {
            thead { tr {
                th { "Id" }
                th { "Name" }
                th { "Roll no" }
                th { "Course" }
                th { "Contact" }
            } }
            tbody {
                @for student in students {
                    tr {
                        td { (student.student_id) }
                        td { (student.name) }
                        td { (opt_text(&student.roll_no)) }
                        td { (opt_text(&student.course)) }
                        td { (opt_text(&student.contact)) }
                    }
                }
            }
        }
    };
    layout("Students", Some(session), flashes, content)
}

pub fn books_page(session: &SessionClaims, flashes: &[Flash], books: &[Book]) -> Markup {
    let content = html! {
        h1 { "Books" }
        @if session.require_librarian().is_ok() {
            form class="inline" method="POST" action="/add_book" {
                input name="title" type="text" placeholder="Title" required;
                input name="author" type="text" placeholder="Author";
                input name="publisher" type="text" placeholder="Publisher";
                button { "Add book" }
            }
        }
        table {
            thead { tr {
                th { "Id" }
                th { "Title" }
                th { "Author" }
                th { "Publisher" }
                th { "Status" }
            } }
            tbody {
                @for book in books {
                    tr {
                        td { (book.book_id) }
                        td { (book.title) }
                        td { (opt_text(&book.author)) }
                        td { (opt_text(&book.publisher)) }
                        td { @if book.available { "Available" } @else { "Issued" } }
                    }
                }
            }
        }
    };
    layout("Books", Some(session), flashes, content)
}
