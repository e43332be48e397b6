//! Issue/return page: issue form plus the full ledger

use maud::{html, Markup};

use crate::{
    models::{book::Book, loan::LoanRecordDetails, student::Student},
    session::{Flash, SessionClaims},
};

use super::{layout, opt_text};

pub fn issue_page(
    session: &SessionClaims,
    flashes: &[Flash],
    students: &[Student],
    available_books: &[Book],
    records: &[LoanRecordDetails],
) -> Markup {
    let is_librarian = session.require_librarian().is_ok();
    let content = html! {
        h1 { "Issue / Return" }
        @if is_librarian {
            form class="inline" method="POST" action="/issue_book" {
                select name="student_id" required {
                    @for student in students {
                        option value=(student.student_id) { (student.name) }
                    }
                }
                select name="book_id" required {
                    @for book in available_books {
                        option value=(book.book_id) { (book.title) }
                    }
                }
                button { "Issue book" }
            }
        }
        table {
            thead { tr {
                th { "Id" }
                th { "Student" }
                th { "Book" }
                th { "Issued" }
                th { "Returned" }
                @if is_librarian { th { "Action" } }
            } }
            tbody {
                @for record in records {
                    tr {
                        td { (record.issue_id) }
                        td { (opt_text(&record.student_name)) }
                        td { (opt_text(&record.book_title)) }
                        td { (record.issue_date) }
                        td {
                            @if let Some(returned) = record.return_date {
                                (returned)
                            } @else {
                                "Open"
                            }
                        }
                        @if is_librarian {
                            td {
                                @if record.return_date.is_none() {
                                    a href={ "/return_book/" (record.issue_id) } { "Return" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    layout("Issue / Return", Some(session), flashes, content)
}
