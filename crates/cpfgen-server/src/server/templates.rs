//! HTML pages.
//!
//! Pages are plain strings; every echoed value goes through [`escape_html`].

use axum::response::Html;
use cpfgen::Cpf;

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         <p><a href=\"/\">Home</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

pub fn index() -> Html<String> {
    page(
        "Burp Challenge",
        "<form action=\"/display\" method=\"post\">\n\
         <label>User <input name=\"user\"></label>\n\
         <label>View <input name=\"view\"></label>\n\
         <button type=\"submit\">Display</button>\n\
         </form>\n\
         <form action=\"/genius\" method=\"post\">\n\
         <input type=\"hidden\" name=\"action\" value=\"one\">\n\
         <button type=\"submit\">Genius</button>\n\
         </form>\n\
         <form action=\"/notforget\" method=\"post\">\n\
         <input type=\"hidden\" name=\"action\" value=\"two\">\n\
         <button type=\"submit\">Don't forget</button>\n\
         </form>",
    )
}

pub fn display(user: Option<&str>, view: Option<&str>, cpf: &Cpf) -> Html<String> {
    let user = escape_html(user.unwrap_or_default());
    let view = escape_html(view.unwrap_or_default());
    page(
        "Display",
        &format!(
            "<dl>\n\
             <dt>User</dt><dd id=\"user\">{user}</dd>\n\
             <dt>View</dt><dd id=\"view\">{view}</dd>\n\
             <dt>CPF</dt><dd id=\"cpf\">{cpf}</dd>\n\
             </dl>"
        ),
    )
}

pub fn genius() -> Html<String> {
    page("Genius", "<p>Nice try. Keep looking.</p>")
}

pub fn notforget() -> Html<String> {
    page("Don't forget", "<p>Some requests are worth sending twice.</p>")
}
