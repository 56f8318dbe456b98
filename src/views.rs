//! Server-rendered HTML pages.
//!
//! Every value that originates from a visitor goes through [`escape`].

use axum::http::StatusCode;

use crate::db::{InquiryRecord, NewInquiry};

pub const INTEREST_OPTIONS: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Consulting",
    "Support",
    "Other",
];

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Contact form. `form` re-populates fields after a rejected submission.
pub fn home_page(success: bool, error: Option<&str>, form: &NewInquiry) -> String {
    let mut body = String::from("<h1>Contact us</h1>\n");
    if success {
        body.push_str(r#"<p class="success">Thank you! Your message has been sent.</p>"#);
        body.push('\n');
    }
    if let Some(err) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(err)));
    }

    body.push_str(r#"<form method="post" action="/">"#);
    body.push('\n');
    text_input(&mut body, "name", "Name", &form.name, true);
    text_input(&mut body, "email", "Email", &form.email, true);
    text_input(&mut body, "phone", "Phone", &form.phone, true);
    text_input(
        &mut body,
        "company_name",
        "Company name",
        form.company_name.as_deref().unwrap_or_default(),
        false,
    );
    text_input(
        &mut body,
        "telegram_username",
        "Telegram username",
        form.telegram_username.as_deref().unwrap_or_default(),
        false,
    );

    body.push_str("<label for=\"interest\">Interest</label>\n<select id=\"interest\" name=\"interest\" required>\n");
    if !form.interest.trim().is_empty() && !INTEREST_OPTIONS.contains(&form.interest.as_str()) {
        body.push_str(&interest_option(&form.interest, true));
    }
    for option in INTEREST_OPTIONS {
        body.push_str(&interest_option(option, form.interest == *option));
    }
    body.push_str("</select>\n");

    body.push_str(&format!(
        r#"<label for="message">Message</label>
<textarea id="message" name="message" required>{}</textarea>
<button type="submit">Send</button>
</form>
"#,
        escape(&form.message)
    ));
    layout("Contact", &body)
}

fn interest_option(value: &str, selected: bool) -> String {
    format!(
        "<option value=\"{v}\"{sel}>{v}</option>\n",
        v = escape(value),
        sel = if selected { " selected" } else { "" },
    )
}

fn text_input(body: &mut String, name: &str, label: &str, value: &str, required: bool) {
    body.push_str(&format!(
        r#"<label for="{name}">{label}</label>
<input id="{name}" name="{name}" type="text" value="{value}"{req}>
"#,
        value = escape(value),
        req = if required { " required" } else { "" },
    ));
}

/// Admin table with per-row status and delete forms.
pub fn admin_page(records: &[InquiryRecord]) -> String {
    let mut body = String::from(
        "<h1>Contact messages</h1>\n<p><a href=\"/logout\">Log out</a></p>\n",
    );
    if records.is_empty() {
        body.push_str("<p>No messages yet.</p>\n");
        return layout("Admin", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>ID</th><th>Received</th><th>Name</th><th>Email</th>\
         <th>Phone</th><th>Company</th><th>Telegram</th><th>Interest</th><th>Message</th>\
         <th>Status</th><th></th></tr></thead>\n<tbody>\n",
    );
    for r in records {
        body.push_str(&format!(
            r#"<tr>
<td>{id}</td><td>{created}</td><td>{name}</td><td>{email}</td><td>{phone}</td><td>{company}</td><td>{telegram}</td><td>{interest}</td><td>{message}</td>
<td><form method="post" action="/admin/update_status/{id}"><input name="status" type="text" value="{status}"><button type="submit">Update</button></form></td>
<td><form method="post" action="/admin/delete_message/{id}"><button type="submit">Delete</button></form></td>
</tr>
"#,
            id = r.id,
            created = r.created_at.format("%Y-%m-%d %H:%M"),
            name = escape(&r.name),
            email = escape(&r.email),
            phone = escape(&r.phone),
            company = escape(r.company_name.as_deref().unwrap_or_default()),
            telegram = escape(r.telegram_username.as_deref().unwrap_or_default()),
            interest = escape(&r.interest),
            message = escape(&r.message),
            status = escape(&r.status),
        ));
    }
    body.push_str("</tbody>\n</table>\n");
    layout("Admin", &body)
}

pub fn login_page(error: Option<&str>) -> String {
    let mut body = String::from("<h1>Admin login</h1>\n");
    if let Some(err) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(err)));
    }
    body.push_str(
        r#"<form method="post" action="/login">
<label for="username">Username</label>
<input id="username" name="username" type="text" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<button type="submit">Log in</button>
</form>
"#,
    );
    layout("Login", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        status.as_u16(),
        escape(message)
    );
    layout("Error", &body)
}
