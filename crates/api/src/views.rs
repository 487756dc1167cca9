//! Server-rendered HTML for the department pages.
//!
//! Markup is assembled with `format!`; every interpolated value goes through
//! [`escape`].

use std::fmt::Write;

use campus_core::department::{
    DepartmentSummary, FIELD_ADMINISTRATOR, FIELD_BUDGET, FIELD_NAME, FIELD_START_DATE,
};
use campus_core::instructor::Instructor;
use campus_core::validation::FieldViolation;

use crate::forms::{DepartmentForm, DATE_FORMAT};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} - Campus</title></head>\n\
         <body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// `GET /departments`
pub fn department_index(departments: &[DepartmentSummary]) -> String {
    let mut body = String::from(
        "<h1>Departments</h1>\n<p><a href=\"/departments/create\">Create New</a></p>\n",
    );

    if departments.is_empty() {
        body.push_str("<p>No departments yet.</p>\n");
        return layout("Departments", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Name</th><th>Budget</th><th>Start Date</th>\
         <th>Administrator</th></tr></thead>\n<tbody>\n",
    );
    for d in departments {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&d.name),
            d.budget,
            d.start_date.format(DATE_FORMAT),
            escape(d.administrator_name.as_deref().unwrap_or("")),
        );
    }
    body.push_str("</tbody>\n</table>\n");
    layout("Departments", &body)
}

/// `GET /departments/create`, and the re-rendered form after a rejected post.
///
/// Submitted values are echoed back so the user can correct them.
pub fn create_department_form(
    form: &DepartmentForm,
    instructors: &[Instructor],
    errors: &[FieldViolation],
) -> String {
    let mut body = String::from("<h1>Create Department</h1>\n");

    if !errors.is_empty() {
        body.push_str("<div class=\"validation-summary\">\n<ul>\n");
        for e in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(&e.message));
        }
        body.push_str("</ul>\n</div>\n");
    }

    body.push_str("<form method=\"post\" action=\"/departments/create\">\n");
    text_input(&mut body, FIELD_NAME, "Name", "text", &form.name, errors);
    text_input(&mut body, FIELD_BUDGET, "Budget", "text", &form.budget, errors);
    text_input(&mut body, FIELD_START_DATE, "Start Date", "date", &form.start_date, errors);
    administrator_select(&mut body, &form.administrator_id, instructors, errors);
    body.push_str(
        "<div><button type=\"submit\">Create</button></div>\n</form>\n\
         <p><a href=\"/departments\">Back to List</a></p>\n",
    );

    layout("Create Department", &body)
}

/// Error page for a request the page flow could not complete.
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/departments\">Back to List</a></p>\n",
        escape(message),
    );
    layout(&format!("Error {status}"), &body)
}

fn text_input(
    body: &mut String,
    field: &str,
    label: &str,
    kind: &str,
    value: &str,
    errors: &[FieldViolation],
) {
    let _ = writeln!(
        body,
        "<div>\n<label for=\"{field}\">{label}</label>\n\
         <input id=\"{field}\" name=\"{field}\" type=\"{kind}\" value=\"{value}\">",
        value = escape(value),
    );
    field_errors(body, field, errors);
    body.push_str("</div>\n");
}

fn administrator_select(
    body: &mut String,
    selected: &str,
    instructors: &[Instructor],
    errors: &[FieldViolation],
) {
    let _ = writeln!(
        body,
        "<div>\n<label for=\"{FIELD_ADMINISTRATOR}\">Administrator</label>\n\
         <select id=\"{FIELD_ADMINISTRATOR}\" name=\"{FIELD_ADMINISTRATOR}\">\n\
         <option value=\"\">-- Select Administrator --</option>",
    );
    let selected = selected.trim();
    for i in instructors {
        let id = i.id.to_string();
        let marker = if id == selected { " selected" } else { "" };
        let _ = writeln!(
            body,
            "<option value=\"{id}\"{marker}>{}</option>",
            escape(&i.full_name()),
        );
    }
    body.push_str("</select>\n");
    field_errors(body, FIELD_ADMINISTRATOR, errors);
    body.push_str("</div>\n");
}

fn field_errors(body: &mut String, field: &str, errors: &[FieldViolation]) {
    for e in errors.iter().filter(|e| e.field == field) {
        let _ = writeln!(
            body,
            "<span class=\"field-validation-error\" data-field=\"{field}\">{}</span>",
            escape(&e.message),
        );
    }
}

#[cfg(test)]
mod tests {
    use campus_core::money::Money;
    use campus_core::validation::rules::RULE_REQUIRED;
    use chrono::NaiveDate;

    use super::*;

    fn kapoor() -> Instructor {
        Instructor {
            id: 7,
            last_name: "Kapoor".into(),
            first_mid_name: "Candace".into(),
            hire_date: NaiveDate::from_ymd_opt(2001, 9, 1).unwrap(),
        }
    }

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<b>"R&D"</b>'s"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;&#39;s"
        );
    }

    #[test]
    fn index_lists_departments_with_administrators() {
        let html = department_index(&[DepartmentSummary {
            id: 1,
            name: "Mathematics".into(),
            budget: Money::from_cents(12_000_000),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            administrator_id: Some(7),
            administrator_name: Some("Kapoor, Candace".into()),
        }]);

        assert!(html.contains("<td>Mathematics</td>"));
        assert!(html.contains("<td>120000.00</td>"));
        assert!(html.contains("<td>2023-01-01</td>"));
        assert!(html.contains("<td>Kapoor, Candace</td>"));
    }

    #[test]
    fn empty_index_says_so() {
        assert!(department_index(&[]).contains("No departments yet."));
    }

    #[test]
    fn form_echoes_values_and_marks_selection() {
        let form = DepartmentForm {
            name: "<script>".into(),
            budget: "100".into(),
            start_date: "2023-01-01".into(),
            administrator_id: "7".into(),
        };

        let html = create_department_form(&form, &[kapoor()], &[]);

        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<option value=\"7\" selected>Kapoor, Candace</option>"));
        assert!(!html.contains("validation-summary"));
    }

    #[test]
    fn form_shows_errors_beside_fields_and_in_summary() {
        let errors = [FieldViolation::new(
            FIELD_NAME,
            RULE_REQUIRED,
            "'Name' must not be empty.",
        )];

        let html = create_department_form(&DepartmentForm::default(), &[kapoor()], &errors);

        assert!(html.contains("validation-summary"));
        assert!(html.contains("data-field=\"name\">&#39;Name&#39; must not be empty.</span>"));
        assert!(html.contains("<option value=\"7\">Kapoor, Candace</option>"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let html = error_page(503, "The request was cancelled before it completed");

        assert!(html.contains("<title>Error 503 - Campus</title>"));
        assert!(html.contains("<p>The request was cancelled before it completed</p>"));
    }
}
